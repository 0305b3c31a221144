use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculations::SalaryPipelineError;
use crate::{RegimeConfig, TaxRegime};

/// Values a user supplies for one in-hand salary calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInput {
    /// Fixed gross salary per year, in rupees.
    pub gross_salary: Decimal,

    /// Employer NPS contribution, in percent of basic salary.
    pub nps_percent: Decimal,

    #[serde(default)]
    pub regime: TaxRegime,
}

impl SalaryInput {
    /// Creates a validated input for the default (new) regime, checked
    /// against the limits of [`RegimeConfig::new_regime`].
    ///
    /// # Errors
    ///
    /// [`SalaryPipelineError::NegativeGrossSalary`],
    /// [`SalaryPipelineError::GrossSalaryTooLarge`] or
    /// [`SalaryPipelineError::NpsPercentOutOfRange`].
    pub fn new(
        gross_salary: Decimal,
        nps_percent: Decimal,
    ) -> Result<Self, SalaryPipelineError> {
        let input = Self {
            gross_salary,
            nps_percent,
            regime: TaxRegime::default(),
        };
        input.validate(&RegimeConfig::new_regime())?;
        Ok(input)
    }

    pub fn with_regime(
        mut self,
        regime: TaxRegime,
    ) -> Self {
        self.regime = regime;
        self
    }

    /// Checks `0 <= gross_salary <= config.max_gross_salary` and
    /// `0 <= nps_percent <= config.max_nps_percent`.
    pub fn validate(
        &self,
        config: &RegimeConfig,
    ) -> Result<(), SalaryPipelineError> {
        if self.gross_salary < Decimal::ZERO {
            return Err(SalaryPipelineError::NegativeGrossSalary(self.gross_salary));
        }
        if self.gross_salary > config.max_gross_salary {
            return Err(SalaryPipelineError::GrossSalaryTooLarge {
                value: self.gross_salary,
                max: config.max_gross_salary,
            });
        }
        if self.nps_percent < Decimal::ZERO || self.nps_percent > config.max_nps_percent {
            return Err(SalaryPipelineError::NpsPercentOutOfRange {
                value: self.nps_percent,
                max: config.max_nps_percent,
            });
        }
        Ok(())
    }
}

impl Default for SalaryInput {
    /// The values the input form starts with: 18,00,000.00 gross and 14% NPS.
    fn default() -> Self {
        Self {
            gross_salary: dec!(1800000.00),
            nps_percent: dec!(14.00),
            regime: TaxRegime::New,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn new_accepts_bounds() {
        assert!(SalaryInput::new(dec!(0), dec!(0)).is_ok());
        assert!(SalaryInput::new(dec!(0), dec!(14)).is_ok());
    }

    #[test]
    fn new_rejects_negative_gross() {
        assert_eq!(
            SalaryInput::new(dec!(-1), dec!(10)),
            Err(SalaryPipelineError::NegativeGrossSalary(dec!(-1)))
        );
    }

    #[test]
    fn new_accepts_gross_at_cap() {
        assert!(SalaryInput::new(dec!(1000000000000000), dec!(14)).is_ok());
    }

    #[test]
    fn new_rejects_gross_above_cap() {
        assert_eq!(
            SalaryInput::new(Decimal::MAX, dec!(14)),
            Err(SalaryPipelineError::GrossSalaryTooLarge {
                value: Decimal::MAX,
                max: dec!(1000000000000000),
            })
        );
    }

    #[test]
    fn new_rejects_nps_above_cap() {
        assert_eq!(
            SalaryInput::new(dec!(100000), dec!(14.01)),
            Err(SalaryPipelineError::NpsPercentOutOfRange {
                value: dec!(14.01),
                max: dec!(14),
            })
        );
    }

    #[test]
    fn new_rejects_negative_nps() {
        assert!(SalaryInput::new(dec!(100000), dec!(-0.5)).is_err());
    }

    #[test]
    fn default_matches_form_defaults() {
        let input = SalaryInput::default();

        assert_eq!(input.gross_salary, dec!(1800000));
        assert_eq!(input.nps_percent, dec!(14));
        assert_eq!(input.regime, TaxRegime::New);
    }

    #[test]
    fn with_regime_overrides_regime() {
        let input = SalaryInput::default().with_regime(TaxRegime::Old);

        assert_eq!(input.regime, TaxRegime::Old);
    }
}
