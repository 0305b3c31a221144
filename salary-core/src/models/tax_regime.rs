use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::TaxBracket;
use crate::calculations::{SalaryPipelineError, SlabTaxCalculator};

/// Income tax regime selected for a calculation.
///
/// Only the new regime carries a rate table today; the old regime is
/// recognised so callers can offer it, but computing with it is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxRegime {
    Old,
    #[default]
    New,
}

impl TaxRegime {
    pub fn all() -> &'static [TaxRegime] {
        &[TaxRegime::Old, TaxRegime::New]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Old => "old",
            Self::New => "new",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Old => "Old Tax Regime",
            Self::New => "New Tax Regime",
        }
    }

    /// Case-insensitive lookup by short name (`"new"`, `"old"`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "old" => Some(Self::Old),
            "new" => Some(Self::New),
            _ => None,
        }
    }

    /// Returns the rate constants for this regime.
    ///
    /// # Errors
    ///
    /// [`SalaryPipelineError::UnsupportedRegime`] for a regime without a
    /// rate table.
    pub fn config(&self) -> Result<RegimeConfig, SalaryPipelineError> {
        match self {
            Self::New => Ok(RegimeConfig::new_regime()),
            Self::Old => Err(SalaryPipelineError::UnsupportedRegime(*self)),
        }
    }
}

impl std::fmt::Display for TaxRegime {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Every constant the salary pipeline depends on, grouped per regime.
///
/// Rates are fractions (`0.12` for 12%) except `max_nps_percent`, which is a
/// percentage like the user-facing NPS input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeConfig {
    pub regime: TaxRegime,

    /// Slab table, highest `lower_limit` first.
    pub brackets: Vec<TaxBracket>,

    /// Variable pay as a fraction of gross salary. Not taxed.
    pub variable_pay_rate: Decimal,

    /// Basic salary as a fraction of gross salary.
    pub basic_salary_rate: Decimal,

    pub employer_pf_rate: Decimal,
    pub employee_pf_rate: Decimal,
    pub gratuity_rate: Decimal,

    /// Flat professional tax charged every month.
    pub monthly_professional_tax: Decimal,

    pub months_per_year: u32,

    /// Deducted from gross salary before the slab table is applied.
    pub standard_deduction: Decimal,

    /// Health and education cess as a fraction of income tax.
    pub cess_rate: Decimal,

    /// Upper bound of the employer NPS contribution, in percent of basic salary.
    pub max_nps_percent: Decimal,

    /// Largest gross salary accepted. Keeps every derived amount far inside
    /// the range `Decimal` arithmetic can represent.
    pub max_gross_salary: Decimal,
}

impl RegimeConfig {
    /// Rate constants of the new tax regime.
    pub fn new_regime() -> Self {
        Self {
            regime: TaxRegime::New,
            brackets: vec![
                TaxBracket::new(dec!(2400000), dec!(0.30)),
                TaxBracket::new(dec!(2000000), dec!(0.25)),
                TaxBracket::new(dec!(1600000), dec!(0.20)),
                TaxBracket::new(dec!(1200000), dec!(0.15)),
                TaxBracket::new(dec!(800000), dec!(0.10)),
                TaxBracket::new(dec!(400000), dec!(0.05)),
            ],
            variable_pay_rate: dec!(0.14),
            basic_salary_rate: dec!(0.40),
            employer_pf_rate: dec!(0.12),
            employee_pf_rate: dec!(0.12),
            gratuity_rate: dec!(0.048),
            monthly_professional_tax: dec!(300),
            months_per_year: 12,
            standard_deduction: dec!(75000),
            cess_rate: dec!(0.04),
            max_nps_percent: dec!(14),
            max_gross_salary: dec!(1000000000000000),
        }
    }

    /// Annual professional tax (monthly amount times months per year).
    pub fn annual_professional_tax(&self) -> Decimal {
        self.monthly_professional_tax * Decimal::from(self.months_per_year)
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`SalaryPipelineError`] if:
    /// - any fractional rate is outside [0, 1]
    /// - the standard deduction, professional tax or NPS cap is negative
    /// - `max_gross_salary` is not positive or above 10^15
    /// - `months_per_year` is zero
    /// - the bracket table is rejected by [`SlabTaxCalculator::new`]
    pub fn validate(&self) -> Result<(), SalaryPipelineError> {
        let rates = [
            ("variable_pay_rate", self.variable_pay_rate),
            ("basic_salary_rate", self.basic_salary_rate),
            ("employer_pf_rate", self.employer_pf_rate),
            ("employee_pf_rate", self.employee_pf_rate),
            ("gratuity_rate", self.gratuity_rate),
            ("cess_rate", self.cess_rate),
        ];
        for (name, rate) in rates {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(SalaryPipelineError::InvalidRate { name, value: rate });
            }
        }

        let amounts = [
            ("standard_deduction", self.standard_deduction),
            ("monthly_professional_tax", self.monthly_professional_tax),
            ("max_nps_percent", self.max_nps_percent),
        ];
        for (name, value) in amounts {
            if value < Decimal::ZERO {
                return Err(SalaryPipelineError::InvalidRate { name, value });
            }
        }

        if self.max_gross_salary <= Decimal::ZERO || self.max_gross_salary > dec!(1000000000000000)
        {
            return Err(SalaryPipelineError::InvalidRate {
                name: "max_gross_salary",
                value: self.max_gross_salary,
            });
        }

        if self.months_per_year == 0 {
            return Err(SalaryPipelineError::InvalidRate {
                name: "months_per_year",
                value: Decimal::ZERO,
            });
        }

        SlabTaxCalculator::new(self.brackets.clone())?;
        Ok(())
    }
}
