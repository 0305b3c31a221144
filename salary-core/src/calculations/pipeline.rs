//! In-hand salary pipeline.
//!
//! Derives every salary component from a gross salary and an employer NPS
//! percentage, in this order:
//!
//! | Step | Component          | Formula |
//! |------|--------------------|---------|
//! | 1    | Variable pay       | gross × 14% |
//! | 2    | CTC                | gross + variable pay |
//! | 3    | Basic salary       | gross × 40% |
//! | 4    | Employer NPS       | NPS% × basic |
//! | 5    | Employer PF        | basic × 12% |
//! | 6    | Employee PF        | basic × 12% |
//! | 7    | Gratuity           | basic × 4.8% |
//! | 8    | Professional tax   | 300 × 12 |
//! | 9    | Taxable amount     | gross − employer NPS − employer PF − gratuity − 75,000 |
//! | 10   | Income tax         | slab table on step 9 |
//! | 11   | Cess               | income tax × 4% |
//! | 12   | Net salary         | gross − steps 4, 5, 6, 7, 8, 10, 11 |
//!
//! Variable pay only feeds CTC; it is never part of the taxable amount or the
//! net salary.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salary_core::{SalaryInput, SalaryPipeline};
//!
//! let pipeline = SalaryPipeline::for_regime(Default::default()).unwrap();
//! let input = SalaryInput::new(dec!(1800000), dec!(14)).unwrap();
//!
//! let breakdown = pipeline.compute(&input).unwrap();
//!
//! assert_eq!(breakdown.taxable_amount, dec!(1503240));
//! assert_eq!(breakdown.tax_amount, dec!(105486));
//! assert_eq!(breakdown.net_salary, dec!(1378534.56));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::percent_of;
use crate::calculations::slab_tax::{SlabTableError, SlabTaxCalculator};
use crate::{RegimeConfig, SalaryBreakdown, SalaryInput, TaxRegime};

/// Errors that can occur while computing a salary breakdown.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SalaryPipelineError {
    #[error("gross salary must be non-negative, got {0}")]
    NegativeGrossSalary(Decimal),

    #[error("gross salary must not exceed {max}, got {value}")]
    GrossSalaryTooLarge { value: Decimal, max: Decimal },

    #[error("NPS contribution must be between 0 and {max} percent, got {value}")]
    NpsPercentOutOfRange { value: Decimal, max: Decimal },

    /// The regime is known but has no rate table.
    #[error("{0} is not supported")]
    UnsupportedRegime(TaxRegime),

    /// The input asks for a different regime than the pipeline was built for.
    #[error("input uses the {input}, pipeline is configured for the {configured}")]
    RegimeMismatch {
        input: TaxRegime,
        configured: TaxRegime,
    },

    #[error("{name} is out of range: {value}")]
    InvalidRate { name: &'static str, value: Decimal },

    #[error("invalid tax brackets: {0}")]
    InvalidBrackets(#[from] SlabTableError),
}

/// Computes [`SalaryBreakdown`]s for one regime.
///
/// Holds only the immutable regime configuration, so a single pipeline can be
/// shared freely between threads.
#[derive(Debug, Clone)]
pub struct SalaryPipeline {
    config: RegimeConfig,
    tax_calculator: SlabTaxCalculator,
}

impl SalaryPipeline {
    /// Creates a pipeline from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SalaryPipelineError`] if [`RegimeConfig::validate`] fails.
    pub fn new(config: RegimeConfig) -> Result<Self, SalaryPipelineError> {
        config.validate()?;
        let tax_calculator = SlabTaxCalculator::new(config.brackets.clone())?;
        Ok(Self {
            config,
            tax_calculator,
        })
    }

    /// Creates a pipeline with the built-in constants of `regime`.
    pub fn for_regime(regime: TaxRegime) -> Result<Self, SalaryPipelineError> {
        Self::new(regime.config()?)
    }

    /// The slab calculator built from this pipeline's bracket table.
    pub fn tax_calculator(&self) -> &SlabTaxCalculator {
        &self.tax_calculator
    }

    /// Computes the full breakdown for `input`.
    ///
    /// Either every component is computed or an error is returned; there is
    /// no partial result.
    ///
    /// # Errors
    ///
    /// Returns [`SalaryPipelineError`] if:
    /// - the gross salary is negative or above `max_gross_salary`
    /// - the NPS percentage is outside [0, `max_nps_percent`]
    /// - the input's regime differs from the pipeline's
    pub fn compute(
        &self,
        input: &SalaryInput,
    ) -> Result<SalaryBreakdown, SalaryPipelineError> {
        if input.regime != self.config.regime {
            return Err(SalaryPipelineError::RegimeMismatch {
                input: input.regime,
                configured: self.config.regime,
            });
        }
        input.validate(&self.config)?;

        let config = &self.config;
        let gross_salary = input.gross_salary;

        let variable_pay = gross_salary * config.variable_pay_rate;
        let ctc = gross_salary + variable_pay;
        let basic_salary = gross_salary * config.basic_salary_rate;

        let employer_nps = percent_of(input.nps_percent, basic_salary);
        let employer_pf = config.employer_pf_rate * basic_salary;
        let employee_pf = config.employee_pf_rate * basic_salary;
        let gratuity = config.gratuity_rate * basic_salary;
        let professional_tax = config.annual_professional_tax();

        let taxable_amount =
            gross_salary - employer_nps - employer_pf - gratuity - config.standard_deduction;
        let tax_amount = self.tax_calculator.calculate_tax(taxable_amount);
        let cess_amount = config.cess_rate * tax_amount;

        let net_salary = gross_salary
            - employer_nps
            - employer_pf
            - gratuity
            - employee_pf
            - professional_tax
            - tax_amount
            - cess_amount;

        debug!(
            regime = config.regime.as_str(),
            %gross_salary,
            nps_percent = %input.nps_percent,
            %taxable_amount,
            %tax_amount,
            %net_salary,
            "computed salary breakdown"
        );

        Ok(SalaryBreakdown {
            regime: config.regime,
            months_per_year: config.months_per_year,
            gross_salary,
            nps_percent: input.nps_percent,
            variable_pay,
            ctc,
            basic_salary,
            employer_nps,
            employer_pf,
            employee_pf,
            gratuity,
            professional_tax,
            taxable_amount,
            tax_amount,
            cess_amount,
            net_salary,
        })
    }
}
