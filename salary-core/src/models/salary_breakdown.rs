use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::TaxRegime;

/// Every amount derived from one [`SalaryInput`](crate::SalaryInput), per year.
///
/// Values are kept at full precision; rounding happens only when formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    pub regime: TaxRegime,
    pub months_per_year: u32,

    pub gross_salary: Decimal,
    pub nps_percent: Decimal,

    pub variable_pay: Decimal,
    pub ctc: Decimal,
    pub basic_salary: Decimal,
    pub employer_nps: Decimal,
    pub employer_pf: Decimal,
    pub employee_pf: Decimal,
    pub gratuity: Decimal,
    pub professional_tax: Decimal,

    pub taxable_amount: Decimal,
    pub tax_amount: Decimal,
    pub cess_amount: Decimal,

    pub net_salary: Decimal,
}

impl SalaryBreakdown {
    /// Employer NPS plus employer and employee PF.
    pub fn pf_and_pension(&self) -> Decimal {
        self.employer_nps + self.employer_pf + self.employee_pf
    }

    /// Income tax plus cess.
    pub fn total_tax(&self) -> Decimal {
        self.tax_amount + self.cess_amount
    }

    /// Per-month share of a yearly amount. Not rounded.
    pub fn monthly(
        &self,
        yearly: Decimal,
    ) -> Decimal {
        yearly / Decimal::from(self.months_per_year)
    }
}
