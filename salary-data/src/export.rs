use std::io::Write;

use rust_decimal::Decimal;
use salary_core::SalaryBreakdown;
use serde::Serialize;

use crate::loader::SalaryDataError;

/// One exported CSV line. Amounts are raw yearly decimals, unformatted and
/// without trailing zeros.
#[derive(Debug, Serialize)]
struct BreakdownRecord {
    regime: &'static str,
    gross_salary: Decimal,
    nps_percent: Decimal,
    variable_pay: Decimal,
    ctc: Decimal,
    basic_salary: Decimal,
    employer_nps: Decimal,
    employer_pf: Decimal,
    employee_pf: Decimal,
    gratuity: Decimal,
    professional_tax: Decimal,
    taxable_amount: Decimal,
    tax_amount: Decimal,
    cess_amount: Decimal,
    pf_and_pension: Decimal,
    net_salary: Decimal,
}

impl From<&SalaryBreakdown> for BreakdownRecord {
    fn from(b: &SalaryBreakdown) -> Self {
        Self {
            regime: b.regime.as_str(),
            gross_salary: b.gross_salary.normalize(),
            nps_percent: b.nps_percent.normalize(),
            variable_pay: b.variable_pay.normalize(),
            ctc: b.ctc.normalize(),
            basic_salary: b.basic_salary.normalize(),
            employer_nps: b.employer_nps.normalize(),
            employer_pf: b.employer_pf.normalize(),
            employee_pf: b.employee_pf.normalize(),
            gratuity: b.gratuity.normalize(),
            professional_tax: b.professional_tax.normalize(),
            taxable_amount: b.taxable_amount.normalize(),
            tax_amount: b.tax_amount.normalize(),
            cess_amount: b.cess_amount.normalize(),
            pf_and_pension: b.pf_and_pension().normalize(),
            net_salary: b.net_salary.normalize(),
        }
    }
}

/// Writes computed breakdowns as CSV, one row each, with a header line.
pub struct BreakdownWriter;

impl BreakdownWriter {
    /// Returns the number of rows written (header excluded).
    pub fn write<W: Write>(
        writer: W,
        breakdowns: &[SalaryBreakdown],
    ) -> Result<usize, SalaryDataError> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        for breakdown in breakdowns {
            csv_writer.serialize(BreakdownRecord::from(breakdown))?;
        }
        csv_writer.flush()?;

        Ok(breakdowns.len())
    }
}
