//! Labelled, formatted rows for presenting a [`SalaryBreakdown`].
//!
//! Two tables are produced. [`component_rows`] lists the yearly components
//! the pipeline derived; [`in_hand_rows`] lists the headline figures with a
//! yearly and a monthly column. Monthly values are `yearly / 12`, each
//! formatted on its own, so twelve rounded monthly values may differ from the
//! rounded yearly value by a few paise.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::SalaryBreakdown;
use crate::format::format_indian;

/// One line of a report table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub label: &'static str,
    pub yearly: String,
    pub monthly: Option<String>,
    /// Set when the amount does not count towards the taxable amount.
    pub excluded_from_taxable: bool,
}

impl ReportRow {
    fn yearly(
        label: &'static str,
        amount: Decimal,
    ) -> Self {
        Self {
            label,
            yearly: format_indian(amount),
            monthly: None,
            excluded_from_taxable: false,
        }
    }

    fn with_monthly(
        label: &'static str,
        amount: Decimal,
        breakdown: &SalaryBreakdown,
    ) -> Self {
        Self {
            monthly: Some(format_indian(breakdown.monthly(amount))),
            ..Self::yearly(label, amount)
        }
    }

    fn not_taxable(mut self) -> Self {
        self.excluded_from_taxable = true;
        self
    }
}

/// Rows of the "Calculations" table, yearly amounts only.
pub fn component_rows(breakdown: &SalaryBreakdown) -> Vec<ReportRow> {
    vec![
        ReportRow::yearly("CTC Amount", breakdown.ctc),
        ReportRow::yearly("Variable Pay (14% of Fixed Salary)", breakdown.variable_pay)
            .not_taxable(),
        ReportRow::yearly("Basic Salary (40% of Fixed Salary)", breakdown.basic_salary),
        ReportRow::yearly("Employer NPS Contribution", breakdown.employer_nps),
        ReportRow::yearly(
            "Employer PF Contribution (12% of Basic Salary)",
            breakdown.employer_pf,
        ),
        ReportRow::yearly(
            "Employee PF Contribution (12% of Basic Salary)",
            breakdown.employee_pf,
        ),
        ReportRow::yearly(
            "Gratuity Contribution (4.8% of Basic Salary)",
            breakdown.gratuity,
        ),
        ReportRow::yearly("Professional Tax (Flat Rate)", breakdown.professional_tax),
    ]
}

/// Rows of the "In-Hand Salary" table, with yearly and monthly amounts.
pub fn in_hand_rows(breakdown: &SalaryBreakdown) -> Vec<ReportRow> {
    vec![
        ReportRow::with_monthly("CTC", breakdown.ctc, breakdown),
        ReportRow::with_monthly("Gross Salary", breakdown.gross_salary, breakdown),
        ReportRow::with_monthly("Taxable Amount", breakdown.taxable_amount, breakdown),
        ReportRow::with_monthly("Income Tax Amount", breakdown.tax_amount, breakdown),
        ReportRow::with_monthly(
            "Health & Education CESS Amount",
            breakdown.cess_amount,
            breakdown,
        ),
        ReportRow::with_monthly("PF & Pension", breakdown.pf_and_pension(), breakdown),
        ReportRow::with_monthly("Net Salary", breakdown.net_salary, breakdown),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{SalaryInput, SalaryPipeline, TaxRegime};

    fn default_breakdown() -> SalaryBreakdown {
        SalaryPipeline::for_regime(TaxRegime::New)
            .unwrap()
            .compute(&SalaryInput::default())
            .unwrap()
    }

    #[test]
    fn component_rows_in_display_order() {
        let rows = component_rows(&default_breakdown());

        let values: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r.label, r.yearly.as_str()))
            .collect();
        assert_eq!(
            values,
            vec![
                ("CTC Amount", "20,52,000.00"),
                ("Variable Pay (14% of Fixed Salary)", "2,52,000.00"),
                ("Basic Salary (40% of Fixed Salary)", "7,20,000.00"),
                ("Employer NPS Contribution", "1,00,800.00"),
                ("Employer PF Contribution (12% of Basic Salary)", "86,400.00"),
                ("Employee PF Contribution (12% of Basic Salary)", "86,400.00"),
                ("Gratuity Contribution (4.8% of Basic Salary)", "34,560.00"),
                ("Professional Tax (Flat Rate)", "3,600.00"),
            ]
        );
        assert!(rows.iter().all(|r| r.monthly.is_none()));
    }

    #[test]
    fn only_variable_pay_is_excluded_from_taxable() {
        let rows = component_rows(&default_breakdown());

        let excluded: Vec<&str> = rows
            .iter()
            .filter(|r| r.excluded_from_taxable)
            .map(|r| r.label)
            .collect();
        assert_eq!(excluded, vec!["Variable Pay (14% of Fixed Salary)"]);
    }

    #[test]
    fn in_hand_rows_have_monthly_values() {
        let rows = in_hand_rows(&default_breakdown());

        let values: Vec<(&str, &str, Option<&str>)> = rows
            .iter()
            .map(|r| (r.label, r.yearly.as_str(), r.monthly.as_deref()))
            .collect();
        assert_eq!(
            values,
            vec![
                ("CTC", "20,52,000.00", Some("1,71,000.00")),
                ("Gross Salary", "18,00,000.00", Some("1,50,000.00")),
                ("Taxable Amount", "15,03,240.00", Some("1,25,270.00")),
                ("Income Tax Amount", "1,05,486.00", Some("8,790.50")),
                ("Health & Education CESS Amount", "4,219.44", Some("351.62")),
                ("PF & Pension", "2,73,600.00", Some("22,800.00")),
                ("Net Salary", "13,78,534.56", Some("1,14,877.88")),
            ]
        );
    }

    #[test]
    fn monthly_values_are_rounded_independently() {
        let breakdown = SalaryPipeline::for_regime(TaxRegime::New)
            .unwrap()
            .compute(&SalaryInput::new(dec!(1000001), dec!(0)).unwrap())
            .unwrap();

        let gross = &in_hand_rows(&breakdown)[1];

        assert_eq!(gross.yearly, "10,00,001.00");
        // 10,00,001 / 12 = 83,333.4166…
        assert_eq!(gross.monthly.as_deref(), Some("83,333.42"));
    }
}
