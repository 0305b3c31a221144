//! Markdown rendering of the report tables.

use rust_decimal::Decimal;
use salary_core::report::{component_rows, in_hand_rows};
use salary_core::{Inr, SalaryBreakdown, SlabPortion};

/// Footnote for rows excluded from the taxable amount.
pub const NOT_TAXABLE_NOTE: &str = "*Not considered in taxable income.";

/// Renders the "Calculations" and "In-Hand Salary" tables.
pub fn render_markdown(breakdown: &SalaryBreakdown) -> String {
    let mut out = String::new();

    out.push_str("## Calculations\n\n");
    out.push_str("| Component | Amount (₹) |\n");
    out.push_str("|-----------|------------|\n");
    for row in component_rows(breakdown) {
        let marker = if row.excluded_from_taxable { "*" } else { "" };
        out.push_str(&format!("| {marker}{} | {} |\n", row.label, row.yearly));
    }
    out.push_str(&format!("\n{NOT_TAXABLE_NOTE}\n\n"));

    out.push_str("## In-Hand Salary\n\n");
    out.push_str("| Component | Amount/Year (₹) | Amount/Month (₹) |\n");
    out.push_str("|-----------|------------------|------------------|\n");
    let rows = in_hand_rows(breakdown);
    let last = rows.len().saturating_sub(1);
    for (idx, row) in rows.iter().enumerate() {
        let monthly = row.monthly.as_deref().unwrap_or("");
        if idx == last {
            out.push_str(&format!(
                "| **{}** | **{}** | **{monthly}** |\n",
                row.label, row.yearly
            ));
        } else {
            out.push_str(&format!("| {} | {} | {monthly} |\n", row.label, row.yearly));
        }
    }

    out
}

/// Renders how the income tax splits across the slabs, highest first.
pub fn render_slab_table(slabs: &[SlabPortion]) -> String {
    let mut out = String::from("## Income Tax Slabs\n\n");

    if slabs.is_empty() {
        out.push_str("Taxable amount is within the tax-free slab.\n");
        return out;
    }

    out.push_str("| Income Above (₹) | Rate | Taxed Amount (₹) | Tax (₹) |\n");
    out.push_str("|------------------|------|------------------|---------|\n");
    for slab in slabs {
        let rate = (slab.bracket.rate * Decimal::ONE_HUNDRED).normalize();
        out.push_str(&format!(
            "| {} | {rate}% | {} | {} |\n",
            Inr(slab.bracket.lower_limit),
            Inr(slab.taxed_amount),
            Inr(slab.tax),
        ));
    }

    out
}

/// One summary line for batch output.
pub fn render_summary_line(
    index: usize,
    breakdown: &SalaryBreakdown,
) -> String {
    format!(
        "{index:>4}. gross {} | net/year {} | net/month {}",
        Inr(breakdown.gross_salary),
        Inr(breakdown.net_salary),
        Inr(breakdown.monthly(breakdown.net_salary)),
    )
}
