//! Indian digit grouping for rupee amounts.
//!
//! The last three integer digits form one group and every group to their left
//! has two digits: `12,34,567.89`. Amounts always carry exactly two decimals.

use std::fmt;

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;

/// Formats `amount` with Indian digit grouping and two decimals.
///
/// The amount is rounded half-up to two places first. A minus sign is kept
/// for negative amounts unless they round to zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::format_indian;
///
/// assert_eq!(format_indian(dec!(1234567.89)), "12,34,567.89");
/// assert_eq!(format_indian(dec!(999.5)), "999.50");
/// assert_eq!(format_indian(dec!(-100000)), "-1,00,000.00");
/// ```
pub fn format_indian(amount: Decimal) -> String {
    let mut rounded = round_half_up(amount.abs());
    rounded.rescale(2);

    let text = rounded.to_string();
    let (integer_part, fraction_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let grouped = group_indian(integer_part);
    if amount.is_sign_negative() && !rounded.is_zero() {
        format!("-{grouped}.{fraction_part}")
    } else {
        format!("{grouped}.{fraction_part}")
    }
}

/// Inserts Indian-style separators into a string of ASCII digits.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::with_capacity(head.len() / 2 + 2);

    let mut rest = head;
    while !rest.is_empty() {
        let split = rest.len().saturating_sub(2);
        let (left, pair) = rest.split_at(split);
        groups.push(pair);
        rest = left;
    }
    groups.reverse();
    groups.push(last_three);

    groups.join(",")
}

/// Display adapter that renders a [`Decimal`] through [`format_indian`].
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::Inr;
///
/// assert_eq!(format!("₹{}", Inr(dec!(150000))), "₹1,50,000.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inr(pub Decimal);

impl fmt::Display for Inr {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.pad(&format_indian(self.0))
    }
}
