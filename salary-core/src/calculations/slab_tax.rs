//! Progressive slab income tax.
//!
//! Each slab taxes only the part of the income that lies above its lower
//! limit and below the next higher slab's limit. The new regime table:
//!
//! | Income above | Rate |
//! |--------------|------|
//! | 24,00,000    | 30%  |
//! | 20,00,000    | 25%  |
//! | 16,00,000    | 20%  |
//! | 12,00,000    | 15%  |
//! | 8,00,000     | 10%  |
//! | 4,00,000     | 5%   |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salary_core::SlabTaxCalculator;
//!
//! let calculator = SlabTaxCalculator::new_regime();
//!
//! // (15,03,240 - 12,00,000) × 15% + 4,00,000 × 10% + 4,00,000 × 5%
//! assert_eq!(calculator.calculate_tax(dec!(1503240)), dec!(105486));
//! assert_eq!(calculator.calculate_tax(dec!(400000)), dec!(0));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{RegimeConfig, TaxBracket};

/// Reasons a slab table is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SlabTableError {
    #[error("no tax brackets provided")]
    NoTaxBrackets,

    /// Rates must lie strictly between 0 and 1.
    #[error("tax rate must be between 0 and 1, got {0}")]
    InvalidRate(Decimal),

    #[error("bracket lower limit must be non-negative, got {0}")]
    NegativeLimit(Decimal),

    /// Brackets must be listed highest limit first with strictly falling rates.
    #[error("bracket {index} is out of order: limits and rates must strictly decrease")]
    OutOfOrder { index: usize },
}

/// The share of a taxable amount that one bracket taxed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlabPortion {
    pub bracket: TaxBracket,
    /// Income falling inside this bracket.
    pub taxed_amount: Decimal,
    /// `taxed_amount × bracket.rate`.
    pub tax: Decimal,
}

/// Progressive tax calculator over a validated slab table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlabTaxCalculator {
    brackets: Vec<TaxBracket>,
}

impl SlabTaxCalculator {
    /// Creates a calculator over `brackets`, listed highest limit first.
    ///
    /// # Errors
    ///
    /// Returns [`SlabTableError`] if:
    /// - the table is empty
    /// - a rate is not in (0, 1)
    /// - a lower limit is negative
    /// - limits or rates do not strictly decrease
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, SlabTableError> {
        if brackets.is_empty() {
            return Err(SlabTableError::NoTaxBrackets);
        }

        for bracket in &brackets {
            if bracket.rate <= Decimal::ZERO || bracket.rate >= Decimal::ONE {
                return Err(SlabTableError::InvalidRate(bracket.rate));
            }
            if bracket.lower_limit < Decimal::ZERO {
                return Err(SlabTableError::NegativeLimit(bracket.lower_limit));
            }
        }

        if let Some(index) = brackets.windows(2).position(|pair| {
            pair[1].lower_limit >= pair[0].lower_limit || pair[1].rate >= pair[0].rate
        }) {
            return Err(SlabTableError::OutOfOrder { index: index + 1 });
        }

        Ok(Self { brackets })
    }

    /// Calculator over the new regime's fixed table.
    pub fn new_regime() -> Self {
        Self {
            brackets: RegimeConfig::new_regime().brackets,
        }
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Calculates income tax on `taxable_amount`.
    ///
    /// Zero or negative amounts, and amounts at or below the lowest limit,
    /// yield zero. The result is not rounded.
    pub fn calculate_tax(
        &self,
        taxable_amount: Decimal,
    ) -> Decimal {
        self.slab_breakdown(taxable_amount)
            .iter()
            .map(|portion| portion.tax)
            .sum()
    }

    /// Splits `taxable_amount` across the brackets it reaches, highest first.
    ///
    /// Brackets the amount does not exceed are omitted.
    pub fn slab_breakdown(
        &self,
        taxable_amount: Decimal,
    ) -> Vec<SlabPortion> {
        let mut remaining = taxable_amount;
        let mut portions = Vec::new();

        for bracket in &self.brackets {
            if remaining > bracket.lower_limit {
                let taxed_amount = remaining - bracket.lower_limit;
                portions.push(SlabPortion {
                    bracket: *bracket,
                    taxed_amount,
                    tax: taxed_amount * bracket.rate,
                });
                remaining = bracket.lower_limit;
            }
        }

        portions
    }
}
