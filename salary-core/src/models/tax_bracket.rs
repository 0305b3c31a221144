use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One slab of a progressive tax table.
///
/// Income above `lower_limit` (up to the next slab's limit) is taxed at `rate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub lower_limit: Decimal,
    pub rate: Decimal,
}

impl TaxBracket {
    pub const fn new(
        lower_limit: Decimal,
        rate: Decimal,
    ) -> Self {
        Self { lower_limit, rate }
    }
}
