mod salary_breakdown;
mod salary_input;
mod tax_bracket;
mod tax_regime;

pub use salary_breakdown::SalaryBreakdown;
pub use salary_input::SalaryInput;
pub use tax_bracket::TaxBracket;
pub use tax_regime::{RegimeConfig, TaxRegime};
