pub mod amount;
pub mod export;
pub mod loader;

pub use amount::{ParseDecimalError, parse_decimal};
pub use export::BreakdownWriter;
pub use loader::{SalaryDataError, SalaryInputLoader};
