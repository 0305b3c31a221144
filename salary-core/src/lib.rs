pub mod calculations;
pub mod format;
pub mod models;
pub mod report;

pub use calculations::{
    SalaryPipeline, SalaryPipelineError, SlabPortion, SlabTableError, SlabTaxCalculator,
};
pub use format::{Inr, format_indian};
pub use models::*;
