//! Salary and income tax calculations.
//!
//! [`SlabTaxCalculator`] applies a progressive slab table to a taxable
//! amount; [`SalaryPipeline`] derives every salary component from a
//! [`SalaryInput`](crate::SalaryInput) and uses the calculator for the tax.

pub mod common;
pub mod pipeline;
pub mod slab_tax;

pub use pipeline::{SalaryPipeline, SalaryPipelineError};
pub use slab_tax::{SlabPortion, SlabTableError, SlabTaxCalculator};
