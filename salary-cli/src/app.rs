use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use salary_core::{
    SalaryBreakdown, SalaryInput, SalaryPipeline, SalaryPipelineError, SlabPortion, TaxRegime,
};
use salary_data::{BreakdownWriter, SalaryInputLoader};
use tracing::{debug, info};

/// A single calculation together with the slabs its income tax came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    pub breakdown: SalaryBreakdown,
    pub slabs: Vec<SlabPortion>,
}

/// Computes one breakdown with the built-in constants of the input's regime.
pub fn calculate(input: &SalaryInput) -> Result<Calculation, SalaryPipelineError> {
    let pipeline = SalaryPipeline::for_regime(input.regime)?;
    let breakdown = pipeline.compute(input)?;
    let slabs = pipeline
        .tax_calculator()
        .slab_breakdown(breakdown.taxable_amount);

    Ok(Calculation { breakdown, slabs })
}

/// Computes every input, building each regime's pipeline once.
///
/// Stops at the first failing input; its 1-based position is in the error.
pub fn calculate_all(inputs: &[SalaryInput]) -> Result<Vec<SalaryBreakdown>> {
    let mut pipelines: HashMap<TaxRegime, SalaryPipeline> = HashMap::new();
    let mut breakdowns = Vec::with_capacity(inputs.len());

    for (idx, input) in inputs.iter().enumerate() {
        let row = idx + 1;
        let pipeline = match pipelines.entry(input.regime) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(
                SalaryPipeline::for_regime(input.regime)
                    .with_context(|| format!("failed to compute row {row}"))?,
            ),
        };
        let breakdown = pipeline
            .compute(input)
            .with_context(|| format!("failed to compute row {row}"))?;
        breakdowns.push(breakdown);
    }

    Ok(breakdowns)
}

/// Loads a CSV batch from `input_path`, computes it, and writes the export
/// to `output_path` when given.
pub fn run_batch(
    input_path: &Path,
    output_path: Option<&Path>,
) -> Result<Vec<SalaryBreakdown>> {
    let file = File::open(input_path)
        .with_context(|| format!("Failed to open: {}", input_path.display()))?;
    let inputs = SalaryInputLoader::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", input_path.display()))?;
    debug!(rows = inputs.len(), path = %input_path.display(), "loaded salary inputs");

    let breakdowns = calculate_all(&inputs)?;

    if let Some(path) = output_path {
        let file = File::create(path)
            .with_context(|| format!("Failed to create: {}", path.display()))?;
        let written = BreakdownWriter::write(file, &breakdowns)
            .with_context(|| format!("Failed to write CSV: {}", path.display()))?;
        info!(rows = written, path = %path.display(), "exported breakdowns");
    }

    Ok(breakdowns)
}
