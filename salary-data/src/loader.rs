//! CSV loader for batches of salary inputs.
//!
//! ## CSV Format
//!
//! Headers are matched by name; column order does not matter.
//!
//! | Column         | Required | Type    | Notes                                   |
//! |----------------|----------|---------|-----------------------------------------|
//! | `gross_salary` | yes      | decimal | Quote values that contain `,` grouping  |
//! | `nps_percent`  | yes      | decimal | 0 to 14                                 |
//! | `regime`       | no       | string  | `new` or `old`; empty means `new`       |
//!
//! ### Example
//!
//! ```csv
//! gross_salary,nps_percent,regime
//! "18,00,000",14,new
//! 950000.50,0,
//! ```

use std::io::Read;

use salary_core::{SalaryInput, SalaryPipelineError, TaxRegime};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::amount::{ParseDecimalError, parse_decimal};

/// Errors that can occur while loading or exporting salary data.
#[derive(Debug, Error)]
pub enum SalaryDataError {
    /// The CSV is structurally invalid or a required column is missing.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A numeric cell could not be parsed. `row` is 1-based (header = row 0).
    #[error("invalid {column} on row {row}: {source}")]
    InvalidAmount {
        column: &'static str,
        row: usize,
        #[source]
        source: ParseDecimalError,
    },

    #[error("unrecognised regime '{value}' on row {row}")]
    InvalidRegime { value: String, row: usize },

    /// The row parsed but failed input validation.
    #[error("invalid input on row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: SalaryPipelineError,
    },
}

/// Serde row that mirrors the CSV layout. Amounts stay text so grouped
/// numbers like `18,00,000` are accepted.
#[derive(Debug, Deserialize)]
struct CsvRow {
    gross_salary: String,
    nps_percent: String,
    #[serde(default)]
    regime: Option<String>,
}

/// Loader for salary inputs from CSV.
pub struct SalaryInputLoader;

impl SalaryInputLoader {
    /// Parses and validates every row of `reader`, in file order.
    ///
    /// # Errors
    ///
    /// The first structural, parse or validation error, tagged with its
    /// 1-based row number.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<SalaryInput>, SalaryDataError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(reader);

        csv_reader
            .deserialize::<CsvRow>()
            .enumerate()
            .map(|(idx, result)| {
                let row = result?;
                Self::convert_row(row, idx + 1)
            })
            .collect()
    }

    fn convert_row(
        row: CsvRow,
        row_number: usize,
    ) -> Result<SalaryInput, SalaryDataError> {
        let gross_salary =
            parse_decimal(&row.gross_salary).map_err(|source| SalaryDataError::InvalidAmount {
                column: "gross_salary",
                row: row_number,
                source,
            })?;
        let nps_percent =
            parse_decimal(&row.nps_percent).map_err(|source| SalaryDataError::InvalidAmount {
                column: "nps_percent",
                row: row_number,
                source,
            })?;

        let regime = match row.regime.as_deref().map(str::trim) {
            None | Some("") => TaxRegime::default(),
            Some(value) => {
                TaxRegime::parse(value).ok_or_else(|| SalaryDataError::InvalidRegime {
                    value: value.to_string(),
                    row: row_number,
                })?
            }
        };

        SalaryInput::new(gross_salary, nps_percent)
            .map(|input| input.with_regime(regime))
            .map_err(|source| {
                warn!(row = row_number, %source, "rejected salary input row");
                SalaryDataError::InvalidRow {
                    row: row_number,
                    source,
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_minimal_columns() {
        let csv = "gross_salary,nps_percent\n1800000,14\n";

        let inputs = SalaryInputLoader::parse(csv.as_bytes()).unwrap();

        assert_eq!(inputs, vec![SalaryInput::default()]);
    }

    #[test]
    fn parse_accepts_quoted_grouped_amounts() {
        let csv = "gross_salary,nps_percent\n\"18,00,000\",10\n";

        let inputs = SalaryInputLoader::parse(csv.as_bytes()).unwrap();

        assert_eq!(inputs[0].gross_salary, dec!(1800000));
        assert_eq!(inputs[0].nps_percent, dec!(10));
    }

    #[test]
    fn parse_columns_in_any_order() {
        let csv = "regime,nps_percent,gross_salary\nold, 5 , 600000\n";

        let inputs = SalaryInputLoader::parse(csv.as_bytes()).unwrap();

        assert_eq!(inputs[0].gross_salary, dec!(600000));
        assert_eq!(inputs[0].regime, TaxRegime::Old);
    }

    #[test]
    fn parse_empty_regime_defaults_to_new() {
        let csv = "gross_salary,nps_percent,regime\n500000,0,\n";

        let inputs = SalaryInputLoader::parse(csv.as_bytes()).unwrap();

        assert_eq!(inputs[0].regime, TaxRegime::New);
    }

    #[test]
    fn parse_reports_unknown_regime_with_row() {
        let csv = "gross_salary,nps_percent,regime\n500000,0,new\n600000,0,flat\n";

        let err = SalaryInputLoader::parse(csv.as_bytes()).unwrap_err();

        assert!(matches!(
            err,
            SalaryDataError::InvalidRegime { ref value, row: 2 } if value == "flat"
        ));
    }

    #[test]
    fn parse_rejects_blank_gross_salary() {
        let csv = "gross_salary,nps_percent\n,14\n";

        let err = SalaryInputLoader::parse(csv.as_bytes()).unwrap_err();

        assert!(matches!(
            err,
            SalaryDataError::InvalidAmount {
                column: "gross_salary",
                row: 1,
                source: ParseDecimalError::Empty,
            }
        ));
    }

    #[test]
    fn parse_rejects_blank_nps_percent() {
        let csv = "gross_salary,nps_percent\n1800000,\n";

        let err = SalaryInputLoader::parse(csv.as_bytes()).unwrap_err();

        assert!(matches!(
            err,
            SalaryDataError::InvalidAmount {
                column: "nps_percent",
                row: 1,
                source: ParseDecimalError::Empty,
            }
        ));
    }

    #[test]
    fn parse_reports_bad_amount_with_column() {
        let csv = "gross_salary,nps_percent\nten lakh,14\n";

        let err = SalaryInputLoader::parse(csv.as_bytes()).unwrap_err();

        assert!(matches!(
            err,
            SalaryDataError::InvalidAmount {
                column: "gross_salary",
                row: 1,
                ..
            }
        ));
    }

    #[test]
    fn parse_rejects_out_of_range_nps() {
        let csv = "gross_salary,nps_percent\n1000000,15\n";

        let err = SalaryInputLoader::parse(csv.as_bytes()).unwrap_err();

        assert!(matches!(
            err,
            SalaryDataError::InvalidRow {
                row: 1,
                source: SalaryPipelineError::NpsPercentOutOfRange { .. }
            }
        ));
    }

    #[test]
    fn parse_rejects_missing_column() {
        let csv = "gross_salary\n1000000\n";

        assert!(matches!(
            SalaryInputLoader::parse(csv.as_bytes()),
            Err(SalaryDataError::Csv(_))
        ));
    }

    #[test]
    fn parse_header_only_is_empty() {
        let csv = "gross_salary,nps_percent\n";

        assert!(SalaryInputLoader::parse(csv.as_bytes()).unwrap().is_empty());
    }
}
