//! Optional TOML configuration file.
//!
//! ```toml
//! [defaults]
//! gross_salary = 1800000
//! nps_percent = 14
//! regime = "new"
//!
//! [logging]
//! level = "debug"
//! file = "in-hand.log"
//! ```
//!
//! Every key is optional. Command line flags take precedence over the file,
//! and the file over the built-in defaults.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use salary_core::{SalaryInput, SalaryPipelineError, TaxRegime};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub defaults: InputDefaults,
    pub logging: LoggingConfig,
}

/// Input values used when the matching flag is not given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputDefaults {
    pub gross_salary: Option<Decimal>,
    pub nps_percent: Option<Decimal>,
    pub regime: Option<TaxRegime>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Bare level or full `EnvFilter` directive.
    pub level: Option<String>,
    /// Log file, opened in append mode.
    pub file: Option<PathBuf>,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

/// Values given on the command line for a single calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputOverrides {
    pub gross_salary: Option<Decimal>,
    pub nps_percent: Option<Decimal>,
    pub regime: Option<TaxRegime>,
}

impl InputDefaults {
    /// Merges `overrides` over these defaults over [`SalaryInput::default`]
    /// and validates the result.
    pub fn resolve(
        &self,
        overrides: InputOverrides,
    ) -> Result<SalaryInput, SalaryPipelineError> {
        let builtin = SalaryInput::default();

        let gross_salary = overrides
            .gross_salary
            .or(self.gross_salary)
            .unwrap_or(builtin.gross_salary);
        let nps_percent = overrides
            .nps_percent
            .or(self.nps_percent)
            .unwrap_or(builtin.nps_percent);
        let regime = overrides
            .regime
            .or(self.regime)
            .unwrap_or(builtin.regime);

        Ok(SalaryInput::new(gross_salary, nps_percent)?.with_regime(regime))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        assert_eq!(AppConfig::parse("").unwrap(), AppConfig::default());
    }

    #[test]
    fn parse_full_file() {
        let config = AppConfig::parse(
            r#"
            [defaults]
            gross_salary = 2500000
            nps_percent = "7.5"
            regime = "new"

            [logging]
            level = "debug"
            file = "in-hand.log"
            "#,
        )
        .unwrap();

        assert_eq!(config.defaults.gross_salary, Some(dec!(2500000)));
        assert_eq!(config.defaults.nps_percent, Some(dec!(7.5)));
        assert_eq!(config.defaults.regime, Some(TaxRegime::New));
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.logging.file, Some(PathBuf::from("in-hand.log")));
    }

    #[test]
    fn parse_rejects_unknown_keys() {
        assert!(matches!(
            AppConfig::parse("[defaults]\nbonus = 1\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn load_missing_file_names_path() {
        let err = AppConfig::load(Path::new("does/not/exist.toml")).unwrap_err();

        assert!(err.to_string().contains("does/not/exist.toml"));
    }

    #[test]
    fn resolve_uses_builtin_defaults() {
        let input = InputDefaults::default()
            .resolve(InputOverrides::default())
            .unwrap();

        assert_eq!(input, SalaryInput::default());
    }

    #[test]
    fn resolve_prefers_overrides_over_file() {
        let defaults = InputDefaults {
            gross_salary: Some(dec!(900000)),
            nps_percent: Some(dec!(5)),
            regime: None,
        };
        let overrides = InputOverrides {
            nps_percent: Some(dec!(10)),
            ..Default::default()
        };

        let input = defaults.resolve(overrides).unwrap();

        assert_eq!(input.gross_salary, dec!(900000));
        assert_eq!(input.nps_percent, dec!(10));
        assert_eq!(input.regime, TaxRegime::New);
    }

    #[test]
    fn resolve_validates_result() {
        let overrides = InputOverrides {
            gross_salary: Some(dec!(-5)),
            ..Default::default()
        };

        assert_eq!(
            InputDefaults::default().resolve(overrides),
            Err(SalaryPipelineError::NegativeGrossSalary(dec!(-5)))
        );
    }
}
