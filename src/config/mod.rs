pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use args::CliConfig;

#[cfg(feature = "cli")]
mod args {
    use crate::core::pipeline::SUPPORTED_FORMATS;
    use crate::core::ConfigProvider;
    use crate::utils::error::{CheckError, Result};
    use crate::utils::validation::{validate_allowed_values, validate_path, Validate};
    use chrono::NaiveDate;
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "personnummer-check")]
    #[command(about = "Validate Swedish personal identity numbers")]
    pub struct CliConfig {
        /// Numbers to validate, e.g. 811218-9876 or 19811218-9876
        pub numbers: Vec<String>,

        /// File with one number per line (or a CSV file with --column)
        #[arg(long)]
        pub input: Option<String>,

        /// CSV header of the column holding the numbers
        #[arg(long, requires = "input")]
        pub column: Option<String>,

        #[arg(long, default_value = "./output")]
        pub output_path: String,

        #[arg(long, value_delimiter = ',', default_value = "csv")]
        pub formats: Vec<String>,

        /// Validate as of this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        pub today: Option<NaiveDate>,

        #[arg(long, help = "Print results as JSON")]
        pub json: bool,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl ConfigProvider for CliConfig {
        fn input_path(&self) -> Option<&str> {
            self.input.as_deref()
        }

        fn input_column(&self) -> Option<&str> {
            self.column.as_deref()
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn output_formats(&self) -> &[String] {
            &self.formats
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if self.numbers.is_empty() && self.input.is_none() {
                return Err(CheckError::MissingConfigError {
                    field: "numbers or --input".to_string(),
                });
            }

            if let Some(input) = &self.input {
                validate_path("input", input)?;
                validate_path("output_path", &self.output_path)?;
                validate_allowed_values("formats", &self.formats, &SUPPORTED_FORMATS)?;
            }

            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn parses_numbers_and_flags() {
            let config = CliConfig::parse_from([
                "personnummer-check",
                "811218-9876",
                "121212+1212",
                "--today",
                "2024-06-01",
                "--json",
            ]);

            assert_eq!(config.numbers, vec!["811218-9876", "121212+1212"]);
            assert_eq!(config.today, NaiveDate::from_ymd_opt(2024, 6, 1));
            assert!(config.json);
            assert_eq!(config.formats, vec!["csv"]);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn batch_arguments() {
            let config = CliConfig::parse_from([
                "personnummer-check",
                "--input",
                "numbers.csv",
                "--column",
                "pnr",
                "--formats",
                "csv,json",
            ]);

            assert_eq!(config.input_path(), Some("numbers.csv"));
            assert_eq!(config.input_column(), Some("pnr"));
            assert_eq!(config.output_formats(), ["csv", "json"]);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn rejects_missing_input() {
            let config = CliConfig::parse_from(["personnummer-check"]);
            assert!(matches!(
                config.validate(),
                Err(CheckError::MissingConfigError { .. })
            ));
        }

        #[test]
        fn rejects_unknown_format() {
            let config = CliConfig::parse_from([
                "personnummer-check",
                "--input",
                "numbers.txt",
                "--formats",
                "xml",
            ]);
            assert!(config.validate().is_err());
        }

        #[test]
        fn rejects_bad_today() {
            let result = CliConfig::try_parse_from(["personnummer-check", "--today", "2024-02-30"]);
            assert!(result.is_err());
        }
    }
}
