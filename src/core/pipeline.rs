use crate::core::parser::parse_and_validate;
use crate::core::presentation::age_on;
use crate::core::{Clock, ConfigProvider, InputRecord, Pipeline, Storage, ValidationReport};
use crate::domain::model::ValidationOutcome;
use crate::utils::error::{CheckError, Result};
use crate::utils::validation::validate_required_field;
use chrono::NaiveDate;
use std::path::Path;

pub const FORMAT_CSV: &str = "csv";
pub const FORMAT_JSON: &str = "json";
pub const SUPPORTED_FORMATS: [&str; 2] = [FORMAT_CSV, FORMAT_JSON];

/// Reads raw numbers from a file, validates each one and writes reports.
pub struct BatchPipeline<S: Storage, C: ConfigProvider, K: Clock> {
    pub(crate) storage: S,
    pub(crate) config: C,
    pub(crate) clock: K,
}

impl<S: Storage, C: ConfigProvider, K: Clock> BatchPipeline<S, C, K> {
    pub fn new(storage: S, config: C, clock: K) -> Self {
        Self {
            storage,
            config,
            clock,
        }
    }

    fn read_lines(content: &str) -> Vec<InputRecord> {
        content
            .lines()
            .enumerate()
            .filter_map(|(idx, line)| {
                let raw = line.trim();
                if raw.is_empty() || raw.starts_with('#') {
                    return None;
                }
                Some(InputRecord {
                    line: idx + 1,
                    raw: raw.to_string(),
                })
            })
            .collect()
    }

    fn read_column(data: &[u8], column: &str) -> Result<Vec<InputRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(data);

        let index = reader
            .headers()?
            .iter()
            .position(|h| h.trim() == column)
            .ok_or_else(|| CheckError::ConfigValidationError {
                field: "input.column".to_string(),
                message: format!("Column '{}' not found in input header", column),
            })?;

        let mut records = Vec::new();
        for (row, result) in reader.records().enumerate() {
            let record = result?;
            let line = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(row + 2);
            let raw = record.get(index).unwrap_or("").trim();
            if raw.is_empty() {
                continue;
            }
            records.push(InputRecord {
                line,
                raw: raw.to_string(),
            });
        }
        Ok(records)
    }

    fn outcome_for(record: InputRecord, today: NaiveDate) -> ValidationOutcome {
        match parse_and_validate(&record.raw, today) {
            Ok(parsed) => ValidationOutcome {
                line: record.line,
                input: record.raw,
                valid: true,
                age: Some(age_on(parsed.birth_date, today)),
                birth_date: Some(parsed.birth_date),
                gender: Some(parsed.gender),
                normalized: Some(parsed.normalized),
                error: None,
            },
            Err(e) => ValidationOutcome {
                line: record.line,
                input: record.raw,
                valid: false,
                normalized: None,
                birth_date: None,
                age: None,
                gender: None,
                error: Some(e.to_string()),
            },
        }
    }

    fn to_csv(outcomes: &[ValidationOutcome]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for outcome in outcomes {
            writer.serialize(outcome)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| CheckError::IoError(e.into_error()))?;
        String::from_utf8(bytes).map_err(|e| {
            CheckError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, K: Clock> Pipeline for BatchPipeline<S, C, K> {
    async fn extract(&self) -> Result<Vec<InputRecord>> {
        let input_path = *validate_required_field("input.path", &self.config.input_path())?;

        tracing::debug!("Reading input from: {}", input_path);
        let data = self.storage.read_file(input_path).await?;

        let records = match self.config.input_column() {
            Some(column) => Self::read_column(&data, column)?,
            None => {
                let content = std::str::from_utf8(&data).map_err(|e| {
                    CheckError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
                })?;
                Self::read_lines(content)
            }
        };

        if records.is_empty() {
            tracing::warn!("No personal numbers found in {}", input_path);
        }

        Ok(records)
    }

    async fn transform(&self, records: Vec<InputRecord>) -> Result<ValidationReport> {
        let today = self.clock.today();
        tracing::debug!("Validating {} records as of {}", records.len(), today);

        let outcomes: Vec<ValidationOutcome> = records
            .into_iter()
            .map(|record| Self::outcome_for(record, today))
            .collect();

        for outcome in outcomes.iter().filter(|o| !o.valid) {
            tracing::info!(
                line = outcome.line,
                "Rejected '{}': {}",
                outcome.input,
                outcome.error.as_deref().unwrap_or_default()
            );
        }

        Ok(ValidationReport {
            csv_output: Self::to_csv(&outcomes)?,
            json_output: serde_json::to_string_pretty(&outcomes)?,
            outcomes,
        })
    }

    async fn load(&self, report: &ValidationReport) -> Result<String> {
        let output_dir = Path::new(self.config.output_path());
        let mut written = Vec::new();

        for format in self.config.output_formats() {
            let (filename, body) = match format.as_str() {
                FORMAT_CSV => (self.config.csv_filename(), &report.csv_output),
                FORMAT_JSON => (self.config.json_filename(), &report.json_output),
                other => {
                    return Err(CheckError::InvalidConfigValueError {
                        field: "output.formats".to_string(),
                        value: other.to_string(),
                        reason: format!(
                            "Unsupported format. Valid formats: {}",
                            SUPPORTED_FORMATS.join(", ")
                        ),
                    })
                }
            };

            let path = output_dir.join(filename).to_string_lossy().into_owned();
            tracing::debug!("Writing {} report ({} bytes) to {}", format, body.len(), path);
            self.storage.write_file(&path, body.as_bytes()).await?;
            written.push(path);
        }

        written
            .into_iter()
            .next()
            .ok_or_else(|| CheckError::ConfigError {
                message: "No output formats configured".to_string(),
            })
    }
}
