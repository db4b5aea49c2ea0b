use crate::adapters::clock::AnyClock;
use crate::config::cli::LocalStorage;
use crate::config::CliConfig;
use crate::core::engine::ValidationEngine;
use crate::core::parser::parse_and_validate;
use crate::core::pipeline::BatchPipeline;
use crate::core::presentation::PersonDetails;
use crate::core::Clock;
use crate::domain::model::BatchSummary;
use crate::utils::error::{CheckError, ErrorSeverity, Result};
use crate::utils::validation::Validate;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Write;

/// Result for one number given on the command line.
#[derive(Debug, Clone, Serialize)]
pub struct NumberCheck {
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<PersonDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<&'static str>,
    #[serde(skip)]
    pub exit_code: i32,
}

impl NumberCheck {
    pub fn run(raw: &str, today: NaiveDate) -> Self {
        let raw = raw.trim();
        match parse_and_validate(raw, today) {
            Ok(parsed) => Self {
                input: raw.to_string(),
                valid: true,
                details: Some(PersonDetails::from_record(&parsed, today)),
                kind: None,
                error: None,
                suggestion: None,
                exit_code: 0,
            },
            Err(e) => {
                let kind = e.kind();
                let err = CheckError::from(e);
                Self {
                    input: raw.to_string(),
                    valid: false,
                    details: None,
                    kind: Some(kind),
                    error: Some(err.user_friendly_message()),
                    suggestion: Some(err.recovery_suggestion()),
                    exit_code: err.exit_code(),
                }
            }
        }
    }
}

/// Everything one CLI invocation produced, printed once at the end.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckRun {
    pub results: Vec<NumberCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch: Option<BatchSummary>,
}

impl CheckRun {
    /// 0 when every number passed, otherwise the highest per-number code.
    pub fn exit_code(&self) -> i32 {
        let numbers = self.results.iter().map(|r| r.exit_code).max().unwrap_or(0);
        let batch = match &self.batch {
            Some(summary) if summary.invalid > 0 => ErrorSeverity::Low.exit_code(),
            _ => 0,
        };
        numbers.max(batch)
    }

    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();

        for result in &self.results {
            match (&result.details, &result.error) {
                (Some(details), _) => {
                    let _ = writeln!(out, "✅ {}: Valid personal number", result.input);
                    let _ = writeln!(out, "   Birth date: {}", details.birth_date);
                    let _ = writeln!(out, "   Age: {} years", details.age);
                    let _ = writeln!(out, "   Gender: {}", details.gender);
                }
                (None, error) => {
                    let _ = writeln!(
                        out,
                        "❌ {}: {}",
                        result.input,
                        error.as_deref().unwrap_or_default()
                    );
                    if let Some(suggestion) = result.suggestion {
                        let _ = writeln!(out, "   💡 {}", suggestion);
                    }
                }
            }
        }

        if let Some(summary) = &self.batch {
            let _ = writeln!(
                out,
                "✅ Checked {} numbers: {} valid, {} invalid",
                summary.total, summary.valid, summary.invalid
            );
            let _ = writeln!(out, "📁 Report saved to: {}", summary.output_path);
        }

        out
    }
}

/// Validates the arguments, checks the positional numbers, then runs the
/// batch when `--input` is given.
pub async fn run_check(config: &CliConfig, clock: AnyClock) -> Result<CheckRun> {
    config.validate()?;

    let today = clock.today();
    tracing::debug!("Validating as of {}", today);

    let results = config
        .numbers
        .iter()
        .map(|raw| NumberCheck::run(raw, today))
        .collect();

    let batch = if config.input.is_some() {
        let pipeline = BatchPipeline::new(LocalStorage::default(), config.clone(), clock);
        Some(ValidationEngine::new(pipeline).run().await?)
    } else {
        None
    };

    Ok(CheckRun { results, batch })
}
