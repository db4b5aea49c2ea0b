use crate::core::pipeline::SUPPORTED_FORMATS;
use crate::core::ConfigProvider;
use crate::utils::error::{CheckError, Result};
use crate::utils::logger::{LogSettings, LOG_LEVELS};
use crate::utils::validation::{
    parse_iso_date, validate_allowed_values, validate_non_empty_string, validate_path, Validate,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub clock: Option<ClockConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: String,
    /// Header of the CSV column with the numbers; absent means one per line.
    pub column: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub formats: Vec<String>,
    pub csv_filename: Option<String>,
    pub json_filename: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    /// `YYYY-MM-DD`; validation runs as of this day instead of today.
    pub today: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub json: Option<bool>,
    pub verbose: Option<bool>,
    /// Level for this crate's logs: trace, debug, info, warn or error.
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CheckError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CheckError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${INPUT_FILE})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CheckError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("input.path", &self.input.path)?;
        if let Some(column) = &self.input.column {
            validate_non_empty_string("input.column", column)?;
        }

        validate_path("output.path", &self.output.path)?;
        validate_allowed_values("output.formats", &self.output.formats, &SUPPORTED_FORMATS)?;
        if let Some(name) = &self.output.csv_filename {
            validate_non_empty_string("output.csv_filename", name)?;
        }
        if let Some(name) = &self.output.json_filename {
            validate_non_empty_string("output.json_filename", name)?;
        }

        if let Some(level) = self.logging.as_ref().and_then(|l| l.level.as_ref()) {
            validate_allowed_values("logging.level", std::slice::from_ref(level), &LOG_LEVELS)?;
        }

        self.today()?;
        Ok(())
    }

    /// Pinned validation date, if configured.
    pub fn today(&self) -> Result<Option<NaiveDate>> {
        match self.clock.as_ref().and_then(|c| c.today.as_deref()) {
            Some(value) => parse_iso_date("clock.today", value).map(Some),
            None => Ok(None),
        }
    }

    pub fn json_logging(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }

    /// Logging setup from `[logging]`; `--verbose` on the command line adds to it.
    pub fn log_settings(&self, verbose_flag: bool) -> LogSettings {
        LogSettings {
            level: self.logging.as_ref().and_then(|l| l.level.clone()),
            verbose: verbose_flag || self.verbose(),
            json: self.json_logging(),
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> Option<&str> {
        Some(self.input.path.as_str())
    }

    fn input_column(&self) -> Option<&str> {
        self.input.column.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_formats(&self) -> &[String] {
        &self.output.formats
    }

    fn csv_filename(&self) -> &str {
        self.output.csv_filename.as_deref().unwrap_or("report.csv")
    }

    fn json_filename(&self) -> &str {
        self.output.json_filename.as_deref().unwrap_or("report.json")
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
