use crate::domain::model::{InputRecord, ValidationReport};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Source of "today" for century inference and age.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> Option<&str>;
    fn input_column(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn csv_filename(&self) -> &str {
        "report.csv"
    }
    fn json_filename(&self) -> &str {
        "report.json"
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<InputRecord>>;
    async fn transform(&self, records: Vec<InputRecord>) -> Result<ValidationReport>;
    async fn load(&self, report: &ValidationReport) -> Result<String>;
}
