use crate::core::Pipeline;
use crate::domain::model::BatchSummary;
use crate::utils::error::Result;

pub struct ValidationEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ValidationEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<BatchSummary> {
        tracing::info!("Starting batch validation");

        let records = self.pipeline.extract().await?;
        tracing::info!("Read {} personal numbers", records.len());

        let report = self.pipeline.transform(records).await?;
        tracing::info!(
            "Validated {} numbers: {} valid, {} invalid",
            report.outcomes.len(),
            report.valid_count(),
            report.invalid_count()
        );

        let output_path = self.pipeline.load(&report).await?;
        tracing::info!("Report saved to: {}", output_path);

        Ok(BatchSummary {
            total: report.outcomes.len(),
            valid: report.valid_count(),
            invalid: report.invalid_count(),
            output_path,
        })
    }
}
