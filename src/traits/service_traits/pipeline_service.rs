use crate::common::*;

use crate::dto::report_artifact::*;

#[async_trait]
pub trait PipelineService: Send + Sync {
    async fn run_sales_pipeline(&self) -> anyhow::Result<ReportArtifact>;
}
