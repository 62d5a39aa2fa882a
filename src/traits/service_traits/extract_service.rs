use crate::common::*;

use crate::model::sales::sales_record::*;

#[async_trait]
pub trait ExtractService: Send + Sync {
    async fn extract_daily_sales(&self) -> anyhow::Result<Vec<SalesRecord>>;
}
