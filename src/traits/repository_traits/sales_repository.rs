use crate::common::*;

use crate::dto::daily_sales_row::*;

#[async_trait]
pub trait SalesRepository: Send + Sync {
    async fn fetch_daily_sales_rows(&self) -> anyhow::Result<Vec<DailySalesRow>>;
}
