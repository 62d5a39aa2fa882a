use crate::common::*;

use crate::model::sales::sales_record::*;

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Generate a line chart from daily sales records and save it as an image file
        # Arguments
        * `title` - Chart title
        * `sales_records` - Daily revenue records (re-sorted ascending by date before drawing)
        * `output_path` - Path where the chart image will be saved
        * `x_desc` - Label for X-axis
        * `y_desc` - Label for Y-axis
    "]
    async fn generate_line_chart(
        &self,
        title: &str,
        sales_records: &[SalesRecord],
        output_path: &Path,
        x_desc: &str,
        y_desc: &str,
    ) -> anyhow::Result<()>;
}
