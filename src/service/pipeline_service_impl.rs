use crate::common::*;

use crate::errors::*;

use crate::traits::service_traits::{
    chart_service::*, extract_service::*, pipeline_service::*,
};

use crate::model::sales::sales_record::*;

use crate::dto::report_artifact::*;

use crate::enums::run_status::*;

use crate::utils_modules::time_utils::*;

#[derive(Debug, new)]
pub struct PipelineServiceImpl<E: ExtractService, C: ChartService> {
    extract_service: E,
    chart_service: C,
    output_dir: PathBuf,
}

impl<E: ExtractService, C: ChartService> PipelineServiceImpl<E, C> {
    #[doc = "실행 타임스탬프가 박힌 산출물 경로를 계산해주는 함수. 초 단위 타임스탬프라 실행마다 고유하다."]
    fn build_output_path(&self, now: NaiveDateTime) -> PathBuf {
        self.output_dir
            .join(format!("daily_revenue_{}.png", format_artifact_timestamp(&now)))
    }
}

#[async_trait]
impl<E, C> PipelineService for PipelineServiceImpl<E, C>
where
    E: ExtractService + Sync + Send,
    C: ChartService + Sync + Send,
{
    #[doc = r#"
        파이프라인 1회 실행: 추출 -> 경로 계산 -> 렌더링.

        1. 일별 매출 레코드 추출 (실패 시 즉시 중단, 파일은 만들어지지 않는다)
        2. 출력 디렉토리 보장 후 타임스탬프 파일명 계산
        3. 라인 차트 렌더링
        4. 산출물 정보를 반환. 상태머신은 Running -> Succeeded | Failed 가 전부이며
           재시도는 여기가 아니라 스케줄 컨트롤러의 몫이다

        # Returns
        * `ReportArtifact` - 산출물 경로와 원본 레코드
        * `anyhow::Error` - 네 가지 오류 분류 중 하나 (errors.rs)
    "#]
    async fn run_sales_pipeline(&self) -> anyhow::Result<ReportArtifact> {
        info!("Sales pipeline run state: {}", RunStatus::Running);

        /* 1. 일별 매출 집계 추출 */
        let sales_records: Vec<SalesRecord> = self.extract_service.extract_daily_sales().await?;

        info!("Extracted {} rows of daily sales data", sales_records.len());

        if sales_records.is_empty() {
            warn!("No sales data found; an empty chart will be rendered");
        }

        /* 2. 출력 디렉토리 보장 + 타임스탬프 파일명 */
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(PipelineError::Io)?;

        let output_path: PathBuf = self.build_output_path(Local::now().naive_local());

        /* 3. 차트 렌더링 */
        self.chart_service
            .generate_line_chart(
                "Daily Sales Revenue",
                &sales_records,
                &output_path,
                "Date",
                "Total Revenue",
            )
            .await?;

        info!("Plot saved to {:?}", output_path);

        Ok(ReportArtifact::new(output_path, sales_records))
    }
}
