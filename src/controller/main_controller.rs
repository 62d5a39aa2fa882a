use crate::common::*;

use crate::model::configs::schedule_config::*;

use crate::traits::service_traits::pipeline_service::*;

use crate::dto::report_artifact::*;

use crate::enums::run_status::*;

use crate::utils_modules::time_utils::*;

#[derive(Debug, new)]
pub struct MainController<P: PipelineService> {
    pipeline_service: P,
    schedule_config: ScheduleConfig,
}

impl<P: PipelineService + Sync + Send> MainController<P> {
    #[doc = r#"
        메인 루프를 실행하는 핵심 함수로, cron 스케줄에 맞춰 매출 파이프라인을 반복 실행한다.

        1. 설정의 cron 표현식을 파싱한다
        2. `run_on_startup_yn` 이 켜져 있으면 기동 직후 1회 즉시 실행
        3. 다음 발화 시각까지 대기 후 파이프라인 실행 (항상 미래 시각만 계산하므로
           놓친 과거 실행분을 따라잡지 않는다)
        4. 실행 실패 시 고정 지연 후 정확히 1회 재시도하고, 그래도 실패하면
           결과만 로깅하고 다음 주기로 넘어간다 (별도 알림 없음)

        # Returns
        * `anyhow::Result<()>` - cron 표현식이 잘못된 경우에만 Err 로 종료
    "#]
    pub async fn main_task(&self) -> anyhow::Result<()> {
        let schedule: Schedule = Schedule::from_str(self.schedule_config.cron_schedule())
            .map_err(|e| {
                anyhow!(
                    "[MainController->main_task] Failed to parse cron schedule '{}': {:?}",
                    self.schedule_config.cron_schedule(),
                    e
                )
            })?;

        info!(
            "Starting sales pipeline scheduler with cron schedule: {}",
            self.schedule_config.cron_schedule()
        );

        if *self.schedule_config.run_on_startup_yn() {
            self.execute_scheduled_run().await;
        }

        loop {
            let now_local: DateTime<Local> = Local::now();

            let next_fire_time: DateTime<Local> =
                schedule.upcoming(Local).next().ok_or_else(|| {
                    anyhow!(
                        "[MainController->main_task] Cron schedule '{}' yields no upcoming run",
                        self.schedule_config.cron_schedule()
                    )
                })?;

            let wait_duration: Duration = (next_fire_time - now_local)
                .to_std()
                .unwrap_or(Duration::from_secs(0));

            info!(
                "Next sales pipeline run scheduled at {}",
                convert_date_to_str(next_fire_time, Local)
            );

            sleep(wait_duration).await;

            self.execute_scheduled_run().await;
        }
    }

    #[doc = r#"
        파이프라인을 지금 1회 실행하고, 실패하면 고정 지연 후 1회만 재시도하는 함수.
        재시도/지연 정책은 오케스트레이션의 몫이므로 파이프라인 코어가 아닌 여기에 둔다.

        # Returns
        * `RunStatus` - 최종 실행 결과 (Succeeded | Failed)
    "#]
    async fn execute_scheduled_run(&self) -> RunStatus {
        match self.pipeline_service.run_sales_pipeline().await {
            Ok(report_artifact) => {
                self.report_outcome(RunStatus::Succeeded, &report_artifact);
                RunStatus::Succeeded
            }
            Err(e) => {
                error!(
                    "[MainController->execute_scheduled_run] Sales pipeline failed: {:?}",
                    e
                );

                /* 고정 지연 후 1회 재시도 */
                sleep(Duration::from_secs(*self.schedule_config.retry_delay_sec())).await;
                info!(
                    "Retrying sales pipeline after {} sec delay",
                    self.schedule_config.retry_delay_sec()
                );

                match self.pipeline_service.run_sales_pipeline().await {
                    Ok(report_artifact) => {
                        self.report_outcome(RunStatus::Succeeded, &report_artifact);
                        RunStatus::Succeeded
                    }
                    Err(e) => {
                        error!(
                            "[MainController->execute_scheduled_run] Retry also failed: {:?}",
                            e
                        );
                        info!("Sales pipeline run state: {}", RunStatus::Failed);
                        RunStatus::Failed
                    }
                }
            }
        }
    }

    #[doc = "실행 결과를 스케줄러 관점에서 기록해주는 함수"]
    fn report_outcome(&self, run_status: RunStatus, report_artifact: &ReportArtifact) {
        info!(
            "Sales pipeline run state: {} ({} records -> {:?})",
            run_status,
            report_artifact.source_records().len(),
            report_artifact.output_path()
        );
    }
}
