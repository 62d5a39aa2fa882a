/*
Author      : Seunghwan Shin
Create date : 2026-08-00
Description : 일별 매출 집계 및 차트 리포트 파이프라인

History     : 2026-08-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod errors;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::sales_repository_impl::*;

mod env_configuration;

mod traits;

mod model;
use model::configs::{
    rdb_config::*, schedule_config::*, system_config::*, total_config::*,
};

mod utils_modules;
use utils_modules::logger_utils::*;

mod dto;
mod enums;

mod service;
use service::{chart_service_impl::*, extract_service_impl::*, pipeline_service_impl::*};

mod controller;
use controller::main_controller::*;

#[tokio::main]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    set_global_logger();

    info!("Sales revenue pipeline start!");

    let rdb_config: &RdbConfig = get_rdb_config_info();
    let system_config: &SystemConfig = get_system_config_info();
    let schedule_config: &ScheduleConfig = get_schedule_config_info();

    /* 의존 주입 */
    let sales_repository: SalesRepositoryImpl = SalesRepositoryImpl::new(rdb_config);
    let extract_service: ExtractServiceImpl<SalesRepositoryImpl> =
        ExtractServiceImpl::new(sales_repository);
    let chart_service: ChartServiceImpl =
        ChartServiceImpl::new(*system_config.chart_width(), *system_config.chart_height());

    let pipeline_service: PipelineServiceImpl<
        ExtractServiceImpl<SalesRepositoryImpl>,
        ChartServiceImpl,
    > = PipelineServiceImpl::new(
        extract_service,
        chart_service,
        PathBuf::from(system_config.output_dir()),
    );

    let main_controller: MainController<
        PipelineServiceImpl<ExtractServiceImpl<SalesRepositoryImpl>, ChartServiceImpl>,
    > = MainController::new(pipeline_service, schedule_config.clone());

    main_controller.main_task().await.unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });
}
