use crate::common::*;

#[doc = r#"
    파이프라인 트리거 스케줄 설정.

    # Fields
    * `cron_schedule` - 실행 주기 (sec min hour day month weekday)
    * `retry_delay_sec` - 실패 시 1회 재시도 전 고정 대기 시간
    * `run_on_startup_yn` - 기동 직후 1회 즉시 실행 여부
"#]
#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct ScheduleConfig {
    pub cron_schedule: String,
    pub retry_delay_sec: u64,
    pub run_on_startup_yn: bool,
}
