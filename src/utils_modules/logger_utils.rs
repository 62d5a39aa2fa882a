use crate::common::*;

#[doc = r#"
    전역 로거를 설정하는 함수.

    1. `logs/` 디렉토리 아래에 일 단위로 로테이션되는 로그 파일을 생성
    2. 동일 내용을 stdout 에도 복제 출력
    3. 로그 레벨은 info 기준
"#]
pub fn set_global_logger() {
    let logger_handle: flexi_logger::LoggerHandle = Logger::try_with_str("info")
        .expect("Failed to build logger")
        .log_to_file(
            FileSpec::default()
                .directory("logs")
                .basename("sales_revenue_pipeline"),
        )
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(30),
        )
        .duplicate_to_stdout(Duplicate::All)
        .format_for_files(log_line_format)
        .format_for_stdout(log_line_format)
        .append()
        .start()
        .expect("Failed to start logger");

    /* 핸들이 drop 되면 파일 로깅이 중단되므로 프로세스 수명 동안 유지한다. */
    std::mem::forget(logger_handle);
}

#[doc = ""]
fn log_line_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        &record.args()
    )
}
