use crate::common::*;

use thiserror::Error;

#[doc = r#"
    파이프라인 실행을 중단시키는 오류 분류.

    네 가지 모두 해당 실행에 치명적이며, 내부에서 복구하지 않고
    즉시 상위(스케줄 컨트롤러)로 전파된다. anyhow::Error 안에 담겨
    전달되므로 호출부에서는 `downcast_ref::<PipelineError>()` 로
    세부 분류를 확인할 수 있다.
"#]
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("[ConnectionError] cannot connect to the sales database: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("[QueryError] daily revenue aggregation query failed: {0}")]
    Query(#[source] sqlx::Error),

    #[error(
        "[DataIntegrityError] order date {order_date} has {missing_cnt} line item(s) with null quantity/price"
    )]
    DataIntegrity {
        order_date: NaiveDate,
        missing_cnt: i64,
    },

    #[error("[IOError] cannot write report artifact: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_error_display_carries_taxonomy_tag() {
        let connection_err: PipelineError = PipelineError::Connection(sqlx::Error::Io(
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"),
        ));
        assert!(connection_err.to_string().starts_with("[ConnectionError]"));

        let integrity_err: PipelineError = PipelineError::DataIntegrity {
            order_date: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            missing_cnt: 2,
        };
        assert!(integrity_err.to_string().starts_with("[DataIntegrityError]"));
        assert!(integrity_err.to_string().contains("2024-12-01"));
    }

    #[test]
    fn pipeline_error_is_downcastable_from_anyhow() {
        let wrapped: anyhow::Error = PipelineError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ))
        .into();

        assert!(matches!(
            wrapped.downcast_ref::<PipelineError>(),
            Some(PipelineError::Io(_))
        ));
    }
}
