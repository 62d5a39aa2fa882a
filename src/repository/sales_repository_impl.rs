use crate::common::*;

use crate::errors::*;

use crate::model::configs::rdb_config::*;

use crate::dto::daily_sales_row::*;

use crate::traits::repository_traits::sales_repository::*;

/*
    일별 매출 집계 쿼리.
    orders - order_details - products 세 테이블을 조인한 뒤 주문 일자로 그룹핑한다.
    수량/단가 NULL 은 SUM 이 조용히 건너뛰므로, NULL 라인아이템 수를 별도 컬럼으로
    함께 집계해서 서비스 계층이 무결성 판정을 할 수 있게 한다.
*/
static DAILY_REVENUE_QUERY: &str = r#"
SELECT
    o.orderdate AS order_date,
    SUM(od.quantity * p.price) AS total_revenue,
    COUNT(*) FILTER (WHERE od.quantity IS NULL OR p.price IS NULL) AS missing_value_cnt
FROM orders o
JOIN order_details od ON o.orderid = od.orderid
JOIN products p ON od.productid = p.productid
GROUP BY o.orderdate
ORDER BY o.orderdate
"#;

#[derive(Debug, Clone)]
pub struct SalesRepositoryImpl {
    connect_options: PgConnectOptions,
}

impl SalesRepositoryImpl {
    #[doc = "접속 옵션은 기동 시 한 번만 만들어두고, 커넥션은 실행마다 새로 연다."]
    pub fn new(rdb_config: &RdbConfig) -> Self {
        let connect_options: PgConnectOptions = PgConnectOptions::new()
            .host(rdb_config.host())
            .port(*rdb_config.port())
            .database(rdb_config.database())
            .username(rdb_config.user())
            .password(rdb_config.password());

        SalesRepositoryImpl { connect_options }
    }
}

#[async_trait]
impl SalesRepository for SalesRepositoryImpl {
    #[doc = r#"
        일별 매출 집계 쿼리를 실행해서 원시 행 목록을 반환하는 함수.

        1. 실행마다 단일 커넥션을 새로 열고, 끝나면 닫는다 (풀 없음, 읽기 전용)
        2. 커넥션 단계의 오류는 `PipelineError::Connection` 으로 분류
        3. 쿼리 실행 단계의 오류는 `PipelineError::Query` 로 분류
        4. 오류 시 부분 결과는 반환하지 않는다

        # Returns
        * `Vec<DailySalesRow>` - 주문 일자 오름차순의 집계 행
        * `anyhow::Error` - 접속 실패 또는 쿼리 실패 시
    "#]
    async fn fetch_daily_sales_rows(&self) -> anyhow::Result<Vec<DailySalesRow>> {
        let mut conn: PgConnection = PgConnection::connect_with(&self.connect_options)
            .await
            .map_err(PipelineError::Connection)?;

        let rows: Vec<DailySalesRow> = sqlx::query_as::<_, DailySalesRow>(DAILY_REVENUE_QUERY)
            .fetch_all(&mut conn)
            .await
            .map_err(PipelineError::Query)?;

        conn.close().await.map_err(PipelineError::Connection)?;

        Ok(rows)
    }
}
