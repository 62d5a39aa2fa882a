use crate::common::*;

#[doc = r#"
    일별 매출 집계 쿼리가 돌려주는 원시 행.

    `total_revenue` 가 Option 인 이유: 수량/단가에 NULL 이 섞이면 SQL SUM 이
    NULL 을 건너뛰거나 NULL 을 돌려주는데, 그 상황을 조용히 흡수하지 않고
    Rust 쪽에서 무결성 오류로 판정하기 위해 NULL 카운트 컬럼과 함께 그대로 받는다.

    # Fields
    * `order_date` - 주문 일자 (GROUP BY 키)
    * `total_revenue` - SUM(quantity * price) 결과
    * `missing_value_cnt` - 해당 일자에서 수량 또는 단가가 NULL 인 라인아이템 수
"#]
#[derive(Debug, Clone, FromRow, Getters, new)]
#[getset(get = "pub")]
pub struct DailySalesRow {
    pub order_date: NaiveDate,
    pub total_revenue: Option<Decimal>,
    pub missing_value_cnt: i64,
}
