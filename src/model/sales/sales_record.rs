use crate::common::*;

#[doc = r#"
    하루치 매출 집계 레코드.

    # Fields
    * `order_date` - 주문 일자
    * `total_revenue` - 해당 일자의 매출 합계 (quantity * unit price 의 합, 음수가 될 수 없다)
"#]
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct SalesRecord {
    pub order_date: NaiveDate,
    pub total_revenue: Decimal,
}
