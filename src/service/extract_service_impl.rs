use crate::common::*;

use crate::errors::*;

use crate::traits::{repository_traits::sales_repository::*, service_traits::extract_service::*};

use crate::model::sales::sales_record::*;

use crate::dto::daily_sales_row::*;

#[derive(Debug, new)]
pub struct ExtractServiceImpl<R: SalesRepository> {
    sales_repository: R,
}

impl<R: SalesRepository> ExtractServiceImpl<R> {
    #[doc = r#"
        집계 원시 행을 매출 레코드로 변환하는 함수.

        1. 수량/단가 NULL 라인아이템이 하나라도 있으면 해당 실행을 무결성 오류로 중단한다
           (부분합을 조용히 계산하지 않는다)
        2. SUM 결과가 NULL 인 행도 같은 무결성 오류로 처리
        3. 변환 후 주문 일자 오름차순 정렬을 다시 보장

        # Arguments
        * `rows` - 집계 쿼리의 원시 행

        # Returns
        * `Vec<SalesRecord>` - 날짜 오름차순의 매출 레코드
        * `anyhow::Error` - 무결성 오류 시
    "#]
    fn build_sales_records(rows: Vec<DailySalesRow>) -> anyhow::Result<Vec<SalesRecord>> {
        let mut sales_records: Vec<SalesRecord> = Vec::with_capacity(rows.len());

        for row in rows {
            if row.missing_value_cnt > 0 {
                return Err(PipelineError::DataIntegrity {
                    order_date: row.order_date,
                    missing_cnt: row.missing_value_cnt,
                }
                .into());
            }

            let total_revenue: Decimal = row.total_revenue.ok_or(PipelineError::DataIntegrity {
                order_date: row.order_date,
                missing_cnt: row.missing_value_cnt,
            })?;

            sales_records.push(SalesRecord::new(row.order_date, total_revenue));
        }

        /* 쿼리가 ORDER BY 를 보장하지만, 출력 계약이므로 한 번 더 못박는다 */
        sales_records.sort_by_key(|record| record.order_date);

        Ok(sales_records)
    }
}

#[async_trait]
impl<R: SalesRepository + Sync + Send> ExtractService for ExtractServiceImpl<R> {
    #[doc = "일별 매출 레코드를 추출해주는 함수"]
    async fn extract_daily_sales(&self) -> anyhow::Result<Vec<SalesRecord>> {
        let rows: Vec<DailySalesRow> = self.sales_repository.fetch_daily_sales_rows().await?;

        let sales_records: Vec<SalesRecord> = Self::build_sales_records(rows)?;

        Ok(sales_records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date_of(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn one_record_per_date_with_exact_decimal_total() {
        /* 같은 일자의 라인아이템 {2개 x 10.00} + {1개 x 5.00} 은 SQL 단계에서 25.00 으로 합쳐져 온다 */
        let rows: Vec<DailySalesRow> =
            vec![DailySalesRow::new(date_of(2024, 12, 1), Some(dec!(25.00)), 0)];

        let records: Vec<SalesRecord> =
            ExtractServiceImpl::<StubSalesRepository>::build_sales_records(rows).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].order_date, date_of(2024, 12, 1));
        assert_eq!(records[0].total_revenue, dec!(25.00));
    }

    #[test]
    fn records_come_out_sorted_ascending_by_date() {
        let rows: Vec<DailySalesRow> = vec![
            DailySalesRow::new(date_of(2024, 12, 3), Some(dec!(1.00)), 0),
            DailySalesRow::new(date_of(2024, 12, 1), Some(dec!(2.00)), 0),
            DailySalesRow::new(date_of(2024, 12, 2), Some(dec!(3.00)), 0),
        ];

        let records: Vec<SalesRecord> =
            ExtractServiceImpl::<StubSalesRepository>::build_sales_records(rows).unwrap();

        let dates: Vec<NaiveDate> = records.iter().map(|r| r.order_date).collect();
        assert_eq!(
            dates,
            vec![
                date_of(2024, 12, 1),
                date_of(2024, 12, 2),
                date_of(2024, 12, 3)
            ]
        );
    }

    #[test]
    fn null_line_item_fails_the_run_with_data_integrity() {
        let rows: Vec<DailySalesRow> = vec![
            DailySalesRow::new(date_of(2024, 12, 1), Some(dec!(10.00)), 0),
            DailySalesRow::new(date_of(2024, 12, 2), Some(dec!(7.50)), 1),
        ];

        let err: anyhow::Error =
            ExtractServiceImpl::<StubSalesRepository>::build_sales_records(rows).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::DataIntegrity { missing_cnt: 1, .. })
        ));
    }

    #[test]
    fn null_revenue_sum_fails_the_run_with_data_integrity() {
        let rows: Vec<DailySalesRow> = vec![DailySalesRow::new(date_of(2024, 12, 1), None, 0)];

        let err: anyhow::Error =
            ExtractServiceImpl::<StubSalesRepository>::build_sales_records(rows).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::DataIntegrity { .. })
        ));
    }

    #[derive(Debug)]
    struct StubSalesRepository {
        rows: Vec<DailySalesRow>,
    }

    #[async_trait]
    impl SalesRepository for StubSalesRepository {
        async fn fetch_daily_sales_rows(&self) -> anyhow::Result<Vec<DailySalesRow>> {
            Ok(self.rows.clone())
        }
    }

    #[tokio::test]
    async fn extract_passes_repository_rows_through() {
        let stub: StubSalesRepository = StubSalesRepository {
            rows: vec![
                DailySalesRow::new(date_of(2024, 12, 1), Some(dec!(25.00)), 0),
                DailySalesRow::new(date_of(2024, 12, 2), Some(dec!(40.00)), 0),
            ],
        };

        let extract_service: ExtractServiceImpl<StubSalesRepository> =
            ExtractServiceImpl::new(stub);

        let records: Vec<SalesRecord> = extract_service.extract_daily_sales().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].total_revenue, dec!(40.00));
    }
}
