use crate::common::*;

use crate::errors::*;

use crate::traits::service_traits::chart_service::*;

use crate::model::sales::sales_record::*;

use crate::utils_modules::time_utils::*;

use plotters::prelude::*;
use plotters::style::{FontStyle, FontTransform};

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl {
    chart_width: u32,
    chart_height: u32,
}

impl ChartServiceImpl {
    #[doc = "Helper function to determine Y-axis range with padding"]
    fn calculate_y_range(&self, values: &[f64]) -> (f64, f64) {
        if values.is_empty() {
            return (0.0, 100.0);
        }

        let min_val: f64 = values.iter().copied().fold(f64::MAX, f64::min);
        let max_val: f64 = values.iter().copied().fold(f64::MIN, f64::max);

        let padding: f64 = ((max_val - min_val) * 0.1).max(1.0);

        let y_min: f64 = (min_val - padding).max(0.0);
        let y_max: f64 = max_val + padding;

        (y_min, y_max)
    }
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    #[doc = r#"
        일별 매출 레코드를 라인 차트로 렌더링해서 이미지 파일로 저장하는 함수.

        1. 입력을 날짜 오름차순으로 다시 정렬한다 (이미 정렬된 입력이면 그대로)
        2. 빈 입력도 실패시키지 않고 제목/축만 있는 빈 차트를 렌더링한다
        3. plotters 는 동기 코드이므로 spawn_blocking 안에서 그린다
        4. 데이터 포인트마다 마커를 찍고 라인으로 연결, 저채도 그리드, 굵은 제목,
           가독성을 위해 X축 날짜 라벨은 회전시킨다
        5. 파일은 렌더링이 성공적으로 끝난 시점에만 생성된다

        # Returns
        * `anyhow::Result<()>` - 렌더링/쓰기 실패 시 `PipelineError::Io` 로 분류된 오류
    "#]
    async fn generate_line_chart(
        &self,
        title: &str,
        sales_records: &[SalesRecord],
        output_path: &Path,
        x_desc: &str,
        y_desc: &str,
    ) -> anyhow::Result<()> {
        /* 날짜 오름차순 보장. 정렬된 입력에는 no-op 이다. */
        let mut records: Vec<SalesRecord> = sales_records.to_vec();
        records.sort_by_key(|record| record.order_date);

        let x_labels: Vec<String> = records
            .iter()
            .map(|record| convert_naivedate_to_str(record.order_date))
            .collect();

        let y_values: Vec<f64> = records
            .iter()
            .map(|record| record.total_revenue.to_f64().unwrap_or(0.0))
            .collect();

        let output_path_str: String = output_path.to_string_lossy().to_string();
        let title: String = title.to_string();
        let x_desc: String = x_desc.to_string();
        let y_desc: String = y_desc.to_string();

        let chart_width: u32 = self.chart_width;
        let chart_height: u32 = self.chart_height;

        /* Calculate y_range before moving into closure */
        let (y_min, y_max) = self.calculate_y_range(&y_values);

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                /* ---- 여기부터는 동기 코드 (plotters) ---- */
                let root =
                    BitMapBackend::new(&output_path_str, (chart_width, chart_height))
                        .into_drawing_area();
                root.fill(&WHITE)?;

                /* 빈 데이터일 때도 데카르트 좌표계가 성립해야 하므로 최소 폭을 강제 */
                let x_range_end: usize = x_labels.len().saturating_sub(1).max(1);

                let title_color: RGBColor = RGBColor(40, 40, 40);
                let line_color: RGBColor = RGBColor(31, 119, 180);
                let axis_color: RGBColor = RGBColor(120, 120, 120);
                let text_color: RGBColor = RGBColor(70, 70, 70);

                let mut chart = ChartBuilder::on(&root)
                    .caption(
                        &title,
                        ("sans-serif", 34)
                            .into_font()
                            .style(FontStyle::Bold)
                            .color(&title_color),
                    )
                    .margin(24)
                    .x_label_area_size(90)
                    .y_label_area_size(90)
                    .build_cartesian_2d(0..x_range_end, y_min..y_max)?;

                chart
                    .configure_mesh()
                    .x_desc(&x_desc)
                    .y_desc(&y_desc)
                    .x_labels(x_labels.len().min(12).max(2))
                    .y_labels(10)
                    .axis_style(ShapeStyle::from(&axis_color).stroke_width(1))
                    .light_line_style(&BLACK.mix(0.1))
                    .bold_line_style(&BLACK.mix(0.2))
                    .x_label_style(
                        ("sans-serif", 15)
                            .into_font()
                            .transform(FontTransform::Rotate90)
                            .color(&text_color),
                    )
                    .y_label_style(("sans-serif", 18).into_font().color(&text_color))
                    .x_label_formatter(&|x| x_labels.get(*x).cloned().unwrap_or_default())
                    .y_label_formatter(&|y| {
                        /* 천 단위 콤마 표기 */
                        let s: String = format!("{:.0}", y);
                        let mut result: String = String::new();
                        let mut count: i32 = 0;
                        for c in s.chars().rev() {
                            if count == 3 {
                                result.push(',');
                                count = 0;
                            }
                            result.push(c);
                            count += 1;
                        }
                        result.chars().rev().collect()
                    })
                    .draw()?;

                if !y_values.is_empty() {
                    chart.draw_series(LineSeries::new(
                        y_values.iter().enumerate().map(|(i, &y)| (i, y)),
                        ShapeStyle::from(&line_color).stroke_width(2),
                    ))?;

                    /* 데이터 포인트 마커 */
                    chart.draw_series(
                        y_values
                            .iter()
                            .enumerate()
                            .map(|(i, &y)| Circle::new((i, y), 4, line_color.filled())),
                    )?;
                }

                root.present()?;
                Ok(())
            });

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[ChartServiceImpl->generate_line_chart] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result.map_err(|e| {
            PipelineError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("[ChartServiceImpl->generate_line_chart] {:?}", e),
            ))
        })?;

        info!("Line chart generated successfully: {:?}", output_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record_of(day: u32, revenue: Decimal) -> SalesRecord {
        SalesRecord::new(NaiveDate::from_ymd_opt(2024, 12, day).unwrap(), revenue)
    }

    #[tokio::test]
    async fn empty_records_still_render_a_valid_image() {
        let temp_dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let output_path: PathBuf = temp_dir.path().join("empty_chart.png");

        let chart_service: ChartServiceImpl = ChartServiceImpl::new(640, 480);
        chart_service
            .generate_line_chart("Daily Sales Revenue", &[], &output_path, "Date", "Total Revenue")
            .await
            .unwrap();

        let rendered_len: u64 = std::fs::metadata(&output_path).unwrap().len();
        assert!(rendered_len > 0);
    }

    #[tokio::test]
    async fn unsorted_records_are_rendered_after_resort() {
        let temp_dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let output_path: PathBuf = temp_dir.path().join("unsorted_chart.png");

        let records: Vec<SalesRecord> = vec![
            record_of(3, dec!(40.00)),
            record_of(1, dec!(25.00)),
            record_of(2, dec!(31.50)),
        ];

        let chart_service: ChartServiceImpl = ChartServiceImpl::new(640, 480);
        chart_service
            .generate_line_chart("Daily Sales Revenue", &records, &output_path, "Date", "Total Revenue")
            .await
            .unwrap();

        assert!(output_path.exists());
    }

    #[tokio::test]
    async fn missing_parent_directory_is_an_io_error() {
        let temp_dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let output_path: PathBuf = temp_dir.path().join("no_such_dir").join("chart.png");

        let chart_service: ChartServiceImpl = ChartServiceImpl::new(640, 480);
        let err: anyhow::Error = chart_service
            .generate_line_chart("Daily Sales Revenue", &[], &output_path, "Date", "Total Revenue")
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::Io(_))
        ));
    }

    #[test]
    fn resorting_an_already_sorted_sequence_is_a_noop() {
        let sorted: Vec<SalesRecord> = vec![
            record_of(1, dec!(25.00)),
            record_of(2, dec!(31.50)),
            record_of(3, dec!(40.00)),
        ];

        let mut resorted: Vec<SalesRecord> = sorted.clone();
        resorted.sort_by_key(|record| record.order_date);

        assert_eq!(resorted, sorted);
    }

    #[test]
    fn y_range_defaults_when_empty_and_pads_otherwise() {
        let chart_service: ChartServiceImpl = ChartServiceImpl::new(640, 480);

        assert_eq!(chart_service.calculate_y_range(&[]), (0.0, 100.0));

        let (y_min, y_max) = chart_service.calculate_y_range(&[10.0, 20.0]);
        assert!(y_min >= 0.0);
        assert!(y_min < 10.0);
        assert!(y_max > 20.0);
    }
}
