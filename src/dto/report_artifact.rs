use crate::common::*;

use crate::model::sales::sales_record::*;

#[doc = r#"
    한 번의 실행이 만들어내는 리포트 산출물.

    # Fields
    * `output_path` - 렌더링된 차트 이미지 경로 (실행 타임스탬프 포함)
    * `source_records` - 차트의 원본이 된 매출 레코드 (날짜 오름차순)
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct ReportArtifact {
    pub output_path: PathBuf,
    pub source_records: Vec<SalesRecord>,
}
