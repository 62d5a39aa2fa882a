use crate::common::*;

use std::fmt::Display;

#[doc = ""]
pub fn convert_date_to_str<Tz, TzOut>(
    time: DateTime<Tz>,
    tz: TzOut, // 출력할 타임존 (Utc, Local 등)
) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
    TzOut: TimeZone,
    TzOut::Offset: Display,
{
    time.with_timezone(&tz)
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}

#[doc = "리포트 파일명에 들어가는 타임스탬프 문자열을 만들어주는 함수"]
pub fn format_artifact_timestamp(time: &NaiveDateTime) -> String {
    time.format("%Y%m%d_%H%M%S").to_string()
}

#[doc = ""]
pub fn convert_naivedate_to_str(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
