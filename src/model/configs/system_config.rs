use crate::common::*;

#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct SystemConfig {
    pub output_dir: String,
    pub chart_width: u32,
    pub chart_height: u32,
}
