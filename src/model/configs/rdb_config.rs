use crate::common::*;

#[doc = "PostgreSQL 접속 정보"]
#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct RdbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}
