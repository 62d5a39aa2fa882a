pub use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
pub use cron::Schedule;
pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, Naming, Record,
};
pub use once_cell::sync::Lazy as once_lazy;
pub use rust_decimal::{Decimal, prelude::ToPrimitive};
pub use sqlx::{
    Connection, FromRow,
    postgres::{PgConnectOptions, PgConnection},
};
