use anyhow::Result;
use chrono::NaiveDate;

use crate::api;
use crate::core::AppConfig;

pub async fn run(host: String, port: String, config: AppConfig, date: NaiveDate) -> Result<()> {
    api::serve(host, port, config, date).await
}
