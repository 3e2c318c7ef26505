//! One-shot commands that read or write a whole day.

use std::fs;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::backend::BackendClient;
use crate::core::AppConfig;
use crate::schedule::{ScheduleEvent, codec};
use crate::views::ViewConfig;

/// One event per line with its style tag, numbered from 1.
pub fn render_events(events: &[ScheduleEvent]) -> String {
    if events.is_empty() {
        return "No events".to_string();
    }
    events
        .iter()
        .enumerate()
        .map(|(i, e)| format!("{:>2}. {} [{}]", i + 1, e.title, e.display_class.class_name()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn read_day(config: &AppConfig, path: &str, date: NaiveDate) -> Result<Vec<ScheduleEvent>> {
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    Ok(codec::decode(&text, date, &config.classifier()))
}

pub async fn show(config: &AppConfig, date: NaiveDate) -> Result<()> {
    let backend = BackendClient::new(&config.api_base_url);
    let view = ViewConfig::for_mode(config.view);
    let events = view.source(&backend).load(date, &config.classifier()).await?;

    println!("{} ({})", date.format("%A %B %-d, %Y"), view.label);
    println!("{}", render_events(&events));
    Ok(())
}

pub fn decode(config: &AppConfig, path: &str, date: NaiveDate) -> Result<()> {
    let events = read_day(config, path, date)?;
    println!("{}", render_events(&events));
    Ok(())
}

pub fn normalize(config: &AppConfig, path: &str) -> Result<()> {
    let events = read_day(config, path, config.default_date())?;
    println!("{}", codec::encode(&events));
    Ok(())
}

pub async fn push(config: &AppConfig, path: &str, date: NaiveDate) -> Result<()> {
    let events = read_day(config, path, date)?;
    let backend = BackendClient::new(&config.api_base_url);
    let view = ViewConfig::for_mode(config.view);
    view.source(&backend).store(&events).await?;
    println!("Saved {} events to {}", events.len(), view.label);
    Ok(())
}
