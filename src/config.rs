use std::path::PathBuf;

use chrono::{NaiveDate, Weekday};

#[derive(Debug, serde::Deserialize)]
pub struct Config {
  /// Event feed materialized by the data-access side of the house.
  pub events: PathBuf,
  #[serde(default)]
  pub calendar: Calendar,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Calendar {
  #[serde(default = "default_first_weekday")]
  pub first_weekday: Weekday,
  /// Date to open on instead of today.
  pub start_date: Option<NaiveDate>,
  /// Overrides the style file location (mostly for testing setups).
  pub style_file: Option<PathBuf>,
  #[serde(default = "default_reconcile_secs")]
  pub reconcile_secs: u64,
}

impl Default for Calendar {
  fn default() -> Self {
    Self {
      first_weekday: default_first_weekday(),
      start_date: None,
      style_file: None,
      reconcile_secs: default_reconcile_secs(),
    }
  }
}

pub fn init(path: PathBuf) -> Result<Config, Box<dyn std::error::Error>> {
  let string = std::fs::read_to_string(path)?;
  let config = toml::from_str(&string)?;

  Ok(config)
}

const fn default_first_weekday() -> Weekday {
  Weekday::Mon
}

const fn default_reconcile_secs() -> u64 {
  crate::style::store::RECONCILE_INTERVAL.as_secs()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn minimal_config_fills_defaults() {
    let config: Config = toml::from_str(r#"events = "/tmp/events.toml""#).unwrap();

    assert_eq!(config.calendar.first_weekday, Weekday::Mon);
    assert_eq!(config.calendar.reconcile_secs, 2);
    assert!(config.calendar.style_file.is_none());
    assert!(config.calendar.start_date.is_none());
  }

  #[test]
  fn start_date_is_configurable() {
    let config: Config = toml::from_str(
      r#"
      events = "/tmp/events.toml"

      [calendar]
      start_date = "2024-03-10"
      "#,
    )
    .unwrap();

    assert_eq!(
      config.calendar.start_date,
      NaiveDate::from_ymd_opt(2024, 3, 10)
    );
  }

  #[test]
  fn first_weekday_is_configurable() {
    let config: Config = toml::from_str(
      r#"
      events = "/tmp/events.toml"

      [calendar]
      first_weekday = "Sun"
      "#,
    )
    .unwrap();

    assert_eq!(config.calendar.first_weekday, Weekday::Sun);
  }
}
