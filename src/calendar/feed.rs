use std::path::Path;

use super::{Event, RawEvent};

#[derive(Debug, Default, serde::Deserialize)]
struct Feed {
  #[serde(default)]
  events: Vec<RawEvent>,
}

/// Loads the event feed the host application materialized for us.
///
/// Malformed entries are dropped with a warning; rendering never fails over
/// a bad event.
pub fn load(path: &Path) -> anyhow::Result<Vec<Event>> {
  let string = std::fs::read_to_string(path)?;
  let feed: Feed = toml::from_str(&string)?;

  let events = feed
    .events
    .into_iter()
    .filter_map(|raw| match Event::normalize(raw) {
      Ok(event) => Some(event),
      Err(error) => {
        log::warn!("[{}] Dropping event: {error}", path.display());
        None
      }
    })
    .collect();

  Ok(events)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn write_feed(content: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("famcal-feed-{}.toml", uuid::Uuid::new_v4()));
    std::fs::write(&path, content).unwrap();

    path
  }

  #[test]
  fn load_drops_invalid_events_but_keeps_the_rest() {
    let path = write_feed(
      r#"
      [[events]]
      id = "ok"
      title = "Swim class"
      start = "2024-03-10T08:00"

      [[events]]
      id = "bad"
      title = "No start"
      "#,
    );

    let events = load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, "ok");
  }

  #[test]
  fn load_accepts_an_empty_feed() {
    let path = write_feed("");
    let events = load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert!(events.is_empty());
  }
}
