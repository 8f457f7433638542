use chrono::{DateTime, NaiveDateTime};
use uuid::Uuid;

pub const EVENT_DEFAULT_COLOR: &str = "#deb887";

/// Canonical calendar event. Treated as read-only everywhere past
/// normalization; binning never mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
  pub id: String,
  pub title: String,
  pub start: NaiveDateTime,
  pub end: Option<NaiveDateTime>,
  pub location: Option<String>,
  pub description: Option<String>,
  pub color: Option<String>,
  pub category: Option<String>,
  pub parent_id: Option<String>,
  pub is_instance: bool,
}

/// Raw feed shape before validation. Timestamps arrive as strings.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct RawEvent {
  pub id: Option<String>,
  pub title: Option<String>,
  pub start: Option<String>,
  pub end: Option<String>,
  pub location: Option<String>,
  pub description: Option<String>,
  pub color: Option<String>,
  pub category: Option<String>,
  pub parent_id: Option<String>,
  #[serde(default)]
  pub is_instance: bool,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum InvalidEvent {
  MissingStart,
  UnparsableStart(String),
  UnparsableEnd(String),
  EndBeforeStart,
}

impl core::fmt::Display for InvalidEvent {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::MissingStart => f.write_str("event has no start time"),
      Self::UnparsableStart(raw) => write!(f, "unparsable start time {raw:?}"),
      Self::UnparsableEnd(raw) => write!(f, "unparsable end time {raw:?}"),
      Self::EndBeforeStart => f.write_str("event ends before it starts"),
    }
  }
}

impl std::error::Error for InvalidEvent {}

impl Event {
  /// Validates a raw feed entry into a canonical event.
  ///
  /// A missing id is derived from title + start so instances stay stable
  /// across reloads. An offset-carrying timestamp keeps its own wall-clock
  /// time, which is what the author of the event meant by it.
  pub fn normalize(raw: RawEvent) -> Result<Self, InvalidEvent> {
    let start_str = raw.start.as_deref().ok_or(InvalidEvent::MissingStart)?;
    let start = parse_date_time(start_str)
      .ok_or_else(|| InvalidEvent::UnparsableStart(start_str.to_string()))?;

    let end = match raw.end.as_deref() {
      None => None,
      Some(end_str) => Some(
        parse_date_time(end_str)
          .ok_or_else(|| InvalidEvent::UnparsableEnd(end_str.to_string()))?,
      ),
    };

    if end.is_some_and(|end| end < start) {
      return Err(InvalidEvent::EndBeforeStart);
    }

    let title = raw.title.unwrap_or_default();
    let id = raw
      .id
      .filter(|id| !id.is_empty())
      .unwrap_or_else(|| derived_id(&title, start));

    Ok(Self {
      id,
      title,
      start,
      end,
      location: raw.location,
      description: raw.description,
      color: raw.color,
      category: raw.category,
      parent_id: raw.parent_id,
      is_instance: raw.is_instance,
    })
  }

  pub fn color(&self) -> &str {
    self.color.as_deref().unwrap_or(EVENT_DEFAULT_COLOR)
  }

  pub fn description(&self) -> &str {
    self.description.as_deref().unwrap_or_default()
  }

  pub const fn start_date(&self) -> chrono::NaiveDate {
    self.start.date()
  }
}

fn derived_id(title: &str, start: NaiveDateTime) -> String {
  let seed = format!("{title}/{start}");

  Uuid::new_v5(&Uuid::NAMESPACE_OID, seed.as_bytes()).to_string()
}

fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
  if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
    return Some(date_time.naive_local());
  }

  NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
    .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
    .ok()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn raw(start: Option<&str>, end: Option<&str>) -> RawEvent {
    RawEvent {
      id: Some("e1".into()),
      title: Some("Dentist".into()),
      start: start.map(Into::into),
      end: end.map(Into::into),
      ..RawEvent::default()
    }
  }

  #[test]
  fn normalize_requires_start() {
    assert_eq!(
      Event::normalize(raw(None, None)),
      Err(InvalidEvent::MissingStart)
    );
  }

  #[test]
  fn normalize_rejects_garbage_start() {
    assert_eq!(
      Event::normalize(raw(Some("next tuesday"), None)),
      Err(InvalidEvent::UnparsableStart("next tuesday".into()))
    );
  }

  #[test]
  fn normalize_rejects_end_before_start() {
    assert_eq!(
      Event::normalize(raw(Some("2024-03-10T09:00"), Some("2024-03-10T08:00"))),
      Err(InvalidEvent::EndBeforeStart)
    );
  }

  #[test]
  fn normalize_accepts_naive_and_rfc3339() {
    let naive = Event::normalize(raw(Some("2024-03-10T09:00"), None)).unwrap();
    let offset = Event::normalize(raw(Some("2024-03-10T09:00:00+02:00"), None)).unwrap();

    // Offset input keeps its own wall clock.
    assert_eq!(naive.start, offset.start);
  }

  #[test]
  fn normalize_derives_stable_id_when_missing() {
    let mut event = raw(Some("2024-03-10T09:00"), None);
    event.id = None;

    let a = Event::normalize(event.clone()).unwrap();
    let b = Event::normalize(event).unwrap();

    assert!(!a.id.is_empty());
    assert_eq!(a.id, b.id);
  }
}
