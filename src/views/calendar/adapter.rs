//! Legacy data shapes for the decorative skins.
//!
//! Two older skin generations expect event data in conventions of their own:
//! unix-second fields (bento) and pre-split date/time parts (subway). The
//! conversion from the shared bins happens here, once, at the dispatch
//! boundary. Skins never re-derive bins themselves.

use chrono::{Datelike as _, Timelike as _};

use crate::calendar::binning::DayBin;

/// Unix-timestamp convention.
#[derive(Debug, Clone, PartialEq)]
pub struct StampEvent {
  pub id: String,
  pub title: String,
  pub start_stamp: i64,
  pub end_stamp: Option<i64>,
  pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StampBin {
  pub date_stamp: i64,
  pub events: Vec<StampEvent>,
}

impl StampBin {
  pub fn from_bin(bin: &DayBin<'_>) -> Self {
    Self {
      date_stamp: bin.date.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp(),
      events: bin
        .events
        .iter()
        .map(|event| StampEvent {
          id: event.id.clone(),
          title: event.title.clone(),
          start_stamp: event.start.and_utc().timestamp(),
          end_stamp: event.end.map(|end| end.and_utc().timestamp()),
          color: event.color().to_string(),
        })
        .collect(),
    }
  }
}

/// Pre-split date/time convention.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitDateEvent {
  pub id: String,
  pub title: String,
  pub hour: u32,
  pub minute: u32,
  pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SplitDateBin {
  pub year: i32,
  pub month: u32,
  pub day: u32,
  pub weekday: String,
  pub events: Vec<SplitDateEvent>,
}

impl SplitDateBin {
  pub fn from_bin(bin: &DayBin<'_>) -> Self {
    Self {
      year: bin.date.year(),
      month: bin.date.month(),
      day: bin.date.day(),
      weekday: bin.date.format("%a").to_string(),
      events: bin
        .events
        .iter()
        .map(|event| SplitDateEvent {
          id: event.id.clone(),
          title: event.title.clone(),
          hour: event.start.hour(),
          minute: event.start.minute(),
          color: event.color().to_string(),
        })
        .collect(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::calendar::{Event, RawEvent};
  use chrono::NaiveDate;

  fn bin() -> (Vec<Event>, NaiveDate) {
    let event = Event::normalize(RawEvent {
      id: Some("a".into()),
      title: Some("Piano".into()),
      start: Some("2024-03-10T09:30".into()),
      end: Some("2024-03-10T10:00".into()),
      ..RawEvent::default()
    })
    .unwrap();

    (vec![event], NaiveDate::from_ymd_opt(2024, 3, 10).unwrap())
  }

  #[test]
  fn stamp_shape_round_trips_to_the_same_day() {
    let (events, date) = bin();
    let day = DayBin { date, events: events.iter().collect() };
    let stamps = StampBin::from_bin(&day);

    let back = chrono::DateTime::from_timestamp(stamps.date_stamp, 0)
      .unwrap()
      .naive_utc()
      .date();

    assert_eq!(back, date);
    assert_eq!(stamps.events.len(), 1);
    assert_eq!(
      chrono::DateTime::from_timestamp(stamps.events[0].start_stamp, 0)
        .unwrap()
        .naive_utc(),
      events[0].start
    );
  }

  #[test]
  fn split_shape_carries_the_clock_parts() {
    let (events, date) = bin();
    let day = DayBin { date, events: events.iter().collect() };
    let split = SplitDateBin::from_bin(&day);

    assert_eq!((split.year, split.month, split.day), (2024, 3, 10));
    assert_eq!(split.weekday, "Sun");
    assert_eq!((split.events[0].hour, split.events[0].minute), (9, 30));
  }
}
