use std::collections::BTreeMap;

use chrono::{Datelike as _, Days, Months, NaiveDate, NaiveDateTime, Weekday};

use super::Event;

pub const GRID_ROWS: usize = 6;
pub const GRID_COLS: usize = 7;
pub const GRID_LENGTH: usize = GRID_ROWS * GRID_COLS;

/// One calendar day plus the events starting on it, in ascending start order.
#[derive(Debug, PartialEq)]
pub struct DayBin<'a> {
  pub date: NaiveDate,
  pub events: Vec<&'a Event>,
}

/// Cell of a 6x7 month grid. Padding cells belong to the adjacent month and
/// never carry events.
#[derive(Debug, PartialEq)]
pub enum GridCell<'a> {
  Day(DayBin<'a>),
  Pad(NaiveDate),
}

impl GridCell<'_> {
  pub const fn date(&self) -> NaiveDate {
    match self {
      Self::Day(bin) => bin.date,
      Self::Pad(date) => *date,
    }
  }

  pub const fn is_pad(&self) -> bool {
    matches!(self, Self::Pad(_))
  }
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
  date.with_day(1).unwrap()
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
  (start_of_month(date) + Months::new(1))
    .pred_opt()
    .unwrap()
}

/// Every calendar day from `start` to `end` inclusive. Steps by calendar
/// date, never by elapsed time, so DST transitions cannot skip a day.
pub fn enumerate_days(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
  start.iter_days().take_while(move |date| *date <= end)
}

/// Compares year/month/day only, ignoring time of day.
pub fn is_same_calendar_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
  a.date() == b.date()
}

/// Bins `events` onto `days` by their **start** day. An event spanning
/// midnight lands only on the day it starts. Within a day events are sorted
/// ascending by start; ties keep input order. Every requested day gets an
/// entry, empty days included.
pub fn bin_events_by_day<'a>(
  events: &'a [Event],
  days: impl IntoIterator<Item = NaiveDate>,
) -> BTreeMap<NaiveDate, Vec<&'a Event>> {
  let mut bins: BTreeMap<NaiveDate, Vec<&Event>> =
    days.into_iter().map(|date| (date, Vec::new())).collect();

  for event in events {
    if let Some(bin) = bins.get_mut(&event.start_date()) {
      bin.push(event);
    }
  }

  for bin in bins.values_mut() {
    bin.sort_by_key(|event| event.start);
  }

  bins
}

/// The week containing `date`, starting at `first_weekday`.
pub fn week_of(date: NaiveDate, first_weekday: Weekday) -> [NaiveDate; 7] {
  let first = walk_back_to(date, first_weekday);

  core::array::from_fn(|idx| first + Days::new(idx as u64))
}

/// A full 6x7 grid for the month containing `anchor`: always exactly 42
/// cells, the month's days in ascending order, adjacent-month days as
/// padding. Every month skin renders a rectangular layout off this, no
/// matter which weekday the month starts on.
pub fn build_month_grid<'a>(
  anchor: NaiveDate,
  first_weekday: Weekday,
  events: &'a [Event],
) -> Vec<GridCell<'a>> {
  let first = start_of_month(anchor);
  let grid_start = walk_back_to(first, first_weekday);
  let mut bins = bin_events_by_day(events, enumerate_days(first, end_of_month(anchor)));

  (0..GRID_LENGTH)
    .map(|idx| {
      let date = grid_start + Days::new(idx as u64);

      match bins.remove(&date) {
        Some(events) => GridCell::Day(DayBin { date, events }),
        None => GridCell::Pad(date),
      }
    })
    .collect()
}

fn walk_back_to(date: NaiveDate, weekday: Weekday) -> NaiveDate {
  let mut first = date;

  while first.weekday() != weekday {
    first = first.pred_opt().unwrap_or(first);
  }

  first
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::calendar::RawEvent;

  fn event(id: &str, start: &str) -> Event {
    Event::normalize(RawEvent {
      id: Some(id.into()),
      title: Some(id.to_uppercase()),
      start: Some(start.into()),
      ..RawEvent::default()
    })
    .unwrap()
  }

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn month_bounds() {
    assert_eq!(start_of_month(date(2024, 3, 15)), date(2024, 3, 1));
    assert_eq!(end_of_month(date(2024, 3, 15)), date(2024, 3, 31));
    // Leap year February.
    assert_eq!(end_of_month(date(2024, 2, 1)), date(2024, 2, 29));
    assert_eq!(end_of_month(date(2023, 2, 1)), date(2023, 2, 28));
    // Year rollover.
    assert_eq!(end_of_month(date(2024, 12, 31)), date(2024, 12, 31));
    assert_eq!(start_of_month(date(2025, 1, 1)), date(2025, 1, 1));
  }

  #[test]
  fn enumerate_days_is_inclusive_and_rolls_over_years() {
    let days: Vec<_> = enumerate_days(date(2024, 12, 30), date(2025, 1, 2)).collect();

    assert_eq!(
      days,
      vec![
        date(2024, 12, 30),
        date(2024, 12, 31),
        date(2025, 1, 1),
        date(2025, 1, 2),
      ]
    );
  }

  #[test]
  fn enumerate_days_is_restartable() {
    let days = || enumerate_days(date(2024, 3, 1), date(2024, 3, 31));

    assert_eq!(days().count(), 31);
    assert_eq!(days().count(), 31);
  }

  #[test]
  fn same_calendar_day_ignores_time() {
    let late = date(2024, 1, 1).and_hms_opt(23, 59, 0).unwrap();
    let early = date(2024, 1, 1).and_hms_opt(0, 1, 0).unwrap();
    let next = date(2024, 1, 2).and_hms_opt(0, 1, 0).unwrap();

    assert!(is_same_calendar_day(late, late));
    assert!(is_same_calendar_day(late, early));
    assert!(is_same_calendar_day(early, late));
    assert!(!is_same_calendar_day(late, next));
  }

  #[test]
  fn bins_sort_by_start_time() {
    let events = vec![event("a", "2024-03-10T09:00"), event("b", "2024-03-10T08:00")];
    let bins = bin_events_by_day(&events, [date(2024, 3, 10)]);
    let ids: Vec<_> = bins[&date(2024, 3, 10)].iter().map(|e| &*e.id).collect();

    assert_eq!(ids, ["b", "a"]);
  }

  #[test]
  fn bins_keep_input_order_on_ties() {
    let events = vec![
      event("x", "2024-03-10T08:00"),
      event("y", "2024-03-10T08:00"),
      event("z", "2024-03-10T08:00"),
    ];
    let bins = bin_events_by_day(&events, [date(2024, 3, 10)]);
    let ids: Vec<_> = bins[&date(2024, 3, 10)].iter().map(|e| &*e.id).collect();

    assert_eq!(ids, ["x", "y", "z"]);
  }

  #[test]
  fn empty_days_are_present_not_absent() {
    let bins = bin_events_by_day(&[], enumerate_days(date(2024, 3, 1), date(2024, 3, 3)));

    assert_eq!(bins.len(), 3);
    assert!(bins.values().all(Vec::is_empty));
  }

  #[test]
  fn midnight_spanner_bins_only_to_start_day() {
    let overnight = Event::normalize(RawEvent {
      id: Some("n".into()),
      title: Some("Night shift".into()),
      start: Some("2024-03-10T22:00".into()),
      end: Some("2024-03-11T06:00".into()),
      ..RawEvent::default()
    })
    .unwrap();
    let events = vec![overnight];
    let bins = bin_events_by_day(&events, [date(2024, 3, 10), date(2024, 3, 11)]);

    assert_eq!(bins[&date(2024, 3, 10)].len(), 1);
    assert!(bins[&date(2024, 3, 11)].is_empty());
  }

  #[test]
  fn every_event_lands_in_exactly_one_bin() {
    let events = vec![
      event("a", "2024-03-01T10:00"),
      event("b", "2024-03-15T10:00"),
      event("c", "2024-03-31T10:00"),
    ];
    let bins = bin_events_by_day(&events, enumerate_days(date(2024, 3, 1), date(2024, 3, 31)));
    let total: usize = bins.values().map(Vec::len).sum();

    assert_eq!(total, 3);
  }

  #[test]
  fn month_grid_is_always_42_cells() {
    for (y, m) in [(2024, 2), (2023, 2), (2024, 12), (2025, 1), (2024, 6)] {
      let grid = build_month_grid(date(y, m, 1), Weekday::Mon, &[]);

      assert_eq!(grid.len(), GRID_LENGTH, "month {y}-{m}");
    }
  }

  #[test]
  fn month_grid_real_days_are_the_month_in_order() {
    let grid = build_month_grid(date(2024, 2, 14), Weekday::Mon, &[]);
    let days: Vec<_> = grid
      .iter()
      .filter(|cell| !cell.is_pad())
      .map(GridCell::date)
      .collect();

    assert_eq!(days.len(), 29);
    assert_eq!(days.first(), Some(&date(2024, 2, 1)));
    assert_eq!(days.last(), Some(&date(2024, 2, 29)));
    assert!(days.windows(2).all(|pair| pair[0] < pair[1]));
  }

  #[test]
  fn month_grid_pads_carry_no_events() {
    let events = vec![event("a", "2024-02-29T10:00"), event("b", "2024-03-01T10:00")];
    let grid = build_month_grid(date(2024, 3, 1), Weekday::Mon, &events);

    // 2024-02-29 is a pad cell of the March grid; its event is not shown.
    assert!(grid
      .iter()
      .any(|cell| cell.is_pad() && cell.date() == date(2024, 2, 29)));

    let binned: usize = grid
      .iter()
      .filter_map(|cell| match cell {
        GridCell::Day(bin) => Some(bin.events.len()),
        GridCell::Pad(_) => None,
      })
      .sum();

    assert_eq!(binned, 1);
  }

  #[test]
  fn month_grid_honors_first_weekday() {
    let grid = build_month_grid(date(2024, 3, 1), Weekday::Sun, &[]);

    assert_eq!(grid[0].date().weekday(), Weekday::Sun);
    assert_eq!(grid[GRID_LENGTH - 1].date().weekday(), Weekday::Sat);
  }

  #[test]
  fn week_of_contains_its_date() {
    let week = week_of(date(2024, 3, 13), Weekday::Mon);

    assert_eq!(week[0], date(2024, 3, 11));
    assert_eq!(week[6], date(2024, 3, 17));
    assert!(week.contains(&date(2024, 3, 13)));
    assert!(week.windows(2).all(|pair| pair[0].succ_opt() == Some(pair[1])));
  }
}
