use std::time::{Duration, Instant};

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};
use iced::widget::{button, column, mouse_area, row, stack, text};
use iced::{Font, Length};
use iced_font_awesome::fa_icon_solid;

use crate::calendar::{binning, Event};
use crate::config;
use crate::logger::LogExt as _;
use crate::style::store::{self, StyleStore};
use crate::style::{EventShape, StyleId};

pub mod adapter;

mod bento;
mod month;
mod picker;
mod subway;
mod timeline;
mod week;

/// Dispatch shell: owns the style preference, resolves the active skin and
/// feeds it bins. Skins are pure consumers; every user interaction comes
/// back through [`Message`] and is forwarded to the host as [`Interaction`].
pub struct Calendar {
  state: State,
  store: Option<StyleStore>,
  changes: Option<crossbeam_channel::Receiver<StyleId>>,
  dates: Dates,
  events: Vec<Event>,
  config: config::Calendar,
  picker_open: bool,
  confirmation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
  Uninitialized,
  Ready(StyleId),
}

pub struct Dates {
  pub now: NaiveDateTime,
  pub selected: NaiveDate,
}

impl Dates {
  pub fn is_today(&self, date: NaiveDate) -> bool {
    date == self.now.date()
  }

  pub fn is_selected(&self, date: NaiveDate) -> bool {
    date == self.selected
  }
}

#[derive(Debug)]
pub enum Message {
  StoreLoaded(Box<Option<StyleStore>>),
  SelectDate(NaiveDate),
  ShiftMonth(i8),
  PressEvent(String),
  OpenPicker,
  PickStyle(StyleId),
  CancelPicker,
  Reconcile(Instant),
  NextDay(Instant),
  Persisted,
}

impl Clone for Message {
  fn clone(&self) -> Self {
    match self {
      Self::StoreLoaded(_) => panic!("StoreLoaded should not be cloned"),
      Self::SelectDate(date) => Self::SelectDate(*date),
      Self::ShiftMonth(months) => Self::ShiftMonth(*months),
      Self::PressEvent(id) => Self::PressEvent(id.clone()),
      Self::OpenPicker => Self::OpenPicker,
      Self::PickStyle(id) => Self::PickStyle(*id),
      Self::CancelPicker => Self::CancelPicker,
      Self::Reconcile(instant) => Self::Reconcile(*instant),
      Self::NextDay(instant) => Self::NextDay(*instant),
      Self::Persisted => Self::Persisted,
    }
  }
}

/// User interactions forwarded unchanged to the host application.
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
  DatePressed(NaiveDate),
  EventPressed(Event),
  MonthChanged(NaiveDate),
}

impl Calendar {
  pub fn new(config: config::Calendar, events: Vec<Event>) -> (Self, iced::Task<Message>) {
    let now = chrono::Local::now().naive_local();
    let path = config
      .style_file
      .clone()
      .unwrap_or_else(StyleStore::default_path);

    let calendar = Self {
      state: State::Uninitialized,
      store: None,
      changes: None,
      dates: Dates {
        now,
        selected: config.start_date.unwrap_or_else(|| now.date()),
      },
      events,
      config,
      picker_open: false,
      confirmation: None,
    };

    let task = iced::Task::perform(
      async move { Box::new(Some(StyleStore::open(path))) },
      Message::StoreLoaded,
    );

    (calendar, task)
  }

  pub const fn state(&self) -> State {
    self.state
  }

  pub fn subscription(&self) -> iced::Subscription<Message> {
    iced::Subscription::batch([
      iced::time::every(Duration::from_secs(self.config.reconcile_secs))
        .map(Message::Reconcile),
      iced::time::every(until_next_day(self.dates.now)).map(Message::NextDay),
    ])
  }

  pub fn update(&mut self, message: Message) -> (iced::Task<Message>, Option<Interaction>) {
    match message {
      Message::StoreLoaded(store) => {
        if let Some(mut store) = *store {
          self.changes = Some(store.subscribe());
          self.state = State::Ready(store.current());
          self.store = Some(store);
        }
      }
      Message::SelectDate(date) => {
        self.confirmation = None;
        self.dates.selected = date;

        return (iced::Task::none(), Some(Interaction::DatePressed(date)));
      }
      Message::ShiftMonth(months) => {
        self.dates.selected = shift_month(self.dates.selected, months);

        return (
          iced::Task::none(),
          Some(Interaction::MonthChanged(binning::start_of_month(
            self.dates.selected,
          ))),
        );
      }
      Message::PressEvent(id) => {
        let event = self
          .events
          .iter()
          .find(|event| event.id == id)
          .log_warn("Pressed event is gone from the feed");

        if let Ok(event) = event {
          return (
            iced::Task::none(),
            Some(Interaction::EventPressed(event.clone())),
          );
        }
      }
      Message::OpenPicker => {
        self.picker_open = true;
      }
      Message::CancelPicker => {
        self.picker_open = false;
      }
      Message::PickStyle(id) => {
        self.picker_open = false;

        if let Some(store) = &mut self.store {
          if store.set_style(id) {
            self.state = State::Ready(id);
            self.confirmation = Some(format!("Style set to {}", id.label()));

            let path = store.path().to_path_buf();

            return (
              iced::Task::perform(store::persist(path, id), |()| Message::Persisted),
              None,
            );
          }
        }
      }
      Message::Persisted => {
        log::debug!("Style preference persisted");
      }
      Message::Reconcile(_) => {
        self.confirmation = None;

        if let Some(store) = &mut self.store {
          if let Some(id) = store.reconcile() {
            self.state = State::Ready(id);
          }
        }

        // Drain the in-process channel too; other parts of the app
        // may hold a handle to the store in the future.
        if let Some(changes) = &self.changes {
          for id in changes.try_iter() {
            self.state = State::Ready(id);
          }
        }
      }
      Message::NextDay(_) => {
        let now = chrono::Local::now().naive_local();

        if !binning::is_same_calendar_day(self.dates.now, now) {
          log::info!("Day rolled over to {}", now.date());
        }

        self.dates.now = now;
      }
    }

    (iced::Task::none(), None)
  }

  pub fn view(&self) -> iced::Element<'_, Message> {
    let style = match self.state {
      State::Uninitialized => return column![].into(),
      State::Ready(style) => style,
    };

    let surface = column![
      self.view_controls(),
      mouse_area(self.view_skin(style)).on_right_press(Message::OpenPicker),
    ]
    .spacing(16);

    let surface: iced::Element<Message> = match &self.confirmation {
      Some(line) => surface
        .push(text(line.clone()).size(14).center().width(Length::Fill))
        .into(),
      None => surface.into(),
    };

    if self.picker_open {
      stack![surface, picker::view(style)].into()
    } else {
      surface
    }
  }

  /// Adapts the shared bins into whichever shape the skin declares, then
  /// delegates. This match is the single dispatch point; `shape()` is
  /// asserted next to each arm so a new skin cannot silently consume the
  /// wrong convention.
  fn view_skin(&self, style: StyleId) -> iced::Element<'static, Message> {
    let first_weekday = self.config.first_weekday;

    match style {
      StyleId::GridMonth => {
        let grid = binning::build_month_grid(self.dates.selected, first_weekday, &self.events);

        month::view(&grid, &self.dates)
      }
      StyleId::WeeklyGrid => {
        let bins = self.week_bins();

        week::view(&bins, &self.dates)
      }
      StyleId::Timeline => {
        let mut bins =
          binning::bin_events_by_day(&self.events, [self.dates.selected]);
        let bin = binning::DayBin {
          date: self.dates.selected,
          events: bins.remove(&self.dates.selected).unwrap_or_default(),
        };

        timeline::view(&bin, &self.dates)
      }
      StyleId::Bento => {
        debug_assert_eq!(style.shape(), EventShape::LegacyStamps);

        let grid = binning::build_month_grid(self.dates.selected, first_weekday, &self.events);
        let bins: Vec<_> = grid
          .iter()
          .map(|cell| match cell {
            binning::GridCell::Day(bin) => adapter::StampBin::from_bin(bin),
            binning::GridCell::Pad(date) => adapter::StampBin::from_bin(
              &binning::DayBin {
                date: *date,
                events: Vec::new(),
              },
            ),
          })
          .collect();

        bento::view(&bins, &self.dates)
      }
      StyleId::Subway => {
        debug_assert_eq!(style.shape(), EventShape::LegacySplitDates);

        let bins: Vec<_> = self
          .week_bins()
          .iter()
          .map(adapter::SplitDateBin::from_bin)
          .collect();

        subway::view(&bins, &self.dates)
      }
    }
  }

  fn view_controls(&self) -> iced::Element<'static, Message> {
    row![
      button(fa_icon_solid("caret-left").size(32.0))
        .style(style_control_button)
        .on_press(Message::ShiftMonth(-1)),
      text(
        self.dates
          .selected
          .format_localized("%B %Y", chrono::Locale::en_US)
          .to_string()
      )
      .center()
      .width(Length::Fill)
      .size(24.0)
      .font(Font {
        weight: iced::font::Weight::Bold,
        ..Font::default()
      })
      .wrapping(text::Wrapping::None),
      button(fa_icon_solid("caret-right").size(32.0))
        .style(style_control_button)
        .on_press(Message::ShiftMonth(1)),
    ]
    .height(44)
    .align_y(iced::Alignment::Center)
    .into()
  }

  fn week_bins(&self) -> Vec<binning::DayBin<'_>> {
    let days = binning::week_of(self.dates.selected, self.config.first_weekday);
    let mut bins = binning::bin_events_by_day(&self.events, days);

    days.into_iter()
      .map(|date| binning::DayBin {
        date,
        events: bins.remove(&date).unwrap_or_default(),
      })
      .collect()
  }
}

fn shift_month(date: NaiveDate, months: i8) -> NaiveDate {
  if months.is_negative() {
    date - Months::new(months.unsigned_abs().into())
  } else {
    date + Months::new(months.unsigned_abs().into())
  }
}

fn until_next_day(date: NaiveDateTime) -> Duration {
  let next_day = date
    .date()
    .succ_opt()
    .and_then(|d| d.and_hms_opt(0, 0, 0))
    .unwrap();
  let secs = (next_day - date).num_seconds();

  Duration::from_secs(secs as u64 + 30)
}

fn style_control_button(theme: &iced::Theme, _: button::Status) -> button::Style {
  let palette = theme.extended_palette();

  button::Style {
    text_color: palette.primary.strong.text,
    background: Some(palette.primary.strong.color.into()),
    border: iced::Border::default().rounded(3),
    ..Default::default()
  }
}

pub(crate) fn color_hex(hex: &str) -> iced::Color {
  let digits = hex.strip_prefix('#').unwrap_or(hex);

  if digits.len() != 6 {
    return fallback_color();
  }

  // Feed colors are free-form; a non-ascii byte must not split a char.
  let channel = |range: std::ops::Range<usize>| {
    digits
      .get(range)
      .and_then(|pair| u8::from_str_radix(pair, 16).ok())
  };

  match (channel(0..2), channel(2..4), channel(4..6)) {
    (Some(r), Some(g), Some(b)) => iced::Color::from_rgb8(r, g, b),
    _ => fallback_color(),
  }
}

fn fallback_color() -> iced::Color {
  color_hex(crate::calendar::EVENT_DEFAULT_COLOR)
}
