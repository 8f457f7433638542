use chrono::Datelike as _;
use iced::widget::{button, column, container, text, Column, Row};
use iced::{Font, Length};
use iced_font_awesome::fa_icon_solid;

use super::{color_hex, Dates, Message};
use crate::calendar::binning::{DayBin, GridCell, GRID_COLS};

/// The default skin: a rectangular 6x7 month grid with event dots.
pub fn view(grid: &[GridCell<'_>], dates: &Dates) -> iced::Element<'static, Message> {
  let header = Row::from_iter(
    grid.iter()
      .take(GRID_COLS)
      .map(|cell| view_weekday(cell.date())),
  );

  let weeks = grid.chunks(GRID_COLS).map(|week| {
    Row::from_iter(week.iter().map(|cell| view_cell(cell, dates)))
      .spacing(4)
      .into()
  });

  column![header].extend(weeks).spacing(4).into()
}

fn view_weekday(date: chrono::NaiveDate) -> iced::Element<'static, Message> {
  text(date.format("%a").to_string())
    .size(18.0)
    .font(Font {
      weight: iced::font::Weight::Semibold,
      ..Font::default()
    })
    .center()
    .width(Length::Fill)
    .into()
}

fn view_cell(cell: &GridCell<'_>, dates: &Dates) -> iced::Element<'static, Message> {
  let date = cell.date();

  let content = container(
    column![
      text(date.day()).style(match cell.is_pad() {
        false => style_text_in_month,
        true => style_text_off_month,
      }),
      view_dots(cell),
    ]
    .align_x(iced::Alignment::Center),
  )
  .align_x(iced::Alignment::Center)
  .align_y(iced::Alignment::Center);

  button(content)
    .width(Length::Fill)
    .height(48)
    .padding(4)
    .style(match (dates.is_today(date), dates.is_selected(date)) {
      (_, true) => style_selected,
      (true, _) => style_today,
      _ => style_normal,
    })
    .on_press(Message::SelectDate(date))
    .into()
}

fn view_dots(cell: &GridCell<'_>) -> iced::Element<'static, Message> {
  let bin: &DayBin = match cell {
    GridCell::Day(bin) if !bin.events.is_empty() => bin,
    _ => return Column::new().into(),
  };

  let dots = bin.events.iter().take(4).map(|event| {
    fa_icon_solid("circle")
      .color(color_hex(event.color()))
      .size(10.0)
      .into()
  });

  Row::from_iter(dots).spacing(3).into()
}

fn style_text_in_month(theme: &iced::Theme) -> text::Style {
  let palette = theme.extended_palette();

  text::Style {
    color: palette.secondary.base.text.into(),
  }
}

fn style_text_off_month(theme: &iced::Theme) -> text::Style {
  let palette = theme.extended_palette();

  text::Style {
    color: palette.secondary.strong.color.into(),
  }
}

pub(super) fn style_normal(theme: &iced::Theme, _: button::Status) -> button::Style {
  let palette = theme.extended_palette();

  button::Style {
    background: None,
    border: iced::Border {
      width: 1.0,
      color: palette.background.strong.color,
      ..iced::Border::default()
    },
    ..Default::default()
  }
}

pub(super) fn style_selected(theme: &iced::Theme, _: button::Status) -> button::Style {
  let palette = theme.extended_palette();

  button::Style {
    background: Some(palette.primary.strong.color.into()),
    border: iced::Border {
      width: 1.0,
      color: palette.background.strong.color,
      ..iced::Border::default()
    },
    ..Default::default()
  }
}

pub(super) fn style_today(theme: &iced::Theme, _: button::Status) -> button::Style {
  let palette = theme.extended_palette();

  button::Style {
    background: Some(palette.primary.weak.color.into()),
    border: iced::Border {
      width: 1.0,
      color: palette.background.strong.color,
      ..iced::Border::default()
    },
    ..Default::default()
  }
}
