use iced::widget::{button, column, text, Column, Row};
use iced::Length;

use super::adapter::StampBin;
use super::{color_hex, Dates, Message};
use crate::calendar::binning::GRID_COLS;

/// Decorative month-of-boxes skin. Written against the legacy unix-stamp
/// event convention, so it does its own clock math off the adapter shape.
pub fn view(bins: &[StampBin], dates: &Dates) -> iced::Element<'static, Message> {
  let weeks = bins.chunks(GRID_COLS).map(|week| {
    Row::from_iter(week.iter().map(|bin| view_box(bin, dates)))
      .spacing(6)
      .into()
  });

  Column::from_iter(weeks).spacing(6).into()
}

fn view_box(bin: &StampBin, dates: &Dates) -> iced::Element<'static, Message> {
  let date = chrono::DateTime::from_timestamp(bin.date_stamp, 0)
    .map(|stamp| stamp.naive_utc().date())
    .unwrap_or(dates.selected);

  let mut content = column![text(date.format("%-d").to_string()).size(16)].spacing(2);

  for event in bin.events.iter().take(2) {
    let color = color_hex(&event.color);

    content = content.push(
      text(event.title.clone())
        .size(11)
        .wrapping(text::Wrapping::None)
        .style(move |_: &iced::Theme| text::Style { color: Some(color) }),
    );
  }

  if bin.events.len() > 2 {
    content = content.push(text(format!("+{}", bin.events.len() - 2)).size(11));
  }

  let selected = dates.is_selected(date);

  button(content)
    .width(Length::Fill)
    .height(64)
    .padding(6)
    .style(move |theme, status| style_box(theme, status, selected))
    .on_press(Message::SelectDate(date))
    .into()
}

fn style_box(theme: &iced::Theme, _: iced::widget::button::Status, selected: bool) -> iced::widget::button::Style {
  let palette = theme.extended_palette();

  iced::widget::button::Style {
    background: Some(match selected {
      true => palette.primary.weak.color.into(),
      false => palette.background.weak.color.into(),
    }),
    text_color: palette.background.weak.text,
    border: iced::border::rounded(8),
    ..Default::default()
  }
}
