use chrono::Datelike as _;
use iced::widget::{button, column, container, horizontal_space, text, Row};
use iced::Length;

use super::{color_hex, Dates, Message};
use crate::calendar::binning::DayBin;

/// Weekly grid: seven columns of the selected week.
pub fn view(bins: &[DayBin<'_>], dates: &Dates) -> iced::Element<'static, Message> {
  Row::from_iter(bins.iter().map(|bin| view_day(bin, dates)))
    .spacing(8)
    .into()
}

fn view_day(bin: &DayBin<'_>, dates: &Dates) -> iced::Element<'static, Message> {
  let header = button(
    column![
      text(bin.date.format("%a").to_string()).size(14),
      text(bin.date.day()).size(20),
    ]
    .align_x(iced::Alignment::Center),
  )
  .width(Length::Fill)
  .style(match (dates.is_today(bin.date), dates.is_selected(bin.date)) {
    (_, true) => super::month::style_selected,
    (true, _) => super::month::style_today,
    _ => super::month::style_normal,
  })
  .on_press(Message::SelectDate(bin.date));

  let entries: Vec<iced::Element<'static, Message>> = if bin.events.is_empty() {
    vec![text("–").center().width(Length::Fill).into()]
  } else {
    bin.events.iter().map(|event| view_entry(event)).collect()
  };

  column![header]
    .extend(entries)
    .spacing(4)
    .width(Length::Fill)
    .into()
}

fn view_entry(event: &crate::calendar::Event) -> iced::Element<'static, Message> {
  let color = color_hex(event.color());

  button(
    column![
      container(horizontal_space())
        .height(3)
        .style(move |_| style_bar(color)),
      text(event.start.format("%H:%M").to_string()).size(12),
      text(event.title.clone())
        .size(14)
        .wrapping(text::Wrapping::None),
    ]
    .spacing(2),
  )
  .padding(4)
  .width(Length::Fill)
  .style(style_entry)
  .on_press(Message::PressEvent(event.id.clone()))
  .into()
}

fn style_bar(color: iced::Color) -> container::Style {
  container::Style {
    background: Some(iced::Background::Color(color)),
    border: iced::border::rounded(2),
    ..Default::default()
  }
}

fn style_entry(theme: &iced::Theme, _: button::Status) -> button::Style {
  let palette = theme.extended_palette();

  button::Style {
    background: Some(palette.background.weak.color.into()),
    text_color: palette.background.weak.text,
    border: iced::border::rounded(4),
    ..Default::default()
  }
}
