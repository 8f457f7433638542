use iced::widget::{button, column, row, text, Column, Row};
use iced::{Alignment, Length};
use iced_font_awesome::fa_icon_solid;

use super::adapter::SplitDateBin;
use super::{color_hex, Dates, Message};

/// Decorative "subway line" week skin, one station per day. Written against
/// the legacy pre-split date convention.
pub fn view(bins: &[SplitDateBin], dates: &Dates) -> iced::Element<'static, Message> {
  Column::from_iter(bins.iter().map(|bin| view_station(bin, dates)))
    .spacing(10)
    .into()
}

fn view_station(bin: &SplitDateBin, dates: &Dates) -> iced::Element<'static, Message> {
  let date = chrono::NaiveDate::from_ymd_opt(bin.year, bin.month, bin.day)
    .unwrap_or(dates.selected);

  let marker = fa_icon_solid(match dates.is_today(date) {
    true => "circle-dot",
    false => "circle",
  })
  .size(16.0);

  let label = button(
    row![
      marker,
      text(format!("{} {}", bin.weekday, bin.day)).size(16),
    ]
    .spacing(8)
    .align_y(Alignment::Center),
  )
  .style(style_station)
  .on_press(Message::SelectDate(date));

  let stops = Row::from_iter(bin.events.iter().map(|event| {
    let color = color_hex(&event.color);

    button(
      column![
        fa_icon_solid("circle").color(color).size(10.0),
        text(format!("{:02}:{:02}", event.hour, event.minute)).size(12),
        text(event.title.clone())
          .size(13)
          .wrapping(text::Wrapping::None),
      ]
      .align_x(Alignment::Center)
      .spacing(2),
    )
    .style(style_station)
    .on_press(Message::PressEvent(event.id.clone()))
    .into()
  }))
  .spacing(12);

  row![label, stops]
    .spacing(16)
    .align_y(Alignment::Center)
    .width(Length::Fill)
    .into()
}

fn style_station(theme: &iced::Theme, _: iced::widget::button::Status) -> iced::widget::button::Style {
  let palette = theme.palette();

  iced::widget::button::Style {
    background: None,
    text_color: palette.text,
    ..Default::default()
  }
}
