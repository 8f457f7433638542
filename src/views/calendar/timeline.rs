use iced::widget::{button, column, container, row, scrollable, text, vertical_space, Column};
use iced::{Alignment, Length};

use super::{color_hex, Dates, Message};
use crate::calendar::binning::DayBin;
use crate::calendar::Event;

/// Ordered list of the selected day's events.
pub fn view(bin: &DayBin<'_>, _dates: &Dates) -> iced::Element<'static, Message> {
  if bin.events.is_empty() {
    return container(text("No events").size(20).style(style_muted))
      .center_x(Length::Fill)
      .padding(24)
      .into();
  }

  let entries = Column::from_iter(bin.events.iter().map(|event| view_event(event))).spacing(16);

  scrollable(entries)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn view_event(event: &Event) -> iced::Element<'static, Message> {
  let color = color_hex(event.color());

  let times = match event.end {
    Some(end) => format!(
      "{} – {}",
      event.start.format("%H:%M"),
      end.format("%H:%M")
    ),
    None => event.start.format("%H:%M").to_string(),
  };

  let content = row![
    container(vertical_space())
      .width(8)
      .style(move |_| style_indicator(color)),
    column![
      text(event.title.clone()).size(20),
      text(event.description().to_string())
        .style(style_muted)
        .size(16),
    ]
    .spacing(2),
    column![text(times).wrapping(text::Wrapping::None).size(16)]
      .width(Length::Fill)
      .align_x(Alignment::End),
  ]
  .height(54)
  .align_y(Alignment::Center)
  .spacing(8);

  button(content)
    .padding(0)
    .style(style_entry)
    .on_press(Message::PressEvent(event.id.clone()))
    .into()
}

fn style_indicator(color: iced::Color) -> container::Style {
  container::Style {
    background: Some(iced::Background::Color(color)),
    border: iced::border::rounded(12),
    ..Default::default()
  }
}

fn style_muted(theme: &iced::Theme) -> text::Style {
  let palette = theme.palette();

  text::Style {
    color: Some(palette.text.scale_alpha(0.8)),
  }
}

fn style_entry(theme: &iced::Theme, _: button::Status) -> button::Style {
  let palette = theme.palette();

  button::Style {
    background: None,
    text_color: palette.text,
    ..Default::default()
  }
}
