use iced::widget::{button, column, container, row, text};
use iced::Length;
use iced_font_awesome::fa_icon_solid;

use super::Message;
use crate::style::StyleId;

/// Style picker overlay, opened by a long press on the calendar surface.
/// Picking an entry switches the skin; cancel is a no-op.
pub fn view(current: StyleId) -> iced::Element<'static, Message> {
  let entries = StyleId::ALL.into_iter().map(|id| {
    let marker: iced::Element<'static, Message> = if id == current {
      fa_icon_solid("check").size(16.0).into()
    } else {
      text("").width(16).into()
    };

    button(
      row![marker, text(id.label()).size(18)]
        .spacing(12)
        .align_y(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .style(style_entry)
    .on_press(Message::PickStyle(id))
    .into()
  });

  let sheet = column![text("Calendar style").size(22)]
    .extend(entries)
    .push(
      button(text("Cancel").size(18).center().width(Length::Fill))
        .style(style_cancel)
        .on_press(Message::CancelPicker),
    )
    .spacing(8)
    .width(320);

  container(container(sheet).padding(24).style(style_sheet))
    .center(Length::Fill)
    .style(style_backdrop)
    .into()
}

fn style_entry(theme: &iced::Theme, status: button::Status) -> button::Style {
  let palette = theme.extended_palette();

  button::Style {
    background: match status {
      button::Status::Hovered => Some(palette.primary.weak.color.into()),
      _ => None,
    },
    text_color: palette.background.base.text,
    border: iced::border::rounded(6),
    ..Default::default()
  }
}

fn style_cancel(theme: &iced::Theme, _: button::Status) -> button::Style {
  let palette = theme.extended_palette();

  button::Style {
    background: Some(palette.secondary.base.color.into()),
    text_color: palette.secondary.base.text,
    border: iced::border::rounded(6),
    ..Default::default()
  }
}

fn style_sheet(theme: &iced::Theme) -> container::Style {
  let palette = theme.extended_palette();

  container::Style {
    background: Some(palette.background.base.color.into()),
    border: iced::border::rounded(12),
    ..Default::default()
  }
}

fn style_backdrop(_: &iced::Theme) -> container::Style {
  container::Style {
    background: Some(iced::Background::Color(iced::Color {
      a: 0.5,
      ..iced::Color::BLACK
    })),
    ..Default::default()
  }
}
