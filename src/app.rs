use iced::widget::container;
use iced::Subscription;

use crate::config::Config;
use crate::logger::LogExt as _;
use crate::views::{self, calendar};

/// Application root. Plays the part of the host application: it hands the
/// calendar its events and receives the forwarded interactions.
pub struct App {
  calendar: views::Calendar,
}

#[derive(Debug, Clone)]
pub enum Message {
  Calendar(calendar::Message),
}

impl App {
  pub fn new(config: Config) -> (Self, iced::Task<Message>) {
    let events = crate::calendar::feed::load(&config.events)
      .log_error("Could not load the event feed")
      .unwrap_or_default();

    log::info!("Loaded {} events from {}", events.len(), config.events.display());

    let (calendar, task) = views::Calendar::new(config.calendar, events);

    (Self { calendar }, task.map(Message::Calendar))
  }

  pub fn subscription(&self) -> Subscription<Message> {
    self.calendar.subscription().map(Message::Calendar)
  }

  pub fn update(&mut self, message: Message) -> iced::Task<Message> {
    match message {
      Message::Calendar(calendar_message) => {
        let (task, interaction) = self.calendar.update(calendar_message);

        if let Some(interaction) = interaction {
          self.handle(interaction);
        }

        task.map(Message::Calendar)
      }
    }
  }

  pub fn view(&self) -> iced::Element<'_, Message> {
    container(self.calendar.view().map(Message::Calendar))
      .padding(16)
      .into()
  }

  // The rest of the family app (event detail sheets, navigation) hangs off
  // these; for now they are observable behavior in the log.
  fn handle(&mut self, interaction: calendar::Interaction) {
    match interaction {
      calendar::Interaction::DatePressed(date) => {
        log::info!("Date pressed: {date}");
      }
      calendar::Interaction::EventPressed(event) => {
        log::info!("Event pressed: {} ({})", event.title, event.id);
      }
      calendar::Interaction::MonthChanged(month) => {
        log::info!("Month changed: {}", month.format("%Y-%m"));
      }
    }
  }
}
