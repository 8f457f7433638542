#![warn(
  clippy::all,
  clippy::nursery,
  clippy::cargo,
)]
use app::App;
use clap::Parser;

mod app;
pub mod calendar;
mod cli;
pub mod config;
pub mod logger;
pub mod style;
pub mod views;

fn main() -> iced::Result {
  logger::init();

  let cli = cli::Cli::parse();
  let config = config::init(cli.config).expect("Could not load the configuration file");

  iced::application::application("Family Calendar", App::update, App::view)
    .subscription(App::subscription)
    .theme(|_| iced::Theme::TokyoNightLight)
    .run_with(|| App::new(config))
}
