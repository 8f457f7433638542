pub fn init() {
  env_logger::builder().init();
}

/// Attaches a log line to the failure path of a `Result`/`Option` while
/// converting it into an `anyhow::Result`.
pub trait LogExt<T> {
  #[track_caller]
  fn log_warn(self, msg: &str) -> anyhow::Result<T>;
  #[track_caller]
  fn log_error(self, msg: &str) -> anyhow::Result<T>;
}

impl<T> LogExt<T> for Option<T> {
  fn log_warn(self, msg: &str) -> anyhow::Result<T> {
    match self {
      Some(value) => Ok(value),
      None => {
        let location = std::panic::Location::caller();
        log::warn!("[{location}] {msg}");
        anyhow::bail!(msg.to_string())
      }
    }
  }

  fn log_error(self, msg: &str) -> anyhow::Result<T> {
    match self {
      Some(value) => Ok(value),
      None => {
        let location = std::panic::Location::caller();
        log::error!("[{location}] {msg}");
        anyhow::bail!(msg.to_string())
      }
    }
  }
}

impl<T, E: std::fmt::Debug> LogExt<T> for Result<T, E> {
  fn log_warn(self, msg: &str) -> anyhow::Result<T> {
    match self {
      Ok(value) => Ok(value),
      Err(error) => {
        let location = std::panic::Location::caller();
        log::warn!("[{location}] {msg}: {error:?}");
        anyhow::bail!("{msg}: {error:?}")
      }
    }
  }

  fn log_error(self, msg: &str) -> anyhow::Result<T> {
    match self {
      Ok(value) => Ok(value),
      Err(error) => {
        let location = std::panic::Location::caller();
        log::error!("[{location}] {msg}: {error:?}");
        anyhow::bail!("{msg}: {error:?}")
      }
    }
  }
}
