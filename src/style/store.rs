use std::path::{Path, PathBuf};
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};

use super::{is_valid_style, resolve_style, StyleId};

/// Defensive poll fallback for writes that bypass this process (the in-app
/// path notifies subscribers synchronously and never waits for this).
pub const RECONCILE_INTERVAL: Duration = Duration::from_secs(2);

/// Durable, process-wide style preference. The in-memory value is the single
/// source of truth for the running session; disk is best effort.
#[derive(Debug)]
pub struct StyleStore {
  path: PathBuf,
  current: StyleId,
  watchers: Vec<Sender<StyleId>>,
}

impl StyleStore {
  pub fn default_path() -> PathBuf {
    dirs::config_dir()
      .unwrap_or_else(std::env::temp_dir)
      .join("famcal")
      .join("style")
  }

  /// Loads the persisted style id, falling back to (and persisting) the
  /// default when the file is missing, empty or holds an unknown id.
  pub fn open(path: PathBuf) -> Self {
    let current = match read_durable(&path) {
      Some(id) => id,
      None => {
        if let Err(error) = write_durable(&path, StyleId::DEFAULT) {
          log::error!(
            "[{}] Could not persist default style: {error}",
            path.display()
          );
        }

        StyleId::DEFAULT
      }
    };

    Self {
      path,
      current,
      watchers: Vec::new(),
    }
  }

  pub const fn current(&self) -> StyleId {
    self.current
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Updates the in-memory value and notifies subscribers. Returns whether
  /// anything changed; callers kick off `persist` themselves so the UI
  /// never blocks on storage. Calling twice with the same id is a no-op.
  pub fn set_style(&mut self, id: StyleId) -> bool {
    if self.current == id {
      return false;
    }

    self.current = id;
    self.notify(id);

    true
  }

  /// Synchronous in-process change notification.
  pub fn subscribe(&mut self) -> Receiver<StyleId> {
    let (sender, receiver) = unbounded();
    self.watchers.push(sender);

    receiver
  }

  /// Re-reads the durable value and adopts it if another writer changed it
  /// behind our back. A missing or corrupted file is rewritten from memory
  /// instead, since the session value stays authoritative.
  pub fn reconcile(&mut self) -> Option<StyleId> {
    match read_durable(&self.path) {
      Some(id) if id != self.current => {
        log::info!("Style changed externally to {id}");
        self.current = id;
        self.notify(id);

        Some(id)
      }
      Some(_) => None,
      None => {
        if let Err(error) = write_durable(&self.path, self.current) {
          log::error!("[{}] Could not restore style: {error}", self.path.display());
        }

        None
      }
    }
  }

  fn notify(&mut self, id: StyleId) {
    self.watchers.retain(|watcher| watcher.send(id).is_ok());
  }
}

/// Fire-and-forget durable write; a superseded in-flight write simply loses
/// the race (last write wins). Failure is logged, never surfaced.
pub async fn persist(path: PathBuf, id: StyleId) {
  if let Err(error) = write_durable(&path, id) {
    log::error!("[{}] Could not persist style {id}: {error}", path.display());
  }
}

fn read_durable(path: &Path) -> Option<StyleId> {
  let raw = std::fs::read_to_string(path).ok()?;
  let raw = raw.trim();

  if !is_valid_style(raw) {
    return None;
  }

  Some(resolve_style(raw))
}

fn write_durable(path: &Path, id: StyleId) -> std::io::Result<()> {
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)?;
  }

  std::fs::write(path, id.as_str())
}
