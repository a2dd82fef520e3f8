//! Settings file watcher for hot reload.
//!
//! Watches the directory containing the settings file, so the file being
//! created, rewritten or deleted is seen even when editors replace it by
//! rename. Events are queued and drained by [`SettingsWatcher::poll`]; the
//! host decides when to poll.

use crate::error::ConfigResult;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, channel};

pub use crate::settings::default_settings_path;

/// A change to the watched settings file.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsEvent {
    Created,
    Modified,
    Deleted,
    /// The watcher itself failed
    Error(String),
}

pub struct SettingsWatcher {
    path: PathBuf,
    rx: Receiver<notify::Result<Event>>,
    _watcher: RecommendedWatcher,
}

impl SettingsWatcher {
    /// Start watching `path`. Its parent directory must exist.
    pub fn new(path: PathBuf) -> ConfigResult<Self> {
        let (tx, rx) = channel();
        let mut watcher = notify::recommended_watcher(tx)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        tracing::debug!(path = %path.display(), "Watching settings file");

        Ok(Self {
            path,
            rx,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Next pending event for the settings file, if any. Never blocks.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        while let Ok(result) = self.rx.try_recv() {
            let event = match result {
                Ok(event) => event,
                Err(e) => return Some(SettingsEvent::Error(e.to_string())),
            };

            if !event.paths.iter().any(|p| self.is_settings_file(p)) {
                continue;
            }

            match event.kind {
                EventKind::Create(_) => return Some(SettingsEvent::Created),
                EventKind::Modify(_) => return Some(SettingsEvent::Modified),
                EventKind::Remove(_) => return Some(SettingsEvent::Deleted),
                _ => continue,
            }
        }
        None
    }

    fn is_settings_file(&self, candidate: &Path) -> bool {
        candidate.file_name().is_some() && candidate.file_name() == self.path.file_name()
    }
}
