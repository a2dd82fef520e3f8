//! Canvas lifecycle - image switching, surface and background attachment,
//! observer subscriptions and settings reloads.

use super::AnnotationCanvas;
use crate::error::ConfigResult;
use crate::input::InputState;
use crate::render::{Background, Surface};
use crate::settings::Settings;
use crate::settings_watcher::{SettingsEvent, SettingsWatcher};
use crate::store::{CollectionObserver, SubscriptionId};
use crate::types::{ImageId, Rectangle};
use std::path::Path;

impl AnnotationCanvas {
    // ========================================================================
    // Image switching
    // ========================================================================

    /// Make `image_id` the active image, re-hydrating from `rectangles`.
    ///
    /// Switching to the image that is already active does nothing. Otherwise
    /// any gesture in progress is dropped without committing, because its
    /// indices point into the old collection.
    pub fn set_image(&mut self, image_id: impl Into<ImageId>, rectangles: Option<Vec<Rectangle>>) {
        let image_id = image_id.into();
        if &image_id == self.store.image_id() {
            tracing::debug!(image = %image_id, "Image already active");
            return;
        }

        if self.input_state.is_dragging() {
            tracing::debug!(
                state = self.input_state.label(),
                "Dropping gesture on image switch"
            );
        }

        tracing::info!(
            from = %self.store.image_id(),
            to = %image_id,
            "Switching image"
        );

        self.store.rehydrate(image_id, rectangles);
        self.input_state = InputState::Idle;
        self.hovered_corner = None;
        self.hovered_rectangle = None;
        self.corner_index.clear();

        self.render();
    }

    // ========================================================================
    // Surface and background
    // ========================================================================

    /// Attach (or replace) the drawing surface and draw the current state.
    pub fn attach_surface(&mut self, surface: Surface) {
        tracing::debug!(
            width = surface.width(),
            height = surface.height(),
            "Surface attached"
        );
        self.surface = Some(surface);
        self.render();
    }

    /// Detach the surface, handing it back to the host.
    pub fn detach_surface(&mut self) -> Option<Surface> {
        self.surface.take()
    }

    pub fn set_background(&mut self, background: Option<Background>) {
        self.background = background;
        self.render();
    }

    // ========================================================================
    // Observers
    // ========================================================================

    pub fn subscribe(&mut self, observer: impl CollectionObserver + 'static) -> SubscriptionId {
        self.store.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    // ========================================================================
    // Settings
    // ========================================================================

    /// Replace the active settings.
    ///
    /// Settings that fail [`Settings::validate`] are rejected and the current
    /// ones stay in effect.
    pub fn apply_settings(&mut self, settings: Settings) -> ConfigResult<()> {
        if let Err(e) = settings.validate() {
            tracing::warn!("Rejecting settings: {}", e);
            return Err(e);
        }
        if settings == self.settings {
            return Ok(());
        }
        tracing::debug!(
            proximity = settings.proximity_threshold,
            min_size = settings.min_rectangle_size,
            "Applying settings"
        );
        self.settings = settings;

        // Proximity may have changed under the pointer
        if self.input_state.is_idle() {
            match self.last_pointer {
                Some(pos) => self.scan_hover(pos),
                None => self.hovered_corner = None,
            }
        }
        self.render();
        Ok(())
    }

    /// Drain one pending watcher event and reload settings if the file changed.
    ///
    /// Returns true when new settings were applied.
    pub fn check_settings_reload(&mut self, watcher: &mut SettingsWatcher) -> bool {
        let Some(event) = watcher.poll() else {
            return false;
        };
        let path = watcher.path().to_path_buf();
        self.apply_settings_event(event, &path)
    }

    /// React to one settings file event for the file at `path`.
    ///
    /// Created and modified files are reloaded. Deletions, watcher errors
    /// and unreadable or invalid files keep the current settings.
    pub fn apply_settings_event(&mut self, event: SettingsEvent, path: &Path) -> bool {
        match event {
            SettingsEvent::Created | SettingsEvent::Modified => {
                let applied =
                    Settings::load(path).and_then(|settings| self.apply_settings(settings));
                match applied {
                    Ok(()) => {
                        tracing::info!(path = %path.display(), "Settings reloaded");
                        true
                    }
                    Err(e) => {
                        tracing::warn!("Failed to reload settings: {}", e);
                        false
                    }
                }
            }
            SettingsEvent::Deleted => {
                tracing::warn!(
                    path = %path.display(),
                    "Settings file deleted, keeping current settings"
                );
                false
            }
            SettingsEvent::Error(e) => {
                tracing::error!("Settings watcher error: {}", e);
                false
            }
        }
    }
}
