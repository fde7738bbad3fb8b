//! Event dispatcher for handling application events.
//!
//! The dispatcher receives events drained from the event bus once per frame
//! and executes the corresponding actions. It is the single owner of the
//! settings, their persistence, and the overlay session.
//!
//! ```text
//! EventBus::drain() → Dispatcher::dispatch_all() → action handlers
//! ```

use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::audio::{AudioEngine, VoiceFactory};
use crate::error::PointerError;
use crate::events::{AppEvent, EventPublisher};
use crate::input::{DevicePointer, PointerSource};
use crate::model::{cursor_at, Settings, Volume, CURSORS};
use crate::overlay::{CursorImage, OverlayBackends, OverlayController};
use crate::platform::{NativeCursor, ScreenInfo, SystemCursor};
use crate::storage::SettingsStore;
use crate::ui::MainWindowModel;

/// Supplies fresh collaborators for every overlay session.
pub trait BackendProvider {
    type Pointer: PointerSource;
    type Voices: VoiceFactory;
    type Cursor: SystemCursor;

    fn backends(
        &mut self,
    ) -> Result<OverlayBackends<Self::Pointer, Self::Voices, Self::Cursor>, PointerError>;
}

/// Real pointer, real audio output, real system cursor.
pub struct NativeBackends {
    audio: Rc<AudioEngine>,
}

impl NativeBackends {
    pub fn new(audio: AudioEngine) -> Self {
        Self {
            audio: Rc::new(audio),
        }
    }
}

impl BackendProvider for NativeBackends {
    type Pointer = DevicePointer;
    type Voices = Rc<AudioEngine>;
    type Cursor = NativeCursor;

    fn backends(
        &mut self,
    ) -> Result<OverlayBackends<DevicePointer, Rc<AudioEngine>, NativeCursor>, PointerError> {
        Ok(OverlayBackends {
            pointer: DevicePointer::new()?,
            voices: Rc::clone(&self.audio),
            system_cursor: NativeCursor::default(),
        })
    }
}

pub type Session<B> = OverlayController<
    <B as BackendProvider>::Pointer,
    <B as BackendProvider>::Voices,
    <B as BackendProvider>::Cursor,
>;

pub struct Dispatcher<B: BackendProvider> {
    store: SettingsStore,
    settings: Settings,
    assets_dir: PathBuf,
    screens: Vec<ScreenInfo>,
    selected_cursor: usize,
    backends: B,
    overlay: Option<Session<B>>,
    publisher: EventPublisher,
    status: Option<String>,
}

impl<B: BackendProvider> Dispatcher<B> {
    /// Load settings from `store` and start idle.
    pub fn new(
        store: SettingsStore,
        assets_dir: impl Into<PathBuf>,
        screens: Vec<ScreenInfo>,
        backends: B,
        publisher: EventPublisher,
    ) -> Self {
        let settings = store.load();
        log::info!(
            "[DISPATCH] settings from {}: volume {}%, monitor {}",
            store.path().display(),
            settings.volume.percent(),
            settings.selected_screen
        );
        Self {
            store,
            settings,
            assets_dir: assets_dir.into(),
            screens,
            selected_cursor: 0,
            backends,
            overlay: None,
            publisher,
            status: None,
        }
    }

    /// Handle events in publish order.
    pub fn dispatch_all(&mut self, events: Vec<AppEvent>) {
        for event in events {
            self.dispatch(event);
        }
    }

    pub fn dispatch(&mut self, event: AppEvent) {
        log::debug!("[DISPATCH] {}: {:?}", event.description(), event);
        let persist = event.persists_settings();

        let result = match event {
            AppEvent::SelectCursor(index) => self.select_cursor(index),
            AppEvent::StartPointer => self.start_pointer(),
            AppEvent::StopPointer => {
                self.stop_pointer();
                Ok(())
            }
            AppEvent::SetVolume(volume) => {
                self.set_volume(volume);
                Ok(())
            }
            AppEvent::SelectScreen(index) => self.select_screen(index),
            AppEvent::OverlayClosed => {
                // A replaced session reports late; keep the live one.
                if self.overlay.as_ref().is_some_and(|o| o.is_closed()) {
                    self.overlay = None;
                }
                Ok(())
            }
        };

        if persist {
            self.persist();
        }
        if let Err(e) = result {
            log::error!("[DISPATCH] {}", e);
            self.status = Some(e.to_string());
        }
    }

    fn select_cursor(&mut self, index: usize) -> Result<(), PointerError> {
        // Same fallback as `cursor_at`: unknown indices select the first cursor.
        self.selected_cursor = if index < CURSORS.len() { index } else { 0 };
        if !self.is_active() {
            return Ok(());
        }
        let image = self.load_cursor()?;
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.change_cursor(image);
        }
        Ok(())
    }

    /// Tear down any active overlay and open a new one on the selected screen.
    fn start_pointer(&mut self) -> Result<(), PointerError> {
        self.stop_pointer();

        let screen_index = self
            .settings
            .screen_index(self.screens.len())
            .ok_or(PointerError::NoDisplay)?;
        let screen = self.screens[screen_index].clone();
        let image = self.load_cursor()?;
        let backends = self.backends.backends()?;

        let publisher = self.publisher.clone();
        self.overlay = Some(OverlayController::activate(
            image,
            screen,
            &self.settings,
            backends,
            move || publisher.publish(AppEvent::OverlayClosed),
        ));
        self.status = None;
        Ok(())
    }

    fn load_cursor(&self) -> Result<CursorImage, PointerError> {
        let path = cursor_at(self.selected_cursor).image_path(&self.assets_dir);
        Ok(CursorImage::load(&path)?)
    }

    fn stop_pointer(&mut self) {
        if let Some(mut overlay) = self.overlay.take() {
            overlay.deactivate();
        }
    }

    fn set_volume(&mut self, volume: Volume) {
        self.settings.volume = volume;
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.set_volume(volume);
        }
    }

    /// Store the new monitor; an active overlay moves to it immediately.
    fn select_screen(&mut self, index: usize) -> Result<(), PointerError> {
        self.settings.selected_screen = index;
        if self.is_active() {
            self.start_pointer()?;
        }
        Ok(())
    }

    /// Best-effort: on failure the in-memory settings still apply.
    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.settings) {
            log::warn!("[SETTINGS] cannot save {}: {}", self.store.path().display(), e);
            self.status = Some(format!("Settings not saved: {}", e));
        }
    }

    /// Deactivate the overlay before the application exits.
    pub fn shutdown(&mut self) {
        self.stop_pointer();
    }

    pub fn is_active(&self) -> bool {
        self.overlay.as_ref().is_some_and(|o| !o.is_closed())
    }

    pub fn overlay(&self) -> Option<&Session<B>> {
        self.overlay.as_ref()
    }

    pub fn overlay_mut(&mut self) -> Option<&mut Session<B>> {
        self.overlay.as_mut()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn selected_cursor(&self) -> usize {
        self.selected_cursor
    }

    pub fn screens(&self) -> &[ScreenInfo] {
        &self.screens
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Snapshot of everything the main window renders.
    pub fn model(&self) -> MainWindowModel<'_> {
        MainWindowModel {
            selected_cursor: self.selected_cursor,
            volume: self.settings.volume,
            screen_index: self.settings.screen_index(self.screens.len()),
            screens: &self.screens,
            active: self.is_active(),
            status: self.status.as_deref(),
        }
    }
}

impl<B: BackendProvider> Drop for Dispatcher<B> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
