//! Startup wiring: assets, displays, audio, settings, then the UI loop.

use eframe::egui;

use crate::audio::AudioEngine;
use crate::error::PointerError;
use crate::events::EventBus;
use crate::handlers::{Dispatcher, NativeBackends};
use crate::platform::list_screens;
use crate::storage::SettingsStore;
use crate::ui::MainWindow;

use super::PointerApp;

/// Run the application until the main window closes.
pub fn run() -> Result<(), PointerError> {
    let assets = crate::assets_dir();
    log::info!("Using assets from {}", assets.display());

    let screens = list_screens().unwrap_or_else(|e| {
        log::error!("{}", e);
        Vec::new()
    });
    for screen in &screens {
        log::info!(
            "{}: {} {}x{} at ({}, {}), scale {}",
            screen.label(),
            screen.name,
            screen.width,
            screen.height,
            screen.x,
            screen.y,
            screen.scale_factor
        );
    }

    let audio = AudioEngine::open(&assets)?;
    if !audio.is_muted() {
        log::info!("[AUDIO] output ready");
    }
    let store = SettingsStore::beside_executable();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Pointer")
            .with_inner_size([550.0, 600.0])
            .with_min_inner_size([420.0, 480.0])
            // Needed so the overlay viewport gets an alpha-capable surface;
            // the main window paints an opaque panel over it.
            .with_transparent(true),
        // Wake on the 10 ms poll instead of the display refresh.
        vsync: false,
        ..Default::default()
    };

    eframe::run_native(
        "Pointer",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            let bus = EventBus::new();
            let main_window = MainWindow::new(&cc.egui_ctx, &assets);
            let dispatcher = Dispatcher::new(
                store,
                assets,
                screens,
                NativeBackends::new(audio),
                bus.publisher(),
            );
            Ok(Box::new(PointerApp::new(bus, dispatcher, main_window)))
        }),
    )
    .map_err(|e| PointerError::Ui(e.to_string()))
}
