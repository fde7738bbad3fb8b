//! Main window: cursor choice, start/stop, volume and monitor selection.
//!
//! The window never mutates state directly; every control publishes an
//! [`AppEvent`] for the dispatcher.

use std::path::Path;

use eframe::egui::{self, Color32, RichText, TextureHandle, TextureOptions};

use crate::events::{AppEvent, EventPublisher};
use crate::model::{Volume, CURSORS, MAX_VOLUME, THUMBNAIL_SIZE};
use crate::overlay::{load_thumbnail, view::to_color_image};
use crate::platform::ScreenInfo;

const ACCENT: Color32 = Color32::from_rgb(0x2a, 0x82, 0xda);

/// Read-only snapshot of the state the main window renders.
#[derive(Debug, Clone, Copy)]
pub struct MainWindowModel<'a> {
    pub selected_cursor: usize,
    pub volume: Volume,
    /// Selected monitor after clamping; `None` without displays.
    pub screen_index: Option<usize>,
    pub screens: &'a [ScreenInfo],
    pub active: bool,
    pub status: Option<&'a str>,
}

pub struct MainWindow {
    thumbnails: Vec<Option<TextureHandle>>,
}

impl MainWindow {
    /// Load one thumbnail per cursor; a missing image falls back to its name.
    pub fn new(ctx: &egui::Context, assets_dir: &Path) -> Self {
        let thumbnails = CURSORS
            .iter()
            .map(|cursor| match load_thumbnail(&cursor.image_path(assets_dir)) {
                Ok(pixels) => Some(ctx.load_texture(
                    format!("thumbnail_{}", cursor.name),
                    to_color_image(&pixels),
                    TextureOptions::LINEAR,
                )),
                Err(e) => {
                    log::warn!("[UI] {}", e);
                    None
                }
            })
            .collect();
        Self { thumbnails }
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        model: MainWindowModel<'_>,
        publisher: &EventPublisher,
    ) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new("Pointer").color(ACCENT).strong().size(24.0));
            });
            ui.add_space(12.0);

            ui.group(|ui| {
                ui.label(RichText::new("Cursor").strong());
                ui.horizontal(|ui| self.cursor_choice(ui, model.selected_cursor, publisher));
            });
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                let label = if model.active { "Restart pointer" } else { "Start pointer" };
                let start =
                    egui::Button::new(RichText::new(label).size(16.0).strong()).fill(ACCENT);
                if ui.add_sized([ui.available_width() * 0.7, 44.0], start).clicked() {
                    publisher.publish(AppEvent::StartPointer);
                }
                let stop = ui.add_enabled_ui(model.active, |ui| {
                    ui.add_sized([ui.available_width(), 44.0], egui::Button::new("Stop"))
                });
                if stop.inner.clicked() {
                    publisher.publish(AppEvent::StopPointer);
                }
            });
            ui.add_space(12.0);

            ui.group(|ui| {
                ui.label(RichText::new("Settings").strong());
                volume_row(ui, model.volume, publisher);
                monitor_row(ui, model.screens, model.screen_index, publisher);
            });
            ui.add_space(12.0);

            ui.label(RichText::new("Tips").color(ACCENT).strong());
            ui.label(RichText::new("• ESC – turn the pointer off").weak());

            if let Some(status) = model.status {
                ui.add_space(8.0);
                ui.colored_label(Color32::LIGHT_RED, status);
            }
        });
    }

    fn cursor_choice(&self, ui: &mut egui::Ui, selected: usize, publisher: &EventPublisher) {
        let edge = THUMBNAIL_SIZE as f32;
        for (index, cursor) in CURSORS.iter().enumerate() {
            let is_selected = index == selected;
            let response = match self.thumbnails.get(index).and_then(Option::as_ref) {
                Some(texture) => {
                    let image = egui::Image::from_texture(texture)
                        .fit_to_exact_size(egui::vec2(edge, edge));
                    ui.add(
                        egui::Button::image(image)
                            .selected(is_selected)
                            .min_size(egui::vec2(edge + 20.0, edge + 20.0)),
                    )
                }
                None => ui.selectable_label(is_selected, cursor.name),
            };
            if response.on_hover_text(cursor.name).clicked() && !is_selected {
                publisher.publish(AppEvent::SelectCursor(index));
            }
        }
    }
}

fn volume_row(ui: &mut egui::Ui, volume: Volume, publisher: &EventPublisher) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Volume:").strong());
        let mut percent = volume.percent();
        let slider = egui::Slider::new(&mut percent, 0..=MAX_VOLUME).suffix("%");
        if ui.add(slider).changed() {
            publisher.publish(AppEvent::SetVolume(Volume::new(percent)));
        }
    });
}

fn monitor_row(
    ui: &mut egui::Ui,
    screens: &[ScreenInfo],
    current: Option<usize>,
    publisher: &EventPublisher,
) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Monitor:").strong());
        let selected_text = current
            .and_then(|i| screens.get(i))
            .map(ScreenInfo::label)
            .unwrap_or_else(|| "No display".to_owned());
        egui::ComboBox::from_id_salt("monitor_selector")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for screen in screens {
                    let is_current = current == Some(screen.index);
                    if ui.selectable_label(is_current, screen.label()).clicked() && !is_current {
                        publisher.publish(AppEvent::SelectScreen(screen.index));
                    }
                }
            });
    });
}
