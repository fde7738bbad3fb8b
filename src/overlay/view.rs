//! Overlay window: a transparent, undecorated, always-on-top egui viewport
//! that lets the pointer through and draws the cursor image.

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions, ViewportBuilder, ViewportId};

use crate::audio::VoiceFactory;
use crate::input::PointerSource;
use crate::platform::{ScreenInfo, SystemCursor};

use super::controller::OverlayController;
use super::cursor_image::CursorImage;

/// What the overlay window reported this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewResponse {
    pub escape_pressed: bool,
    pub close_requested: bool,
}

/// Owns the GPU texture for the current cursor image.
#[derive(Default)]
pub struct OverlayView {
    texture: Option<(u64, TextureHandle)>,
}

impl OverlayView {
    pub fn viewport_id() -> ViewportId {
        ViewportId::from_hash_of("pointer_overlay")
    }

    /// Window covering exactly `screen`.
    pub fn builder(screen: &ScreenInfo) -> ViewportBuilder {
        ViewportBuilder::default()
            .with_title("Pointer overlay")
            .with_position(screen.origin_points())
            .with_inner_size(screen.size_points())
            .with_transparent(true)
            .with_decorations(false)
            .with_resizable(false)
            .with_taskbar(false)
            .with_always_on_top()
            .with_mouse_passthrough(true)
    }

    /// Draw the overlay for this frame.
    pub fn show<P, F, C>(
        &mut self,
        ctx: &egui::Context,
        overlay: &OverlayController<P, F, C>,
    ) -> ViewResponse
    where
        P: PointerSource,
        F: VoiceFactory,
        C: SystemCursor,
    {
        let builder = Self::builder(overlay.screen());
        ctx.show_viewport_immediate(Self::viewport_id(), builder, |ctx, _class| {
            let texture = self.texture_for(ctx, overlay.cursor(), overlay.cursor_revision());

            egui::CentralPanel::default()
                .frame(egui::Frame::NONE)
                .show(ctx, |ui| {
                    let ppp = overlay.screen().pixels_per_point();
                    let (x, y) = overlay.position();
                    let center = egui::pos2(x as f32 / ppp, y as f32 / ppp);
                    let size = texture.size_vec2() / ctx.pixels_per_point();
                    egui::Image::from_texture(&texture)
                        .rotate(overlay.rotation_deg().to_radians(), egui::Vec2::splat(0.5))
                        .paint_at(ui, egui::Rect::from_center_size(center, size));
                });

            ctx.input(|i| ViewResponse {
                escape_pressed: i.key_pressed(egui::Key::Escape),
                close_requested: i.viewport().close_requested(),
            })
        })
    }

    fn texture_for(
        &mut self,
        ctx: &egui::Context,
        cursor: &CursorImage,
        revision: u64,
    ) -> TextureHandle {
        match &self.texture {
            Some((rev, handle)) if *rev == revision => handle.clone(),
            _ => {
                let handle = ctx.load_texture(
                    "overlay_cursor",
                    to_color_image(cursor.pixels()),
                    TextureOptions::LINEAR,
                );
                self.texture = Some((revision, handle.clone()));
                handle
            }
        }
    }
}

/// Convert an RGBA bitmap into an egui image.
pub fn to_color_image(pixels: &image::RgbaImage) -> ColorImage {
    let (w, h) = pixels.dimensions();
    ColorImage::from_rgba_unmultiplied([w as usize, h as usize], pixels.as_raw())
}
