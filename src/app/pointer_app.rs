//! The eframe application: one main window plus the overlay viewport.

use std::time::Instant;

use eframe::egui;

use crate::events::EventBus;
use crate::handlers::{BackendProvider, Dispatcher};
use crate::overlay::OverlayView;
use crate::ui::MainWindow;

pub struct PointerApp<B: BackendProvider> {
    bus: EventBus,
    dispatcher: Dispatcher<B>,
    main_window: MainWindow,
    overlay_view: OverlayView,
}

impl<B: BackendProvider> PointerApp<B> {
    pub fn new(bus: EventBus, dispatcher: Dispatcher<B>, main_window: MainWindow) -> Self {
        Self {
            bus,
            dispatcher,
            main_window,
            overlay_view: OverlayView::default(),
        }
    }

    fn drain_events(&mut self) {
        let events = self.bus.drain();
        if !events.is_empty() {
            self.dispatcher.dispatch_all(events);
        }
    }
}

impl<B: BackendProvider> eframe::App for PointerApp<B> {
    fn clear_color(&self, _: &egui::Visuals) -> [f32; 4] {
        // The overlay viewport paints no panel background.
        [0.0, 0.0, 0.0, 0.0]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();

        let now = Instant::now();
        if let Some(overlay) = self.dispatcher.overlay_mut().filter(|o| !o.is_closed()) {
            overlay.update(now);
            let response = self.overlay_view.show(ctx, overlay);
            if response.escape_pressed || response.close_requested {
                overlay.handle_escape();
            }
        }

        let publisher = self.bus.publisher();
        self.main_window.show(ctx, self.dispatcher.model(), &publisher);

        // Apply this frame's clicks without waiting for the next one.
        self.drain_events();
        if let Some(overlay) = self.dispatcher.overlay().filter(|o| !o.is_closed()) {
            ctx.request_repaint_after(overlay.next_poll_in(Instant::now()));
        }
    }
}

impl<B: BackendProvider> Drop for PointerApp<B> {
    fn drop(&mut self) {
        self.dispatcher.shutdown();
    }
}
