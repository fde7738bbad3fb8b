//! Overlay session state machine.
//!
//! One `OverlayController` exists per activation. It is driven from the UI
//! loop: [`OverlayController::update`] runs a poll whenever the 10 ms period
//! has elapsed, and everything else (cursor swap, volume, teardown) is a
//! direct call from the dispatcher. Nothing here touches a window; drawing
//! reads the public state through the accessors.

use std::time::{Duration, Instant};

use crate::audio::{SoundCue, Voice, VoiceFactory};
use crate::input::{Edge, EdgeDetector, PointerSource};
use crate::model::constants::{POLL_INTERVAL, PRESSED_ROTATION_DEG, REST_ROTATION_DEG};
use crate::model::{Settings, Volume};
use crate::platform::{ScreenInfo, SystemCursor};

use super::cursor_image::CursorImage;

/// The collaborators an overlay session drives.
pub struct OverlayBackends<P, F, C> {
    pub pointer: P,
    pub voices: F,
    pub system_cursor: C,
}

/// What a single poll observed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Position, rotation or image changed since the last poll.
    pub repaint: bool,
    /// A press edge was handled.
    pub pressed: bool,
    /// A release edge was handled.
    pub released: bool,
}

/// Fixed-period schedule for the poll.
#[derive(Debug, Clone, Copy)]
pub struct PollTimer {
    period: Duration,
    next_due: Instant,
}

impl PollTimer {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_due: now,
        }
    }

    /// True when a poll should run at `now`. Missed periods collapse into one.
    pub fn due(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.period;
        true
    }

    /// Time left until the next poll.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}

type CloseNotification = Box<dyn FnOnce()>;

pub struct OverlayController<P, F, C>
where
    F: VoiceFactory,
    C: SystemCursor,
{
    screen: ScreenInfo,
    pointer: P,
    voices: F,
    system_cursor: C,
    timer: PollTimer,
    button: EdgeDetector,
    position: (i32, i32),
    pressed: bool,
    rotation_deg: f32,
    cursor: CursorImage,
    cursor_revision: u64,
    volume: Volume,
    clicks: Vec<F::Voice>,
    hold: F::Voice,
    closed: bool,
    on_close: Option<CloseNotification>,
}

impl<P, F, C> OverlayController<P, F, C>
where
    P: PointerSource,
    F: VoiceFactory,
    C: SystemCursor,
{
    /// Start a session on `screen`: hide the OS cursor and arm the poll.
    ///
    /// `on_close` runs exactly once, on the first [`deactivate`](Self::deactivate).
    pub fn activate(
        cursor: CursorImage,
        screen: ScreenInfo,
        settings: &Settings,
        backends: OverlayBackends<P, F, C>,
        on_close: impl FnOnce() + 'static,
    ) -> Self {
        let OverlayBackends {
            mut pointer,
            voices,
            mut system_cursor,
        } = backends;

        let volume = settings.volume;
        let hold = voices.voice(SoundCue::Hold, volume);
        let position = screen.to_local(pointer.sample().position);
        system_cursor.hide();

        log::info!(
            "[OVERLAY] active on {} ({}x{} at {},{})",
            screen.label(),
            screen.width,
            screen.height,
            screen.x,
            screen.y
        );

        Self {
            screen,
            pointer,
            voices,
            system_cursor,
            timer: PollTimer::new(POLL_INTERVAL, Instant::now()),
            button: EdgeDetector::new(),
            position,
            pressed: false,
            rotation_deg: REST_ROTATION_DEG,
            cursor,
            cursor_revision: 0,
            volume,
            clicks: Vec::new(),
            hold,
            closed: false,
            on_close: Some(Box::new(on_close)),
        }
    }

    /// Run a poll if one is due at `now`.
    pub fn update(&mut self, now: Instant) -> TickOutcome {
        if self.closed || !self.timer.due(now) {
            return TickOutcome::default();
        }
        self.tick()
    }

    /// Time until the next poll is due.
    pub fn next_poll_in(&self, now: Instant) -> Duration {
        self.timer.remaining(now)
    }

    /// One poll: track position, detect button edges, service voices.
    pub fn tick(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if self.closed {
            return outcome;
        }

        let sample = self.pointer.sample();
        let local = self.screen.to_local(sample.position);
        if local != self.position {
            self.position = local;
            outcome.repaint = true;
        }

        match self.button.update(sample.left_down) {
            Some(Edge::Rising) => {
                self.handle_press();
                outcome.pressed = true;
                outcome.repaint = true;
            }
            Some(Edge::Falling) => {
                self.handle_release();
                outcome.released = true;
                outcome.repaint = true;
            }
            None => {}
        }

        self.service_voices();
        outcome
    }

    fn handle_press(&mut self) {
        let mut click = self.voices.voice(SoundCue::Click, self.volume);
        match click.play() {
            Ok(()) => self.clicks.push(click),
            Err(e) => log::warn!("[OVERLAY] click sound failed: {}", e),
        }

        self.rotation_deg = PRESSED_ROTATION_DEG;
        self.pressed = true;

        self.hold.stop();
        if let Err(e) = self.hold.play() {
            log::warn!("[OVERLAY] hold sound failed: {}", e);
        }
    }

    fn handle_release(&mut self) {
        self.pressed = false;
        self.hold.stop();
        self.rotation_deg = REST_ROTATION_DEG;
    }

    /// Drop finished clicks; loop the hold sound only while still pressed.
    fn service_voices(&mut self) {
        self.clicks.retain_mut(|click| !click.take_finished());

        if self.hold.take_finished() && self.pressed {
            if let Err(e) = self.hold.play() {
                log::warn!("[OVERLAY] hold sound restart failed: {}", e);
            }
        }
    }

    /// Swap the displayed image; position and rotation are untouched.
    pub fn change_cursor(&mut self, cursor: CursorImage) {
        self.cursor = cursor;
        self.cursor_revision += 1;
    }

    /// Apply `volume` to the hold voice and every live click.
    pub fn set_volume(&mut self, volume: Volume) {
        self.volume = volume;
        self.hold.set_volume(volume);
        for click in &mut self.clicks {
            click.set_volume(volume);
        }
    }

    /// Escape pressed while the overlay had focus.
    pub fn handle_escape(&mut self) {
        log::info!("[OVERLAY] escape pressed");
        self.deactivate();
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn screen(&self) -> &ScreenInfo {
        &self.screen
    }

    /// Pointer position relative to the bound display's origin.
    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn rotation_deg(&self) -> f32 {
        self.rotation_deg
    }

    pub fn cursor(&self) -> &CursorImage {
        &self.cursor
    }

    /// Bumped on every [`change_cursor`](Self::change_cursor).
    pub fn cursor_revision(&self) -> u64 {
        self.cursor_revision
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Number of click voices still playing.
    pub fn live_clicks(&self) -> usize {
        self.clicks.len()
    }
}

impl<P, F, C> OverlayController<P, F, C>
where
    F: VoiceFactory,
    C: SystemCursor,
{
    /// Stop polling and all sound, restore the cursor and notify once.
    ///
    /// Safe to call any number of times.
    pub fn deactivate(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        self.hold.stop();
        for mut click in self.clicks.drain(..) {
            click.stop();
        }
        self.pressed = false;
        self.rotation_deg = REST_ROTATION_DEG;
        self.system_cursor.show();

        log::info!("[OVERLAY] closed");
        if let Some(notify) = self.on_close.take() {
            notify();
        }
    }
}

impl<P, F, C> Drop for OverlayController<P, F, C>
where
    F: VoiceFactory,
    C: SystemCursor,
{
    fn drop(&mut self) {
        self.deactivate();
    }
}
