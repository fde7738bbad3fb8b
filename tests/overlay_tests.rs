//! Tests for the overlay state machine with scripted input and fake voices.

mod common;

use std::cell::Cell;
use std::rc::Rc;

use common::*;
use pointer::audio::SoundCue;
use pointer::model::{Settings, Volume, PRESSED_ROTATION_DEG, REST_ROTATION_DEG};
use pointer::overlay::{OverlayController, TickOutcome};

type Overlay = OverlayController<ScriptedPointer, FakeAudio, FakeCursor>;

fn activate_on(
    fakes: &FakeBackends,
    settings: &Settings,
    x: i32,
    y: i32,
) -> (Overlay, Rc<Cell<usize>>) {
    let closes = Rc::new(Cell::new(0));
    let counter = Rc::clone(&closes);
    let overlay = OverlayController::activate(
        cursor_image(),
        screen(1, x, y),
        settings,
        fakes.parts(),
        move || counter.set(counter.get() + 1),
    );
    (overlay, closes)
}

fn activate(fakes: &FakeBackends) -> (Overlay, Rc<Cell<usize>>) {
    activate_on(fakes, &Settings::default(), 0, 0)
}

// === Activation ===

#[test]
fn activation_hides_system_cursor() {
    let fakes = FakeBackends::default();
    let (overlay, _) = activate(&fakes);
    assert!(fakes.cursor.hidden.get());
    assert!(!overlay.is_closed());
    assert!(!overlay.is_pressed());
    assert_eq!(overlay.rotation_deg(), REST_ROTATION_DEG);
}

#[test]
fn activation_takes_volume_from_settings() {
    let fakes = FakeBackends::default();
    let settings = Settings {
        volume: Volume::new(35),
        ..Settings::default()
    };
    let (overlay, _) = activate_on(&fakes, &settings, 0, 0);
    assert_eq!(overlay.volume(), Volume::new(35));
    assert_eq!(fakes.audio.record(fakes.audio.hold_id()).volume, Volume::new(35));
}

// === Position tracking ===

#[test]
fn position_is_relative_to_bound_display() {
    let fakes = FakeBackends::default();
    let (mut overlay, _) = activate_on(&fakes, &Settings::default(), 1920, 0);

    fakes.pointer.move_to(2020, 300);
    let outcome = overlay.tick();

    assert!(outcome.repaint);
    assert_eq!(overlay.position(), (100, 300));
}

#[test]
fn unchanged_position_does_not_request_repaint() {
    let fakes = FakeBackends::default();
    fakes.pointer.move_to(10, 10);
    let (mut overlay, _) = activate(&fakes);

    assert_eq!(overlay.tick(), TickOutcome::default());
    assert_eq!(overlay.tick(), TickOutcome::default());
}

// === Edge detection ===

#[test]
fn press_then_release_rotates_and_restores() {
    let fakes = FakeBackends::default();
    let (mut overlay, _) = activate(&fakes);
    assert_eq!(overlay.rotation_deg(), REST_ROTATION_DEG);

    fakes.pointer.press();
    let down = overlay.tick();
    assert!(down.pressed && !down.released && down.repaint);
    assert_eq!(overlay.rotation_deg(), PRESSED_ROTATION_DEG);
    assert!(overlay.is_pressed());

    fakes.pointer.release();
    let up = overlay.tick();
    assert!(up.released && !up.pressed && up.repaint);
    assert_eq!(overlay.rotation_deg(), REST_ROTATION_DEG);
    assert!(!overlay.is_pressed());
}

#[test]
fn holding_the_button_fires_a_single_press() {
    let fakes = FakeBackends::default();
    let (mut overlay, _) = activate(&fakes);

    fakes.pointer.press();
    let presses = (0..50).filter(|_| overlay.tick().pressed).count();

    assert_eq!(presses, 1);
    assert_eq!(fakes.audio.ids_of(SoundCue::Click).len(), 1);
}

#[test]
fn press_count_matches_low_to_high_transitions() {
    let fakes = FakeBackends::default();
    let (mut overlay, _) = activate(&fakes);
    let levels = [
        false, true, true, false, true, false, false, true, true, true, false, true,
    ];

    let mut presses = 0;
    let mut releases = 0;
    for &down in &levels {
        fakes.pointer.set_left(down);
        let outcome = overlay.tick();
        presses += outcome.pressed as usize;
        releases += outcome.released as usize;
    }

    assert_eq!(presses, 4);
    assert_eq!(releases, 3);
    assert_eq!(fakes.audio.ids_of(SoundCue::Click).len(), 4);
}

#[test]
fn sub_tick_click_is_not_observed() {
    let fakes = FakeBackends::default();
    let (mut overlay, _) = activate(&fakes);

    fakes.pointer.press();
    fakes.pointer.release();
    let outcome = overlay.tick();

    assert!(!outcome.pressed && !outcome.released);
}

// === Click voices ===

#[test]
fn press_plays_click_at_current_volume() {
    let fakes = FakeBackends::default();
    let (mut overlay, _) = activate(&fakes);
    overlay.set_volume(Volume::new(20));

    fakes.pointer.press();
    overlay.tick();

    let click = fakes.audio.record(fakes.audio.ids_of(SoundCue::Click)[0]);
    assert_eq!(click.plays, 1);
    assert_eq!(click.volume, Volume::new(20));
    assert_eq!(overlay.live_clicks(), 1);
}

#[test]
fn release_lets_clicks_finish_naturally() {
    let fakes = FakeBackends::default();
    let (mut overlay, _) = activate(&fakes);

    fakes.pointer.press();
    overlay.tick();
    fakes.pointer.release();
    overlay.tick();

    let click = fakes.audio.record(fakes.audio.ids_of(SoundCue::Click)[0]);
    assert!(click.playing);
    assert_eq!(click.stops, 0);
    assert_eq!(overlay.live_clicks(), 1);
}

#[test]
fn overlapping_clicks_are_removed_independently() {
    let fakes = FakeBackends::default();
    let (mut overlay, _) = activate(&fakes);

    for _ in 0..2 {
        fakes.pointer.press();
        overlay.tick();
        fakes.pointer.release();
        overlay.tick();
    }
    let clicks = fakes.audio.ids_of(SoundCue::Click);
    assert_eq!(clicks.len(), 2);
    assert_eq!(overlay.live_clicks(), 2);
    assert_eq!(fakes.audio.playing_count(SoundCue::Click), 2);

    fakes.audio.finish(clicks[1]);
    overlay.tick();
    assert_eq!(overlay.live_clicks(), 1);
    assert!(fakes.audio.record(clicks[0]).playing);

    fakes.audio.finish(clicks[0]);
    overlay.tick();
    assert_eq!(overlay.live_clicks(), 0);
}

// === Hold voice ===

#[test]
fn press_restarts_hold_voice() {
    let fakes = FakeBackends::default();
    let (mut overlay, _) = activate(&fakes);
    let hold = fakes.audio.hold_id();

    fakes.pointer.press();
    overlay.tick();

    let record = fakes.audio.record(hold);
    assert!(record.playing);
    assert_eq!(record.plays, 1);
    assert_eq!(record.stops, 1);
    assert_eq!(fakes.audio.ids_of(SoundCue::Hold).len(), 1);
}

#[test]
fn hold_voice_loops_while_pressed_and_stops_after_release() {
    let fakes = FakeBackends::default();
    let (mut overlay, _) = activate(&fakes);
    let hold = fakes.audio.hold_id();

    fakes.pointer.press();
    overlay.tick();

    fakes.audio.finish(hold);
    overlay.tick();
    fakes.audio.finish(hold);
    overlay.tick();
    assert_eq!(fakes.audio.record(hold).plays, 3);

    fakes.pointer.release();
    overlay.tick();
    assert!(!fakes.audio.record(hold).playing);

    fakes.audio.force_finish(hold);
    overlay.tick();
    assert_eq!(fakes.audio.record(hold).plays, 3);
    assert!(!fakes.audio.record(hold).playing);
}

#[test]
fn release_in_the_same_tick_as_hold_end_does_not_restart() {
    let fakes = FakeBackends::default();
    let (mut overlay, _) = activate(&fakes);
    let hold = fakes.audio.hold_id();

    fakes.pointer.press();
    overlay.tick();

    fakes.audio.finish(hold);
    fakes.pointer.release();
    overlay.tick();

    assert_eq!(fakes.audio.record(hold).plays, 1);
    assert!(!fakes.audio.record(hold).playing);
}

// === Live changes ===

#[test]
fn set_volume_reaches_hold_and_live_clicks() {
    let fakes = FakeBackends::default();
    let (mut overlay, _) = activate(&fakes);

    fakes.pointer.press();
    overlay.tick();
    fakes.pointer.release();
    overlay.tick();
    fakes.pointer.press();
    overlay.tick();

    overlay.set_volume(Volume::new(7));

    assert_eq!(fakes.audio.record(fakes.audio.hold_id()).volume, Volume::new(7));
    for id in fakes.audio.ids_of(SoundCue::Click) {
        assert_eq!(fakes.audio.record(id).volume, Volume::new(7));
    }
}

#[test]
fn change_cursor_keeps_position_and_rotation() {
    let fakes = FakeBackends::default();
    let (mut overlay, _) = activate(&fakes);
    fakes.pointer.move_to(500, 400);
    fakes.pointer.press();
    overlay.tick();

    let before = overlay.cursor_revision();
    overlay.change_cursor(cursor_image());

    assert_eq!(overlay.cursor_revision(), before + 1);
    assert_eq!(overlay.position(), (500, 400));
    assert_eq!(overlay.rotation_deg(), PRESSED_ROTATION_DEG);
    assert!(overlay.is_pressed());
}

// === Teardown ===

#[test]
fn deactivate_notifies_exactly_once() {
    let fakes = FakeBackends::default();
    let (mut overlay, closes) = activate(&fakes);

    overlay.deactivate();
    overlay.deactivate();
    overlay.deactivate();
    assert_eq!(closes.get(), 1);

    drop(overlay);
    assert_eq!(closes.get(), 1);
}

#[test]
fn deactivate_stops_every_voice_and_restores_cursor() {
    let fakes = FakeBackends::default();
    let (mut overlay, _) = activate(&fakes);

    fakes.pointer.press();
    overlay.tick();
    overlay.deactivate();

    assert_eq!(fakes.audio.playing_count(SoundCue::Click), 0);
    assert_eq!(fakes.audio.playing_count(SoundCue::Hold), 0);
    assert_eq!(overlay.live_clicks(), 0);
    assert!(!fakes.cursor.hidden.get());
    assert_eq!(fakes.cursor.shows.get(), 1);
}

#[test]
fn ticks_after_deactivate_are_ignored() {
    let fakes = FakeBackends::default();
    let (mut overlay, _) = activate(&fakes);
    overlay.deactivate();

    fakes.pointer.move_to(300, 300);
    fakes.pointer.press();

    assert_eq!(overlay.tick(), TickOutcome::default());
    assert!(fakes.audio.ids_of(SoundCue::Click).is_empty());
}

#[test]
fn escape_deactivates() {
    let fakes = FakeBackends::default();
    let (mut overlay, closes) = activate(&fakes);

    overlay.handle_escape();

    assert!(overlay.is_closed());
    assert_eq!(closes.get(), 1);
}

#[test]
fn dropping_an_active_overlay_notifies_and_silences() {
    let fakes = FakeBackends::default();
    let (mut overlay, closes) = activate(&fakes);
    fakes.pointer.press();
    overlay.tick();

    drop(overlay);

    assert_eq!(closes.get(), 1);
    assert_eq!(fakes.audio.playing_count(SoundCue::Hold), 0);
    assert_eq!(fakes.audio.playing_count(SoundCue::Click), 0);
    assert!(!fakes.cursor.hidden.get());
    assert_eq!(fakes.cursor.shows.get(), 1);
}

#[test]
fn dropping_after_deactivate_shows_the_cursor_once() {
    let fakes = FakeBackends::default();
    let (mut overlay, closes) = activate(&fakes);

    overlay.deactivate();
    drop(overlay);

    assert_eq!(closes.get(), 1);
    assert_eq!(fakes.cursor.shows.get(), 1);
}
