//! Test doubles for the overlay's pointer, audio and cursor collaborators.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::path::Path;
use std::rc::Rc;

use image::{Rgba, RgbaImage};
use pointer::audio::{SoundCue, Voice, VoiceFactory};
use pointer::error::{AudioError, PointerError};
use pointer::handlers::BackendProvider;
use pointer::input::{PointerSample, PointerSource};
use pointer::model::{Volume, CURSORS};
use pointer::overlay::{CursorImage, OverlayBackends};
use pointer::platform::{ScreenInfo, SystemCursor};

// === Pointer ===

/// Pointer whose state the test sets between ticks.
#[derive(Clone, Default)]
pub struct ScriptedPointer {
    state: Rc<Cell<PointerSample>>,
}

impl ScriptedPointer {
    pub fn move_to(&self, x: i32, y: i32) {
        let mut s = self.state.get();
        s.position = (x, y);
        self.state.set(s);
    }

    pub fn set_left(&self, down: bool) {
        let mut s = self.state.get();
        s.left_down = down;
        self.state.set(s);
    }

    pub fn press(&self) {
        self.set_left(true);
    }

    pub fn release(&self) {
        self.set_left(false);
    }
}

impl PointerSource for ScriptedPointer {
    fn sample(&mut self) -> PointerSample {
        self.state.get()
    }
}

// === Audio ===

#[derive(Debug, Clone)]
pub struct VoiceRecord {
    pub cue: SoundCue,
    pub volume: Volume,
    pub plays: usize,
    pub stops: usize,
    pub playing: bool,
    finished_pending: bool,
}

/// Records every voice it hands out; the test decides when media ends.
#[derive(Clone, Default)]
pub struct FakeAudio {
    voices: Rc<RefCell<Vec<VoiceRecord>>>,
}

impl FakeAudio {
    pub fn record(&self, id: usize) -> VoiceRecord {
        self.voices.borrow()[id].clone()
    }

    pub fn ids_of(&self, cue: SoundCue) -> Vec<usize> {
        self.voices
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, v)| v.cue == cue)
            .map(|(id, _)| id)
            .collect()
    }

    /// The session's single hold voice.
    pub fn hold_id(&self) -> usize {
        self.ids_of(SoundCue::Hold)[0]
    }

    /// Playback of a playing voice reaches the end of the media.
    pub fn finish(&self, id: usize) {
        let mut voices = self.voices.borrow_mut();
        let v = &mut voices[id];
        if v.playing {
            v.playing = false;
            v.finished_pending = true;
        }
    }

    /// Deliver an end-of-media notification even if the voice was stopped.
    pub fn force_finish(&self, id: usize) {
        let mut voices = self.voices.borrow_mut();
        voices[id].playing = false;
        voices[id].finished_pending = true;
    }

    pub fn playing_count(&self, cue: SoundCue) -> usize {
        self.voices
            .borrow()
            .iter()
            .filter(|v| v.cue == cue && v.playing)
            .count()
    }
}

impl VoiceFactory for FakeAudio {
    type Voice = FakeVoice;

    fn voice(&self, cue: SoundCue, volume: Volume) -> FakeVoice {
        let mut voices = self.voices.borrow_mut();
        voices.push(VoiceRecord {
            cue,
            volume,
            plays: 0,
            stops: 0,
            playing: false,
            finished_pending: false,
        });
        FakeVoice {
            id: voices.len() - 1,
            audio: self.clone(),
        }
    }
}

pub struct FakeVoice {
    id: usize,
    audio: FakeAudio,
}

impl FakeVoice {
    fn with<R>(&self, f: impl FnOnce(&mut VoiceRecord) -> R) -> R {
        f(&mut self.audio.voices.borrow_mut()[self.id])
    }
}

impl Voice for FakeVoice {
    fn play(&mut self) -> Result<(), AudioError> {
        self.with(|v| {
            v.plays += 1;
            v.playing = true;
            v.finished_pending = false;
        });
        Ok(())
    }

    fn stop(&mut self) {
        self.with(|v| {
            v.stops += 1;
            v.playing = false;
            v.finished_pending = false;
        });
    }

    fn set_volume(&mut self, volume: Volume) {
        self.with(|v| v.volume = volume);
    }

    fn take_finished(&mut self) -> bool {
        self.with(|v| std::mem::take(&mut v.finished_pending))
    }
}

// === System cursor ===

#[derive(Clone, Default)]
pub struct FakeCursor {
    pub hidden: Rc<Cell<bool>>,
    pub hides: Rc<Cell<usize>>,
    pub shows: Rc<Cell<usize>>,
}

impl SystemCursor for FakeCursor {
    fn hide(&mut self) {
        self.hidden.set(true);
        self.hides.set(self.hides.get() + 1);
    }

    fn show(&mut self) {
        self.hidden.set(false);
        self.shows.set(self.shows.get() + 1);
    }
}

// === Backends ===

#[derive(Clone, Default)]
pub struct FakeBackends {
    pub pointer: ScriptedPointer,
    pub audio: FakeAudio,
    pub cursor: FakeCursor,
    /// When set, opening a session fails as if the pointer were unreadable.
    pub pointer_unavailable: Rc<Cell<bool>>,
}

impl FakeBackends {
    pub fn parts(&self) -> OverlayBackends<ScriptedPointer, FakeAudio, FakeCursor> {
        OverlayBackends {
            pointer: self.pointer.clone(),
            voices: self.audio.clone(),
            system_cursor: self.cursor.clone(),
        }
    }
}

impl BackendProvider for FakeBackends {
    type Pointer = ScriptedPointer;
    type Voices = FakeAudio;
    type Cursor = FakeCursor;

    fn backends(
        &mut self,
    ) -> Result<OverlayBackends<ScriptedPointer, FakeAudio, FakeCursor>, PointerError> {
        if self.pointer_unavailable.get() {
            return Err(PointerError::PointerUnavailable);
        }
        Ok(self.parts())
    }
}

// === Fixtures ===

pub fn screen(index: usize, x: i32, y: i32) -> ScreenInfo {
    ScreenInfo {
        index,
        name: format!("TEST-{}", index),
        x,
        y,
        width: 1920,
        height: 1080,
        scale_factor: 1.0,
        is_primary: index == 0,
    }
}

pub fn cursor_image() -> CursorImage {
    CursorImage::from_native(RgbaImage::from_pixel(50, 50, Rgba([255, 255, 255, 255])))
}

/// Write a small PNG for every bundled cursor into `dir`.
pub fn write_cursor_assets(dir: &Path) {
    for (i, cursor) in CURSORS.iter().enumerate() {
        let shade = 100 + 50 * i as u8;
        RgbaImage::from_pixel(40, 60, Rgba([shade, shade, shade, 255]))
            .save(cursor.image_path(dir))
            .unwrap();
    }
}
