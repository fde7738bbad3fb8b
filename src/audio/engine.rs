//! `rodio` playback backend.
//!
//! Each voice owns at most one `Sink`. Restarting a voice drops the old sink
//! and appends a freshly decoded copy of the clip to a new one, so a stopped
//! voice can never resurface.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use super::voice::{SoundCue, Voice, VoiceFactory};
use crate::error::AudioError;
use crate::model::constants::{SOUND_CLICK_FILE, SOUND_HOLD_FILE};
use crate::model::Volume;

/// Encoded audio kept in memory and decoded on every play.
#[derive(Debug, Clone)]
pub struct Clip {
    path: PathBuf,
    bytes: Arc<[u8]>,
}

impl Clip {
    pub fn load(path: &Path) -> Result<Self, AudioError> {
        let bytes = fs::read(path).map_err(|source| AudioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            bytes: bytes.into(),
        })
    }

    fn decoder(&self) -> Result<Decoder<Cursor<Arc<[u8]>>>, AudioError> {
        Ok(Decoder::new(Cursor::new(Arc::clone(&self.bytes)))?)
    }
}

/// Audio output plus the two cue clips.
///
/// Without an output device every voice is muted: it "finishes" right after
/// it starts, so the overlay state machine runs unchanged.
pub struct AudioEngine {
    // Dropping the stream silences every sink created from the handle.
    _stream: Option<OutputStream>,
    handle: Option<OutputStreamHandle>,
    click: Clip,
    hold: Clip,
}

impl AudioEngine {
    /// Load both cue clips from `assets_dir` and open the default output.
    ///
    /// Missing clips are an error; a missing output device is not.
    pub fn open(assets_dir: &Path) -> Result<Self, AudioError> {
        let click = Clip::load(&assets_dir.join(SOUND_CLICK_FILE))?;
        let hold = Clip::load(&assets_dir.join(SOUND_HOLD_FILE))?;

        let (stream, handle) = match OutputStream::try_default() {
            Ok((stream, handle)) => (Some(stream), Some(handle)),
            Err(e) => {
                log::warn!("[AUDIO] {}; click and hold sounds are muted", AudioError::from(e));
                (None, None)
            }
        };

        Ok(Self {
            _stream: stream,
            handle,
            click,
            hold,
        })
    }

    pub fn is_muted(&self) -> bool {
        self.handle.is_none()
    }
}

impl VoiceFactory for AudioEngine {
    type Voice = SinkVoice;

    fn voice(&self, cue: SoundCue, volume: Volume) -> SinkVoice {
        let clip = match cue {
            SoundCue::Click => &self.click,
            SoundCue::Hold => &self.hold,
        };
        SinkVoice {
            handle: self.handle.clone(),
            clip: clip.clone(),
            volume,
            sink: None,
            playing: false,
        }
    }
}

/// A voice playing one clip through its own sink.
pub struct SinkVoice {
    handle: Option<OutputStreamHandle>,
    clip: Clip,
    volume: Volume,
    sink: Option<Sink>,
    playing: bool,
}

impl Voice for SinkVoice {
    fn play(&mut self) -> Result<(), AudioError> {
        self.stop();
        if let Some(handle) = &self.handle {
            let sink = Sink::try_new(handle)?;
            sink.set_volume(self.volume.gain());
            sink.append(self.clip.decoder()?);
            self.sink = Some(sink);
        }
        self.playing = true;
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.playing = false;
    }

    fn set_volume(&mut self, volume: Volume) {
        self.volume = volume;
        if let Some(sink) = &self.sink {
            sink.set_volume(volume.gain());
        }
    }

    fn take_finished(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        let done = self.sink.as_ref().map_or(true, Sink::empty);
        if done {
            log::trace!("[AUDIO] {} reached end of media", self.clip.path.display());
            self.sink = None;
            self.playing = false;
        }
        done
    }
}

impl Drop for SinkVoice {
    fn drop(&mut self) {
        self.stop();
    }
}
