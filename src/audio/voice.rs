//! Sound voice abstraction.
//!
//! A voice is one playback slot. Completion is observed by polling
//! [`Voice::take_finished`] from the UI loop, so no callback ever runs on
//! another thread.

use crate::error::AudioError;
use crate::model::Volume;

/// The two sound cues the overlay plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// One-shot click, played once per press.
    Click,
    /// Looped while the button is held.
    Hold,
}

pub trait Voice {
    /// Start playback from the beginning, discarding anything still playing.
    fn play(&mut self) -> Result<(), AudioError>;

    /// Stop playback. A stopped voice never reports completion.
    fn stop(&mut self);

    fn set_volume(&mut self, volume: Volume);

    /// Returns true once after playback reached the end of the media.
    fn take_finished(&mut self) -> bool;
}

/// Creates voices for a cue at a given volume.
pub trait VoiceFactory {
    type Voice: Voice;

    fn voice(&self, cue: SoundCue, volume: Volume) -> Self::Voice;
}

impl<F: VoiceFactory + ?Sized> VoiceFactory for std::rc::Rc<F> {
    type Voice = F::Voice;

    fn voice(&self, cue: SoundCue, volume: Volume) -> F::Voice {
        (**self).voice(cue, volume)
    }
}
