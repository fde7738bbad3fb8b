//! Click and hold sound playback.

pub mod engine;
pub mod voice;

pub use engine::{AudioEngine, Clip, SinkVoice};
pub use voice::{SoundCue, Voice, VoiceFactory};
