//! Audio module - sound cues for gameplay events.

mod cues;
mod plugin;

pub use cues::SoundCue;
pub use plugin::{AudioFeedbackPlugin, SoundLibrary};
