//! Audio plugin - plays sound cues for gameplay events.

use bevy::prelude::*;
use bevy_kira_audio::{Audio, AudioControl, AudioPlugin as KiraAudioPlugin, AudioSource};
use std::collections::{HashMap, HashSet};

use super::cues::SoundCue;
use crate::core::GameEvent;
use crate::rendering::locate_asset;

/// Loaded sound handles. Cues whose file is missing are simply absent.
#[derive(Resource, Default)]
pub struct SoundLibrary {
    sounds: HashMap<SoundCue, Handle<AudioSource>>,
}

impl SoundLibrary {
    pub fn get(&self, cue: SoundCue) -> Option<&Handle<AudioSource>> {
        self.sounds.get(&cue)
    }
}

/// Audio plugin - kira backend plus event-driven cues.
pub struct AudioFeedbackPlugin;

impl Plugin for AudioFeedbackPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(KiraAudioPlugin)
            .init_resource::<SoundLibrary>()
            .add_systems(Startup, load_sounds)
            .add_systems(Update, play_event_sounds);
    }
}

fn load_sounds(asset_server: Res<AssetServer>, mut library: ResMut<SoundLibrary>) {
    for cue in SoundCue::ALL {
        match locate_asset(cue.path()) {
            Ok(path) => {
                library.sounds.insert(cue, asset_server.load(path));
            }
            Err(e) => warn!("{}. {:?} will be silent.", e, cue),
        }
    }
    info!("Loaded {} of {} sound cues", library.sounds.len(), SoundCue::ALL.len());
}

/// One play per cue per frame, however many events asked for it.
fn play_event_sounds(mut events: EventReader<GameEvent>, library: Res<SoundLibrary>, audio: Res<Audio>) {
    let cues: HashSet<SoundCue> = events.read().filter_map(SoundCue::for_event).collect();

    for cue in cues {
        if let Some(handle) = library.get(cue) {
            audio.play(handle.clone()).with_volume(cue.volume());
        }
    }
}
