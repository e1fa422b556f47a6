//! Presentation-side sink for game notifications

use glam::Vec2;

use crate::sim::{GameEvent, Sound};

/// Receives everything the simulation wants shown or heard
///
/// Implemented by the rendering/audio/UI layer. All calls happen on the game
/// loop thread, in the order the simulation emitted them.
pub trait Host {
    /// Play a sound cue at the given volume (0.0 - 1.0)
    fn play_sound(&mut self, sound: Sound, volume: f32);

    fn show_death_count(&mut self, deaths: u32);

    /// 1-based level being played, out of `total`
    fn show_level_progress(&mut self, current: usize, total: usize);

    fn spawn_burst_effect(&mut self, pos: Vec2);

    fn set_start_prompt_visible(&mut self, visible: bool);
}

/// Headless host that writes every notification to the log
#[derive(Debug, Default)]
pub struct LogHost {
    /// Last HUD state, for summaries
    pub deaths: u32,
    pub level: (usize, usize),
}

impl Host for LogHost {
    fn play_sound(&mut self, sound: Sound, volume: f32) {
        log::info!("sound: {} (volume {:.2})", sound.as_str(), volume);
    }

    fn show_death_count(&mut self, deaths: u32) {
        self.deaths = deaths;
        log::info!("deaths: {}", deaths);
    }

    fn show_level_progress(&mut self, current: usize, total: usize) {
        self.level = (current, total);
        log::info!("level: {}/{}", current, total);
    }

    fn spawn_burst_effect(&mut self, pos: Vec2) {
        log::debug!("burst at ({:.0}, {:.0})", pos.x, pos.y);
    }

    fn set_start_prompt_visible(&mut self, visible: bool) {
        log::debug!("start prompt {}", if visible { "shown" } else { "hidden" });
    }
}

/// Recording host: collects notifications back into events
impl Host for Vec<GameEvent> {
    fn play_sound(&mut self, sound: Sound, _volume: f32) {
        self.push(GameEvent::PlaySound(sound));
    }

    fn show_death_count(&mut self, deaths: u32) {
        self.push(GameEvent::DeathCount(deaths));
    }

    fn show_level_progress(&mut self, current: usize, total: usize) {
        self.push(GameEvent::LevelProgress { current, total });
    }

    fn spawn_burst_effect(&mut self, pos: Vec2) {
        self.push(GameEvent::Burst(pos));
    }

    fn set_start_prompt_visible(&mut self, visible: bool) {
        self.push(GameEvent::StartPrompt(visible));
    }
}
