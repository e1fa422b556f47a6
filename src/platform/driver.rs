//! Fixed-step frame driver
//!
//! Hosts call [`Driver::update`] once per rendered frame with the elapsed
//! wall time. The driver turns that into whole simulation ticks, hands any
//! jump requests queued since the last tick to the next one, and forwards the
//! notifications each tick produced to the [`Host`].

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};

use super::host::Host;

/// Owns a running game and paces it against frame time
pub struct Driver<H: Host> {
    state: GameState,
    host: H,
    settings: Settings,
    accumulator: f32,
    pending_jumps: u32,
    idle_mode: bool,
}

impl<H: Host> Driver<H> {
    /// Wrap a game; its opening notifications go to `host` immediately
    pub fn new(mut state: GameState, host: H, settings: Settings) -> Self {
        state.effects_enabled = settings.effective_particles();
        let mut driver = Self {
            state,
            host,
            settings,
            accumulator: 0.0,
            pending_jumps: 0,
            idle_mode: false,
        };
        driver.dispatch();
        driver
    }

    /// Pointer-down or jump key; applied on the next tick
    pub fn on_jump_requested(&mut self) {
        self.pending_jumps += 1;
    }

    /// Let the autopilot play
    pub fn set_idle_mode(&mut self, idle: bool) {
        self.idle_mode = idle;
    }

    /// Advance by one frame of `frame_dt` seconds. Returns ticks run.
    pub fn update(&mut self, frame_dt: f32) -> u32 {
        // A NaN or infinite delta would poison the accumulator for good
        let dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < self.settings.max_substeps {
            // Requests only reach the first tick of the frame
            let input = TickInput {
                jumps: std::mem::take(&mut self.pending_jumps),
                idle_mode: self.idle_mode,
            };
            tick(&mut self.state, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            self.dispatch();
        }

        substeps
    }

    /// Start over from the Ready screen, keeping the session's death count
    pub fn new_game(&mut self, seed: u64) {
        let catalog = self.state.catalog.clone();
        let session = self.state.session.clone();
        let mut state = GameState::with_session(catalog, seed, session);
        state.effects_enabled = self.settings.effective_particles();

        self.state = state;
        self.accumulator = 0.0;
        self.pending_jumps = 0;
        self.dispatch();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    fn dispatch(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::PlaySound(sound) => {
                    if self.settings.sound_enabled() {
                        self.host.play_sound(sound, self.settings.sfx_volume);
                    }
                }
                GameEvent::DeathCount(deaths) => self.host.show_death_count(deaths),
                GameEvent::LevelProgress { current, total } => {
                    self.host.show_level_progress(current, total)
                }
                GameEvent::Burst(pos) => {
                    if self.settings.effective_particles() {
                        self.host.spawn_burst_effect(pos);
                    }
                }
                GameEvent::StartPrompt(visible) => self.host.set_start_prompt_visible(visible),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GamePhase, LevelCatalog, Sound};

    fn driver(settings: Settings) -> Driver<Vec<GameEvent>> {
        let state = GameState::new(LevelCatalog::builtin().unwrap(), 99);
        Driver::new(state, Vec::new(), settings)
    }

    #[test]
    fn test_opening_notifications_dispatched() {
        let driver = driver(Settings::default());
        assert_eq!(
            driver.host().as_slice(),
            &[
                GameEvent::StartPrompt(true),
                GameEvent::DeathCount(0),
                GameEvent::LevelProgress {
                    current: 1,
                    total: 8
                },
            ]
        );
    }

    #[test]
    fn test_frame_time_becomes_fixed_ticks() {
        let mut driver = driver(Settings::default());

        assert_eq!(driver.update(SIM_DT * 0.5), 0);
        assert_eq!(driver.update(SIM_DT * 0.6), 1);
        assert_eq!(driver.update(SIM_DT * 3.0), 3);
        assert_eq!(driver.state().time_ticks, 4);
    }

    #[test]
    fn test_long_frames_are_clamped() {
        let mut driver = driver(Settings::default());
        // A 2 s hitch runs at most MAX_FRAME_DT worth of ticks
        let ticks = driver.update(2.0);
        assert!(ticks <= (MAX_FRAME_DT / SIM_DT).ceil() as u32);
    }

    #[test]
    fn test_non_finite_frames_are_ignored() {
        let mut driver = driver(Settings::default());

        assert_eq!(driver.update(f32::NAN), 0);
        assert_eq!(driver.update(f32::INFINITY), 0);
        assert_eq!(driver.update(-1.0), 0);

        // The accumulator is still usable afterwards
        assert_eq!(driver.update(SIM_DT), 1);
        assert_eq!(driver.state().time_ticks, 1);
    }

    #[test]
    fn test_substeps_are_capped() {
        let mut driver = driver(Settings {
            max_substeps: 2,
            ..Default::default()
        });
        assert_eq!(driver.update(MAX_FRAME_DT), 2);
    }

    #[test]
    fn test_queued_jump_starts_game() {
        let mut driver = driver(Settings::default());
        driver.host_mut().clear();

        driver.on_jump_requested();
        // Nothing happens between ticks
        assert_eq!(driver.state().phase, GamePhase::Ready);

        driver.update(SIM_DT);
        assert_eq!(driver.state().phase, GamePhase::Running);
        assert_eq!(driver.host().as_slice(), &[GameEvent::StartPrompt(false)]);
    }

    #[test]
    fn test_mute_and_reduced_motion_filter_notifications() {
        let mut driver = driver(Settings {
            mute: true,
            reduced_motion: true,
            ..Default::default()
        });
        driver.on_jump_requested();

        // Run into the first obstacle
        for _ in 0..120 {
            driver.update(SIM_DT);
        }

        let events = driver.into_host();
        assert!(events.contains(&GameEvent::DeathCount(1)));
        assert!(!events.iter().any(|e| matches!(e, GameEvent::PlaySound(_))));
        assert!(!events.iter().any(|e| matches!(e, GameEvent::Burst(_))));
    }

    #[test]
    fn test_hit_is_heard_by_default() {
        let mut driver = driver(Settings::default());
        driver.on_jump_requested();
        for _ in 0..120 {
            driver.update(SIM_DT);
        }

        assert!(driver.state().particles.len() <= BURST_PARTICLES);
        let events = driver.into_host();
        assert!(events.contains(&GameEvent::PlaySound(Sound::Hit)));
        assert!(events.iter().any(|e| matches!(e, GameEvent::Burst(_))));
    }

    #[test]
    fn test_new_game_keeps_session() {
        let mut driver = driver(Settings::default());
        driver.on_jump_requested();
        for _ in 0..120 {
            driver.update(SIM_DT);
        }
        let deaths = driver.state().death_count();
        assert!(deaths >= 1);

        driver.new_game(100);
        assert_eq!(driver.state().phase, GamePhase::Ready);
        assert_eq!(driver.state().death_count(), deaths);
        assert_eq!(
            driver.host().last(),
            Some(&GameEvent::LevelProgress {
                current: 1,
                total: 8
            })
        );
    }
}
