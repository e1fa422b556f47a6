//! Game state and core simulation types
//!
//! Everything the fixed-step tick reads or writes lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{PhysicsBody, Rect};
use super::burst::Particle;
use super::level::LevelCatalog;
use super::obstacles::ObstacleSet;
use super::zones::GravityFlipZones;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first jump input; the player does not move yet
    Ready,
    /// Running through the levels
    Running,
    /// Last level cleared
    Won,
}

/// Sound cues the host should play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sound {
    Jump,
    Hit,
    Win,
}

impl Sound {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sound::Jump => "jump",
            Sound::Hit => "hit",
            Sound::Win => "win",
        }
    }
}

/// Notifications for the presentation layer, drained after each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PlaySound(Sound),
    DeathCount(u32),
    /// 1-based level being played, out of `total`
    LevelProgress { current: usize, total: usize },
    /// Death burst at the player's position
    Burst(Vec2),
    StartPrompt(bool),
}

/// Per-process play session
///
/// Survives every death/restart inside a `GameState`; a fresh `Session` is
/// only created when the application itself starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub death_count: u32,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one death, returning the new total
    pub fn record_death(&mut self) -> u32 {
        self.death_count = self.death_count.saturating_add(1);
        self.death_count
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed for visual effects
    pub seed: u64,
    pub catalog: LevelCatalog,
    pub phase: GamePhase,
    /// Gravity pulls toward the top of the playfield
    pub inverted: bool,
    /// Signed vertical gravity currently applied to the player
    pub gravity: f32,
    /// Index into `catalog` of the level being played
    pub current_level: usize,
    pub player: PhysicsBody,
    /// The single static collider
    pub platform: Rect,
    pub zones: GravityFlipZones,
    pub obstacles: ObstacleSet,
    /// Clock time (ms) of a jump request made while airborne
    pub jump_buffered_at: Option<f64>,
    pub session: Session,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Simulated time in milliseconds
    pub clock_ms: f64,
    /// Number of bursts spawned, mixed into the particle seed
    pub bursts: u32,
    /// Whether death bursts spawn particles
    pub effects_enabled: bool,
    /// Visual particles (not gameplay-affecting)
    #[serde(skip)]
    pub particles: Vec<Particle>,
    /// Pending notifications
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// New game with a fresh session
    pub fn new(catalog: LevelCatalog, seed: u64) -> Self {
        Self::with_session(catalog, seed, Session::new())
    }

    /// New game continuing an existing session's death count
    pub fn with_session(catalog: LevelCatalog, seed: u64, session: Session) -> Self {
        let mut state = Self {
            seed,
            catalog,
            phase: GamePhase::Ready,
            inverted: false,
            gravity: GRAVITY,
            current_level: 0,
            player: PhysicsBody::new(Rect::new(START_POS, PLAYER_SIZE)),
            platform: Rect::new(PLATFORM_POS, PLATFORM_SIZE),
            zones: GravityFlipZones::default(),
            obstacles: ObstacleSet::new(),
            jump_buffered_at: None,
            session,
            time_ticks: 0,
            clock_ms: 0.0,
            bursts: 0,
            effects_enabled: true,
            particles: Vec::new(),
            events: Vec::new(),
        };

        state.spawn_opening_levels();

        state.emit(GameEvent::StartPrompt(true));
        state.emit(GameEvent::DeathCount(state.session.death_count));
        state.emit_level_progress();

        state
    }

    /// Game has left the Ready phase
    pub fn has_started(&self) -> bool {
        self.phase != GamePhase::Ready
    }

    /// Deaths and flips still count (false once won)
    pub fn is_playing(&self) -> bool {
        self.phase != GamePhase::Won
    }

    pub fn death_count(&self) -> u32 {
        self.session.death_count
    }

    /// Spawn level 0 and pre-spawn level 1
    pub(crate) fn spawn_opening_levels(&mut self) {
        self.obstacles.spawn_level(&self.catalog, 0);
        self.obstacles.spawn_level(&self.catalog, 1);
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub(crate) fn emit_level_progress(&mut self) {
        self.emit(GameEvent::LevelProgress {
            current: self.current_level + 1,
            total: self.catalog.len(),
        });
    }

    /// Pending notifications, oldest first
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all pending notifications
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
