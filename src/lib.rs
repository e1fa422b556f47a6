//! Flip Runner - a gravity-flipping auto-runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, levels, game state)
//! - `platform`: Host abstraction (notification sink, fixed-step frame driver)
//! - `settings`: Host-side preferences

pub mod platform;
pub mod settings;
pub mod sim;

pub use platform::{Driver, Host};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the driver will accept (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 960.0;
    pub const PLAYFIELD_HEIGHT: f32 = 540.0;

    /// Gravity magnitude (pixels/s²), sign follows polarity
    pub const GRAVITY: f32 = 1600.0;
    /// Horizontal run speed (pixels/s)
    pub const VELOCITY: f32 = 200.0;
    /// Vertical jump impulse magnitude (pixels/s)
    pub const JUMP_IMPULSE: f32 = 400.0;
    /// Grace window for an early jump request (ms)
    pub const JUMP_BUFFER_MS: f64 = 200.0;

    /// Player
    pub const PLAYER_SIZE: Vec2 = Vec2::new(20.0, 20.0);
    pub const START_POS: Vec2 = Vec2::new(160.0, 140.0);
    /// Where the player is parked after clearing the last level
    pub const WIN_POS: Vec2 = Vec2::new(PLAYFIELD_WIDTH / 2.0 - 10.0, 80.0);

    /// Obstacle default edge length
    pub const OBSTACLE_SIZE: f32 = 20.0;

    /// The single static platform (x, y, w, h)
    pub const PLATFORM_POS: Vec2 = Vec2::new(160.0, 200.0);
    pub const PLATFORM_SIZE: Vec2 = Vec2::new(640.0, 20.0);

    /// Flip zone past the right end, crossed under normal gravity
    pub const FORWARD_ZONE_POS: Vec2 = Vec2::new(800.0, 220.0);
    /// Flip zone past the left end, crossed under inverted gravity
    pub const BACKWARD_ZONE_POS: Vec2 = Vec2::new(0.0, 180.0);
    pub const ZONE_SIZE: Vec2 = Vec2::new(160.0, 20.0);

    /// Death burst
    pub const BURST_PARTICLES: usize = 10;
    pub const BURST_LIFESPAN: f32 = 0.3;
    pub const BURST_SPEED: f32 = 200.0;
}

/// Unit vertical direction gravity pulls toward (+1 down, -1 up)
#[inline]
pub fn polarity_sign(inverted: bool) -> f32 {
    if inverted { -1.0 } else { 1.0 }
}

/// Horizontal run speed for the given polarity (right when normal, left when inverted)
#[inline]
pub fn run_speed(inverted: bool) -> f32 {
    consts::VELOCITY * polarity_sign(inverted)
}
