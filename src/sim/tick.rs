//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. Within one tick
//! the order is always: queued jump requests, physics step, obstacle overlap,
//! flip zone overlap, buffered jump, particles.

use glam::Vec2;

use super::burst::{spawn_burst, update_particles};
use super::state::{GameEvent, GamePhase, GameState, Sound};
use super::zones::FlipZone;
use crate::consts::*;
use crate::{polarity_sign, run_speed};

/// Ticks the autopilot plays ahead, a little longer than one jump's airtime
const AUTOPILOT_HORIZON: u32 = 33;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump requests received since the previous tick (click/tap/space/up)
    pub jumps: u32,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;
    state.clock_ms += dt as f64 * 1000.0;

    for _ in 0..input.jumps {
        request_jump(state);
    }
    if input.idle_mode && autopilot_wants_jump(state, dt) {
        request_jump(state);
    }

    // The player has no body until the first jump
    if state.has_started() {
        let colliders = [state.platform];
        state.player.step(state.gravity, dt, &colliders);
    }

    if state.phase == GamePhase::Running {
        check_obstacles(state);
    }

    if state.phase == GamePhase::Running {
        if let Some(zone) = state.zones.crossed(&state.player.rect, state.inverted) {
            on_flip_zone(state, zone);
        }
    }

    check_buffered_jump(state);

    update_particles(&mut state.particles, dt);
}

/// Handle one jump request
///
/// The first request starts the run. After that, a request jumps if the
/// player rests against the surface gravity pulls it toward, otherwise it is
/// buffered for `JUMP_BUFFER_MS`.
pub fn request_jump(state: &mut GameState) {
    if !state.has_started() {
        start(state);
        return;
    }

    if state.player.is_resting(state.inverted) {
        jump(state);
    } else {
        state.jump_buffered_at = Some(state.clock_ms);
        log::debug!("Jump buffered at {:.0} ms", state.clock_ms);
    }
}

fn start(state: &mut GameState) {
    state.phase = GamePhase::Running;
    state.player.vel.x = VELOCITY;
    state.emit(GameEvent::StartPrompt(false));
    log::info!("Run started");
}

fn jump(state: &mut GameState) {
    state.jump_buffered_at = None;
    state.player.vel.y = -JUMP_IMPULSE * polarity_sign(state.inverted);
    state.emit(GameEvent::PlaySound(Sound::Jump));
}

/// Take a buffered jump if the player has landed within the window
fn check_buffered_jump(state: &mut GameState) {
    let Some(requested_at) = state.jump_buffered_at else {
        return;
    };

    if state.clock_ms - requested_at >= JUMP_BUFFER_MS {
        state.jump_buffered_at = None;
        return;
    }

    if state.player.is_resting(state.inverted) {
        log::debug!(
            "Buffered jump taken {:.0} ms after request",
            state.clock_ms - requested_at
        );
        jump(state);
    }
}

/// Die on the first obstacle the player overlaps
fn check_obstacles(state: &mut GameState) {
    let Some(hit) = state.obstacles.first_overlapping(&state.player.rect) else {
        return;
    };
    log::info!(
        "Hit obstacle {} of level {} at ({:.0}, {:.0})",
        hit.id,
        hit.level + 1,
        state.player.rect.pos.x,
        state.player.rect.pos.y
    );

    let at = state.player.rect.pos;
    state.emit(GameEvent::Burst(at));
    if state.effects_enabled {
        spawn_burst(&mut state.particles, at, state.seed, state.bursts);
    }
    state.bursts += 1;

    restart(state);
}

/// Back to level 0 with normal gravity; the session keeps counting deaths
fn restart(state: &mut GameState) {
    let deaths = state.session.record_death();

    state.phase = GamePhase::Running;
    state.current_level = 0;
    state.inverted = false;
    state.gravity = GRAVITY;
    state.jump_buffered_at = None;
    state.player.teleport(START_POS, Vec2::new(VELOCITY, 0.0));

    state.obstacles.clear();
    state.spawn_opening_levels();

    state.emit(GameEvent::PlaySound(Sound::Hit));
    state.emit(GameEvent::DeathCount(deaths));
    state.emit_level_progress();
}

/// Flip gravity and move on to the next level
fn on_flip_zone(state: &mut GameState, zone: FlipZone) {
    if !state.is_playing() {
        return;
    }

    state.inverted = !state.inverted;
    state.current_level += 1;
    log::info!(
        "{:?} flip: level {} of {}, inverted={}",
        zone,
        state.current_level + 1,
        state.catalog.len(),
        state.inverted
    );

    state.obstacles.erase_level(state.current_level - 1);

    if state.current_level >= state.catalog.len() {
        win(state);
        return;
    }

    if state.current_level < state.catalog.last_index() {
        state
            .obstacles
            .spawn_level(&state.catalog, state.current_level + 1);
    }

    state.gravity = GRAVITY * polarity_sign(state.inverted);
    state.player.vel.x = run_speed(state.inverted);
    state.emit_level_progress();
}

fn win(state: &mut GameState) {
    log::info!("All {} levels cleared", state.catalog.len());

    state.phase = GamePhase::Won;
    // Gravity is frozen to normal, so jumps on the podium must be upward
    state.inverted = false;
    state.gravity = GRAVITY;
    state.jump_buffered_at = None;
    state.player.teleport(WIN_POS, Vec2::ZERO);

    state.emit(GameEvent::PlaySound(Sound::Win));
}

/// Idle mode: start immediately, then jump only when running on would hit
/// an obstacle and jumping right now would not
fn autopilot_wants_jump(state: &GameState, dt: f32) -> bool {
    match state.phase {
        GamePhase::Ready => true,
        GamePhase::Won => false,
        GamePhase::Running => {
            state.player.is_resting(state.inverted)
                && autopilot_hits_obstacle(state, false, dt)
                && !autopilot_hits_obstacle(state, true, dt)
        }
    }
}

/// Replay the player's physics `AUTOPILOT_HORIZON` ticks ahead against the
/// live obstacles. Polarity is held fixed.
fn autopilot_hits_obstacle(state: &GameState, jump_now: bool, dt: f32) -> bool {
    let mut body = state.player.clone();
    if jump_now {
        body.vel.y = -JUMP_IMPULSE * polarity_sign(state.inverted);
    }

    let colliders = [state.platform];
    (0..AUTOPILOT_HORIZON).any(|_| {
        body.step(state.gravity, dt, &colliders);
        state.obstacles.first_overlapping(&body.rect).is_some()
    })
}
