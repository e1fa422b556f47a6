//! Death burst particles
//!
//! Purely cosmetic. Each burst reseeds from the run seed and the burst
//! counter, so replays of the same input stay identical.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// A particle for visual effects
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1 at spawn, 0 at expiry
    pub life: f32,
    /// Render scale, shrinks with life
    pub size: f32,
}

/// Spawn a burst of particles at `pos`
pub fn spawn_burst(particles: &mut Vec<Particle>, pos: Vec2, seed: u64, burst_index: u32) {
    let stream = u64::from(burst_index).wrapping_mul(2654435761);
    let mut rng = Pcg32::seed_from_u64(seed.wrapping_add(stream));

    for _ in 0..BURST_PARTICLES {
        let vel = Vec2::new(
            rng.random_range(-BURST_SPEED..=BURST_SPEED),
            rng.random_range(-BURST_SPEED..=BURST_SPEED),
        );
        particles.push(Particle {
            pos,
            vel,
            life: 1.0,
            size: 1.0,
        });
    }
}

/// Move particles and drop expired ones
pub fn update_particles(particles: &mut Vec<Particle>, dt: f32) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel * dt;
        particle.life -= dt / BURST_LIFESPAN;
        particle.size = particle.life.max(0.0);
    }
    particles.retain(|p| p.life > 0.0);
}
