//! Axis-aligned rectangles and the player's physics body
//!
//! Everything in the playfield is an axis-aligned rectangle with its origin at
//! the top-left corner. Only the player integrates; the platform, obstacles and
//! flip zones are static.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, origin top-left
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        debug_assert!(
            size.x > 0.0 && size.y > 0.0,
            "rectangle size must be positive, got {size}"
        );
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Strict overlap test - rectangles that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// A rectangle body with velocity and resting-contact flags
///
/// `resting_down` / `resting_up` describe contact at the end of the most
/// recent [`PhysicsBody::step`]; they are recomputed from scratch every step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsBody {
    pub rect: Rect,
    pub vel: Vec2,
    pub resting_down: bool,
    pub resting_up: bool,
}

impl PhysicsBody {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            vel: Vec2::ZERO,
            resting_down: false,
            resting_up: false,
        }
    }

    /// Resting flag for the direction gravity currently pulls
    #[inline]
    pub fn is_resting(&self, inverted: bool) -> bool {
        if inverted {
            self.resting_up
        } else {
            self.resting_down
        }
    }

    /// Move to a new position, dropping any contact
    pub fn teleport(&mut self, pos: Vec2, vel: Vec2) {
        self.rect.pos = pos;
        self.vel = vel;
        self.clear_contacts();
    }

    pub fn clear_contacts(&mut self) {
        self.resting_down = false;
        self.resting_up = false;
    }

    /// Advance one fixed step: integrate gravity and velocity (semi-implicit
    /// Euler), then resolve vertical contact against `colliders`.
    pub fn step(&mut self, gravity: f32, dt: f32, colliders: &[Rect]) {
        self.clear_contacts();

        let prev = self.rect;
        self.vel.y += gravity * dt;
        self.rect.pos += self.vel * dt;

        for collider in colliders {
            self.resolve(&prev, collider);
        }
    }

    /// Push the body out of `collider` along y if it crossed one of its
    /// horizontal edges this step.
    fn resolve(&mut self, prev: &Rect, collider: &Rect) {
        if !self.rect.overlaps(collider) {
            return;
        }

        if self.vel.y > 0.0 && prev.bottom() <= collider.top() + CONTACT_SLOP {
            // Landed on top
            self.rect.pos.y = collider.top() - self.rect.size.y;
            self.vel.y = 0.0;
            self.resting_down = true;
        } else if self.vel.y < 0.0 && prev.top() >= collider.bottom() - CONTACT_SLOP {
            // Pressed against the underside
            self.rect.pos.y = collider.bottom();
            self.vel.y = 0.0;
            self.resting_up = true;
        }
    }
}

/// Tolerance for float drift when comparing a previous edge against a surface
const CONTACT_SLOP: f32 = 0.01;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn platform() -> Rect {
        Rect::new(PLATFORM_POS, PLATFORM_SIZE)
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(20.0, 20.0));
        let touching = Rect::new(Vec2::new(20.0, 0.0), Vec2::new(20.0, 20.0));
        let inside = Rect::new(Vec2::new(19.0, 19.0), Vec2::new(20.0, 20.0));

        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    #[test]
    fn test_falling_body_lands_on_platform() {
        let mut body = PhysicsBody::new(Rect::new(START_POS, PLAYER_SIZE));

        for _ in 0..60 {
            body.step(GRAVITY, SIM_DT, &[platform()]);
        }

        assert!(body.resting_down);
        assert!(!body.resting_up);
        assert_eq!(body.vel.y, 0.0);
        assert!((body.rect.bottom() - PLATFORM_POS.y).abs() < 0.001);
    }

    #[test]
    fn test_resting_is_recomputed_every_step() {
        let mut body = PhysicsBody::new(Rect::new(Vec2::new(300.0, 180.0), PLAYER_SIZE));
        body.step(GRAVITY, SIM_DT, &[platform()]);
        assert!(body.resting_down);

        // Jump: the next step leaves the surface and the flag drops
        body.vel.y = -JUMP_IMPULSE;
        body.step(GRAVITY, SIM_DT, &[platform()]);
        assert!(!body.resting_down);
        assert!(body.rect.bottom() < PLATFORM_POS.y);
    }

    #[test]
    fn test_inverted_gravity_rests_against_underside() {
        let under = PLATFORM_POS.y + PLATFORM_SIZE.y;
        let mut body = PhysicsBody::new(Rect::new(Vec2::new(400.0, under + 30.0), PLAYER_SIZE));

        for _ in 0..60 {
            body.step(-GRAVITY, SIM_DT, &[platform()]);
        }

        assert!(body.resting_up);
        assert!(!body.resting_down);
        assert!(body.is_resting(true));
        assert!((body.rect.top() - under).abs() < 0.001);
    }

    #[test]
    fn test_runs_off_platform_edge() {
        // Standing near the right end, moving right
        let mut body = PhysicsBody::new(Rect::new(Vec2::new(770.0, 180.0), PLAYER_SIZE));
        body.vel.x = VELOCITY;

        let mut left_ground = false;
        for _ in 0..30 {
            body.step(GRAVITY, SIM_DT, &[platform()]);
            if !body.resting_down {
                left_ground = true;
                break;
            }
        }

        assert!(left_ground);
        assert!(body.rect.left() >= PLATFORM_POS.x + PLATFORM_SIZE.x);
    }

    #[test]
    fn test_teleport_clears_contacts() {
        let mut body = PhysicsBody::new(Rect::new(Vec2::new(300.0, 180.0), PLAYER_SIZE));
        body.step(GRAVITY, SIM_DT, &[platform()]);
        assert!(body.resting_down);

        body.teleport(START_POS, Vec2::new(VELOCITY, 0.0));
        assert!(!body.resting_down);
        assert_eq!(body.rect.pos, START_POS);
        assert_eq!(body.vel, Vec2::new(VELOCITY, 0.0));
    }
}
