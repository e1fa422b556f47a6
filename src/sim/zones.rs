//! Gravity flip trigger zones
//!
//! Two non-colliding regions just past either end of the platform. Each one
//! only fires for the polarity the player has when it reaches that end, so a
//! player lingering in a zone right after a flip cannot fire it again.

use serde::{Deserialize, Serialize};

use super::body::Rect;
use crate::consts::*;

/// Which zone was crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipZone {
    /// Past the right end, reached under normal gravity
    Forward,
    /// Past the left end, reached under inverted gravity
    Backward,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GravityFlipZones {
    pub forward: Rect,
    pub backward: Rect,
}

impl Default for GravityFlipZones {
    fn default() -> Self {
        Self {
            forward: Rect::new(FORWARD_ZONE_POS, ZONE_SIZE),
            backward: Rect::new(BACKWARD_ZONE_POS, ZONE_SIZE),
        }
    }
}

impl GravityFlipZones {
    /// The zone `player` fires given the current polarity, if any
    pub fn crossed(&self, player: &Rect, inverted: bool) -> Option<FlipZone> {
        if !inverted && self.forward.overlaps(player) {
            Some(FlipZone::Forward)
        } else if inverted && self.backward.overlaps(player) {
            Some(FlipZone::Backward)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn player_at(x: f32, y: f32) -> Rect {
        Rect::new(Vec2::new(x, y), PLAYER_SIZE)
    }

    #[test]
    fn test_forward_zone_needs_normal_gravity() {
        let zones = GravityFlipZones::default();
        let inside = player_at(830.0, 215.0);

        assert_eq!(zones.crossed(&inside, false), Some(FlipZone::Forward));
        assert_eq!(zones.crossed(&inside, true), None);
    }

    #[test]
    fn test_backward_zone_needs_inverted_gravity() {
        let zones = GravityFlipZones::default();
        let inside = player_at(100.0, 185.0);

        assert_eq!(zones.crossed(&inside, true), Some(FlipZone::Backward));
        assert_eq!(zones.crossed(&inside, false), None);
    }

    #[test]
    fn test_start_position_is_outside_both_zones() {
        let zones = GravityFlipZones::default();
        let start = Rect::new(START_POS, PLAYER_SIZE);

        assert_eq!(zones.crossed(&start, false), None);
        assert_eq!(zones.crossed(&start, true), None);
    }

    #[test]
    fn test_standing_on_platform_does_not_fire() {
        let zones = GravityFlipZones::default();
        // Overhanging the right edge while still on top of the platform
        let overhang = player_at(790.0, 180.0);
        assert_eq!(zones.crossed(&overhang, false), None);
    }
}
