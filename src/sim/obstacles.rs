//! Active obstacles, spawned and erased a whole level at a time

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Rect;
use super::level::LevelCatalog;

/// An obstacle currently in the playfield
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveObstacle {
    pub id: u32,
    pub rect: Rect,
    /// Catalog index of the level that spawned it
    pub level: usize,
}

/// Live obstacles (sorted by id, which is spawn order)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleSet {
    obstacles: Vec<ActiveObstacle>,
    next_id: u32,
}

impl Default for ObstacleSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ObstacleSet {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::new(),
            next_id: 1,
        }
    }

    /// Spawn every obstacle of `level`. Out-of-range levels spawn nothing.
    /// Returns the number of obstacles created.
    pub fn spawn_level(&mut self, catalog: &LevelCatalog, level: usize) -> usize {
        let Some(def) = catalog.get(level) else {
            return 0;
        };

        for obstacle in &def.obstacles {
            let id = self.next_id;
            self.next_id += 1;
            self.obstacles.push(ActiveObstacle {
                id,
                rect: Rect::new(
                    Vec2::new(obstacle.x, obstacle.y),
                    Vec2::new(obstacle.width, obstacle.height),
                ),
                level,
            });
        }

        log::debug!("Spawned level {} ({} obstacles)", level, def.obstacles.len());
        self.debug_check_levels();
        def.obstacles.len()
    }

    /// Remove every obstacle spawned by `level`. Returns how many were removed.
    pub fn erase_level(&mut self, level: usize) -> usize {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| o.level != level);
        let removed = before - self.obstacles.len();
        if removed > 0 {
            log::debug!("Erased level {} ({} obstacles)", level, removed);
        }
        removed
    }

    /// Destroy all obstacles
    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// First obstacle overlapping `rect`, in spawn order
    pub fn first_overlapping(&self, rect: &Rect) -> Option<&ActiveObstacle> {
        self.obstacles.iter().find(|o| o.rect.overlaps(rect))
    }

    /// Distinct levels with live obstacles, ascending
    pub fn active_levels(&self) -> Vec<usize> {
        let mut levels: Vec<usize> = self.obstacles.iter().map(|o| o.level).collect();
        levels.sort_unstable();
        levels.dedup();
        levels
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveObstacle> {
        self.obstacles.iter()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    fn debug_check_levels(&self) {
        debug_assert!(
            self.active_levels().len() <= 2,
            "more than two levels active: {:?}",
            self.active_levels()
        );
    }
}
