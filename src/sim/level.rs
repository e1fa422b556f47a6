//! Level catalog
//!
//! The built-in levels ship as `assets/levels.json` and are compiled into the
//! binary. A catalog is immutable once loaded.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::OBSTACLE_SIZE;

/// The eight built-in levels
const BUILTIN_LEVELS: &str = include_str!("../../assets/levels.json");

/// Errors produced while loading a level catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Malformed level data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Level catalog is empty")]
    Empty,

    #[error("Level {level}, obstacle {index}: size must be positive (got {width}x{height})")]
    InvalidSize {
        level: usize,
        index: usize,
        width: f32,
        height: f32,
    },
}

fn default_obstacle_size() -> f32 {
    OBSTACLE_SIZE
}

/// One obstacle placement (top-left corner, optional size override)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleDef {
    pub x: f32,
    pub y: f32,
    #[serde(default = "default_obstacle_size")]
    pub width: f32,
    #[serde(default = "default_obstacle_size")]
    pub height: f32,
}

impl ObstacleDef {
    /// A default-sized obstacle
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: OBSTACLE_SIZE,
            height: OBSTACLE_SIZE,
        }
    }
}

/// A level: obstacles in spawn order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelDef {
    pub obstacles: Vec<ObstacleDef>,
}

/// Ordered, immutable list of levels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelCatalog {
    levels: Vec<LevelDef>,
}

impl LevelCatalog {
    /// Build a catalog from level definitions, validating sizes
    pub fn new(levels: Vec<LevelDef>) -> Result<Self, CatalogError> {
        if levels.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (level, def) in levels.iter().enumerate() {
            for (index, obstacle) in def.obstacles.iter().enumerate() {
                if obstacle.width <= 0.0 || obstacle.height <= 0.0 {
                    return Err(CatalogError::InvalidSize {
                        level,
                        index,
                        width: obstacle.width,
                        height: obstacle.height,
                    });
                }
            }
        }

        Ok(Self { levels })
    }

    /// Parse a catalog from a JSON array of levels
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let levels: Vec<LevelDef> = serde_json::from_str(json)?;
        Self::new(levels)
    }

    /// The built-in game content
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_LEVELS)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LevelDef> {
        self.levels.get(index)
    }

    /// Index of the final level
    pub fn last_index(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelDef> {
        self.levels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = LevelCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 8);

        let counts: Vec<usize> = catalog.iter().map(|l| l.obstacles.len()).collect();
        assert_eq!(counts, vec![2, 3, 3, 6, 4, 5, 6, 4]);

        // Spawn order is file order
        let second = catalog.get(1).unwrap();
        assert_eq!(second.obstacles[0], ObstacleDef::at(600.0, 220.0));
        assert_eq!(second.obstacles[2], ObstacleDef::at(160.0, 220.0));
    }

    #[test]
    fn test_size_overrides_and_defaults() {
        let catalog = LevelCatalog::builtin().unwrap();
        let level = catalog.get(3).unwrap();

        assert_eq!(level.obstacles[0].width, 20.0);
        assert_eq!(level.obstacles[0].height, 10.0);
        assert_eq!(level.obstacles[4].width, 100.0);
        assert_eq!(level.obstacles[4].height, 20.0);
    }

    #[test]
    fn test_rejects_empty_catalog() {
        assert!(matches!(
            LevelCatalog::from_json("[]"),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_rejects_non_positive_size() {
        let json = r#"[{ "obstacles": [{ "x": 1, "y": 2 }, { "x": 3, "y": 4, "width": 0 }] }]"#;
        match LevelCatalog::from_json(json) {
            Err(CatalogError::InvalidSize { level, index, .. }) => {
                assert_eq!(level, 0);
                assert_eq!(index, 1);
            }
            other => panic!("expected InvalidSize, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            LevelCatalog::from_json(r#"[{ "obstacles": [{ "x": "left" }] }]"#),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_out_of_range_level() {
        let catalog = LevelCatalog::builtin().unwrap();
        assert!(catalog.get(8).is_none());
        assert_eq!(catalog.last_index(), 7);
    }
}
