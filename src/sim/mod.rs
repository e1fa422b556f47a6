//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies

pub mod body;
pub mod burst;
pub mod level;
pub mod obstacles;
pub mod state;
pub mod tick;
pub mod zones;

pub use body::{PhysicsBody, Rect};
pub use burst::Particle;
pub use level::{CatalogError, LevelCatalog, LevelDef, ObstacleDef};
pub use obstacles::{ActiveObstacle, ObstacleSet};
pub use state::{GameEvent, GamePhase, GameState, Session, Sound};
pub use tick::{TickInput, request_jump, tick};
pub use zones::{FlipZone, GravityFlipZones};
