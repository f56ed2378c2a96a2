//! Core value types: positions, tiles, movement rules, tile registry.
//!
//! Everything here is game-agnostic. Puzzles configure tile types and
//! movement behavior through these values rather than by extending the
//! engine.

pub mod position;
pub mod registry;
pub mod rules;
pub mod tile;

pub use position::{CellPosition, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};
pub use registry::{TileDefinition, TileRegistry};
pub use rules::{MovementRules, ObstaclePassRule};
pub use tile::{Tile, TileId, TileIdAllocator};
