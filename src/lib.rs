//! # push-grid
//!
//! Rules engine for a turn-based, grid-based tile-pushing puzzle.
//!
//! The engine owns the authoritative board, computes legal destinations
//! for a tile under configurable movement rules, and executes moves,
//! including chained pushes where a moving tile shoves a line of
//! occupied cells one step ahead of it.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: No hardcoded tile types or win conditions.
//!    Puzzles configure both at startup via `TileDefinition` and
//!    `Objective` values.
//!
//! 2. **One Mutation Path**: `BoardState` is only ever mutated through
//!    its documented entry points, and during gameplay only by
//!    `execute_move`. A move either completes fully or changes nothing.
//!
//! 3. **Values Over Dispatch**: Movement behavior is a `MovementRules`
//!    value a tile composes, not a capability interface; objectives are
//!    tagged variants, not trait objects.
//!
//! 4. **Cheap Snapshots**: The board's cell map is an `im` persistent
//!    map, so cloning a `BoardState` is O(1) and preview or solver
//!    layers can snapshot freely.
//!
//! ## Modules
//!
//! - `core`: positions, tiles, movement rules, the tile type registry
//! - `board`: the authoritative occupancy grid
//! - `movement`: ray-cast legal-move computation
//! - `executor`: move execution and push-chain resolution
//! - `objectives`: win-condition predicates and the evaluator
//! - `events`: observer seams toward the presentation layer
//! - `session`: the pieces wired together for an embedding application

pub mod board;
pub mod core;
pub mod events;
pub mod executor;
pub mod movement;
pub mod objectives;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    CellPosition, MovementRules, ObstaclePassRule, Tile, TileDefinition, TileId, TileIdAllocator,
    TileRegistry, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS,
};

pub use crate::board::BoardState;

pub use crate::movement::{compute_moves, MoveOption};

pub use crate::executor::execute_move;

pub use crate::objectives::{Objective, ObjectiveCondition, ObjectiveEvaluator};

pub use crate::events::{EventLog, MoveEvent, MoveObserver, NullObserver, ObjectiveObserver};

pub use crate::session::PuzzleSession;
