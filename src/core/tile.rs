//! Tiles and tile identity.
//!
//! Every tile has a `TileId` that is unique for the lifetime of the
//! allocator that produced it. IDs come from an explicit
//! `TileIdAllocator` owned by whatever constructs tiles (normally the
//! session), never from a hidden global counter, so ID sequences are
//! reproducible per session and tests cannot couple through shared state.
//!
//! A tile is immutable once constructed. Its board position is tracked
//! exclusively by `BoardState`; the tile itself does not know where it is.

use serde::{Deserialize, Serialize};

use super::rules::MovementRules;

/// Unique identifier for a tile within one session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a tile ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Monotonic tile-ID source. IDs start at 0 and are never reused.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TileIdAllocator {
    next: u32,
}

impl TileIdAllocator {
    /// Create an allocator starting at ID 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next tile ID.
    pub fn alloc(&mut self) -> TileId {
        let id = TileId(self.next);
        self.next += 1;
        id
    }
}

/// A tile on the board.
///
/// Composes its movement behavior directly: callers query
/// `tile.movement` rather than dispatching through a capability
/// interface. The `type_key` (e.g. `"Brain"`, `"Motor"`) is opaque to
/// the engine and used for rule lookup at spawn time and for objective
/// matching.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Session-unique identity.
    pub id: TileId,

    /// Opaque type key, matched by objectives and registries.
    pub type_key: String,

    /// How this tile moves.
    pub movement: MovementRules,
}

impl Tile {
    /// Create a tile.
    #[must_use]
    pub fn new(id: TileId, type_key: impl Into<String>, movement: MovementRules) -> Self {
        Self {
            id,
            type_key: type_key.into(),
            movement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocator_is_monotonic() {
        let mut ids = TileIdAllocator::new();

        assert_eq!(ids.alloc(), TileId::new(0));
        assert_eq!(ids.alloc(), TileId::new(1));
        assert_eq!(ids.alloc(), TileId::new(2));
    }

    #[test]
    fn test_allocators_are_independent() {
        let mut a = TileIdAllocator::new();
        let mut b = TileIdAllocator::new();

        a.alloc();
        a.alloc();

        // A fresh allocator starts over; no cross-allocator coupling.
        assert_eq!(b.alloc(), TileId::new(0));
    }

    #[test]
    fn test_tile_new() {
        let tile = Tile::new(TileId::new(7), "Brain", MovementRules::new(2).orthogonal());

        assert_eq!(tile.id, TileId::new(7));
        assert_eq!(tile.type_key, "Brain");
        assert_eq!(tile.movement.max_steps, 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", TileId::new(42)), "Tile(42)");
    }

    #[test]
    fn test_serialization() {
        let tile = Tile::new(TileId::new(1), "Motor", MovementRules::new(1).diagonal());
        let json = serde_json::to_string(&tile).unwrap();
        let deserialized: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(tile, deserialized);
    }
}
