//! Tile type registry.
//!
//! Games describe their tile types once, up front, as `TileDefinition`
//! values: a type key plus the movement rules every tile of that type
//! carries. The `TileRegistry` then stamps out `Tile` instances with
//! fresh IDs. The engine itself never hardcodes tile types.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::rules::MovementRules;
use super::tile::{Tile, TileIdAllocator};

/// Definition of a tile type: the template instances are created from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDefinition {
    /// Type key, unique within a registry.
    pub type_key: String,

    /// Movement behavior for every tile of this type.
    pub movement: MovementRules,
}

impl TileDefinition {
    /// Create a definition.
    #[must_use]
    pub fn new(type_key: impl Into<String>, movement: MovementRules) -> Self {
        Self {
            type_key: type_key.into(),
            movement,
        }
    }
}

/// Catalog of tile definitions, keyed by type key.
#[derive(Clone, Debug, Default)]
pub struct TileRegistry {
    definitions: FxHashMap<String, TileDefinition>,
}

impl TileRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition, replacing any previous definition with the
    /// same type key.
    pub fn register(&mut self, definition: TileDefinition) {
        self.definitions
            .insert(definition.type_key.clone(), definition);
    }

    /// Look up a definition by type key.
    #[must_use]
    pub fn get(&self, type_key: &str) -> Option<&TileDefinition> {
        self.definitions.get(type_key)
    }

    /// Check whether a type key is registered.
    #[must_use]
    pub fn contains(&self, type_key: &str) -> bool {
        self.definitions.contains_key(type_key)
    }

    /// Number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Is the registry empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Instantiate a tile of the given type with a fresh ID.
    ///
    /// Returns `None` if the type key is unknown; the allocator is not
    /// advanced in that case.
    #[must_use]
    pub fn create(&self, ids: &mut TileIdAllocator, type_key: &str) -> Option<Tile> {
        let definition = self.definitions.get(type_key)?;
        Some(Tile::new(
            ids.alloc(),
            definition.type_key.clone(),
            definition.movement,
        ))
    }
}
