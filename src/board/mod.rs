//! Board state: the authoritative occupancy grid.
//!
//! `BoardState` owns a fixed-size grid and a sparse cell→tile map. The
//! map is the *only* source of truth for where a tile is; tiles do not
//! store their own position. Two invariants hold after every mutation
//! entry point:
//!
//! - every occupied cell is inside `[0, width) × [0, height)`;
//! - at most one tile occupies any cell.
//!
//! The map is an `im::HashMap`, so cloning a board is O(1). Preview and
//! solver layers can snapshot freely without copying the tile set.
//!
//! All methods are total over arbitrary `CellPosition` values: bad input
//! is answered with `false`/`None`/no-op, never a panic.

use im::HashMap as ImHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{CellPosition, Tile, TileId};

/// The occupancy grid for one puzzle instance.
///
/// ```
/// use push_grid::{BoardState, CellPosition, MovementRules, Tile, TileId};
///
/// let mut board = BoardState::new(3, 3);
/// let tile = Tile::new(TileId::new(0), "Brain", MovementRules::new(1).orthogonal());
///
/// assert!(board.try_place_tile(CellPosition::new(0, 0), tile));
/// assert!(board.tile_at(CellPosition::new(0, 0)).is_some());
/// assert!(board.tile_at(CellPosition::new(9, 9)).is_none());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardState {
    width: i32,
    height: i32,
    /// Serialized as an entry list: struct keys are not representable in
    /// map-keyed formats like JSON.
    #[serde(with = "cell_map")]
    tiles: ImHashMap<CellPosition, Tile>,
}

mod cell_map {
    use super::{CellPosition, ImHashMap, Tile};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        map: &ImHashMap<CellPosition, Tile>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let entries: Vec<(CellPosition, Tile)> =
            map.iter().map(|(&pos, tile)| (pos, tile.clone())).collect();
        entries.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<ImHashMap<CellPosition, Tile>, D::Error> {
        let entries: Vec<(CellPosition, Tile)> = Vec::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

impl BoardState {
    /// Create an empty board with fixed dimensions.
    ///
    /// Dimensions are clamped to be non-negative; a zero-area board is
    /// legal and simply has no in-bounds cells.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
            tiles: ImHashMap::new(),
        }
    }

    /// Board width, fixed for the board's lifetime.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Board height, fixed for the board's lifetime.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Is `pos` inside `[0, width) × [0, height)`?
    #[must_use]
    pub fn is_inside_bounds(&self, pos: CellPosition) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// The tile at `pos`, if any.
    ///
    /// Out-of-bounds positions are answered with `None`; callers never
    /// need to pre-check bounds for a read.
    #[must_use]
    pub fn tile_at(&self, pos: CellPosition) -> Option<&Tile> {
        self.tiles.get(&pos)
    }

    /// Is `pos` occupied?
    #[must_use]
    pub fn is_occupied(&self, pos: CellPosition) -> bool {
        self.tiles.contains_key(&pos)
    }

    /// Place a tile on an empty, in-bounds cell.
    ///
    /// Returns `false` with no mutation if `pos` is out of bounds or
    /// already occupied. This is the only operation with an explicit
    /// failure channel: placement is where "did it work" must be
    /// observable without inspecting state before and after.
    pub fn try_place_tile(&mut self, pos: CellPosition, tile: Tile) -> bool {
        if !self.is_inside_bounds(pos) || self.tiles.contains_key(&pos) {
            return false;
        }
        self.tiles.insert(pos, tile);
        true
    }

    /// Relocate the tile at `from` to `to`, clearing `to` first.
    ///
    /// Callers (the move executor) are responsible for pre-validating
    /// both cells; this method keeps the board invariants regardless:
    ///
    /// - an out-of-bounds `to` is a full no-op (nothing is recorded
    ///   outside bounds);
    /// - `from == to` is a full no-op (the tile stays put);
    /// - an empty `from` still clears `to` and moves nothing. This
    ///   permissive contract is deliberate; see DESIGN.md.
    pub fn move_tile(&mut self, from: CellPosition, to: CellPosition) {
        if from == to || !self.is_inside_bounds(to) {
            return;
        }
        self.tiles.remove(&to);
        if let Some(tile) = self.tiles.remove(&from) {
            self.tiles.insert(to, tile);
        }
    }

    /// Snapshot of every occupied position.
    ///
    /// The returned vector is independent of the board: later mutations
    /// never alter it.
    #[must_use]
    pub fn all_tile_positions(&self) -> Vec<CellPosition> {
        self.tiles.keys().copied().collect()
    }

    /// Snapshot of every tile on the board.
    #[must_use]
    pub fn all_tiles(&self) -> Vec<Tile> {
        self.tiles.values().cloned().collect()
    }

    /// Number of tiles on the board.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Where is tile `id`? Linear scan; boards are small.
    #[must_use]
    pub fn position_of(&self, id: TileId) -> Option<CellPosition> {
        self.tiles
            .iter()
            .find(|(_, tile)| tile.id == id)
            .map(|(&pos, _)| pos)
    }
}
