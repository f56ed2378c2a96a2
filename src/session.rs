//! Puzzle session: the pieces wired together.
//!
//! `PuzzleSession` is how an embedding application normally drives the
//! engine: register tile types, spawn tiles, ask for available moves,
//! execute moves, and let the session keep objectives evaluated. The
//! underlying components (`BoardState`, `compute_moves`, `execute_move`,
//! `ObjectiveEvaluator`) all remain usable standalone.

use crate::board::BoardState;
use crate::core::{CellPosition, TileDefinition, TileId, TileIdAllocator, TileRegistry};
use crate::events::{MoveObserver, ObjectiveObserver};
use crate::executor::execute_move;
use crate::movement::{compute_moves, MoveOption};
use crate::objectives::{Objective, ObjectiveEvaluator};

/// One puzzle instance: board, tile catalog, ID allocator, objectives.
///
/// ```
/// use push_grid::{
///     CellPosition, EventLog, MovementRules, ObstaclePassRule, PuzzleSession, TileDefinition,
/// };
///
/// let mut session = PuzzleSession::new(3, 3);
/// session.register_tile_type(TileDefinition::new(
///     "Brain",
///     MovementRules::new(3)
///         .orthogonal()
///         .with_obstacle_rule(ObstaclePassRule::PushObstacles),
/// ));
///
/// session.spawn("Brain", CellPosition::new(0, 0)).unwrap();
///
/// let options = session.available_moves(CellPosition::new(0, 0));
/// assert!(!options.is_empty());
///
/// let mut log = EventLog::new();
/// assert!(session.try_move(CellPosition::new(0, 0), options[0].destination, &mut log));
/// ```
#[derive(Clone, Debug)]
pub struct PuzzleSession {
    board: BoardState,
    registry: TileRegistry,
    ids: TileIdAllocator,
    evaluator: ObjectiveEvaluator,
}

impl PuzzleSession {
    /// Create a session with an empty board of the given dimensions.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            board: BoardState::new(width, height),
            registry: TileRegistry::new(),
            ids: TileIdAllocator::new(),
            evaluator: ObjectiveEvaluator::new(),
        }
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Register a tile type for later spawning.
    pub fn register_tile_type(&mut self, definition: TileDefinition) {
        self.registry.register(definition);
    }

    /// Spawn a tile of a registered type onto an empty, in-bounds cell.
    ///
    /// Returns the new tile's ID, or `None` when the type key is unknown
    /// or placement is rejected. A rejected placement does not burn an ID.
    pub fn spawn(&mut self, type_key: &str, pos: CellPosition) -> Option<TileId> {
        if !self.board.is_inside_bounds(pos) || self.board.is_occupied(pos) {
            return None;
        }
        let tile = self.registry.create(&mut self.ids, type_key)?;
        let id = tile.id;
        if self.board.try_place_tile(pos, tile) {
            Some(id)
        } else {
            None
        }
    }

    /// Legal destinations for the tile at `origin`, under that tile's own
    /// movement rules. Empty when `origin` holds no tile.
    #[must_use]
    pub fn available_moves(&self, origin: CellPosition) -> Vec<MoveOption> {
        match self.board.tile_at(origin) {
            Some(tile) => compute_moves(&self.board, origin, &tile.movement),
            None => Vec::new(),
        }
    }

    /// Execute a move, then re-evaluate objectives on success.
    ///
    /// The observer receives one `tile_moved` per relocation and any
    /// objective callbacks the move earns.
    pub fn try_move<O>(&mut self, from: CellPosition, to: CellPosition, observer: &mut O) -> bool
    where
        O: MoveObserver + ObjectiveObserver,
    {
        if !execute_move(&mut self.board, from, to, observer) {
            return false;
        }
        self.evaluator.evaluate(&self.board, observer);
        true
    }

    /// Append a win condition.
    pub fn add_objective(&mut self, objective: Objective) {
        self.evaluator.add_objective(objective);
    }

    /// Has every objective been satisfied?
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.evaluator.is_won()
    }

    /// Clear all objectives and the won flag.
    pub fn reset_objectives(&mut self) {
        self.evaluator.reset();
    }
}
