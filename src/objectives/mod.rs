//! Win conditions.
//!
//! Objectives are named predicates over board state, AND-composed in a
//! flat list and re-evaluated from scratch after every move. Boards are
//! small and moves are human-paced, so recomputation is deliberately
//! preferred over incremental tracking.
//!
//! Conditions are tagged variants rather than trait objects: the engine
//! matches on them directly, and new kinds are added as variants.

use serde::{Deserialize, Serialize};

use crate::board::BoardState;
use crate::core::{CellPosition, TileId};
use crate::events::ObjectiveObserver;

/// A predicate over board state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectiveCondition {
    /// Some tile with the given type key occupies the cell.
    TileTypeAt {
        type_key: String,
        cell: CellPosition,
    },
    /// The specific tile occupies the cell.
    TileAt { tile: TileId, cell: CellPosition },
    /// Nothing occupies the cell.
    CellEmpty { cell: CellPosition },
}

impl ObjectiveCondition {
    /// Evaluate the predicate against the current board.
    #[must_use]
    pub fn is_satisfied(&self, board: &BoardState) -> bool {
        match self {
            Self::TileTypeAt { type_key, cell } => board
                .tile_at(*cell)
                .is_some_and(|tile| tile.type_key == *type_key),
            Self::TileAt { tile, cell } => {
                board.tile_at(*cell).is_some_and(|t| t.id == *tile)
            }
            Self::CellEmpty { cell } => !board.is_occupied(*cell),
        }
    }
}

/// A named win condition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    /// Display/diagnostic name, reported through completion callbacks.
    pub name: String,

    /// The predicate to satisfy.
    pub condition: ObjectiveCondition,
}

impl Objective {
    /// Create an objective.
    #[must_use]
    pub fn new(name: impl Into<String>, condition: ObjectiveCondition) -> Self {
        Self {
            name: name.into(),
            condition,
        }
    }
}

/// Tracks an objective plus its one-shot completion flag.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct TrackedObjective {
    objective: Objective,
    satisfied: bool,
}

/// Polls objectives against the board after each move.
///
/// Objectives are checked in insertion order, short-circuiting at the
/// first unsatisfied one. Each objective's completion callback fires at
/// most once; the all-complete callback fires at most once, after which
/// `evaluate` becomes a no-op until `reset`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ObjectiveEvaluator {
    objectives: Vec<TrackedObjective>,
    won: bool,
}

impl ObjectiveEvaluator {
    /// Create an evaluator with no objectives.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an objective.
    pub fn add_objective(&mut self, objective: Objective) {
        self.objectives.push(TrackedObjective {
            objective,
            satisfied: false,
        });
    }

    /// Number of objectives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objectives.len()
    }

    /// Are there no objectives?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objectives.is_empty()
    }

    /// Has the all-satisfied notification already fired?
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Check all objectives against the board.
    ///
    /// No-op once won. Otherwise walks objectives in order, firing
    /// `objective_completed` the first time each is seen satisfied, and
    /// stops at the first unsatisfied one. When every objective is
    /// satisfied, sets the won flag and fires `all_objectives_completed`.
    ///
    /// An evaluator with no objectives never wins; an empty list means
    /// "no win condition configured", not instant victory.
    pub fn evaluate(&mut self, board: &BoardState, observer: &mut dyn ObjectiveObserver) {
        if self.won || self.objectives.is_empty() {
            return;
        }

        for tracked in &mut self.objectives {
            if !tracked.objective.condition.is_satisfied(board) {
                return;
            }
            if !tracked.satisfied {
                tracked.satisfied = true;
                observer.objective_completed(&tracked.objective.name);
            }
        }

        self.won = true;
        observer.all_objectives_completed();
    }

    /// Clear all objectives and the won flag.
    pub fn reset(&mut self) {
        self.objectives.clear();
        self.won = false;
    }
}
