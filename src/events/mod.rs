//! Notification seams between the engine and a presentation layer.
//!
//! The engine is fire-and-forget outward: every single-cell relocation
//! produces one `MoveEvent`, and objective completion produces one
//! callback per objective plus a one-shot "all satisfied" callback. The
//! engine never waits on or reads anything back from an observer.
//!
//! `EventLog` is the reference observer: it records everything, which is
//! exactly what a view-synchronization layer or a test needs.

use serde::{Deserialize, Serialize};

use crate::core::CellPosition;

/// One single-cell tile relocation.
///
/// During a push, one event fires per chain tile (in application order,
/// back-to-front) and then one for the pusher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEvent {
    /// Cell the tile left.
    pub from: CellPosition,

    /// Cell the tile now occupies.
    pub to: CellPosition,

    /// Type key of the relocated tile.
    pub type_key: String,
}

impl MoveEvent {
    /// Create a move event.
    #[must_use]
    pub fn new(from: CellPosition, to: CellPosition, type_key: impl Into<String>) -> Self {
        Self {
            from,
            to,
            type_key: type_key.into(),
        }
    }
}

/// Receiver for tile relocation notifications.
pub trait MoveObserver {
    /// Called once per single-cell relocation, in application order.
    fn tile_moved(&mut self, event: &MoveEvent);
}

/// Receiver for objective notifications.
pub trait ObjectiveObserver {
    /// Called the first time a given objective is found satisfied.
    fn objective_completed(&mut self, name: &str);

    /// Called exactly once, when every objective is satisfied.
    fn all_objectives_completed(&mut self);
}

/// Observer that discards every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl MoveObserver for NullObserver {
    fn tile_moved(&mut self, _event: &MoveEvent) {}
}

impl ObjectiveObserver for NullObserver {
    fn objective_completed(&mut self, _name: &str) {}

    fn all_objectives_completed(&mut self) {}
}

/// Observer that records every notification in arrival order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    /// Every relocation, oldest first.
    pub moves: Vec<MoveEvent>,

    /// Names of completed objectives, in completion order.
    pub completed_objectives: Vec<String>,

    /// Has the all-objectives notification fired?
    pub solved: bool,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.moves.clear();
        self.completed_objectives.clear();
        self.solved = false;
    }
}

impl MoveObserver for EventLog {
    fn tile_moved(&mut self, event: &MoveEvent) {
        self.moves.push(event.clone());
    }
}

impl ObjectiveObserver for EventLog {
    fn objective_completed(&mut self, name: &str) {
        self.completed_objectives.push(name.to_string());
    }

    fn all_objectives_completed(&mut self) {
        self.solved = true;
    }
}
