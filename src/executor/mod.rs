//! Move execution: the one sanctioned gameplay mutation path.
//!
//! `execute_move` orchestrates one player-intended move. All validation
//! happens before any state change, so a move either completes fully or
//! leaves the board untouched. A move onto an occupied cell is a push:
//! the contiguous line of tiles ahead of the destination shifts one step
//! further, resolved back-to-front so no two tiles ever transiently
//! share a cell.

use smallvec::SmallVec;

use crate::board::BoardState;
use crate::core::CellPosition;
use crate::events::{MoveEvent, MoveObserver};

/// Execute one move from `from` to `to`.
///
/// Returns `false` with no mutation and no notifications when:
/// - either cell is out of bounds,
/// - no tile occupies `from`,
/// - `from == to`,
/// - `to` is occupied and the push chain has no room to shift.
///
/// On success every single-cell relocation fires one
/// [`MoveObserver::tile_moved`] notification, in application order.
///
/// ```
/// use push_grid::{execute_move, BoardState, CellPosition, EventLog, MovementRules, Tile, TileId};
///
/// let mut board = BoardState::new(3, 3);
/// let tile = Tile::new(TileId::new(0), "Brain", MovementRules::new(2).orthogonal());
/// board.try_place_tile(CellPosition::new(0, 0), tile);
///
/// let mut log = EventLog::new();
/// assert!(execute_move(&mut board, CellPosition::new(0, 0), CellPosition::new(2, 0), &mut log));
/// assert_eq!(log.moves.len(), 1);
/// ```
pub fn execute_move(
    board: &mut BoardState,
    from: CellPosition,
    to: CellPosition,
    observer: &mut dyn MoveObserver,
) -> bool {
    if from == to || !board.is_inside_bounds(from) || !board.is_inside_bounds(to) {
        return false;
    }
    let Some(mover) = board.tile_at(from) else {
        return false;
    };
    let mover_key = mover.type_key.clone();

    if board.is_occupied(to) {
        let Some(chain) = resolve_push_chain(board, from, to) else {
            return false;
        };
        apply_push_chain(board, &chain, from.direction_toward(to), observer);
    }

    board.move_tile(from, to);
    observer.tile_moved(&MoveEvent::new(from, to, mover_key));
    true
}

/// The contiguous occupied cells starting at `to`, in ray order, or
/// `None` when the chain has no empty cell to shift into.
fn resolve_push_chain(
    board: &BoardState,
    from: CellPosition,
    to: CellPosition,
) -> Option<SmallVec<[CellPosition; 8]>> {
    let (dx, dy) = from.direction_toward(to);

    let mut chain: SmallVec<[CellPosition; 8]> = SmallVec::new();
    let mut cell = to;
    while board.is_inside_bounds(cell) && board.is_occupied(cell) {
        chain.push(cell);
        cell = cell.offset(dx, dy);
    }

    // `cell` is one past the chain: empty if in bounds, otherwise the
    // chain runs into the board edge and the push must abort.
    if board.is_inside_bounds(cell) {
        Some(chain)
    } else {
        None
    }
}

/// Shift every chain tile one step along `(dx, dy)`, back-to-front.
///
/// The tail moves first into the known-empty slot; each earlier tile
/// then moves into the slot just vacated. Front-to-back application
/// would overwrite tiles that have not yet relocated.
fn apply_push_chain(
    board: &mut BoardState,
    chain: &[CellPosition],
    (dx, dy): (i32, i32),
    observer: &mut dyn MoveObserver,
) {
    for &cell in chain.iter().rev() {
        let next = cell.offset(dx, dy);
        let type_key = board
            .tile_at(cell)
            .map(|tile| tile.type_key.clone())
            .unwrap_or_default();
        board.move_tile(cell, next);
        observer.tile_moved(&MoveEvent::new(cell, next, type_key));
    }
}
