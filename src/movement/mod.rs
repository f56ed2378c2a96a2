//! Movement calculation: directional ray casting.
//!
//! `compute_moves` is a pure function from a board snapshot, an origin
//! cell, and a rule set to the list of legal destinations. It never
//! mutates the board and is deterministic: rays are cast in a fixed
//! direction order (orthogonal before diagonal, each set in declaration
//! order), and each ray's destinations appear in increasing step order.
//! Callers may rely on that ordering for stable iteration.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::BoardState;
use crate::core::{
    CellPosition, MovementRules, ObstaclePassRule, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS,
};

/// One legal destination produced by movement calculation.
///
/// Under `ObstaclePassRule::PushObstacles` the destination may be an
/// occupied cell, signaling that moving there is a push.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveOption {
    /// The cell a move may end on.
    pub destination: CellPosition,
}

impl MoveOption {
    /// Create a move option.
    #[must_use]
    pub const fn new(destination: CellPosition) -> Self {
        Self { destination }
    }
}

/// Compute every legal destination for a move from `origin` under `rules`.
///
/// The board is read-only; identical inputs yield identical output. The
/// origin cell itself is never returned (rays start at step 1), and no
/// returned destination is out of bounds.
///
/// ```
/// use push_grid::{compute_moves, BoardState, CellPosition, MovementRules};
///
/// let board = BoardState::new(3, 3);
/// let rules = MovementRules::new(1).orthogonal();
///
/// let options = compute_moves(&board, CellPosition::new(1, 1), &rules);
/// assert_eq!(options.len(), 4);
/// ```
#[must_use]
pub fn compute_moves(
    board: &BoardState,
    origin: CellPosition,
    rules: &MovementRules,
) -> Vec<MoveOption> {
    let mut directions: SmallVec<[(i32, i32); 8]> = SmallVec::new();
    if rules.allow_orthogonal {
        directions.extend(ORTHOGONAL_DIRECTIONS);
    }
    if rules.allow_diagonal {
        directions.extend(DIAGONAL_DIRECTIONS);
    }

    let mut options = Vec::new();
    for (dx, dy) in directions {
        walk_ray(board, origin, (dx, dy), rules, &mut options);
    }
    options
}

/// Walk one ray from `origin`, appending legal destinations to `out`.
fn walk_ray(
    board: &BoardState,
    origin: CellPosition,
    (dx, dy): (i32, i32),
    rules: &MovementRules,
    out: &mut Vec<MoveOption>,
) {
    let mut crossed_obstacle = false;

    // The walk ends at the first out-of-bounds cell; the clamp keeps the
    // cast lossless for absurd rule values.
    let max_steps = rules.max_steps.min(i32::MAX as u32) as i32;
    for step in 1..=max_steps {
        let cell = origin.offset(dx * step, dy * step);
        if !board.is_inside_bounds(cell) {
            return;
        }

        if board.is_occupied(cell) {
            match rules.obstacle_rule {
                ObstaclePassRule::CannotPassThrough => return,
                ObstaclePassRule::CanPassThrough => {}
                ObstaclePassRule::MustPassThrough => crossed_obstacle = true,
                ObstaclePassRule::PushObstacles => {
                    // The obstacle itself is the destination: a push.
                    out.push(MoveOption::new(cell));
                    return;
                }
            }
        } else if rules.obstacle_rule != ObstaclePassRule::MustPassThrough || crossed_obstacle {
            out.push(MoveOption::new(cell));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MovementRules, Tile, TileId};

    fn occupy(board: &mut BoardState, x: i32, y: i32, id: u32) {
        let tile = Tile::new(TileId::new(id), "Block", MovementRules::new(0));
        assert!(board.try_place_tile(CellPosition::new(x, y), tile));
    }

    fn destinations(options: &[MoveOption]) -> Vec<CellPosition> {
        options.iter().map(|o| o.destination).collect()
    }

    #[test]
    fn test_zero_steps_yields_nothing() {
        let board = BoardState::new(3, 3);
        let rules = MovementRules::new(0).orthogonal().diagonal();

        assert!(compute_moves(&board, CellPosition::new(1, 1), &rules).is_empty());
    }

    #[test]
    fn test_no_directions_yields_nothing() {
        let board = BoardState::new(3, 3);
        let rules = MovementRules::new(5);

        assert!(compute_moves(&board, CellPosition::new(1, 1), &rules).is_empty());
    }

    #[test]
    fn test_orthogonal_clipped_by_bounds() {
        let board = BoardState::new(3, 3);
        let rules = MovementRules::new(10).orthogonal();

        let options = compute_moves(&board, CellPosition::new(0, 0), &rules);

        // Right ray fully, left ray clipped, up ray fully, down ray clipped.
        assert_eq!(
            destinations(&options),
            vec![
                CellPosition::new(1, 0),
                CellPosition::new(2, 0),
                CellPosition::new(0, 1),
                CellPosition::new(0, 2),
            ]
        );
    }

    #[test]
    fn test_diagonal_only() {
        let board = BoardState::new(3, 3);
        let rules = MovementRules::new(1).diagonal();

        let options = compute_moves(&board, CellPosition::new(1, 1), &rules);

        assert_eq!(
            destinations(&options),
            vec![
                CellPosition::new(2, 2),
                CellPosition::new(0, 2),
                CellPosition::new(2, 0),
                CellPosition::new(0, 0),
            ]
        );
    }

    #[test]
    fn test_orthogonal_listed_before_diagonal() {
        let board = BoardState::new(5, 5);
        let rules = MovementRules::new(1).orthogonal().diagonal();

        let options = compute_moves(&board, CellPosition::new(2, 2), &rules);

        assert_eq!(
            destinations(&options),
            vec![
                CellPosition::new(3, 2),
                CellPosition::new(1, 2),
                CellPosition::new(2, 3),
                CellPosition::new(2, 1),
                CellPosition::new(3, 3),
                CellPosition::new(1, 3),
                CellPosition::new(3, 1),
                CellPosition::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_cannot_pass_through_blocks_ray() {
        let mut board = BoardState::new(3, 3);
        occupy(&mut board, 1, 0, 0);
        let rules = MovementRules::new(3).orthogonal();

        let options = compute_moves(&board, CellPosition::new(0, 0), &rules);
        let cells = destinations(&options);

        assert!(!cells.contains(&CellPosition::new(1, 0)));
        assert!(!cells.contains(&CellPosition::new(2, 0)));
        // The vertical ray is unaffected.
        assert!(cells.contains(&CellPosition::new(0, 1)));
    }

    #[test]
    fn test_can_pass_through_flies_over() {
        let mut board = BoardState::new(4, 1);
        occupy(&mut board, 1, 0, 0);
        let rules = MovementRules::new(3)
            .orthogonal()
            .with_obstacle_rule(ObstaclePassRule::CanPassThrough);

        let options = compute_moves(&board, CellPosition::new(0, 0), &rules);

        // (1,0) is overflown, never landed on.
        assert_eq!(
            destinations(&options),
            vec![CellPosition::new(2, 0), CellPosition::new(3, 0)]
        );
    }

    #[test]
    fn test_must_pass_through_requires_crossing() {
        let mut board = BoardState::new(5, 1);
        occupy(&mut board, 2, 0, 0);
        let rules = MovementRules::new(4)
            .orthogonal()
            .with_obstacle_rule(ObstaclePassRule::MustPassThrough);

        let options = compute_moves(&board, CellPosition::new(0, 0), &rules);

        // (1,0) lies before the obstacle; only cells beyond it are legal.
        assert_eq!(
            destinations(&options),
            vec![CellPosition::new(3, 0), CellPosition::new(4, 0)]
        );
    }

    #[test]
    fn test_must_pass_through_empty_ray_yields_nothing() {
        let board = BoardState::new(5, 1);
        let rules = MovementRules::new(4)
            .orthogonal()
            .with_obstacle_rule(ObstaclePassRule::MustPassThrough);

        assert!(compute_moves(&board, CellPosition::new(0, 0), &rules).is_empty());
    }

    #[test]
    fn test_push_obstacles_stops_on_obstacle() {
        let mut board = BoardState::new(3, 1);
        occupy(&mut board, 1, 0, 0);
        let rules = MovementRules::new(3)
            .orthogonal()
            .with_obstacle_rule(ObstaclePassRule::PushObstacles);

        let options = compute_moves(&board, CellPosition::new(0, 0), &rules);

        // The occupied cell is the sole, furthest rightward destination.
        assert_eq!(destinations(&options), vec![CellPosition::new(1, 0)]);
    }

    #[test]
    fn test_push_obstacles_open_ray_behaves_normally() {
        let board = BoardState::new(4, 1);
        let rules = MovementRules::new(2)
            .orthogonal()
            .with_obstacle_rule(ObstaclePassRule::PushObstacles);

        let options = compute_moves(&board, CellPosition::new(0, 0), &rules);

        assert_eq!(
            destinations(&options),
            vec![CellPosition::new(1, 0), CellPosition::new(2, 0)]
        );
    }

    #[test]
    fn test_origin_never_returned() {
        let board = BoardState::new(3, 3);
        let origin = CellPosition::new(1, 1);
        let rules = MovementRules::new(10).orthogonal().diagonal();

        let options = compute_moves(&board, origin, &rules);

        assert!(!destinations(&options).contains(&origin));
    }

    #[test]
    fn test_all_destinations_in_bounds() {
        let mut board = BoardState::new(4, 4);
        occupy(&mut board, 2, 2, 0);
        let rules = MovementRules::new(50).orthogonal().diagonal();

        let options = compute_moves(&board, CellPosition::new(0, 3), &rules);

        for option in options {
            assert!(board.is_inside_bounds(option.destination));
        }
    }

    #[test]
    fn test_deterministic() {
        let mut board = BoardState::new(4, 4);
        occupy(&mut board, 1, 1, 0);
        let rules = MovementRules::new(3).orthogonal().diagonal();

        let a = compute_moves(&board, CellPosition::new(0, 0), &rules);
        let b = compute_moves(&board, CellPosition::new(0, 0), &rules);

        assert_eq!(a, b);
    }
}
