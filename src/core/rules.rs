//! Movement rules: how far a move may travel, in which directions, and
//! how it interacts with occupied cells.
//!
//! A `MovementRules` value is supplied per move-evaluation call, typically
//! taken from the moving tile's configured behavior. The engine never
//! interprets tile type keys; rules are the whole behavioral contract.

use serde::{Deserialize, Serialize};

/// How a movement ray interacts with an occupied cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstaclePassRule {
    /// The ray stops at the first obstacle; no destination at or beyond it.
    CannotPassThrough,
    /// The ray flies over obstacles but may never land on one.
    CanPassThrough,
    /// Destinations are only legal strictly beyond at least one obstacle.
    MustPassThrough,
    /// The first obstacle is itself a legal destination (a push), and the
    /// ray stops there.
    PushObstacles,
}

/// Per-move configuration of range, direction set, and obstacle policy.
///
/// Immutable once built. `max_steps` is unsigned: a rule set can express
/// "no movement" (`max_steps == 0`) but not a negative range.
///
/// ```
/// use push_grid::{MovementRules, ObstaclePassRule};
///
/// let rook = MovementRules::new(10).orthogonal();
/// assert!(rook.allow_orthogonal);
/// assert!(!rook.allow_diagonal);
/// assert_eq!(rook.obstacle_rule, ObstaclePassRule::CannotPassThrough);
///
/// let shover = MovementRules::new(1)
///     .orthogonal()
///     .diagonal()
///     .with_obstacle_rule(ObstaclePassRule::PushObstacles);
/// assert!(shover.allow_diagonal);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementRules {
    /// Maximum number of steps along a single ray.
    pub max_steps: u32,

    /// Are the four orthogonal directions available?
    pub allow_orthogonal: bool,

    /// Are the four diagonal directions available?
    pub allow_diagonal: bool,

    /// Obstacle interaction policy.
    pub obstacle_rule: ObstaclePassRule,
}

impl MovementRules {
    /// Create a rule set with the given range, no directions enabled, and
    /// the `CannotPassThrough` policy.
    #[must_use]
    pub const fn new(max_steps: u32) -> Self {
        Self {
            max_steps,
            allow_orthogonal: false,
            allow_diagonal: false,
            obstacle_rule: ObstaclePassRule::CannotPassThrough,
        }
    }

    /// Enable the four orthogonal directions.
    #[must_use]
    pub const fn orthogonal(mut self) -> Self {
        self.allow_orthogonal = true;
        self
    }

    /// Enable the four diagonal directions.
    #[must_use]
    pub const fn diagonal(mut self) -> Self {
        self.allow_diagonal = true;
        self
    }

    /// Set the obstacle interaction policy.
    #[must_use]
    pub const fn with_obstacle_rule(mut self, rule: ObstaclePassRule) -> Self {
        self.obstacle_rule = rule;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let rules = MovementRules::new(3);

        assert_eq!(rules.max_steps, 3);
        assert!(!rules.allow_orthogonal);
        assert!(!rules.allow_diagonal);
        assert_eq!(rules.obstacle_rule, ObstaclePassRule::CannotPassThrough);
    }

    #[test]
    fn test_builder_chaining() {
        let rules = MovementRules::new(1)
            .orthogonal()
            .diagonal()
            .with_obstacle_rule(ObstaclePassRule::MustPassThrough);

        assert!(rules.allow_orthogonal);
        assert!(rules.allow_diagonal);
        assert_eq!(rules.obstacle_rule, ObstaclePassRule::MustPassThrough);
    }

    #[test]
    fn test_serialization() {
        let rules = MovementRules::new(5)
            .orthogonal()
            .with_obstacle_rule(ObstaclePassRule::PushObstacles);

        let json = serde_json::to_string(&rules).unwrap();
        let deserialized: MovementRules = serde_json::from_str(&json).unwrap();
        assert_eq!(rules, deserialized);
    }
}
