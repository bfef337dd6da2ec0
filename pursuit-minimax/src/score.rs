//! Scoring types shared by every search policy.

use std::fmt::Debug;

use decorum::N64;

/// Turns a world state into a score for the pursuer. Higher is better.
///
/// Implemented for any `Fn(&W) -> f64`, so plain functions and closures work
/// directly. The returned value must not be NaN; scores are stored as
/// [`N64`], which has a total order and makes the tie-break rule below
/// well defined.
pub trait Evaluate<W> {
    /// Score the given state.
    fn evaluate(&self, world: &W) -> f64;
}

impl<W, F> Evaluate<W> for F
where
    F: Fn(&W) -> f64,
{
    fn evaluate(&self, world: &W) -> f64 {
        (self)(world)
    }
}

/// The unit passed between levels of the search tree: a score paired with the
/// action that achieves it.
///
/// The derived ordering is lexicographic, score first, then action. Taking
/// the `max` or `min` of sibling `ScoredAction`s therefore breaks score ties
/// by the action's natural ordering rather than by exploration order: a
/// maximizing node prefers the greater label, a minimizing node the lesser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScoredAction<A> {
    score: N64,
    action: A,
}

impl<A: Copy + Ord + Debug> ScoredAction<A> {
    /// Pair a score with the action that achieves it.
    pub fn new(score: N64, action: A) -> Self {
        Self { score, action }
    }

    /// The value of this node under the active policy.
    pub fn score(&self) -> N64 {
        self.score
    }

    /// The chosen action, or the world's no-op sentinel at a leaf.
    pub fn action(&self) -> A {
        self.action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_defer_to_the_action_label() {
        let low = ScoredAction::new(N64::from(1.0), 'a');
        let high = ScoredAction::new(N64::from(1.0), 'b');

        assert_eq!([low, high].into_iter().max(), Some(high));
        assert_eq!([low, high].into_iter().min(), Some(low));
    }

    #[test]
    fn score_dominates_the_action_label() {
        let better = ScoredAction::new(N64::from(2.0), 'a');
        let worse = ScoredAction::new(N64::from(1.0), 'z');

        assert!(better > worse);
    }

    #[test]
    fn functions_evaluate_states() {
        fn double(world: &f64) -> f64 {
            world * 2.0
        }

        assert_eq!(double.evaluate(&3.0), 6.0);
    }
}
