//! Static evaluation functions: map a state to a number, higher better for
//! the pursuer.
//!
//! The constants in here (75/55 for threat, the 80 distance floors, the 1000
//! sentinel and the 3 floor in the reflex scorer) are fixed scale and
//! tie-break values, not tunables; they must stay literal for output parity
//! with the games these heuristics were calibrated on.

use std::cmp;
use std::str::FromStr;

use pursuit_minimax::{
    BoardGettableWorld, Evaluate, ScoreGettableWorld, SimulableWorld, PURSUER,
};
use thiserror::Error;

/// Returns the world's own score field verbatim.
///
/// This is the default leaf evaluator for the adversarial search agents and
/// the only one their correctness arguments need.
pub fn score_evaluation<W: ScoreGettableWorld>(world: &W) -> f64 {
    world.raw_score()
}

/// Composite heuristic: raw score plus threat, food and pickup terms.
///
/// The threat term looks at the nearest adversary: while its weakened
/// countdown runs the pursuer is rewarded for closing in, otherwise the same
/// amount is a penalty. The food and pickup terms reward clearing the board
/// and being close to what remains; a distance of 80 stands in for "nothing
/// in range".
pub fn better_evaluation<W>(world: &W) -> f64
where
    W: ScoreGettableWorld + BoardGettableWorld,
{
    let pursuer = world.pursuer_position();

    let nearest = world
        .adversary_states()
        .into_iter()
        .min_by_key(|adversary| pursuer.manhattan_distance(adversary.position))
        .expect("a pursuit world has at least one adversary");
    let proximity = cmp::max(75 - pursuer.manhattan_distance(nearest.position), 55) as f64;
    let threat = if nearest.weakened_for > 0 {
        proximity
    } else {
        -proximity
    };

    let food = world.food_positions();
    let food_distance = food
        .iter()
        .map(|&dot| pursuer.manhattan_distance(dot))
        .fold(80, cmp::min);
    let food_points = 500.0 - 10.0 * food.len() as f64 - food_distance as f64;

    let pickups = world.pickup_positions();
    let pickup_distance = pickups
        .iter()
        .map(|&pickup| pursuer.manhattan_distance(pickup))
        .fold(80, cmp::min);
    let pickup_points = 100.0 - 80.0 * pickups.len() as f64 - pickup_distance as f64;

    world.raw_score() + threat + food_points + pickup_points
}

/// One-ply scorer for the reflex agent: rate taking `action` now by looking
/// only at the immediate successor state.
pub fn reflex_evaluation<W>(world: &W, action: W::Action) -> f64
where
    W: SimulableWorld + ScoreGettableWorld + BoardGettableWorld,
{
    let successor = world.successor(PURSUER, action);
    let landed = successor.pursuer_position();

    let adversary_distance = successor
        .adversary_states()
        .into_iter()
        .map(|adversary| landed.manhattan_distance(adversary.position))
        .min()
        .expect("a pursuit world has at least one adversary");

    let mut score = successor.raw_score();

    // Breathing room from the adversaries, floored so that "far enough" all
    // counts the same.
    score += cmp::max(adversary_distance, 3) as f64;

    let remaining = successor.food_positions();
    if remaining.len() < world.food_positions().len() {
        score += 50.0;
    }
    let food_distance = remaining
        .iter()
        .map(|&dot| landed.manhattan_distance(dot))
        .fold(1000, cmp::min);
    score += 50.0 / food_distance as f64;

    if world.pickup_positions().contains(&landed) {
        score += 100.0;
    }

    // Standing still costs points.
    if action == W::no_op() {
        score -= 5.0;
    }

    score
}

/// The closed registry of leaf evaluation functions an agent can be
/// configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationFunction {
    /// [`score_evaluation`].
    Score,
    /// [`better_evaluation`].
    Better,
}

/// The name passed at configuration time did not resolve against the
/// registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown evaluation function `{0}`")]
pub struct UnknownEvaluationFunction(String);

impl FromStr for EvaluationFunction {
    type Err = UnknownEvaluationFunction;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "score" | "scoreEvaluationFunction" => Ok(EvaluationFunction::Score),
            "better" | "betterEvaluationFunction" => Ok(EvaluationFunction::Better),
            other => Err(UnknownEvaluationFunction(other.to_owned())),
        }
    }
}

impl<W> Evaluate<W> for EvaluationFunction
where
    W: ScoreGettableWorld + BoardGettableWorld,
{
    fn evaluate(&self, world: &W) -> f64 {
        match self {
            EvaluationFunction::Score => score_evaluation(world),
            EvaluationFunction::Better => better_evaluation(world),
        }
    }
}
