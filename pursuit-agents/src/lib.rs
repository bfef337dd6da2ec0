//! Agents and evaluation functions built on the `pursuit-minimax` search
//! core, plus a small grid world that implements the core's world interface
//! and is used by the tests and the reflex agent.

pub mod eval;
pub mod grid;
pub mod reflex;

pub use eval::{
    better_evaluation, reflex_evaluation, score_evaluation, EvaluationFunction,
    UnknownEvaluationFunction,
};
pub use grid::{GridWorld, LayoutError, Move};
pub use reflex::ReflexAgent;

use pursuit_minimax::{SearchAgent, SearchPolicy};

/// Build a search agent from an evaluation function *name*.
///
/// The name is resolved against the closed registry in
/// [`EvaluationFunction`] once, here; an unknown name is a configuration
/// error and never silently defaults.
pub fn search_agent<W>(
    policy: SearchPolicy,
    evaluation_function: &str,
    depth: usize,
) -> Result<SearchAgent<W, EvaluationFunction>, UnknownEvaluationFunction> {
    Ok(SearchAgent::new(policy, evaluation_function.parse()?, depth))
}
