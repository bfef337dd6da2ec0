//! A depth-one agent that rates each legal move by its immediate successor.

use decorum::N64;
use itertools::Itertools;
use rand::seq::SliceRandom;
use tracing::{info, info_span};

use pursuit_minimax::{BoardGettableWorld, ScoreGettableWorld, SimulableWorld, PURSUER};

use crate::eval::reflex_evaluation;

/// Picks the legal move whose one-step outcome scores best under
/// [`reflex_evaluation`], choosing uniformly at random among ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReflexAgent;

impl ReflexAgent {
    /// Create a reflex agent.
    pub fn new() -> Self {
        ReflexAgent
    }

    /// Choose the pursuer's next move in `world`.
    pub fn choose_action<W>(&self, world: &W) -> W::Action
    where
        W: SimulableWorld + ScoreGettableWorld + BoardGettableWorld,
    {
        let _span = info_span!("reflex").entered();

        let scored = world
            .legal_actions(PURSUER)
            .into_iter()
            .map(|action| (N64::from(reflex_evaluation(world, action)), action))
            .collect_vec();

        let best = scored
            .iter()
            .map(|&(score, _)| score)
            .max()
            .expect("world reported no legal actions for a non-terminal state, which breaks its contract");

        let candidates = scored
            .into_iter()
            .filter(|&(score, _)| score == best)
            .map(|(_, action)| action)
            .collect_vec();
        let action = *candidates
            .choose(&mut rand::thread_rng())
            .expect("at least one action scored best");

        info!(score = ?best, action = ?action, tied = candidates.len(), "chose action");

        action
    }
}
