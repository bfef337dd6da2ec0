//! The bounded-depth traversal and its three interchangeable policies.
//!
//! All three policies walk the same tree: agents move in index order, the
//! depth budget drops by one each time the cycle wraps back to the pursuer,
//! and a node whose state is terminal or whose budget has run out is scored
//! by the configured evaluation function. They differ only in how a node
//! combines its children, so each policy is a small recursive function over
//! the shared helpers in this module, selected by a [`SearchPolicy`] tag.

mod alpha_beta;
mod expectimax;
mod minimax;

#[cfg(test)]
pub(crate) mod fixtures;

use std::marker::PhantomData;

use decorum::{Infinite, N64};
use derivative::Derivative;
use tracing::{info, info_span};

use crate::score::{Evaluate, ScoredAction};
use crate::world::{AgentIndex, SimulableWorld, TerminalDeterminableWorld, PURSUER};

/// Lookahead depth, in full rounds, used when the caller has no opinion.
pub const DEFAULT_DEPTH: usize = 2;

/// Selects how a node combines the scores of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPolicy {
    /// Exact worst-case search: adversaries pick the child that hurts the
    /// pursuer most.
    Minimax,
    /// Same answers as [`SearchPolicy::Minimax`] at the root, but subtrees
    /// that cannot influence the decision are skipped.
    AlphaBeta,
    /// Adversaries are modeled as moving uniformly at random, so their nodes
    /// take the mean of their children instead of the minimum.
    Expectimax,
}

/// A configured decision maker: a policy, an evaluation function and a depth
/// bound, fixed at construction.
///
/// Each call to [`SearchAgent::choose_action`] is independent; no search
/// state survives between decisions.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct SearchAgent<W, E> {
    policy: SearchPolicy,
    depth: usize,
    #[derivative(Debug = "ignore")]
    evaluator: E,
    _world: PhantomData<W>,
}

impl<W, E> SearchAgent<W, E> {
    /// Configure an agent. `depth` is measured in full rounds of all agents
    /// moving once; [`DEFAULT_DEPTH`] is the conventional choice.
    pub fn new(policy: SearchPolicy, evaluator: E, depth: usize) -> Self {
        Self {
            policy,
            depth,
            evaluator,
            _world: PhantomData,
        }
    }

    /// The policy this agent was configured with.
    pub fn policy(&self) -> SearchPolicy {
        self.policy
    }

    /// The depth bound this agent was configured with.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl<W, E> SearchAgent<W, E>
where
    W: SimulableWorld + TerminalDeterminableWorld,
    E: Evaluate<W>,
{
    /// Run the configured search from the pursuer's turn and return the root
    /// value together with the chosen action.
    pub fn decide(&self, world: &W) -> ScoredAction<W::Action> {
        match self.policy {
            SearchPolicy::Minimax => minimax::search(&self.evaluator, world, PURSUER, self.depth),
            SearchPolicy::AlphaBeta => alpha_beta::search(
                &self.evaluator,
                world,
                PURSUER,
                self.depth,
                N64::NEG_INFINITY,
                N64::INFINITY,
            ),
            SearchPolicy::Expectimax => {
                expectimax::search(&self.evaluator, world, PURSUER, self.depth)
            }
        }
    }

    /// Pick the next move for the pursuer.
    pub fn choose_action(&self, world: &W) -> W::Action {
        info_span!(
            "decide",
            policy = ?self.policy,
            depth = self.depth,
            agent_count = world.agent_count(),
        )
        .in_scope(|| {
            let chosen = self.decide(world);
            info!(score = ?chosen.score(), action = ?chosen.action(), "chose action");
            chosen.action()
        })
    }
}

/// Terminal and horizon handling shared by every policy: a won, lost or
/// out-of-budget state is scored by the evaluation function and paired with
/// the no-op sentinel. This is the only place an evaluation function runs.
fn horizon<W, E>(evaluator: &E, world: &W, depth: usize) -> Option<ScoredAction<W::Action>>
where
    W: SimulableWorld + TerminalDeterminableWorld,
    E: Evaluate<W>,
{
    if world.is_win() || world.is_lose() || depth == 0 {
        Some(ScoredAction::new(
            N64::from(evaluator.evaluate(world)),
            W::no_op(),
        ))
    } else {
        None
    }
}

/// Normalize the agent index into the cycle and charge the depth budget:
/// once the last agent in the cycle is expanding, its children belong to the
/// next round, so they are searched with one round less.
fn take_turn(agent_index: AgentIndex, agent_count: usize, depth: usize) -> (AgentIndex, usize) {
    let agent_index = agent_index % agent_count;
    let depth = if agent_index == agent_count - 1 {
        depth - 1
    } else {
        depth
    };
    (agent_index, depth)
}

const NO_LEGAL_ACTIONS: &str =
    "world reported no legal actions for a non-terminal state, which breaks its contract";
