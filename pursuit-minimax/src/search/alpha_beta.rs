//! Minimax with branch pruning.
//!
//! The prune test compares a child's value against the bound inherited from
//! the parent only (`alpha` at minimizing nodes, `beta` at maximizing ones),
//! with strict inequality, and returns that child's pair immediately. The
//! locally tightened bound is threaded to later siblings but never triggers a
//! prune itself. This is not textbook alpha-beta; it is kept exactly as is
//! for output parity with the behavior it reproduces, and in adversarial
//! constructions it can visit nodes the canonical rule would skip.

use std::cmp;

use decorum::N64;

use crate::score::{Evaluate, ScoredAction};
use crate::world::{AgentIndex, SimulableWorld, TerminalDeterminableWorld, PURSUER};

use super::{horizon, take_turn, NO_LEGAL_ACTIONS};

pub(crate) fn search<W, E>(
    evaluator: &E,
    world: &W,
    agent_index: AgentIndex,
    depth: usize,
    alpha: N64,
    beta: N64,
) -> ScoredAction<W::Action>
where
    W: SimulableWorld + TerminalDeterminableWorld,
    E: Evaluate<W>,
{
    if let Some(leaf) = horizon(evaluator, world, depth) {
        return leaf;
    }

    let (agent_index, depth) = take_turn(agent_index, world.agent_count(), depth);

    if agent_index == PURSUER {
        max_node(evaluator, world, agent_index, depth, alpha, beta)
    } else {
        min_node(evaluator, world, agent_index, depth, alpha, beta)
    }
}

fn max_node<W, E>(
    evaluator: &E,
    world: &W,
    agent_index: AgentIndex,
    depth: usize,
    mut alpha: N64,
    beta: N64,
) -> ScoredAction<W::Action>
where
    W: SimulableWorld + TerminalDeterminableWorld,
    E: Evaluate<W>,
{
    let mut explored = Vec::new();

    for action in world.legal_actions(agent_index) {
        let value = search(
            evaluator,
            &world.successor(agent_index, action),
            agent_index + 1,
            depth,
            alpha,
            beta,
        )
        .score();
        let candidate = ScoredAction::new(value, action);
        explored.push(candidate);

        if value > beta {
            return candidate;
        }
        alpha = cmp::max(alpha, value);
    }

    explored.into_iter().max().expect(NO_LEGAL_ACTIONS)
}

fn min_node<W, E>(
    evaluator: &E,
    world: &W,
    agent_index: AgentIndex,
    depth: usize,
    alpha: N64,
    mut beta: N64,
) -> ScoredAction<W::Action>
where
    W: SimulableWorld + TerminalDeterminableWorld,
    E: Evaluate<W>,
{
    let mut explored = Vec::new();

    for action in world.legal_actions(agent_index) {
        let value = search(
            evaluator,
            &world.successor(agent_index, action),
            agent_index + 1,
            depth,
            alpha,
            beta,
        )
        .score();
        let candidate = ScoredAction::new(value, action);
        explored.push(candidate);

        if value < alpha {
            return candidate;
        }
        beta = cmp::min(beta, value);
    }

    explored.into_iter().min().expect(NO_LEGAL_ACTIONS)
}
