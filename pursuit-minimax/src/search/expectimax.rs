//! Expectimax: adversaries move uniformly at random instead of optimally.
//!
//! Pursuer nodes combine exactly as in minimax. Adversary nodes are chance
//! nodes: their value is the arithmetic mean of their children, and since no
//! single child is "chosen" the pair carries the no-op sentinel upward; only
//! the value matters to the parent.

use decorum::N64;
use itertools::Itertools;

use crate::score::{Evaluate, ScoredAction};
use crate::world::{AgentIndex, SimulableWorld, TerminalDeterminableWorld, PURSUER};

use super::{horizon, take_turn, NO_LEGAL_ACTIONS};

pub(crate) fn search<W, E>(
    evaluator: &E,
    world: &W,
    agent_index: AgentIndex,
    depth: usize,
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
        max_node(evaluator, world, agent_index, depth)
    } else {
        chance_node(evaluator, world, agent_index, depth)
    }
}

fn max_node<W, E>(
    evaluator: &E,
    world: &W,
    agent_index: AgentIndex,
    depth: usize,
) -> ScoredAction<W::Action>
where
    W: SimulableWorld + TerminalDeterminableWorld,
    E: Evaluate<W>,
{
    world
        .legal_actions(agent_index)
        .into_iter()
        .map(|action| {
            let child = search(
                evaluator,
                &world.successor(agent_index, action),
                agent_index + 1,
                depth,
            );
            ScoredAction::new(child.score(), action)
        })
        .max()
        .expect(NO_LEGAL_ACTIONS)
}

fn chance_node<W, E>(
    evaluator: &E,
    world: &W,
    agent_index: AgentIndex,
    depth: usize,
) -> ScoredAction<W::Action>
where
    W: SimulableWorld + TerminalDeterminableWorld,
    E: Evaluate<W>,
{
    let values = world
        .legal_actions(agent_index)
        .into_iter()
        .map(|action| {
            search(
                evaluator,
                &world.successor(agent_index, action),
                agent_index + 1,
                depth,
            )
            .score()
        })
        .collect_vec();

    assert!(!values.is_empty(), "{}", NO_LEGAL_ACTIONS);
    let total = values.iter().copied().fold(N64::from(0.0), |sum, value| {
        sum + value
    });
    let mean = total / N64::from(values.len() as f64);

    ScoredAction::new(mean, W::no_op())
}
