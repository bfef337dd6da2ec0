//! Exact minimax: the pursuer maximizes, every adversary minimizes.

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

    let children = world.legal_actions(agent_index).into_iter().map(|action| {
        let child = search(
            evaluator,
            &world.successor(agent_index, action),
            agent_index + 1,
            depth,
        );
        ScoredAction::new(child.score(), action)
    });

    let combined = if agent_index == PURSUER {
        children.max()
    } else {
        children.min()
    };

    combined.expect(NO_LEGAL_ACTIONS)
}
