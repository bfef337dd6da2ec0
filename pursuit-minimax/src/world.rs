//! The read-only interface the search core expects a world to provide.
//!
//! The world owns all game rules: move legality, transitions, win/lose
//! detection and score bookkeeping. The core only ever asks questions, it
//! never mutates a state; every transition yields a new, independent state.

use std::fmt::Debug;

/// Identifies an agent by its position in the turn cycle.
pub type AgentIndex = usize;

/// The sole maximizing agent. Everything at a higher index is an adversary.
pub const PURSUER: AgentIndex = 0;

/// A world that can enumerate moves and derive successor states.
///
/// The search relies on `legal_actions` returning a non-empty list for any
/// non-terminal state. That invariant belongs to the world; the core does not
/// verify it and treats a violation as a defect in the caller.
pub trait SimulableWorld: Sized {
    /// A move label. The world defines the universe of actions and their
    /// natural ordering; the ordering is what breaks ties between equally
    /// scored actions.
    type Action: Copy + Ord + Debug;

    /// Total number of agents in the turn cycle, pursuer included. At least 2.
    fn agent_count(&self) -> usize;

    /// The moves `agent` may take from this state, in the world's order.
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Self::Action>;

    /// A new, independent state in which `agent` has taken `action`.
    fn successor(&self, agent: AgentIndex, action: Self::Action) -> Self;

    /// The sentinel returned at leaves of the search tree, where there is no
    /// meaningful move to report.
    fn no_op() -> Self::Action;
}

/// A world that knows when the game has been decided.
pub trait TerminalDeterminableWorld {
    /// The pursuer has won.
    fn is_win(&self) -> bool;

    /// The pursuer has lost.
    fn is_lose(&self) -> bool;

    /// Either way, the game is over.
    fn is_over(&self) -> bool {
        self.is_win() || self.is_lose()
    }
}

/// A world that tracks a running score for the pursuer.
pub trait ScoreGettableWorld {
    /// The score as the world itself keeps it. Higher is better.
    fn raw_score(&self) -> f64;
}

/// A tile coordinate on a grid world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Column, increasing eastward.
    pub x: i32,
    /// Row, increasing southward.
    pub y: i32,
}

impl Position {
    /// Taxicab distance between two tiles.
    pub fn manhattan_distance(self, other: Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// Everything the evaluation heuristics need to know about one adversary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdversaryState {
    /// Where the adversary currently stands.
    pub position: Position,
    /// Moves remaining in the weakened countdown. While positive the
    /// adversary poses no threat and is instead a scoring opportunity.
    pub weakened_for: u32,
}

/// Board geometry accessors consumed only by evaluation functions, never by
/// the traversal itself.
pub trait BoardGettableWorld {
    /// Where the pursuer currently stands.
    fn pursuer_position(&self) -> Position;

    /// Position and weakened countdown of every adversary, in agent order.
    fn adversary_states(&self) -> Vec<AdversaryState>;

    /// Tiles that still hold a food dot.
    fn food_positions(&self) -> Vec<Position>;

    /// Tiles that still hold a pickup.
    fn pickup_positions(&self) -> Vec<Position>;
}
