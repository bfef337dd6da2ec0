#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Bounded-depth adversarial search for turn-based pursuit games.
//!
//! One maximizing agent (the pursuer, always agent `0`) alternates turns with
//! one or more adversaries over a world you provide. The world is consumed
//! through a narrow set of read-only capability traits (see [`world`]); this
//! crate never mutates a state, it only derives successors and scores them.
//!
//! Three policies share the same traversal and differ only in how a node
//! combines its children: exact minimax, minimax with alpha-beta pruning, and
//! expectimax, which models the adversaries as moving uniformly at random.
//! Depth is counted in full rounds (every agent moving once), not in
//! individual agent turns.
//!
//! ```rust
//! use pursuit_minimax::{SearchAgent, SearchPolicy, SimulableWorld, TerminalDeterminableWorld};
//!
//! // A tiny world: the pursuer and one adversary take turns stepping along
//! // an integer line. The pursuer wants a high coordinate.
//! #[derive(Clone)]
//! struct Corridor {
//!     positions: [i32; 2],
//! }
//!
//! impl SimulableWorld for Corridor {
//!     type Action = i32;
//!
//!     fn agent_count(&self) -> usize {
//!         2
//!     }
//!
//!     fn legal_actions(&self, _agent: usize) -> Vec<i32> {
//!         vec![-1, 1]
//!     }
//!
//!     fn successor(&self, agent: usize, action: i32) -> Self {
//!         let mut next = self.clone();
//!         next.positions[agent] += action;
//!         next
//!     }
//!
//!     fn no_op() -> i32 {
//!         0
//!     }
//! }
//!
//! impl TerminalDeterminableWorld for Corridor {
//!     fn is_win(&self) -> bool {
//!         false
//!     }
//!
//!     fn is_lose(&self) -> bool {
//!         false
//!     }
//! }
//!
//! // The scoring function turns a state into a number; higher is better for
//! // the pursuer.
//! fn how_far_east(world: &Corridor) -> f64 {
//!     world.positions[0] as f64
//! }
//!
//! let agent = SearchAgent::new(SearchPolicy::Minimax, how_far_east, 2);
//! assert_eq!(agent.choose_action(&Corridor { positions: [0, 0] }), 1);
//! ```

pub mod score;
pub mod search;
pub mod world;

pub use score::{Evaluate, ScoredAction};
pub use search::{SearchAgent, SearchPolicy, DEFAULT_DEPTH};
pub use world::{
    AdversaryState, AgentIndex, BoardGettableWorld, Position, ScoreGettableWorld, SimulableWorld,
    TerminalDeterminableWorld, PURSUER,
};
