//! A synthetic world for exercising the traversal: an explicit game tree
//! where every state is just the path of actions taken to reach it, scored
//! by a table the test supplies.

use std::cell::RefCell;
use std::rc::Rc;

use crate::world::{AgentIndex, SimulableWorld, TerminalDeterminableWorld};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum TestMove {
    A,
    B,
    C,
    Stop,
}

#[derive(Clone)]
pub(crate) struct TreeWorld {
    pub(crate) agents: usize,
    pub(crate) branching: usize,
    pub(crate) terminal: bool,
    pub(crate) path: Vec<TestMove>,
    pub(crate) leaf_score: fn(&[TestMove]) -> f64,
    /// Every path handed to `successor`, shared across clones so a test can
    /// see which parts of the tree a search actually touched.
    pub(crate) expanded: Rc<RefCell<Vec<Vec<TestMove>>>>,
}

impl TreeWorld {
    pub(crate) fn new(agents: usize, branching: usize, leaf_score: fn(&[TestMove]) -> f64) -> Self {
        Self {
            agents,
            branching,
            terminal: false,
            path: Vec::new(),
            leaf_score,
            expanded: Rc::default(),
        }
    }

    pub(crate) fn was_expanded(&self, path: &[TestMove]) -> bool {
        self.expanded.borrow().iter().any(|expanded| expanded == path)
    }
}

impl SimulableWorld for TreeWorld {
    type Action = TestMove;

    fn agent_count(&self) -> usize {
        self.agents
    }

    fn legal_actions(&self, _agent: AgentIndex) -> Vec<TestMove> {
        [TestMove::A, TestMove::B, TestMove::C][..self.branching].to_vec()
    }

    fn successor(&self, _agent: AgentIndex, action: TestMove) -> Self {
        let mut next = self.clone();
        next.path.push(action);
        next.expanded.borrow_mut().push(next.path.clone());
        next
    }

    fn no_op() -> TestMove {
        TestMove::Stop
    }
}

impl TerminalDeterminableWorld for TreeWorld {
    fn is_win(&self) -> bool {
        self.terminal
    }

    fn is_lose(&self) -> bool {
        false
    }
}

/// The evaluator used throughout the search tests: defer to the score table.
pub(crate) fn path_score(world: &TreeWorld) -> f64 {
    (world.leaf_score)(&world.path)
}

pub(crate) fn constant_seven(_path: &[TestMove]) -> f64 {
    7.0
}

pub(crate) fn all_equal(_path: &[TestMove]) -> f64 {
    1.0
}

pub(crate) fn path_length(path: &[TestMove]) -> f64 {
    path.len() as f64
}

pub(crate) fn last_action_value(path: &[TestMove]) -> f64 {
    match path.last() {
        Some(TestMove::A) => 3.0,
        Some(TestMove::B) => 4.0,
        Some(TestMove::C) => 8.0,
        _ => 0.0,
    }
}

/// A two-ply table where the pursuer's best worst case is action A.
pub(crate) fn corridor(path: &[TestMove]) -> f64 {
    match path {
        [TestMove::A, TestMove::A] => 5.0,
        [TestMove::A, TestMove::B] => 9.0,
        [TestMove::A, TestMove::C] => 6.0,
        [TestMove::B, TestMove::A] => 8.0,
        [TestMove::B, TestMove::B] => 2.0,
        [TestMove::B, TestMove::C] => 7.0,
        [TestMove::C, _] => 4.0,
        _ => unreachable!("unexpected path {path:?}"),
    }
}
