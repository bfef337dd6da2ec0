//! A small grid pursuit world: the reference implementation of the search
//! core's world interface, parsed from ASCII layouts.
//!
//! `%` is a wall, `.` a food dot, `o` a pickup, `P` the pursuer's start, `G`
//! an adversary's start and a space is an open tile. Eating a pickup starts
//! every adversary's weakened countdown; a weakened adversary caught by the
//! pursuer is sent back to its start tile.

use itertools::Itertools;
use rustc_hash::FxHashSet;
use thiserror::Error;

use pursuit_minimax::{
    AdversaryState, AgentIndex, BoardGettableWorld, Position, ScoreGettableWorld, SimulableWorld,
    TerminalDeterminableWorld, PURSUER,
};

/// A move on the grid. `Stay` doubles as the world's no-op sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Move {
    /// One tile up.
    North,
    /// One tile down.
    South,
    /// One tile right.
    East,
    /// One tile left.
    West,
    /// Stand still.
    Stay,
}

impl Move {
    const DIRECTIONS: [Move; 4] = [Move::North, Move::South, Move::East, Move::West];

    fn apply(self, from: Position) -> Position {
        let (dx, dy) = match self {
            Move::North => (0, -1),
            Move::South => (0, 1),
            Move::East => (1, 0),
            Move::West => (-1, 0),
            Move::Stay => (0, 0),
        };
        Position {
            x: from.x + dx,
            y: from.y + dy,
        }
    }
}

const FOOD_SCORE: f64 = 10.0;
const WIN_SCORE: f64 = 500.0;
const LOSE_PENALTY: f64 = 500.0;
const TIME_PENALTY: f64 = 1.0;
const ADVERSARY_SCORE: f64 = 200.0;
const WEAKENED_MOVES: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Adversary {
    position: Position,
    spawn: Position,
    weakened_for: u32,
}

/// The layout text could not be turned into a world.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A character other than `% . o P G` or a space.
    #[error("unrecognized layout tile `{tile}` at ({x}, {y})")]
    UnknownTile {
        /// The offending character.
        tile: char,
        /// Column of the tile.
        x: i32,
        /// Row of the tile.
        y: i32,
    },
    /// No `P` tile anywhere in the layout.
    #[error("layout has no pursuer start tile")]
    MissingPursuer,
    /// No `G` tile anywhere in the layout; a pursuit world needs at least
    /// one adversary.
    #[error("layout has no adversary start tile")]
    MissingAdversary,
}

/// An immutable grid world state. Transitions clone the state and apply one
/// agent's move, so every successor is independent of its parent.
#[derive(Debug, Clone, PartialEq)]
pub struct GridWorld {
    walls: FxHashSet<Position>,
    food: FxHashSet<Position>,
    pickups: FxHashSet<Position>,
    pursuer: Position,
    adversaries: Vec<Adversary>,
    score: f64,
    lost: bool,
}

impl GridWorld {
    /// Parse an ASCII layout into a starting state with a score of zero.
    pub fn parse(layout: &str) -> Result<Self, LayoutError> {
        let mut walls = FxHashSet::default();
        let mut food = FxHashSet::default();
        let mut pickups = FxHashSet::default();
        let mut pursuer = None;
        let mut adversaries = Vec::new();

        for (y, line) in layout.lines().enumerate() {
            for (x, tile) in line.chars().enumerate() {
                let position = Position {
                    x: x as i32,
                    y: y as i32,
                };
                match tile {
                    '%' => {
                        walls.insert(position);
                    }
                    '.' => {
                        food.insert(position);
                    }
                    'o' => {
                        pickups.insert(position);
                    }
                    'P' => pursuer = Some(position),
                    'G' => adversaries.push(Adversary {
                        position,
                        spawn: position,
                        weakened_for: 0,
                    }),
                    ' ' => {}
                    other => {
                        return Err(LayoutError::UnknownTile {
                            tile: other,
                            x: position.x,
                            y: position.y,
                        })
                    }
                }
            }
        }

        if adversaries.is_empty() {
            return Err(LayoutError::MissingAdversary);
        }

        Ok(GridWorld {
            walls,
            food,
            pickups,
            pursuer: pursuer.ok_or(LayoutError::MissingPursuer)?,
            adversaries,
            score: 0.0,
            lost: false,
        })
    }

    fn open(&self, position: Position) -> bool {
        !self.walls.contains(&position)
    }

    fn position_of(&self, agent: AgentIndex) -> Position {
        if agent == PURSUER {
            self.pursuer
        } else {
            self.adversaries[agent - 1].position
        }
    }

    /// Settle what happens when the pursuer and an adversary share a tile:
    /// a weakened adversary is eaten and respawns, anything else loses the
    /// game.
    fn resolve_contact(&mut self) {
        for adversary in &mut self.adversaries {
            if adversary.position != self.pursuer {
                continue;
            }
            if adversary.weakened_for > 0 {
                self.score += ADVERSARY_SCORE;
                adversary.position = adversary.spawn;
                adversary.weakened_for = 0;
            } else {
                self.score -= LOSE_PENALTY;
                self.lost = true;
            }
        }
    }
}

impl SimulableWorld for GridWorld {
    type Action = Move;

    fn agent_count(&self) -> usize {
        1 + self.adversaries.len()
    }

    fn legal_actions(&self, agent: AgentIndex) -> Vec<Move> {
        let from = self.position_of(agent);
        let mut moves = Move::DIRECTIONS
            .iter()
            .copied()
            .filter(|direction| self.open(direction.apply(from)))
            .collect_vec();
        // The pursuer may always stand still; an adversary only when boxed
        // in, which keeps the legal-action list non-empty everywhere.
        if agent == PURSUER || moves.is_empty() {
            moves.push(Move::Stay);
        }
        moves
    }

    fn successor(&self, agent: AgentIndex, action: Move) -> Self {
        let mut next = self.clone();
        if agent == PURSUER {
            next.pursuer = action.apply(self.pursuer);
            next.score -= TIME_PENALTY;
            if next.food.remove(&next.pursuer) {
                next.score += FOOD_SCORE;
                if next.food.is_empty() {
                    next.score += WIN_SCORE;
                }
            }
            if next.pickups.remove(&next.pursuer) {
                for adversary in &mut next.adversaries {
                    adversary.weakened_for = WEAKENED_MOVES;
                }
            }
        } else {
            let adversary = &mut next.adversaries[agent - 1];
            adversary.position = action.apply(adversary.position);
            adversary.weakened_for = adversary.weakened_for.saturating_sub(1);
        }
        next.resolve_contact();
        next
    }

    fn no_op() -> Move {
        Move::Stay
    }
}

impl TerminalDeterminableWorld for GridWorld {
    fn is_win(&self) -> bool {
        self.food.is_empty() && !self.lost
    }

    fn is_lose(&self) -> bool {
        self.lost
    }
}

impl ScoreGettableWorld for GridWorld {
    fn raw_score(&self) -> f64 {
        self.score
    }
}

impl BoardGettableWorld for GridWorld {
    fn pursuer_position(&self) -> Position {
        self.pursuer
    }

    fn adversary_states(&self) -> Vec<AdversaryState> {
        self.adversaries
            .iter()
            .map(|adversary| AdversaryState {
                position: adversary.position,
                weakened_for: adversary.weakened_for,
            })
            .collect()
    }

    fn food_positions(&self) -> Vec<Position> {
        self.food.iter().copied().collect()
    }

    fn pickup_positions(&self) -> Vec<Position> {
        self.pickups.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORRIDOR: &str = "\
%%%%%%%%
%P..oG.%
%%%%%%%%";

    fn at(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    #[test]
    fn layouts_parse_into_worlds() {
        let world = GridWorld::parse(CORRIDOR).unwrap();

        assert_eq!(world.pursuer_position(), at(1, 1));
        assert_eq!(world.agent_count(), 2);
        assert_eq!(world.adversary_states()[0].position, at(5, 1));
        assert_eq!(world.food_positions().len(), 3);
        assert_eq!(world.pickup_positions(), vec![at(4, 1)]);
        assert_eq!(world.raw_score(), 0.0);
        assert!(!world.is_over());
    }

    #[test]
    fn bad_layouts_are_rejected() {
        assert_eq!(
            GridWorld::parse("%X%"),
            Err(LayoutError::UnknownTile {
                tile: 'X',
                x: 1,
                y: 0
            })
        );
        assert_eq!(GridWorld::parse("%.G%"), Err(LayoutError::MissingPursuer));
        assert_eq!(GridWorld::parse("%.P%"), Err(LayoutError::MissingAdversary));
    }

    #[test]
    fn walls_bound_the_legal_actions() {
        let world = GridWorld::parse(CORRIDOR).unwrap();

        // The pursuer can only go east or stand still; the adversary can
        // slide either way along the corridor but may not stand still.
        assert_eq!(world.legal_actions(0), vec![Move::East, Move::Stay]);
        assert_eq!(world.legal_actions(1), vec![Move::East, Move::West]);
    }

    #[test]
    fn a_boxed_in_adversary_may_stand_still() {
        let world = GridWorld::parse("%%%%%%\n%P%G%%\n%%%%%%").unwrap();

        assert_eq!(world.legal_actions(1), vec![Move::Stay]);
    }

    #[test]
    fn eating_a_dot_scores_and_moving_costs() {
        let world = GridWorld::parse(CORRIDOR).unwrap();

        let next = world.successor(PURSUER, Move::East);

        assert_eq!(next.raw_score(), FOOD_SCORE - TIME_PENALTY);
        assert_eq!(next.food_positions().len(), 2);
        // The parent state is untouched.
        assert_eq!(world.food_positions().len(), 3);
    }

    #[test]
    fn clearing_the_last_dot_wins() {
        let world = GridWorld::parse("%%%%\n%PG%\n%.%%\n%%%%").unwrap();

        let next = world.successor(PURSUER, Move::South);

        assert!(next.is_win());
        assert_eq!(next.raw_score(), FOOD_SCORE + WIN_SCORE - TIME_PENALTY);
    }

    #[test]
    fn walking_into_an_adversary_loses() {
        let world = GridWorld::parse("%%%%\n%PG%\n%.%%\n%%%%").unwrap();

        let next = world.successor(PURSUER, Move::East);

        assert!(next.is_lose());
        assert!(!next.is_win());
        assert_eq!(next.raw_score(), -LOSE_PENALTY - TIME_PENALTY);
    }

    #[test]
    fn pickups_weaken_every_adversary() {
        let world = GridWorld::parse(CORRIDOR).unwrap();

        let next = world
            .successor(PURSUER, Move::East)
            .successor(1, Move::Stay)
            .successor(PURSUER, Move::East)
            .successor(1, Move::Stay)
            .successor(PURSUER, Move::East);

        assert_eq!(next.adversary_states()[0].weakened_for, WEAKENED_MOVES);
    }

    #[test]
    fn a_weakened_adversary_is_eaten_and_respawns() {
        let world = GridWorld::parse(CORRIDOR).unwrap();

        // Eat everything up to the pickup, then let the adversary walk in.
        let next = world
            .successor(PURSUER, Move::East)
            .successor(1, Move::Stay)
            .successor(PURSUER, Move::East)
            .successor(1, Move::Stay)
            .successor(PURSUER, Move::East)
            .successor(1, Move::West);

        assert!(!next.is_lose());
        assert_eq!(next.adversary_states()[0].position, at(5, 1));
        assert_eq!(next.adversary_states()[0].weakened_for, 0);
        let expected = 2.0 * FOOD_SCORE - 3.0 * TIME_PENALTY + ADVERSARY_SCORE;
        assert_eq!(next.raw_score(), expected);
    }

    #[test]
    fn adversary_moves_run_down_the_weakened_countdown() {
        let world = GridWorld::parse(CORRIDOR).unwrap();

        let next = world
            .successor(PURSUER, Move::East)
            .successor(1, Move::Stay)
            .successor(PURSUER, Move::East)
            .successor(1, Move::Stay)
            .successor(PURSUER, Move::East)
            .successor(1, Move::Stay);

        assert_eq!(next.adversary_states()[0].weakened_for, WEAKENED_MOVES - 1);
    }
}
