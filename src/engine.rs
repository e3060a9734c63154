//! The rotation engine.
//!
//! A move is applied in two steps: the turned face's own grid is rotated a
//! quarter turn, then the edge strips of its four neighbors are cycled one
//! position along the face's neighbor cycle. Both steps are driven entirely by
//! the topology table; there is no per-face special casing.

use std::fmt;
use std::sync::Arc;

use log::{debug, info, trace};

use crate::error::InvalidStateShapeError;
use crate::moves::Move;
use crate::state::{Color, CubeState};
use crate::topology::{Direction, Neighbor, Topology};

/// Grid size used when none is given.
pub const DEFAULT_DIM: usize = 3;

/// Random moves applied by `reset(true)`.
pub const DEFAULT_SHUFFLE_MOVES: usize = 100;

pub const SOLVED_REWARD: i32 = 1;
pub const UNSOLVED_REWARD: i32 = -1;

/// Applies one quarter turn to `state`.
pub fn turn(state: &mut CubeState, topology: &Topology, mv: Move) {
    state.rotate_face(topology.slot(mv.face), mv.direction);
    cycle_strips(state, topology, topology.neighbors(mv.face), mv.direction);
}

/// Moves each neighbor strip one step along the cycle.
///
/// Clockwise walks the cycle forwards, counter-clockwise backwards. A single
/// carry buffer holds the strip in transit, so exactly four strips move.
fn cycle_strips(
    state: &mut CubeState,
    topology: &Topology,
    cycle: &[Neighbor; 4],
    direction: Direction,
) {
    let order = match direction {
        Direction::Clockwise => [0, 1, 2, 3],
        Direction::CounterClockwise => [3, 2, 1, 0],
    };

    // the strip entering the first target comes from the end of the walk
    let mut previous = order[3];
    let source = cycle[previous];
    let mut carry: Vec<Color> = state.read_strip(topology.slot(source.face), source.edge);

    for index in order {
        let target = cycle[index];
        // a pair's flag lives on its clockwise destination
        let reversed = match direction {
            Direction::Clockwise => target.reversed,
            Direction::CounterClockwise => cycle[previous].reversed,
        };
        if reversed {
            carry.reverse();
        }
        trace!(
            "strip {}:{:?} -> {}:{:?} (reversed: {reversed})",
            cycle[previous].face,
            cycle[previous].edge,
            target.face,
            target.edge
        );
        state.swap_strip(topology.slot(target.face), target.edge, &mut carry);
        previous = index;
    }
}

/// Result of applying one move.
#[derive(Debug)]
pub struct Step<'a> {
    pub state: &'a CubeState,
    pub reward: i32,
    pub solved: bool,
}

/// Read-only view for presentation layers.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub state: &'a CubeState,
    pub topology: &'a Topology,
}

impl Snapshot<'_> {
    /// Color names indexed by palette index.
    pub fn palette(&self) -> Vec<&str> {
        self.topology.palette().collect()
    }

    /// Cells of one face (by slot), row-major.
    pub fn face(&self, slot: usize) -> &[Color] {
        self.state.face(slot)
    }
}

const fn reward_for(solved: bool) -> i32 {
    if solved {
        SOLVED_REWARD
    } else {
        UNSOLVED_REWARD
    }
}

/// A cube that owns its state and counts applied moves.
pub struct Cube {
    topology: Arc<Topology>,
    state: CubeState,
    move_count: usize,
    rng: fastrand::Rng,
}

impl Cube {
    /// A solved cube of the given grid size.
    pub fn new(topology: Arc<Topology>, dim: usize) -> Result<Self, InvalidStateShapeError> {
        let state = CubeState::solved(dim)?;
        debug!("Cube initialized with dim {dim}");
        Ok(Self::with_state(topology, state))
    }

    /// A cube starting from an existing state.
    pub fn with_state(topology: Arc<Topology>, state: CubeState) -> Self {
        Self {
            topology,
            state,
            move_count: 0,
            rng: fastrand::Rng::new(),
        }
    }

    /// Reseeds the random source used by `shuffle`.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.rng = fastrand::Rng::with_seed(seed);
        self
    }

    /// Replaces the state; its grid size must match this cube's.
    pub fn set_state(&mut self, state: CubeState) -> Result<(), InvalidStateShapeError> {
        if state.dim() != self.dim() {
            return Err(InvalidStateShapeError::DimensionMismatch {
                expected: self.dim(),
                actual: state.dim(),
            });
        }
        self.state = state;
        Ok(())
    }

    /// Applies a move and reports the reward and whether the cube is now solved.
    pub fn apply(&mut self, mv: Move) -> Step<'_> {
        turn(&mut self.state, &self.topology, mv);
        self.move_count += 1;

        let solved = self.state.is_solved();
        let reward = reward_for(solved);
        debug!("{}: {} done, reward={}", self.move_count, mv, reward);

        Step {
            state: &self.state,
            reward,
            solved,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    /// +1 when solved, -1 otherwise.
    pub fn reward(&self) -> i32 {
        reward_for(self.is_solved())
    }

    /// Applies `n` random moves. They are not counted; the counter is 0 afterwards.
    pub fn shuffle(&mut self, n: usize) {
        for _ in 0..n {
            let mv = Move::random(&self.topology, &mut self.rng);
            turn(&mut self.state, &self.topology, mv);
        }
        self.move_count = 0;
        info!("Cube shuffled {n} times");
    }

    /// Restores the solved state, then shuffles if asked.
    pub fn reset(&mut self, shuffle: bool) -> &CubeState {
        self.state.reset();
        self.move_count = 0;
        if shuffle {
            self.shuffle(DEFAULT_SHUFFLE_MOVES);
        }
        &self.state
    }

    /// Moves applied since the last reset or shuffle.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn state(&self) -> &CubeState {
        &self.state
    }

    pub fn dim(&self) -> usize {
        self.state.dim()
    }

    pub fn topology(&self) -> &Arc<Topology> {
        &self.topology
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            state: &self.state,
            topology: &self.topology,
        }
    }
}

impl fmt::Debug for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cube")
            .field("dim", &self.dim())
            .field("move_count", &self.move_count)
            .field("solved", &self.is_solved())
            .finish()
    }
}
