//! NxNxN Rotating Cube Engine
//!
//! Holds the facelet colors of a six-faced twisty cube, applies quarter-turn
//! moves driven by a declarative adjacency table, detects the solved state and
//! recovers the move that links two observed states.

pub mod config;
pub mod engine;
pub mod error;
pub mod inference;
pub mod moves;
pub mod state;
pub mod topology;

pub use engine::{Cube, Snapshot, Step, DEFAULT_DIM, DEFAULT_SHUFFLE_MOVES};
pub use error::{ConfigurationError, Error, InvalidMoveError, InvalidStateShapeError};
pub use inference::infer_move;
pub use moves::{legal_moves, parse_sequence, Move};
pub use state::{format_net, Color, CubeState, MAX_DIM};
pub use topology::{Direction, Edge, Face, Neighbor, Topology};
