//! Recovering the move that links two observed states.

use log::debug;

use crate::engine::turn;
use crate::moves::{legal_moves, Move};
use crate::state::CubeState;
use crate::topology::Topology;

/// Finds the single move that turns `before` into `after`.
///
/// Candidates are tried in legal-move order on a private copy of `before`;
/// the first whose result equals `after` wins. Returns `None` when no single
/// move links the two states, including when their grid sizes differ.
pub fn infer_move(topology: &Topology, before: &CubeState, after: &CubeState) -> Option<Move> {
    if before.dim() != after.dim() {
        debug!(
            "Cannot infer a move between dims {} and {}",
            before.dim(),
            after.dim()
        );
        return None;
    }

    let mut probe = before.clone();
    let found = legal_moves(topology).find(|&mv| {
        probe.clone_from(before);
        turn(&mut probe, topology, mv);
        probe == *after
    });

    if found.is_none() {
        debug!("No single move links the two states");
    }
    found
}
