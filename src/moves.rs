//! Quarter-turn moves and their textual codes.

use std::fmt;

use crate::error::InvalidMoveError;
use crate::topology::{Direction, Face, Topology};

/// A quarter turn of one face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

impl Move {
    pub const fn new(face: Face, direction: Direction) -> Self {
        Self { face, direction }
    }

    /// Parses a two-symbol code: face symbol then direction symbol.
    pub fn from_code(code: &str, topology: &Topology) -> Result<Self, InvalidMoveError> {
        let mut symbols = code.chars();
        let (Some(face_symbol), Some(direction_symbol), None) =
            (symbols.next(), symbols.next(), symbols.next())
        else {
            return Err(InvalidMoveError::WrongLength(code.to_string()));
        };

        let face = topology
            .face_for_symbol(face_symbol)
            .ok_or(InvalidMoveError::UnknownFace(face_symbol))?;
        let direction = topology
            .direction_for_symbol(direction_symbol)
            .ok_or(InvalidMoveError::UnknownDirection(direction_symbol))?;

        Ok(Self { face, direction })
    }

    /// Draws uniformly from the legal move set.
    pub fn random(topology: &Topology, rng: &mut fastrand::Rng) -> Self {
        let face = topology.face_at(rng.usize(..Face::COUNT));
        let direction = Direction::ALL[rng.usize(..Direction::ALL.len())];
        Self { face, direction }
    }

    /// Same face, opposite direction.
    pub const fn inverse(self) -> Self {
        Self {
            face: self.face,
            direction: self.direction.flipped(),
        }
    }

    /// The two-symbol code `from_code` accepts.
    pub fn code(self, topology: &Topology) -> String {
        [
            topology.symbol(self.face),
            topology.direction_symbol(self.direction),
        ]
        .iter()
        .collect()
    }
}

/// Standard notation: `U` for clockwise, `U'` for counter-clockwise.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Clockwise => write!(f, "{}", self.face),
            Direction::CounterClockwise => write!(f, "{}'", self.face),
        }
    }
}

/// Every legal move, face-major and direction-minor, in declaration order.
pub fn legal_moves(topology: &Topology) -> impl Iterator<Item = Move> + '_ {
    topology.faces().flat_map(|face| {
        Direction::ALL
            .into_iter()
            .map(move |direction| Move::new(face, direction))
    })
}

/// Parses whitespace-separated move codes, stopping at the first bad one.
pub fn parse_sequence(text: &str, topology: &Topology) -> Result<Vec<Move>, InvalidMoveError> {
    text.split_whitespace()
        .map(|code| Move::from_code(code, topology))
        .collect()
}
