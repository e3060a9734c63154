//! Error types for move parsing, state ingestion and topology loading.

use thiserror::Error;

use crate::topology::{Edge, Face};

/// A move code that does not name a legal (face, direction) pair.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidMoveError {
    #[error("Move code must be exactly two characters, got {0:?}")]
    WrongLength(String),
    #[error("Unknown face symbol {0:?}")]
    UnknownFace(char),
    #[error("Unknown direction symbol {0:?}")]
    UnknownDirection(char),
}

/// A state input that does not match the configured grid or one-hot shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidStateShapeError {
    #[error("Grid dimension must be at least 1")]
    ZeroDimension,
    #[error("Grid dimension {dim} exceeds the supported maximum of {max}")]
    DimensionTooLarge { dim: usize, max: usize },
    #[error("Expected {expected} faces but got {actual}")]
    FaceCount { expected: usize, actual: usize },
    #[error("Face {face}: expected {expected} rows but got {actual}")]
    RowCount {
        face: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Face {face}, row {row}: expected {expected} cells but got {actual}")]
    RowLength {
        face: usize,
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Face {face}, cell ({row}, {col}): expected a one-hot vector of {expected} but got {actual}")]
    OneHotWidth {
        face: usize,
        row: usize,
        col: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Color {color} is outside the palette of {palette} colors")]
    ColorOutOfRange { color: u8, palette: usize },
    #[error("State has dimension {actual} but the cube expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// A topology table that fails structural validation, or cannot be read at all.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Failed to read topology file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse topology: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize topology: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Expected {expected} faces but {actual} were declared")]
    FaceCount { expected: usize, actual: usize },
    #[error("Face {0} is declared more than once")]
    DuplicateFace(Face),
    #[error("Symbol {0:?} is used more than once")]
    DuplicateSymbol(char),
    #[error("Color {0:?} is assigned to more than one face")]
    DuplicateColor(String),
    #[error("Face {face} lists {count} neighbors, expected 4")]
    NeighborCount { face: Face, count: usize },
    #[error("Face {0} lists itself as a neighbor")]
    SelfNeighbor(Face),
    #[error("Face {face} lists neighbor {neighbor} more than once")]
    RepeatedNeighbor { face: Face, neighbor: Face },
    #[error("Edge {edge:?} of face {face} is claimed by more than one rotation")]
    EdgeClaimedTwice { face: Face, edge: Edge },
    #[error("Edge {edge:?} of face {face} is not moved by any rotation")]
    EdgeUnclaimed { face: Face, edge: Edge },
    #[error("Face {face} borders {neighbor} but {neighbor} does not border {face}")]
    AsymmetricAdjacency { face: Face, neighbor: Face },
}

/// Umbrella error for callers that mix parsing, ingestion and configuration.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    InvalidMove(#[from] InvalidMoveError),
    #[error(transparent)]
    InvalidStateShape(#[from] InvalidStateShapeError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
