//! Face identities and the adjacency table that drives every rotation.
//!
//! Each face lists its four neighbors as a cycle in clockwise transfer order:
//! a clockwise quarter turn moves the strip on entry `i` onto entry `i + 1`.
//! A neighbor's `reversed` flag says the strip arriving at that entry (from its
//! clockwise predecessor) has its cells reversed in transit.
//!
//! Grid orientation, each face seen from outside the cube:
//! - Front, Right, Back, Left: row 0 borders Up; column 0 borders the face on
//!   the left in the order Left, Front, Right, Back (wrapping around).
//! - Up: row 0 borders Back, column 0 borders Left.
//! - Down: row 0 borders Front, column 0 borders Left.

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::config::{DirectionSymbols, FaceSpec, TopologyFile};
use crate::error::ConfigurationError;

/// One of the six faces of the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    Up,
    Down,
    Front,
    Back,
    Left,
    Right,
}

impl Face {
    /// Number of faces on the cube.
    pub const COUNT: usize = 6;

    pub const ALL: [Face; Face::COUNT] = [
        Face::Up,
        Face::Down,
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
    ];

    /// Standard single-letter notation.
    pub const fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Left => 'L',
            Face::Right => 'R',
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Quarter-turn direction, as seen looking at the turned face from outside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Clockwise, Direction::CounterClockwise];

    pub const fn flipped(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// The outermost row or column of a face grid.
///
/// Rows are read left to right, columns top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    /// Grid position of the `index`-th cell along this edge.
    #[inline]
    pub const fn cell(self, dim: usize, index: usize) -> (usize, usize) {
        match self {
            Edge::Top => (0, index),
            Edge::Bottom => (dim - 1, index),
            Edge::Left => (index, 0),
            Edge::Right => (index, dim - 1),
        }
    }
}

/// One entry of a face's neighbor cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbor {
    pub face: Face,
    pub edge: Edge,
    pub reversed: bool,
}

const fn neighbor(face: Face, edge: Edge, reversed: bool) -> Neighbor {
    Neighbor {
        face,
        edge,
        reversed,
    }
}

/// The canonical cube: declaration order, symbol, color and neighbor cycle per face.
const STANDARD_FACES: [(Face, char, &str, [Neighbor; 4]); Face::COUNT] = [
    (
        Face::Up,
        'U',
        "white",
        [
            neighbor(Face::Front, Edge::Top, false),
            neighbor(Face::Left, Edge::Top, false),
            neighbor(Face::Back, Edge::Top, false),
            neighbor(Face::Right, Edge::Top, false),
        ],
    ),
    (
        Face::Down,
        'D',
        "yellow",
        [
            neighbor(Face::Front, Edge::Bottom, false),
            neighbor(Face::Right, Edge::Bottom, false),
            neighbor(Face::Back, Edge::Bottom, false),
            neighbor(Face::Left, Edge::Bottom, false),
        ],
    ),
    (
        Face::Front,
        'F',
        "green",
        [
            neighbor(Face::Up, Edge::Bottom, true),
            neighbor(Face::Right, Edge::Left, false),
            neighbor(Face::Down, Edge::Top, true),
            neighbor(Face::Left, Edge::Right, false),
        ],
    ),
    (
        Face::Back,
        'B',
        "blue",
        [
            neighbor(Face::Up, Edge::Top, false),
            neighbor(Face::Left, Edge::Left, true),
            neighbor(Face::Down, Edge::Bottom, false),
            neighbor(Face::Right, Edge::Right, true),
        ],
    ),
    (
        Face::Left,
        'L',
        "orange",
        [
            neighbor(Face::Up, Edge::Left, true),
            neighbor(Face::Front, Edge::Left, false),
            neighbor(Face::Down, Edge::Left, false),
            neighbor(Face::Back, Edge::Right, true),
        ],
    ),
    (
        Face::Right,
        'R',
        "red",
        [
            neighbor(Face::Up, Edge::Right, false),
            neighbor(Face::Back, Edge::Left, true),
            neighbor(Face::Down, Edge::Right, true),
            neighbor(Face::Front, Edge::Right, false),
        ],
    ),
];

/// A validated, immutable cube topology.
///
/// Faces are stored in declaration order; a face's position in that order is
/// its slot, which also indexes its solved color in the palette.
#[derive(Clone, Debug)]
pub struct Topology {
    faces: Vec<FaceSpec>,
    directions: DirectionSymbols,
    slots: [usize; Face::COUNT],
    cycles: [[Neighbor; 4]; Face::COUNT],
    face_by_symbol: FxHashMap<char, Face>,
}

impl Topology {
    /// The canonical cube table, compiled in.
    pub fn standard() -> Self {
        let faces = STANDARD_FACES
            .iter()
            .map(|&(face, symbol, color, neighbors)| FaceSpec {
                face,
                symbol,
                color: color.to_string(),
                neighbors: neighbors.to_vec(),
            })
            .collect();
        let cycles = STANDARD_FACES.map(|(_, _, _, neighbors)| neighbors);
        Self::assemble(faces, DirectionSymbols::default(), cycles)
    }

    /// Validates a topology description and builds the lookup tables.
    pub fn new(file: TopologyFile) -> Result<Self, ConfigurationError> {
        validate(&file)?;

        let mut cycles = [[neighbor(Face::Up, Edge::Top, false); 4]; Face::COUNT];
        for (slot, spec) in file.faces.iter().enumerate() {
            cycles[slot].copy_from_slice(&spec.neighbors);
        }

        Ok(Self::assemble(file.faces, file.directions, cycles))
    }

    fn assemble(
        faces: Vec<FaceSpec>,
        directions: DirectionSymbols,
        cycles: [[Neighbor; 4]; Face::COUNT],
    ) -> Self {
        let mut slots = [0; Face::COUNT];
        for (slot, spec) in faces.iter().enumerate() {
            slots[spec.face as usize] = slot;
        }
        let face_by_symbol = faces.iter().map(|spec| (spec.symbol, spec.face)).collect();

        Self {
            faces,
            directions,
            slots,
            cycles,
            face_by_symbol,
        }
    }

    /// Declaration index of a face.
    #[inline]
    pub fn slot(&self, face: Face) -> usize {
        self.slots[face as usize]
    }

    /// Face declared at `slot`.
    #[inline]
    pub fn face_at(&self, slot: usize) -> Face {
        self.faces[slot].face
    }

    /// Faces in declaration order.
    pub fn faces(&self) -> impl Iterator<Item = Face> + '_ {
        self.faces.iter().map(|spec| spec.face)
    }

    /// Neighbor cycle of a face, in clockwise transfer order.
    #[inline]
    pub fn neighbors(&self, face: Face) -> &[Neighbor; 4] {
        &self.cycles[self.slot(face)]
    }

    pub fn symbol(&self, face: Face) -> char {
        self.faces[self.slot(face)].symbol
    }

    pub fn direction_symbol(&self, direction: Direction) -> char {
        match direction {
            Direction::Clockwise => self.directions.clockwise,
            Direction::CounterClockwise => self.directions.counter_clockwise,
        }
    }

    pub fn face_for_symbol(&self, symbol: char) -> Option<Face> {
        self.face_by_symbol.get(&symbol).copied()
    }

    pub fn direction_for_symbol(&self, symbol: char) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.direction_symbol(direction) == symbol)
    }

    /// Color names indexed by slot.
    pub fn palette(&self) -> impl Iterator<Item = &str> + '_ {
        self.faces.iter().map(|spec| spec.color.as_str())
    }

    /// Color name of the given slot's solved color.
    pub fn color_name(&self, slot: usize) -> &str {
        &self.faces[slot].color
    }

    /// Converts back to the serializable description.
    pub fn to_file(&self) -> TopologyFile {
        TopologyFile {
            directions: self.directions.clone(),
            faces: self.faces.clone(),
        }
    }
}

impl Default for Topology {
    fn default() -> Self {
        Self::standard()
    }
}

/// Checks the structural rules every topology must satisfy.
///
/// - exactly six faces, each declared once
/// - distinct face symbols, distinct direction symbols, distinct colors
/// - four neighbors per face, none of them the face itself or repeated
/// - every edge of every face moved by exactly one rotation
/// - adjacency is symmetric
pub fn validate(file: &TopologyFile) -> Result<(), ConfigurationError> {
    if file.faces.len() != Face::COUNT {
        return Err(ConfigurationError::FaceCount {
            expected: Face::COUNT,
            actual: file.faces.len(),
        });
    }

    let mut declared = FxHashSet::default();
    let mut symbols = FxHashSet::default();
    let mut colors = FxHashSet::default();
    for spec in &file.faces {
        if !declared.insert(spec.face) {
            return Err(ConfigurationError::DuplicateFace(spec.face));
        }
        if !symbols.insert(spec.symbol) {
            return Err(ConfigurationError::DuplicateSymbol(spec.symbol));
        }
        if !colors.insert(spec.color.as_str()) {
            return Err(ConfigurationError::DuplicateColor(spec.color.clone()));
        }
    }
    if file.directions.clockwise == file.directions.counter_clockwise {
        return Err(ConfigurationError::DuplicateSymbol(file.directions.clockwise));
    }

    let mut claimed: FxHashSet<(Face, Edge)> = FxHashSet::default();
    for spec in &file.faces {
        if spec.neighbors.len() != 4 {
            return Err(ConfigurationError::NeighborCount {
                face: spec.face,
                count: spec.neighbors.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for entry in &spec.neighbors {
            if entry.face == spec.face {
                return Err(ConfigurationError::SelfNeighbor(spec.face));
            }
            if !seen.insert(entry.face) {
                return Err(ConfigurationError::RepeatedNeighbor {
                    face: spec.face,
                    neighbor: entry.face,
                });
            }
            if !claimed.insert((entry.face, entry.edge)) {
                return Err(ConfigurationError::EdgeClaimedTwice {
                    face: entry.face,
                    edge: entry.edge,
                });
            }
        }
    }

    for face in Face::ALL {
        for edge in Edge::ALL {
            if !claimed.contains(&(face, edge)) {
                return Err(ConfigurationError::EdgeUnclaimed { face, edge });
            }
        }
    }

    for spec in &file.faces {
        for entry in &spec.neighbors {
            let borders_back = file
                .faces
                .iter()
                .filter(|other| other.face == entry.face)
                .any(|other| other.neighbors.iter().any(|n| n.face == spec.face));
            if !borders_back {
                return Err(ConfigurationError::AsymmetricAdjacency {
                    face: spec.face,
                    neighbor: entry.face,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_topology_is_valid() {
        let topology = Topology::standard();
        validate(&topology.to_file()).expect("standard topology should validate");
    }

    #[test]
    fn test_slots_follow_declaration_order() {
        let topology = Topology::standard();
        for (slot, face) in topology.faces().enumerate() {
            assert_eq!(topology.slot(face), slot);
            assert_eq!(topology.face_at(slot), face);
        }
    }

    #[test]
    fn test_symbol_lookup() {
        let topology = Topology::standard();
        for face in Face::ALL {
            assert_eq!(topology.face_for_symbol(face.letter()), Some(face));
        }
        assert_eq!(topology.face_for_symbol('X'), None);
        assert_eq!(topology.direction_for_symbol('d'), Some(Direction::Clockwise));
        assert_eq!(
            topology.direction_for_symbol('i'),
            Some(Direction::CounterClockwise)
        );
        assert_eq!(topology.direction_for_symbol('x'), None);
    }

    #[test]
    fn test_rejects_missing_face() {
        let mut file = Topology::standard().to_file();
        file.faces.pop();
        assert!(matches!(
            validate(&file),
            Err(ConfigurationError::FaceCount { expected: 6, actual: 5 })
        ));
    }

    #[test]
    fn test_rejects_duplicate_face() {
        let mut file = Topology::standard().to_file();
        file.faces[1].face = Face::Up;
        assert!(matches!(
            validate(&file),
            Err(ConfigurationError::DuplicateFace(Face::Up))
        ));
    }

    #[test]
    fn test_rejects_duplicate_symbols() {
        let mut file = Topology::standard().to_file();
        file.faces[1].symbol = 'U';
        assert!(matches!(
            validate(&file),
            Err(ConfigurationError::DuplicateSymbol('U'))
        ));

        let mut file = Topology::standard().to_file();
        file.directions.counter_clockwise = 'd';
        assert!(matches!(
            validate(&file),
            Err(ConfigurationError::DuplicateSymbol('d'))
        ));
    }

    #[test]
    fn test_rejects_duplicate_color() {
        let mut file = Topology::standard().to_file();
        file.faces[2].color = "white".to_string();
        assert!(matches!(
            validate(&file),
            Err(ConfigurationError::DuplicateColor(color)) if color == "white"
        ));
    }

    #[test]
    fn test_rejects_wrong_neighbor_count() {
        let mut file = Topology::standard().to_file();
        file.faces[0].neighbors.pop();
        assert!(matches!(
            validate(&file),
            Err(ConfigurationError::NeighborCount { face: Face::Up, count: 3 })
        ));
    }

    #[test]
    fn test_new_rejects_wrong_neighbor_count() {
        let mut short = Topology::standard().to_file();
        short.faces[2].neighbors.pop();
        assert!(matches!(
            Topology::new(short),
            Err(ConfigurationError::NeighborCount { face: Face::Front, count: 3 })
        ));

        let mut long = Topology::standard().to_file();
        let extra = long.faces[2].neighbors[0];
        long.faces[2].neighbors.push(extra);
        assert!(matches!(
            Topology::new(long),
            Err(ConfigurationError::NeighborCount { face: Face::Front, count: 5 })
        ));
    }

    #[test]
    fn test_rejects_self_neighbor() {
        let mut file = Topology::standard().to_file();
        file.faces[0].neighbors[0].face = Face::Up;
        assert!(matches!(
            validate(&file),
            Err(ConfigurationError::SelfNeighbor(Face::Up))
        ));
    }

    #[test]
    fn test_rejects_edge_claimed_twice() {
        let mut file = Topology::standard().to_file();
        // Down's front entry now steals the strip Up already moves
        file.faces[1].neighbors[0].edge = Edge::Top;
        assert!(matches!(
            validate(&file),
            Err(ConfigurationError::EdgeClaimedTwice { face: Face::Front, edge: Edge::Top })
        ));
    }

    #[test]
    fn test_rejects_asymmetric_adjacency() {
        let mut file = Topology::standard().to_file();
        // trade Up's claim on Left for Right's claim on Down: every edge stays
        // claimed once, but Up now borders Down without Down bordering Up
        let up_entry = file.faces[0].neighbors[1];
        let right_entry = file.faces[5].neighbors[2];
        file.faces[0].neighbors[1] = right_entry;
        file.faces[5].neighbors[2] = up_entry;
        assert!(matches!(
            validate(&file),
            Err(ConfigurationError::AsymmetricAdjacency { face: Face::Up, neighbor: Face::Down })
        ));
    }

    #[test]
    fn test_edge_cells_walk_in_reading_order() {
        assert_eq!(Edge::Top.cell(3, 2), (0, 2));
        assert_eq!(Edge::Bottom.cell(3, 0), (2, 0));
        assert_eq!(Edge::Left.cell(3, 1), (1, 0));
        assert_eq!(Edge::Right.cell(3, 2), (2, 2));
    }
}
