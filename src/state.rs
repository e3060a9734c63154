//! Facelet colors for all six faces of an NxNxN cube.
//!
//! The state is a flat array: face slots are laid out one after another and
//! each face grid is row-major, so cell `(slot, row, col)` lives at
//! `slot * dim * dim + row * dim + col`.

use crate::error::InvalidStateShapeError;
use crate::topology::{Direction, Edge, Face, Topology};

/// Number of colors in the palette, one per face.
pub const NUM_COLORS: usize = Face::COUNT;

/// Largest supported cells-per-edge.
pub const MAX_DIM: usize = 1024;

/// A palette index. In the solved state slot `i` is entirely `Color(i)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(pub u8);

/// Colors of every facelet. Equality is structural.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CubeState {
    dim: usize,
    cells: Vec<Color>,
}

impl CubeState {
    /// Builds the canonical solved state.
    pub fn solved(dim: usize) -> Result<Self, InvalidStateShapeError> {
        let mut state = Self {
            dim,
            cells: vec![Color(0); cell_count(dim)?],
        };
        state.reset();
        Ok(state)
    }

    /// Recolors every cell to its slot's solved color, keeping the grid size.
    pub fn reset(&mut self) {
        let face_size = self.dim * self.dim;
        for (cell, color) in self.cells.iter_mut().enumerate() {
            *color = Color((cell / face_size) as u8);
        }
    }

    /// Builds a state from raw color indices laid out as `[slot][row][col]`.
    pub fn from_faces(faces: &[Vec<Vec<u8>>]) -> Result<Self, InvalidStateShapeError> {
        let dim = check_outer_shape(faces.len(), faces.first().map(Vec::len))?;
        let mut cells = Vec::with_capacity(cell_count(dim)?);

        for (face, rows) in faces.iter().enumerate() {
            check_rows(face, rows.len(), dim)?;
            for (row, values) in rows.iter().enumerate() {
                check_row_length(face, row, values.len(), dim)?;
                for &value in values {
                    cells.push(to_color(value)?);
                }
            }
        }

        Ok(Self { dim, cells })
    }

    /// Builds a state from one-hot vectors laid out as `[slot][row][col][color]`.
    ///
    /// Each cell decodes to the index of its largest entry; the first wins a tie.
    pub fn from_one_hot(faces: &[Vec<Vec<Vec<u8>>>]) -> Result<Self, InvalidStateShapeError> {
        let dim = check_outer_shape(faces.len(), faces.first().map(Vec::len))?;
        let mut cells = Vec::with_capacity(cell_count(dim)?);

        for (face, rows) in faces.iter().enumerate() {
            check_rows(face, rows.len(), dim)?;
            for (row, values) in rows.iter().enumerate() {
                check_row_length(face, row, values.len(), dim)?;
                for (col, one_hot) in values.iter().enumerate() {
                    if one_hot.len() != NUM_COLORS {
                        return Err(InvalidStateShapeError::OneHotWidth {
                            face,
                            row,
                            col,
                            expected: NUM_COLORS,
                            actual: one_hot.len(),
                        });
                    }
                    cells.push(Color(arg_max(one_hot) as u8));
                }
            }
        }

        Ok(Self { dim, cells })
    }

    /// Raw color indices as `[slot][row][col]`.
    pub fn to_faces(&self) -> Vec<Vec<Vec<u8>>> {
        (0..Face::COUNT)
            .map(|slot| {
                self.face(slot)
                    .chunks(self.dim)
                    .map(|row| row.iter().map(|color| color.0).collect())
                    .collect()
            })
            .collect()
    }

    /// One-hot encoding as `[slot][row][col][color]`.
    pub fn to_one_hot(&self) -> Vec<Vec<Vec<Vec<u8>>>> {
        self.to_faces()
            .into_iter()
            .map(|rows| {
                rows.into_iter()
                    .map(|row| {
                        row.into_iter()
                            .map(|color| {
                                (0..NUM_COLORS)
                                    .map(|index| u8::from(index == color as usize))
                                    .collect()
                            })
                            .collect()
                    })
                    .collect()
            })
            .collect()
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Cells of one face, row-major.
    #[inline]
    pub fn face(&self, slot: usize) -> &[Color] {
        let face_size = self.dim * self.dim;
        &self.cells[slot * face_size..(slot + 1) * face_size]
    }

    #[inline]
    pub fn get(&self, slot: usize, row: usize, col: usize) -> Color {
        self.cells[self.cell_index(slot, row, col)]
    }

    /// True when every cell of every slot holds that slot's color.
    pub fn is_solved(&self) -> bool {
        (0..Face::COUNT).all(|slot| {
            self.face(slot)
                .iter()
                .all(|&color| color == Color(slot as u8))
        })
    }

    /// How many cells hold each color.
    pub fn color_counts(&self) -> [usize; NUM_COLORS] {
        let mut counts = [0; NUM_COLORS];
        for color in &self.cells {
            counts[color.0 as usize] += 1;
        }
        counts
    }

    #[inline(always)]
    fn cell_index(&self, slot: usize, row: usize, col: usize) -> usize {
        slot * self.dim * self.dim + row * self.dim + col
    }

    /// Rotates one face grid a quarter turn in place.
    ///
    /// Works ring by ring from the outside in, cycling four cells at a time.
    pub(crate) fn rotate_face(&mut self, slot: usize, direction: Direction) {
        let last = self.dim - 1;
        for layer in 0..self.dim / 2 {
            for i in layer..last - layer {
                let top = self.cell_index(slot, layer, i);
                let left = self.cell_index(slot, last - i, layer);
                let bottom = self.cell_index(slot, last - layer, last - i);
                let right = self.cell_index(slot, i, last - layer);

                // each position takes the value of the next one in the cycle
                let cycle = match direction {
                    Direction::Clockwise => [top, left, bottom, right],
                    Direction::CounterClockwise => [top, right, bottom, left],
                };
                for pair in cycle.windows(2) {
                    self.cells.swap(pair[0], pair[1]);
                }
            }
        }
    }

    /// Copies out the cells along one edge, in reading order.
    pub(crate) fn read_strip(&self, slot: usize, edge: Edge) -> Vec<Color> {
        (0..self.dim)
            .map(|index| {
                let (row, col) = edge.cell(self.dim, index);
                self.get(slot, row, col)
            })
            .collect()
    }

    /// Writes `strip` along one edge and leaves the evicted cells in `strip`.
    pub(crate) fn swap_strip(&mut self, slot: usize, edge: Edge, strip: &mut [Color]) {
        for (index, incoming) in strip.iter_mut().enumerate() {
            let (row, col) = edge.cell(self.dim, index);
            let cell = self.cell_index(slot, row, col);
            std::mem::swap(&mut self.cells[cell], incoming);
        }
    }
}

/// Total cells of a cube with the given grid size.
fn cell_count(dim: usize) -> Result<usize, InvalidStateShapeError> {
    if dim == 0 {
        return Err(InvalidStateShapeError::ZeroDimension);
    }
    if dim > MAX_DIM {
        return Err(InvalidStateShapeError::DimensionTooLarge { dim, max: MAX_DIM });
    }
    dim.checked_mul(dim)
        .and_then(|face_size| face_size.checked_mul(Face::COUNT))
        .ok_or(InvalidStateShapeError::DimensionTooLarge { dim, max: MAX_DIM })
}

fn check_outer_shape(
    face_count: usize,
    first_rows: Option<usize>,
) -> Result<usize, InvalidStateShapeError> {
    if face_count != Face::COUNT {
        return Err(InvalidStateShapeError::FaceCount {
            expected: Face::COUNT,
            actual: face_count,
        });
    }
    let dim = first_rows.unwrap_or(0);
    cell_count(dim)?;
    Ok(dim)
}

fn check_rows(face: usize, rows: usize, dim: usize) -> Result<(), InvalidStateShapeError> {
    if rows != dim {
        return Err(InvalidStateShapeError::RowCount {
            face,
            expected: dim,
            actual: rows,
        });
    }
    Ok(())
}

fn check_row_length(
    face: usize,
    row: usize,
    length: usize,
    dim: usize,
) -> Result<(), InvalidStateShapeError> {
    if length != dim {
        return Err(InvalidStateShapeError::RowLength {
            face,
            row,
            expected: dim,
            actual: length,
        });
    }
    Ok(())
}

fn to_color(value: u8) -> Result<Color, InvalidStateShapeError> {
    if value as usize >= NUM_COLORS {
        return Err(InvalidStateShapeError::ColorOutOfRange {
            color: value,
            palette: NUM_COLORS,
        });
    }
    Ok(Color(value))
}

/// Index of the first maximum.
fn arg_max(values: &[u8]) -> usize {
    let mut best = 0;
    for (index, &value) in values.iter().enumerate() {
        if value > values[best] {
            best = index;
        }
    }
    best
}

/// Renders the state as an unfolded cross.
///
/// Up sits above Front, the middle band is Left Front Right Back, and Down
/// sits below Front. Each cell is the first letter of its color's name.
pub fn format_net(state: &CubeState, topology: &Topology) -> String {
    let dim = state.dim();
    let letters: Vec<char> = topology
        .palette()
        .map(|name| name.chars().next().map_or('?', |c| c.to_ascii_uppercase()))
        .collect();
    let row_text = |face: Face, row: usize| -> String {
        let slot = topology.slot(face);
        (0..dim)
            .map(|col| letters[state.get(slot, row, col).0 as usize])
            .collect()
    };
    let indent = " ".repeat(dim + 1);

    let mut output = String::new();
    for row in 0..dim {
        output.push_str(&indent);
        output.push_str(&row_text(Face::Up, row));
        output.push('\n');
    }
    for row in 0..dim {
        let band: Vec<String> = [Face::Left, Face::Front, Face::Right, Face::Back]
            .into_iter()
            .map(|face| row_text(face, row))
            .collect();
        output.push_str(&band.join(" "));
        output.push('\n');
    }
    for row in 0..dim {
        output.push_str(&indent);
        output.push_str(&row_text(Face::Down, row));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(dim: usize) -> CubeState {
        // colors don't matter for geometry checks, but cells must be distinguishable
        let faces: Vec<Vec<Vec<u8>>> = (0..Face::COUNT)
            .map(|slot| {
                (0..dim)
                    .map(|row| (0..dim).map(|col| ((slot + row * dim + col) % 6) as u8).collect())
                    .collect()
            })
            .collect();
        CubeState::from_faces(&faces).unwrap()
    }

    #[test]
    fn test_solved_state_is_solved() {
        for dim in 1..=5 {
            let state = CubeState::solved(dim).unwrap();
            assert!(state.is_solved(), "dim {dim} should start solved");
            assert_eq!(state.color_counts(), [dim * dim; NUM_COLORS]);
        }
    }

    #[test]
    fn test_zero_dimension_is_rejected() {
        assert_eq!(
            CubeState::solved(0),
            Err(InvalidStateShapeError::ZeroDimension)
        );
    }

    #[test]
    fn test_rotate_face_clockwise_matches_matrix_rotation() {
        let faces: Vec<Vec<Vec<u8>>> = (0..Face::COUNT)
            .map(|_| vec![vec![0, 1, 2], vec![3, 4, 5], vec![0, 1, 2]])
            .collect();
        let mut state = CubeState::from_faces(&faces).unwrap();
        state.rotate_face(0, Direction::Clockwise);
        assert_eq!(
            state.to_faces()[0],
            vec![vec![0, 3, 0], vec![1, 4, 1], vec![2, 5, 2]]
        );

        state.rotate_face(0, Direction::CounterClockwise);
        assert_eq!(state.to_faces()[0], faces[0]);
    }

    #[test]
    fn test_rotate_face_matches_transpose_and_reverse() {
        for dim in 1..=6 {
            let original = numbered(dim);
            let grid = &original.to_faces()[1];
            // clockwise: transpose, then reverse each row
            let clockwise: Vec<Vec<u8>> = (0..dim)
                .map(|row| (0..dim).rev().map(|col| grid[col][row]).collect())
                .collect();
            // counter-clockwise: transpose, then reverse the row order
            let counter_clockwise: Vec<Vec<u8>> = (0..dim)
                .rev()
                .map(|row| (0..dim).map(|col| grid[col][row]).collect())
                .collect();

            let mut state = original.clone();
            state.rotate_face(1, Direction::Clockwise);
            assert_eq!(state.to_faces()[1], clockwise, "dim {dim}, clockwise");
            assert_eq!(state.to_faces()[0], original.to_faces()[0]);

            let mut state = original.clone();
            state.rotate_face(1, Direction::CounterClockwise);
            assert_eq!(
                state.to_faces()[1],
                counter_clockwise,
                "dim {dim}, counter-clockwise"
            );
        }
    }

    #[test]
    fn test_rotate_face_on_four_by_four() {
        let mut faces = CubeState::solved(4).unwrap().to_faces();
        faces[0] = vec![
            vec![0, 1, 2, 3],
            vec![4, 5, 0, 1],
            vec![2, 3, 4, 5],
            vec![0, 1, 2, 3],
        ];
        let mut state = CubeState::from_faces(&faces).unwrap();
        state.rotate_face(0, Direction::Clockwise);
        assert_eq!(
            state.to_faces()[0],
            vec![
                vec![0, 2, 4, 0],
                vec![1, 3, 5, 1],
                vec![2, 4, 0, 2],
                vec![3, 5, 1, 3],
            ]
        );
    }

    #[test]
    fn test_oversized_dimension_is_rejected() {
        assert_eq!(
            CubeState::solved(MAX_DIM + 1),
            Err(InvalidStateShapeError::DimensionTooLarge {
                dim: MAX_DIM + 1,
                max: MAX_DIM
            })
        );
        assert_eq!(
            CubeState::solved(1usize << 32),
            Err(InvalidStateShapeError::DimensionTooLarge {
                dim: 1usize << 32,
                max: MAX_DIM
            })
        );
        assert!(CubeState::solved(MAX_DIM).is_ok());
    }

    #[test]
    fn test_rotate_face_four_times_is_identity() {
        for dim in 1..=6 {
            let original = numbered(dim);
            for direction in Direction::ALL {
                let mut state = original.clone();
                for _ in 0..4 {
                    state.rotate_face(2, direction);
                }
                assert_eq!(state, original, "dim {dim}, {direction:?}");
            }
        }
    }

    #[test]
    fn test_swap_strip_returns_evicted_cells() {
        let mut state = CubeState::solved(3).unwrap();
        let mut strip = vec![Color(4), Color(5), Color(4)];
        state.swap_strip(0, Edge::Right, &mut strip);
        assert_eq!(strip, vec![Color(0); 3]);
        assert_eq!(
            state.read_strip(0, Edge::Right),
            vec![Color(4), Color(5), Color(4)]
        );
        assert_eq!(state.get(0, 2, 2), Color(4));
        assert_eq!(state.get(0, 1, 1), Color(0));
    }

    #[test]
    fn test_from_faces_rejects_bad_shapes() {
        let good = CubeState::solved(2).unwrap().to_faces();

        assert_eq!(
            CubeState::from_faces(&good[..5]),
            Err(InvalidStateShapeError::FaceCount {
                expected: 6,
                actual: 5
            })
        );

        let mut short_face = good.clone();
        short_face[3].pop();
        assert_eq!(
            CubeState::from_faces(&short_face),
            Err(InvalidStateShapeError::RowCount {
                face: 3,
                expected: 2,
                actual: 1
            })
        );

        let mut long_row = good.clone();
        long_row[1][1].push(0);
        assert_eq!(
            CubeState::from_faces(&long_row),
            Err(InvalidStateShapeError::RowLength {
                face: 1,
                row: 1,
                expected: 2,
                actual: 3
            })
        );

        let mut bad_color = good;
        bad_color[0][0][0] = 6;
        assert_eq!(
            CubeState::from_faces(&bad_color),
            Err(InvalidStateShapeError::ColorOutOfRange {
                color: 6,
                palette: 6
            })
        );
    }

    #[test]
    fn test_one_hot_decodes_to_same_state() {
        let state = numbered(3);
        let decoded = CubeState::from_one_hot(&state.to_one_hot()).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn test_one_hot_uses_arg_max() {
        let mut one_hot = CubeState::solved(1).unwrap().to_one_hot();
        one_hot[0][0][0] = vec![1, 3, 0, 3, 0, 0];
        let state = CubeState::from_one_hot(&one_hot).unwrap();
        assert_eq!(state.get(0, 0, 0), Color(1));
    }

    #[test]
    fn test_one_hot_rejects_wrong_width() {
        let mut one_hot = CubeState::solved(2).unwrap().to_one_hot();
        one_hot[4][1][0].push(0);
        assert_eq!(
            CubeState::from_one_hot(&one_hot),
            Err(InvalidStateShapeError::OneHotWidth {
                face: 4,
                row: 1,
                col: 0,
                expected: 6,
                actual: 7
            })
        );
    }

    #[test]
    fn test_solved_net_snapshot() {
        let state = CubeState::solved(3).unwrap();
        insta::assert_snapshot!("solved_net", format_net(&state, &Topology::standard()));
    }
}
