use serde::{Deserialize, Serialize};

/// Single coordinate axis used for the board size and for positions.
pub type Coord = u8;

/// Count type used for mine counts, hidden counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Square coordinate space shared by every matrix of a round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: Coord,
}

impl Grid {
    pub const fn new(size: Coord) -> Self {
        Self { size }
    }

    pub const fn size(&self) -> Coord {
        self.size
    }

    /// Shape of an `Array2` covering the grid.
    pub const fn dim(&self) -> (usize, usize) {
        (self.size as usize, self.size as usize)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub const fn contains(&self, (row, col): Coord2) -> bool {
        row < self.size && col < self.size
    }

    /// Up to 8 orthogonal and diagonal neighbors of `coords`, clipped to the grid.
    ///
    /// `coords` itself is expected to be in bounds.
    pub fn neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size)
    }

    /// Every coordinate of the grid in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coord2> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| (row, col)))
    }
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bound: Coord) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= bound {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= bound {
        return None;
    }

    Some((next_row, next_col))
}

#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    bound: Coord,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bound: Coord) -> Self {
        Self {
            center,
            bound,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *DISPLACEMENTS.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.bound) {
                return Some(next_item);
            }
        }
    }
}
