use ndarray::Array2;

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional board position `(row, col)`.
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

/// True when `b` is `a` itself or one of its up-to-8 Chebyshev neighbors.
pub const fn chebyshev_adjacent(a: Coord2, b: Coord2) -> bool {
    a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1
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

/// Iterates the Chebyshev neighbors of `center` that lie inside `bounds`.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    DISPLACEMENTS.iter().filter_map(move |&(dr, dc)| {
        let row = center.0.checked_add_signed(dr)?;
        let col = center.1.checked_add_signed(dc)?;
        (row < bounds.0 && col < bounds.1).then_some((row, col))
    })
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> impl Iterator<Item = Coord2>;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> impl Iterator<Item = Coord2> {
        let dim = self.dim();
        let bounds = (
            dim.0.try_into().expect("board rows fit in Coord"),
            dim.1.try_into().expect("board cols fit in Coord"),
        );
        neighbors(index, bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_cell_has_eight_neighbors() {
        assert_eq!(neighbors((1, 1), (3, 3)).count(), 8);
    }

    #[test]
    fn corner_and_edge_neighbors_are_clamped() {
        assert_eq!(neighbors((0, 0), (3, 3)).count(), 3);
        assert_eq!(neighbors((0, 1), (3, 3)).count(), 5);
        assert_eq!(neighbors((2, 2), (3, 3)).count(), 3);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(neighbors((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn chebyshev_adjacency_includes_center_and_ring_only() {
        assert!(chebyshev_adjacent((4, 4), (4, 4)));
        assert!(chebyshev_adjacent((4, 4), (3, 5)));
        assert!(!chebyshev_adjacent((4, 4), (2, 4)));
        assert!(!chebyshev_adjacent((4, 4), (4, 6)));
    }
}
