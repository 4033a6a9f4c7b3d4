use crate::{LifeError, Result};

/// Rectangular board of `rows x cols` cells surrounded by a one-cell dead border.
///
/// Cells are addressed with 1-based `(x, y)` = (row, column). The border is
/// never written, so neighbour counting may read one cell past any interior
/// cell without bounds checks.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    cells: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Creates a board with every cell dead.
    ///
    /// Fails if a dimension is zero or the padded buffer is too large to address.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = rows
            .checked_add(2)
            .zip(cols.checked_add(2))
            .and_then(|(r, c)| r.checked_mul(c))
            .filter(|&len| len <= isize::MAX as usize);
        match len {
            Some(len) if rows != 0 && cols != 0 => Ok(Self {
                cells: vec![0; len],
                rows,
                cols,
            }),
            _ => Err(LifeError::InvalidDimensions { rows, cols }),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row length of the padded storage.
    pub(crate) fn stride(&self) -> usize {
        self.cols + 2
    }

    /// Padded storage, border included.
    pub(crate) fn raw(&self) -> &[u8] {
        &self.cells
    }

    /// Wraps padded storage produced by the transition step.
    pub(crate) fn from_raw(rows: usize, cols: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), (rows + 2) * (cols + 2));
        Self { cells, rows, cols }
    }

    fn contains(&self, x: usize, y: usize) -> bool {
        (1..=self.rows).contains(&x) && (1..=self.cols).contains(&y)
    }

    /// State of the interior cell at `(x, y)`; anything outside the interior reads as dead.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.contains(x, y) && self.cells[x * self.stride() + y] != 0
    }

    /// Sets the interior cell at `(x, y)`. Writes outside the interior are
    /// rejected and leave the board untouched.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        if !self.contains(x, y) {
            return Err(LifeError::OutOfBounds {
                x,
                y,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let stride = self.stride();
        self.cells[x * stride + y] = alive as u8;
        Ok(())
    }

    /// Interior rows from top to bottom, each as `cols` cells holding 0 or 1.
    pub fn interior_rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cells
            .chunks_exact(self.stride())
            .skip(1)
            .take(self.rows)
            .map(|row| &row[1..=self.cols])
    }

    /// 1-based coordinates of every live cell in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.interior_rows().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &c)| c != 0)
                .map(move |(j, _)| (i + 1, j + 1))
        })
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        // the border is always dead, so the whole buffer can be summed
        self.cells.iter().map(|&c| c as usize).sum()
    }

    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|&c| c == 0)
    }

    /// Copies the interior of `pattern` so that its cell (1, 1) lands on `(top, left)`.
    pub fn place(&mut self, pattern: &Grid, top: usize, left: usize) -> Result<()> {
        let bottom = top.saturating_add(pattern.rows - 1);
        let right = left.saturating_add(pattern.cols - 1);
        for (x, y) in [(top, left), (bottom, right)] {
            if !self.contains(x, y) {
                return Err(LifeError::OutOfBounds {
                    x,
                    y,
                    rows: self.rows,
                    cols: self.cols,
                });
            }
        }
        let stride = self.stride();
        for (i, row) in pattern.interior_rows().enumerate() {
            let start = (top + i) * stride + left;
            self.cells[start..start + row.len()].copy_from_slice(row);
        }
        Ok(())
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.interior_rows() {
            for &c in row {
                write!(f, "{}", if c != 0 { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_dimensions() {
        assert!(matches!(
            Grid::new(0, 5),
            Err(LifeError::InvalidDimensions { rows: 0, cols: 5 })
        ));
        assert!(matches!(
            Grid::new(3, 0),
            Err(LifeError::InvalidDimensions { rows: 3, cols: 0 })
        ));
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn test_new_rejects_unaddressable_dimensions() {
        for (rows, cols) in [
            (usize::MAX, 1),
            (1, usize::MAX - 1),
            (usize::MAX / 2, 3),
            (usize::MAX / 4, usize::MAX / 4),
        ] {
            assert!(
                matches!(
                    Grid::new(rows, cols),
                    Err(LifeError::InvalidDimensions { .. })
                ),
                "{rows}x{cols}"
            );
        }
    }

    #[test]
    fn test_set_get_and_bounds() {
        let mut grid = Grid::new(3, 4).unwrap();
        grid.set(1, 1, true).unwrap();
        grid.set(3, 4, true).unwrap();
        assert!(grid.get(1, 1));
        assert!(grid.get(3, 4));
        assert!(!grid.get(2, 2));

        let before = grid.clone();
        for (x, y) in [(0, 1), (1, 0), (4, 1), (1, 5)] {
            assert!(matches!(
                grid.set(x, y, true),
                Err(LifeError::OutOfBounds { .. })
            ));
        }
        assert_eq!(grid, before);
        // the border reads as dead
        assert!(!grid.get(0, 0));
        assert!(!grid.get(4, 5));
    }

    #[test]
    fn test_interior_rows_hide_border() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set(1, 2, true).unwrap();
        grid.set(2, 3, true).unwrap();
        let rows: Vec<Vec<u8>> = grid.interior_rows().map(<[u8]>::to_vec).collect();
        assert_eq!(rows, vec![vec![0, 1, 0], vec![0, 0, 1]]);
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(1, 2), (2, 3)]);
        assert_eq!(grid.population(), 2);
        assert_eq!(grid.to_string(), ".#.\n..#\n");
    }

    #[test]
    fn test_place() {
        let mut pattern = Grid::new(2, 2).unwrap();
        pattern.set(1, 1, true).unwrap();
        pattern.set(2, 2, true).unwrap();

        let mut grid = Grid::new(4, 4).unwrap();
        grid.place(&pattern, 2, 3).unwrap();
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(2, 3), (3, 4)]);

        let before = grid.clone();
        assert!(grid.place(&pattern, 4, 1).is_err());
        assert_eq!(grid, before);
    }
}
