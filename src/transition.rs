use crate::Grid;

/// Sum of the 8 neighbours of the cell at padded index `idx`.
///
/// `idx` must belong to an interior cell: the dead border guarantees every
/// neighbour index is inside the buffer.
#[inline(always)]
fn count_neibs(cells: &[u8], idx: usize, stride: usize) -> u8 {
    let (up, down) = (idx - stride, idx + stride);
    cells[up - 1]
        + cells[up]
        + cells[up + 1]
        + cells[idx - 1]
        + cells[idx + 1]
        + cells[down - 1]
        + cells[down]
        + cells[down + 1]
}

/// Computes the next generation of `current` into a freshly allocated board.
///
/// A live cell survives with 2 or 3 live neighbours, a dead cell is born with
/// exactly 3; every other cell is dead. Cells beyond the edge count as dead.
pub fn next_generation(current: &Grid) -> Grid {
    let (rows, cols, stride) = (current.rows(), current.cols(), current.stride());
    let cells = current.raw();
    let mut next = vec![0u8; cells.len()];

    for x in 1..=rows {
        for y in 1..=cols {
            let idx = x * stride + y;
            let neibs = count_neibs(cells, idx, stride);
            next[idx] = ((neibs == 3) | (cells[idx] != 0 && neibs == 2)) as u8;
        }
    }
    Grid::from_raw(rows, cols, next)
}
