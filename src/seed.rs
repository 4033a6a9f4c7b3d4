//! Initial boards: random fill and manually entered coordinates.

use crate::{Grid, LifeError, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Board whose interior cells are alive with probability `fill_rate`.
///
/// `seed` - random seed (if `None`, then random seed is generated)
pub fn random(rows: usize, cols: usize, seed: Option<u64>, fill_rate: f64) -> Result<Grid> {
    if !(0.0..=1.0).contains(&fill_rate) {
        return Err(LifeError::Pattern(format!(
            "fill rate {fill_rate} is not within [0, 1]"
        )));
    }
    let mut rng = if let Some(x) = seed {
        ChaCha8Rng::seed_from_u64(x)
    } else {
        ChaCha8Rng::from_entropy()
    };
    let mut grid = Grid::new(rows, cols)?;
    for x in 1..=rows {
        for y in 1..=cols {
            grid.set(x, y, rng.gen_bool(fill_rate))?;
        }
    }
    Ok(grid)
}

/// Parses `"<row> <column>"` (1-based) and checks it against the board size.
pub fn parse_coordinates(line: &str, rows: usize, cols: usize) -> Result<(usize, usize)> {
    let mut parts = line.split_whitespace().map(str::parse::<usize>);
    let (Some(Ok(x)), Some(Ok(y)), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(LifeError::Pattern(format!(
            "expected two integers separated by a space, got {:?}",
            line.trim()
        )));
    };
    if !(1..=rows).contains(&x) || !(1..=cols).contains(&y) {
        return Err(LifeError::OutOfBounds { x, y, rows, cols });
    }
    Ok((x, y))
}
