//! Line-oriented questions asked before the board is shown.
//!
//! Every function takes its input and output explicitly so that the dialogue
//! can be scripted in tests. Invalid answers are reported and asked again;
//! only end of input or an I/O failure is an error.

use crate::{seed, Grid, InitMode, LifeError, Result, SpeedMode};
use std::io::{BufRead, ErrorKind, Write};
use tracing::warn;

fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(std::io::Error::new(ErrorKind::UnexpectedEof, "input closed").into());
    }
    Ok(line)
}

fn ask_positive(input: &mut impl BufRead, output: &mut impl Write, what: &str) -> Result<usize> {
    loop {
        writeln!(output, "Enter the number of {what} for the board:")?;
        match read_line(input)?.trim().parse::<usize>() {
            Ok(n) if n >= 1 => return Ok(n),
            _ => writeln!(output, "Invalid input. Please enter positive integers.")?,
        }
    }
}

/// Asks for `(rows, cols)`.
pub fn ask_dimensions(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<(usize, usize)> {
    complete_dimensions(input, output, None, None)
}

/// Asks only for the dimensions that are not already known.
pub fn complete_dimensions(
    input: &mut impl BufRead,
    output: &mut impl Write,
    rows: Option<usize>,
    cols: Option<usize>,
) -> Result<(usize, usize)> {
    let rows = match rows {
        Some(rows) => rows,
        None => ask_positive(input, output, "rows")?,
    };
    let cols = match cols {
        Some(cols) => cols,
        None => ask_positive(input, output, "columns")?,
    };
    Ok((rows, cols))
}

pub fn ask_speed(input: &mut impl BufRead, output: &mut impl Write) -> Result<SpeedMode> {
    loop {
        write!(
            output,
            "Enter 'fast', 'normal', 'slow', or 'step' for step-by-step execution with ENTER: "
        )?;
        output.flush()?;
        match read_line(input)?.parse::<SpeedMode>() {
            Ok(speed) => return Ok(speed),
            Err(_) => writeln!(
                output,
                "Invalid speed. Choose from 'fast', 'normal', 'slow', 'step'."
            )?,
        }
    }
}

/// Anything but `manual` selects a random board.
pub fn ask_init_mode(input: &mut impl BufRead, output: &mut impl Write) -> Result<InitMode> {
    write!(
        output,
        "Type 'manual' to enter live cells manually, or anything else to generate randomly: "
    )?;
    output.flush()?;
    let answer = read_line(input)?;
    Ok(if answer.trim().eq_ignore_ascii_case("manual") {
        InitMode::Manual
    } else {
        InitMode::Random
    })
}

/// Reads `row column` pairs into `grid` until a line reading `done`.
pub fn ask_live_cells(
    input: &mut impl BufRead,
    output: &mut impl Write,
    grid: &mut Grid,
) -> Result<()> {
    writeln!(
        output,
        "Enter live cell coordinates (e.g., '1 3' for row 1, column 3); type 'done' when finished:"
    )?;
    loop {
        let line = read_line(input)?;
        if line.trim().eq_ignore_ascii_case("done") {
            return Ok(());
        }
        match seed::parse_coordinates(&line, grid.rows(), grid.cols()) {
            Ok((x, y)) => grid.set(x, y, true)?,
            Err(LifeError::OutOfBounds { x, y, .. }) => {
                warn!(x, y, "rejected coordinates outside the board");
                writeln!(output, "Coordinates out of bounds. Try again.")?;
            }
            Err(_) => writeln!(
                output,
                "Invalid input. Use two integers separated by space."
            )?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn script(lines: &str) -> Cursor<Vec<u8>> {
        Cursor::new(lines.as_bytes().to_vec())
    }

    #[test]
    fn test_dimensions_are_asked_again() {
        let mut input = script("zero\n0\n4\n-3\n6\n");
        let mut output = Vec::new();
        assert_eq!(ask_dimensions(&mut input, &mut output).unwrap(), (4, 6));
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Invalid input").count(), 3);
    }

    #[test]
    fn test_known_dimension_is_not_asked() {
        let mut output = Vec::new();
        let dims = complete_dimensions(&mut script("9\n"), &mut output, Some(7), None).unwrap();
        assert_eq!(dims, (7, 9));
        let text = String::from_utf8(output).unwrap();
        assert!(!text.contains("rows"));
        assert!(text.contains("columns"));

        let mut output = Vec::new();
        let dims = complete_dimensions(&mut script("3\n"), &mut output, None, Some(4)).unwrap();
        assert_eq!(dims, (3, 4));
        assert!(!String::from_utf8(output).unwrap().contains("columns"));

        let dims = complete_dimensions(&mut script(""), &mut Vec::new(), Some(2), Some(5));
        assert_eq!(dims.unwrap(), (2, 5));
    }

    #[test]
    fn test_speed() {
        let mut output = Vec::new();
        let speed = ask_speed(&mut script("warp\nSlow\n"), &mut output).unwrap();
        assert_eq!(speed, SpeedMode::Slow);
        assert!(String::from_utf8(output).unwrap().contains("Invalid speed"));
    }

    #[test]
    fn test_init_mode() {
        let mut sink = Vec::new();
        let manual = ask_init_mode(&mut script(" MANUAL \n"), &mut sink).unwrap();
        let random = ask_init_mode(&mut script("\n"), &mut sink).unwrap();
        assert_eq!(manual, InitMode::Manual);
        assert_eq!(random, InitMode::Random);
    }

    #[test]
    fn test_live_cells() {
        let mut grid = Grid::new(3, 3).unwrap();
        let mut input = script("1 1\n9 9\noops\n2 3\ndone\n3 3\n");
        let mut output = Vec::new();
        ask_live_cells(&mut input, &mut output, &mut grid).unwrap();
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(1, 1), (2, 3)]);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Coordinates out of bounds"));
        assert!(text.contains("Invalid input"));
    }

    #[test]
    fn test_eof_is_an_error() {
        let mut grid = Grid::new(2, 2).unwrap();
        let err = ask_live_cells(&mut script("1 1\n"), &mut Vec::new(), &mut grid).unwrap_err();
        assert!(matches!(err, LifeError::Io(e) if e.kind() == ErrorKind::UnexpectedEof));
        assert!(ask_dimensions(&mut script(""), &mut Vec::new()).is_err());
    }
}
