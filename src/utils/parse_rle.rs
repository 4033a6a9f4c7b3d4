use crate::{Grid, LifeError, Result};

fn malformed(msg: impl Into<String>) -> LifeError {
    LifeError::Pattern(msg.into())
}

/// Parses a pattern in RLE format into a board of the size declared in its header.
pub fn parse_rle(data: &[u8]) -> Result<Grid> {
    let parse_number = |i: &mut usize| -> Result<usize> {
        let j = *i + data[*i..].iter().take_while(|c| c.is_ascii_digit()).count();
        let ans = std::str::from_utf8(&data[*i..j])
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .ok_or_else(|| malformed(format!("expected a number at byte {}", *i)))?;
        *i = j;
        Ok(ans)
    };

    let mut i = 0;
    // comment lines
    while data.get(i) == Some(&b'#') {
        i += data[i..]
            .iter()
            .position(|&c| c == b'\n')
            .map_or(data.len() - i, |p| p + 1);
    }

    // header: `x = W, y = H[, rule = ...]`
    let header_end = data[i..]
        .iter()
        .position(|&c| c == b'\n')
        .map_or(data.len(), |p| i + p);
    let header = std::str::from_utf8(&data[i..header_end])
        .map_err(|_| malformed("header is not valid UTF-8"))?;
    let (mut width, mut height) = (None, None);
    for field in header.split(',') {
        let Some((key, value)) = field.split_once('=') else {
            continue;
        };
        let value = value.trim().parse::<usize>().ok();
        match key.trim() {
            "x" => width = value,
            "y" => height = value,
            _ => {}
        }
    }
    let (Some(cols), Some(rows)) = (width, height) else {
        return Err(malformed("header must declare `x = <width>, y = <height>`"));
    };
    let mut grid = Grid::new(rows, cols)?;
    i = header_end;

    // run-length encoded cells; `x`, `y` are 0-based column and row
    let advance = |pos: usize, cnt: usize, limit: usize| {
        pos.checked_add(cnt)
            .filter(|&end| end <= limit)
            .ok_or_else(|| malformed(format!("run of {cnt} leaves the {cols}x{rows} pattern")))
    };
    let (mut x, mut y, mut cnt) = (0, 0, 1);
    while i < data.len() {
        match data[i] {
            b'0'..=b'9' => {
                cnt = parse_number(&mut i)?;
                continue;
            }
            b'o' => {
                let end = advance(x, cnt, cols)?;
                if y >= rows {
                    return Err(malformed(format!("live cell below the {cols}x{rows} pattern")));
                }
                for col in x..end {
                    grid.set(y + 1, col + 1, true)?;
                }
                x = end;
            }
            b'b' => x = advance(x, cnt, cols)?,
            b'$' => (x, y) = (0, advance(y, cnt, rows)?),
            b'!' => break,
            c if c.is_ascii_whitespace() => {}
            c => return Err(malformed(format!("unexpected symbol {:?}", c as char))),
        }
        cnt = 1;
        i += 1;
    }
    Ok(grid)
}
