use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::Error;
use crate::maze::{Algorithm, Grid, Maze, TileKind};

/// Writes the canonical text encoding of a maze: `width,height`, start and
/// finish coordinates, the algorithm tag, then one line per grid row with
/// 5-character `top bottom left right kind` cell fields, transposed so that
/// decoding rebuilds `grid[(x, y)]` directly.
pub fn encode<W: Write>(maze: &Maze, mut out: W) -> crate::Result<()> {
    writeln!(out, "{},{}", maze.width, maze.height)?;
    writeln!(out, "{},{}", maze.start.0, maze.start.1)?;
    writeln!(out, "{},{}", maze.finish.0, maze.finish.1)?;
    writeln!(out, "{}", maze.algorithm)?;

    for y in 0..maze.height {
        let mut line = String::with_capacity(maze.width as usize * 6);
        for x in 0..maze.width {
            let tile = &maze.grid[(x, y)];
            // Route tiles only exist on solver copies; a maze is persisted
            // unsolved or not at all.
            let digit = tile.kind.digit().ok_or_else(|| {
                Error::InvariantViolation("solved route tiles cannot be persisted".into())
            })?;
            if x > 0 {
                line.push(',');
            }
            line.push(if tile.top { '1' } else { '0' });
            line.push(if tile.bottom { '1' } else { '0' });
            line.push(if tile.left { '1' } else { '0' });
            line.push(if tile.right { '1' } else { '0' });
            line.push(digit);
        }
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub fn encode_to_string(maze: &Maze) -> crate::Result<String> {
    let mut buf = Vec::new();
    encode(maze, &mut buf)?;
    // The encoder only ever writes ASCII.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Reads a maze back from its canonical encoding. Every malformed record is
/// a [`Error::Format`] naming the offending line; nothing is ever partially
/// applied.
pub fn decode<R: Read>(input: R) -> crate::Result<Maze> {
    let reader = BufReader::new(input);
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    if lines.len() < 4 {
        return Err(format_err(lines.len() + 1, "missing header records"));
    }

    let (width, height) = parse_pair(&lines[0], 1, "width,height")?;
    let start = parse_pair(&lines[1], 2, "start coordinates")?;
    let finish = parse_pair(&lines[2], 3, "finish coordinates")?;
    let algorithm = Algorithm::from_tag(lines[3].trim())
        .ok_or_else(|| format_err(4, format!("unknown algorithm tag `{}`", lines[3].trim())))?;

    if width == 0 || height == 0 {
        return Err(format_err(1, "dimensions must be positive"));
    }
    if start.0 >= width || start.1 >= height {
        return Err(format_err(2, "start lies outside the declared dimensions"));
    }
    if finish.0 >= width || finish.1 >= height {
        return Err(format_err(3, "finish lies outside the declared dimensions"));
    }

    let rows = &lines[4..];
    if rows.len() != height as usize {
        return Err(format_err(
            5,
            format!("expected {} grid rows, found {}", height, rows.len()),
        ));
    }

    let mut grid = Grid::new(width, height);
    for (y, row) in rows.iter().enumerate() {
        let line_no = 5 + y;
        let fields: Vec<&str> = row.split(',').collect();
        if fields.len() != width as usize {
            return Err(format_err(
                line_no,
                format!("expected {} cells, found {}", width, fields.len()),
            ));
        }
        for (x, field) in fields.iter().enumerate() {
            let (top, bottom, left, right, kind) = parse_tile(field, line_no)?;
            let tile = &mut grid[(x as u16, y as u16)];
            tile.top = top;
            tile.bottom = bottom;
            tile.left = left;
            tile.right = right;
            tile.kind = kind;
        }
    }

    Ok(Maze {
        algorithm,
        grid,
        width,
        height,
        start,
        finish,
    })
}

/// Saves a maze as `<name>.csv` under `dir`, creating the directory first.
pub fn save<P: AsRef<Path>>(maze: &Maze, dir: P, name: &str) -> crate::Result<()> {
    fs::create_dir_all(&dir)?;
    let path = dir.as_ref().join(format!("{name}.csv"));
    let file = fs::File::create(&path)?;
    let mut writer = BufWriter::new(file);
    encode(maze, &mut writer)?;
    writer.flush()?;
    tracing::info!("saved maze to {}", path.display());
    Ok(())
}

/// Loads the maze saved as `<name>.csv` under `dir`.
pub fn load<P: AsRef<Path>>(dir: P, name: &str) -> crate::Result<Maze> {
    let path = dir.as_ref().join(format!("{name}.csv"));
    let file = fs::File::open(&path)?;
    let maze = decode(file)?;
    tracing::info!("loaded maze from {}", path.display());
    Ok(maze)
}

/// Whether a save with this name already exists under `dir`.
pub fn exists<P: AsRef<Path>>(dir: P, name: &str) -> bool {
    dir.as_ref().join(format!("{name}.csv")).is_file()
}

fn format_err(line: usize, reason: impl Into<String>) -> Error {
    Error::Format {
        line,
        reason: reason.into(),
    }
}

fn parse_pair(text: &str, line: usize, what: &str) -> crate::Result<(u16, u16)> {
    let mut parts = text.split(',');
    let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format_err(line, format!("expected two {what} fields")));
    };
    let a = a
        .trim()
        .parse::<u16>()
        .map_err(|_| format_err(line, format!("malformed {what}: `{}`", a.trim())))?;
    let b = b
        .trim()
        .parse::<u16>()
        .map_err(|_| format_err(line, format!("malformed {what}: `{}`", b.trim())))?;
    Ok((a, b))
}

fn parse_tile(field: &str, line: usize) -> crate::Result<(bool, bool, bool, bool, TileKind)> {
    let chars: Vec<char> = field.chars().collect();
    if chars.len() != 5 {
        return Err(format_err(
            line,
            format!("cell `{field}` must be exactly 5 characters"),
        ));
    }
    let mut walls = [false; 4];
    for (i, &c) in chars[..4].iter().enumerate() {
        walls[i] = match c {
            '0' => false,
            '1' => true,
            _ => {
                return Err(format_err(
                    line,
                    format!("invalid wall flag `{c}` in cell `{field}`"),
                ));
            }
        };
    }
    let kind = TileKind::from_digit(chars[4]).ok_or_else(|| {
        format_err(line, format!("invalid kind digit `{}` in cell `{field}`", chars[4]))
    })?;
    Ok((walls[0], walls[1], walls[2], walls[3], kind))
}
