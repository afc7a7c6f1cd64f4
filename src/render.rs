use std::io::Write;

use crossterm::style::{Color, Stylize};

use crate::maze::{Grid, PathShape, TileKind};

/// Box-drawing line set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Single,
    Double,
}

/// Display configuration for the maze printers.
#[derive(Debug, Clone)]
pub struct RenderStyle {
    pub border: LineStyle,
    pub path: LineStyle,
    pub entry_glyph: char,
    pub finish_glyph: char,
    pub border_color: Color,
    pub path_color: Color,
    pub entry_color: Color,
    pub finish_color: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        RenderStyle {
            border: LineStyle::Double,
            path: LineStyle::Single,
            entry_glyph: '∇',
            finish_glyph: '◉',
            border_color: Color::Magenta,
            path_color: Color::Green,
            entry_color: Color::Green,
            finish_color: Color::Yellow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Border,
    Route,
    Entry,
    Finish,
    Blank,
}

#[derive(Debug, Clone, Copy)]
struct Glyph {
    ch: char,
    role: Role,
}

/// Junction glyph for the four wall segments meeting at a lattice vertex,
/// sampled clockwise: west, north, east, south. Segments outside the grid
/// read as open, so the outer corners fall out of the same table. The
/// all-open vertex would close a cycle of four cells and cannot occur in a
/// perfect maze; it maps to a blank to keep the table total.
fn junction(style: LineStyle, west: bool, north: bool, east: bool, south: bool) -> char {
    let (single, double) = match (west, north, east, south) {
        (false, false, false, false) => (' ', ' '),
        (false, false, false, true) => ('│', '║'),
        (false, false, true, false) => ('─', '═'),
        (false, false, true, true) => ('┌', '╔'),
        (false, true, false, false) => ('│', '║'),
        (false, true, false, true) => ('│', '║'),
        (false, true, true, false) => ('└', '╚'),
        (false, true, true, true) => ('├', '╠'),
        (true, false, false, false) => ('─', '═'),
        (true, false, false, true) => ('┐', '╗'),
        (true, false, true, false) => ('─', '═'),
        (true, false, true, true) => ('┬', '╦'),
        (true, true, false, false) => ('┘', '╝'),
        (true, true, false, true) => ('┤', '╣'),
        (true, true, true, false) => ('┴', '╩'),
        (true, true, true, true) => ('┼', '╬'),
    };
    match style {
        LineStyle::Single => single,
        LineStyle::Double => double,
    }
}

/// Glyph for one solved-route segment.
fn route_glyph(style: LineStyle, shape: PathShape) -> char {
    let (single, double) = match shape {
        PathShape::Vertical => ('│', '║'),
        PathShape::Horizontal => ('─', '═'),
        PathShape::UpRight => ('└', '╚'),
        PathShape::UpLeft => ('┘', '╝'),
        PathShape::DownRight => ('┌', '╔'),
        PathShape::DownLeft => ('┐', '╗'),
    };
    match style {
        LineStyle::Single => single,
        LineStyle::Double => double,
    }
}

/// Cell interior glyph, keyed by tile kind.
fn filler(kind: TileKind, style: &RenderStyle) -> Glyph {
    match kind {
        TileKind::Free => Glyph {
            ch: ' ',
            role: Role::Blank,
        },
        TileKind::Start => Glyph {
            ch: style.entry_glyph,
            role: Role::Entry,
        },
        TileKind::Finish => Glyph {
            ch: style.finish_glyph,
            role: Role::Finish,
        },
        TileKind::Route(shape) => Glyph {
            ch: route_glyph(style.path, shape),
            role: Role::Route,
        },
    }
}

/// Horizontal wall segment east of vertex column `x` on vertex row `vy`:
/// the top wall of cell `(x, vy)`, or the bottom wall of the last row's
/// cell when the vertex row sits below the grid.
fn horizontal_wall(grid: &Grid, x: u16, vy: u16) -> bool {
    if x >= grid.width() {
        return false;
    }
    if vy < grid.height() {
        grid[(x, vy)].top
    } else {
        grid[(x, grid.height() - 1)].bottom
    }
}

/// Vertical wall segment south of vertex row `y` on vertex column `vx`:
/// the left wall of cell `(vx, y)`, or the right wall of the last column's
/// cell when the vertex column sits past the grid.
fn vertical_wall(grid: &Grid, vx: u16, y: u16) -> bool {
    if y >= grid.height() {
        return false;
    }
    if vx < grid.width() {
        grid[(vx, y)].left
    } else {
        grid[(grid.width() - 1, y)].right
    }
}

fn glyph_rows(grid: &Grid, style: &RenderStyle) -> Vec<Vec<Glyph>> {
    let width = grid.width();
    let height = grid.height();
    let hfill = match style.border {
        LineStyle::Single => '─',
        LineStyle::Double => '═',
    };
    let vfill = match style.border {
        LineStyle::Single => '│',
        LineStyle::Double => '║',
    };

    let mut rows = Vec::with_capacity(2 * height as usize + 1);
    for vy in 0..=height {
        let mut border_row = Vec::with_capacity(2 * width as usize + 1);
        for vx in 0..=width {
            let west = vx > 0 && horizontal_wall(grid, vx - 1, vy);
            let north = vy > 0 && vertical_wall(grid, vx, vy - 1);
            let east = horizontal_wall(grid, vx, vy);
            let south = vertical_wall(grid, vx, vy);
            border_row.push(Glyph {
                ch: junction(style.border, west, north, east, south),
                role: Role::Border,
            });
            if vx < width {
                border_row.push(if east {
                    Glyph {
                        ch: hfill,
                        role: Role::Border,
                    }
                } else {
                    Glyph {
                        ch: ' ',
                        role: Role::Blank,
                    }
                });
            }
        }
        rows.push(border_row);

        if vy == height {
            break;
        }
        let y = vy;
        let mut cell_row = Vec::with_capacity(2 * width as usize + 1);
        for x in 0..width {
            cell_row.push(if grid[(x, y)].left {
                Glyph {
                    ch: vfill,
                    role: Role::Border,
                }
            } else {
                Glyph {
                    ch: ' ',
                    role: Role::Blank,
                }
            });
            cell_row.push(filler(grid[(x, y)].kind, style));
        }
        cell_row.push(if grid[(width - 1, y)].right {
            Glyph {
                ch: vfill,
                role: Role::Border,
            }
        } else {
            Glyph {
                ch: ' ',
                role: Role::Blank,
            }
        });
        rows.push(cell_row);
    }
    rows
}

/// Renders the maze as plain text: `2 * height + 1` lines of exactly
/// `2 * width + 1` display columns. Pure; accepts solved and unsolved
/// grids alike. The entrance shows as a gap in the top border.
pub fn render_lines(grid: &Grid, style: &RenderStyle) -> Vec<String> {
    glyph_rows(grid, style)
        .into_iter()
        .map(|row| {
            let line: String = row.iter().map(|g| g.ch).collect();
            #[cfg(debug_assertions)]
            {
                use unicode_width::UnicodeWidthStr;
                debug_assert_eq!(
                    line.width(),
                    2 * grid.width() as usize + 1,
                    "every rendered line must span the full maze width"
                );
            }
            line
        })
        .collect()
}

/// Writes the same rendering with per-role colors through crossterm.
pub fn print_maze<W: Write>(out: &mut W, grid: &Grid, style: &RenderStyle) -> std::io::Result<()> {
    for row in glyph_rows(grid, style) {
        for glyph in row {
            let color = match glyph.role {
                Role::Border => style.border_color,
                Role::Route => style.path_color,
                Role::Entry => style.entry_color,
                Role::Finish => style.finish_color,
                Role::Blank => Color::Reset,
            };
            write!(out, "{}", glyph.ch.with(color))?;
        }
        writeln!(out)?;
    }
    Ok(())
}
