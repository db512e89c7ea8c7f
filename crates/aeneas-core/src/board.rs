//! Tile board rendering.
//!
//! A project board is a fixed grid of keycaps. A handful of them carry a
//! letter spelling the project name; the rest are blank filler. The catalog
//! only stores the letters, so [`render_board`] expands that sparse list into
//! one [`Cell`] per coordinate.

use std::collections::HashMap;
use std::fmt;

use aeneas_model::{GRID_COLS, GRID_ROWS, LetterStone, TileBoardSpec};

/// Character used for filler cells in the text form of a board.
const FILLER: char = '·';

/// Height and width of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

impl GridSize {
    /// The 5 × 10 grid every project board uses.
    pub const STUDIO: GridSize = GridSize::new(GRID_ROWS, GRID_COLS);

    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of cells on the grid.
    pub const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

/// A glyph to place at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub glyph: char,
}

impl Placement {
    pub const fn new(row: usize, col: usize, glyph: char) -> Self {
        Self { row, col, glyph }
    }
}

impl From<&LetterStone> for Placement {
    fn from(stone: &LetterStone) -> Self {
        Self::new(stone.row, stone.col, stone.glyph)
    }
}

/// One keycap on a rendered board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    /// `None` for filler cells.
    pub glyph: Option<char>,
}

impl Cell {
    pub fn is_glyph(&self) -> bool {
        self.glyph.is_some()
    }
}

/// A fully rendered board: exactly `rows × cols` cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: GridSize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// All cells, row 0 left to right, then row 1, and so on.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells grouped by row.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.cols.max(1))
    }

    /// Glyph at a coordinate; `None` for filler cells and out-of-range
    /// coordinates.
    pub fn glyph_at(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.size.rows || col >= self.size.cols {
            return None;
        }
        self.cells[row * self.size.cols + col].glyph
    }

    /// Number of glyph cells.
    pub fn glyph_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_glyph()).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        for (index, row) in self.rows().enumerate() {
            if index > 0 {
                f.write_char('\n')?;
            }
            for cell in row {
                f.write_char(cell.glyph.unwrap_or(FILLER))?;
            }
        }
        Ok(())
    }
}

/// Expand sparse placements into a dense board.
///
/// Every placement must lie within `size`; coordinates outside the grid are
/// never looked up and therefore do not appear on the board. When several
/// placements target the same coordinate the last one wins.
///
/// # Examples
///
/// ```
/// use aeneas_core::{GridSize, Placement, render_board};
///
/// let board = render_board(GridSize::new(1, 3), &[Placement::new(0, 1, 'A')]);
/// assert_eq!(board.to_string(), "·A·");
/// ```
pub fn render_board(size: GridSize, placements: &[Placement]) -> Board {
    let mut glyphs: HashMap<(usize, usize), char> = HashMap::with_capacity(placements.len());
    for placement in placements {
        glyphs.insert((placement.row, placement.col), placement.glyph);
    }

    let mut cells = Vec::with_capacity(size.cell_count());
    for row in 0..size.rows {
        for col in 0..size.cols {
            cells.push(Cell {
                row,
                col,
                glyph: glyphs.get(&(row, col)).copied(),
            });
        }
    }

    Board { size, cells }
}

/// Render a catalog board on the studio grid.
pub fn render_tile_board(spec: &TileBoardSpec) -> Board {
    let placements: Vec<Placement> = spec.letters.iter().map(Placement::from).collect();
    render_board(GridSize::STUDIO, &placements)
}
