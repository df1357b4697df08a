use rand::RngExt;
use rand::rng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Filled,
    Crossed,
    /// Marker for corrupt state; never produced by normal play.
    Invalid,
}

impl Cell {
    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled)
    }
}

/// Display color for one cell of the overlay, as plain RGB.
/// The front end maps it to whatever color type it renders with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl CellColor {
    /// Color every overlay cell starts with.
    pub const DEFAULT: CellColor = CellColor {
        r: 0x5f,
        g: 0xd7,
        b: 0x87,
    };
}

impl Default for CellColor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Fixed-size rectangular board, stored row-major as `y * width + x`.
///
/// The cell type defaults to [`Cell`]; the cosmetic color overlay reuses the
/// same container with [`CellColor`]. Puzzle operations (randomizing, clue
/// derivation) exist only on `Grid<Cell>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<T = Cell> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Create a `width` x `height` grid with every cell set to `default`.
    ///
    /// Panics if either dimension is zero. Grids are never resized after
    /// creation.
    pub fn new(width: usize, height: usize, default: T) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be positive, got {width}x{height}"
        );
        Self {
            width,
            height,
            cells: vec![default; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) out of range for {}x{} grid",
            self.width,
            self.height
        );
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> T {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let i = self.index(x, y);
        self.cells[i] = value;
    }
}

impl Grid<Cell> {
    /// Create an all-[`Cell::Empty`] board.
    pub fn empty(width: usize, height: usize) -> Self {
        Self::new(width, height, Cell::Empty)
    }

    /// Overwrite every cell with an independent 50/50 Filled/Empty draw.
    ///
    /// No uniqueness guarantee: the pattern is only consistent with its own
    /// derived clues.
    pub fn randomize(&mut self) {
        let mut rng = rng();
        for cell in &mut self.cells {
            *cell = if rng.random_bool(0.5) {
                Cell::Filled
            } else {
                Cell::Empty
            };
        }
    }

    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == Cell::Filled
    }

    /// Clue sequences for every row, top to bottom, each scanning left to
    /// right. Example shape: `[[2], [1, 8, 9], [], [3]]`.
    pub fn row_clues(&self) -> Vec<Vec<usize>> {
        (0..self.height)
            .map(|y| line_clues((0..self.width).map(|x| self.get(x, y))))
            .collect()
    }

    /// Clue sequences for every column, left to right, each scanning top to
    /// bottom.
    pub fn column_clues(&self) -> Vec<Vec<usize>> {
        (0..self.width)
            .map(|x| line_clues((0..self.height).map(|y| self.get(x, y))))
            .collect()
    }
}

/// Run lengths of maximal Filled runs along one line, in scan order.
/// Every non-Filled state terminates a run.
fn line_clues(line: impl Iterator<Item = Cell>) -> Vec<usize> {
    let mut clues = Vec::new();
    let mut run = 0;
    for cell in line {
        if cell == Cell::Filled {
            run += 1;
        } else if run > 0 {
            clues.push(run);
            run = 0;
        }
    }
    if run > 0 {
        clues.push(run);
    }
    clues
}
