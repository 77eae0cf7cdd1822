/// Cells per board row and per board column.
pub const BOARD_SIDE: u8 = 10;
pub const CELL_COUNT: usize = 100;
/// Landing exactly here wins the game.
pub const FINAL_CELL: u8 = 100;
pub const START_CELL: u8 = 1;
pub const CELL_SIZE: f64 = 60.0;
/// Gap between the drawing surface edge and the first row/column of cells.
pub const BOARD_MARGIN: f64 = 10.0;

/// A point in logical drawing space (x grows right, y grows down).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Linear interpolation: `t == 0` gives `self`, `t == 1` gives `other`.
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point {
            x: self.x * (1.0 - t) + other.x * t,
            y: self.y * (1.0 - t) + other.y * t,
        }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    number: u8,
    origin: Point,
    size: f64,
}

impl Cell {
    /// Cell number, 1..=100
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Top-left corner of the cell
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn center(&self) -> Point {
        self.origin.offset(self.size / 2.0, self.size / 2.0)
    }
}

/// The 100 numbered cells laid out boustrophedon style: cell 1 sits in the
/// bottom-left corner, even rows (counted from the bottom) run left to right
/// and odd rows run right to left.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: Vec<Cell>,
    cell_size: f64,
}

impl Grid {
    /// Build the grid once; nothing mutates it afterwards.
    pub fn new(cell_size: f64) -> Self {
        let cells = (1..=FINAL_CELL)
            .map(|number| Cell {
                number,
                origin: cell_origin(number, cell_size),
                size: cell_size,
            })
            .collect();

        Grid { cells, cell_size }
    }

    /// Get the cell with the given number, if it exists
    pub fn cell(&self, number: u8) -> Option<&Cell> {
        if number == 0 {
            return None;
        }
        self.cells.get(usize::from(number) - 1)
    }

    /// Top-left coordinate of a cell. Numbers outside 1..=100 clamp to the
    /// nearest cell so the lookup stays total.
    pub fn coordinate(&self, number: u8) -> Point {
        let index = usize::from(number.clamp(START_CELL, FINAL_CELL)) - 1;
        self.cells[index].origin
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(CELL_SIZE)
    }
}

fn cell_origin(number: u8, cell_size: f64) -> Point {
    let index = number - 1;
    let row = index / BOARD_SIDE;
    let offset_in_row = index % BOARD_SIDE;

    // Odd rows are numbered right to left
    let column = if row % 2 == 0 {
        offset_in_row
    } else {
        BOARD_SIDE - 1 - offset_in_row
    };

    Point {
        x: BOARD_MARGIN + f64::from(column) * cell_size,
        y: BOARD_MARGIN + f64::from(BOARD_SIDE - 1 - row) * cell_size,
    }
}
