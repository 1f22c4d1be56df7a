use super::Player;
use crate::error::{ConfigError, MoveError};

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;
/// Smallest dimension on which four in a row is possible in every direction.
pub const MIN_DIMENSION: usize = 4;
/// Largest accepted width or height.
pub const MAX_DIMENSION: usize = 64;

const WIN_LENGTH: isize = 4;

/// Ray directions as (row step, column step): right, down, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Taken(Player),
}

/// The grid plus the marker of the player about to move.
///
/// Cells are stored row-major; row 0 is the top, row `height - 1` the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    current_player: Player,
}

impl Board {
    /// Create an empty board with player one to move
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        let range = MIN_DIMENSION..=MAX_DIMENSION;
        if !range.contains(&width) || !range.contains(&height) {
            return Err(ConfigError::Validation(format!(
                "board sides must be between {MIN_DIMENSION} and {MAX_DIMENSION}, got {width}x{height}"
            )));
        }
        Ok(Self::empty(width, height))
    }

    fn empty(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
            current_player: Player::One,
        }
    }

    /// Clear every cell and hand the move back to player one
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
        self.current_player = Player::One;
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Pass the move to the other player
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.other();
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, the last row is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Lowest empty row in `col`, or `None` if the column is full or does not exist
    pub fn find_landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Columns that can still take a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Drop the current player's piece in a column, returns the (row, column) it landed on
    pub fn drop_piece(&mut self, col: usize) -> Result<(usize, usize), MoveError> {
        if col >= self.width {
            return Err(MoveError::OutOfRangeColumn {
                column: col,
                width: self.width,
            });
        }

        let row = self.find_landing_row(col).ok_or(MoveError::ColumnFull(col))?;
        let idx = self.index(row, col);
        self.cells[idx] = self.current_player.to_cell();
        Ok((row, col))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Whether `player` has four in a row anywhere on the board.
    ///
    /// Every cell is tried as the start of a ray in each of the four directions.
    pub fn check_win(&self, player: Player) -> bool {
        let target = player.to_cell();
        (0..self.height).any(|row| {
            (0..self.width).any(|col| {
                DIRECTIONS
                    .iter()
                    .any(|&dir| self.ray_matches(row, col, dir, target))
            })
        })
    }

    fn ray_matches(&self, row: usize, col: usize, (dr, dc): (isize, isize), target: Cell) -> bool {
        (0..WIN_LENGTH).all(|step| {
            let r = row as isize + dr * step;
            let c = col as isize + dc * step;
            r >= 0
                && c >= 0
                && (r as usize) < self.height
                && (c as usize) < self.width
                && self.get(r as usize, c as usize) == target
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
