//! Cell addresses: column letter `A..=J` and row `1..=10`.

use core::fmt;
use core::str::FromStr;

use crate::common::CoordinateError;
use crate::config::{BOARD_SIZE, COLUMNS};

/// Offsets of the eight surrounding cells, row by row.
const NEIGHBOR_OFFSETS: [(i16, i16); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Up, down, left, right as `(column, row)` offsets.
const ORTHOGONAL_OFFSETS: [(i16, i16); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Returns `true` when the 1-based `(column, row)` pair lies on the board.
/// Candidates outside the board only ever exist as raw pairs like these.
pub fn is_on_board(column: i16, row: i16) -> bool {
    let size = BOARD_SIZE as i16;
    (1..=size).contains(&column) && (1..=size).contains(&row)
}

/// An on-board cell address. Both components are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    column: u8,
    row: u8,
}

impl Coordinate {
    /// Build a coordinate from 1-based column and row, `None` if off the board.
    pub const fn new(column: u8, row: u8) -> Option<Self> {
        if column >= 1 && column <= BOARD_SIZE && row >= 1 && row <= BOARD_SIZE {
            Some(Self { column, row })
        } else {
            None
        }
    }

    /// Build a coordinate from its column letter (upper case) and row.
    pub fn from_letter(letter: char, row: u8) -> Option<Self> {
        let column = COLUMNS.iter().position(|&c| c == letter)?;
        Self::new(column as u8 + 1, row)
    }

    /// Build a coordinate from its row-major index in `0..100`.
    pub fn from_index(index: usize) -> Option<Self> {
        let size = BOARD_SIZE as usize;
        if index >= size * size {
            return None;
        }
        Self::new((index % size) as u8 + 1, (index / size) as u8 + 1)
    }

    pub fn column(&self) -> u8 {
        self.column
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    /// Column letter of this cell.
    pub fn letter(&self) -> char {
        COLUMNS[self.column as usize - 1]
    }

    /// Row-major index in `0..100`, `A1` being 0 and `J10` 99.
    pub fn index(&self) -> usize {
        (self.row as usize - 1) * BOARD_SIZE as usize + (self.column as usize - 1)
    }

    /// Zero-based `(row, col)` pair as used by [`crate::BitBoard`].
    pub fn row_col(&self) -> (usize, usize) {
        (self.row as usize - 1, self.column as usize - 1)
    }

    /// The cell `dc` columns and `dr` rows away, if it is on the board.
    pub fn offset(&self, dc: i16, dr: i16) -> Option<Self> {
        let column = self.column as i16 + dc;
        let row = self.row as i16 + dr;
        if is_on_board(column, row) {
            Some(Self {
                column: column as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }

    /// All 100 cells in row-major order: `A1, B1, .., J1, A2, .., J10`.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE as usize * BOARD_SIZE as usize).filter_map(Self::from_index)
    }

    /// The up to eight surrounding cells, clipped to the board.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |(dc, dr)| self.offset(dc, dr))
    }

    /// The up to four orthogonal neighbours in the fixed order
    /// up, down, left, right, clipped to the board.
    pub fn orthogonal_neighbors(self) -> impl Iterator<Item = Coordinate> {
        ORTHOGONAL_OFFSETS
            .into_iter()
            .filter_map(move |(dc, dr)| self.offset(dc, dr))
    }

    /// Eight-neighbour adjacency. A cell is not adjacent to itself.
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        self != other
            && (self.column as i16 - other.column as i16).abs() <= 1
            && (self.row as i16 - other.row as i16).abs() <= 1
    }

    /// Parse human input: surrounding whitespace is ignored and the letter
    /// may be lower case. Everything else follows [`coordinate_from_text`].
    pub fn parse_lenient(input: &str) -> Result<Self, CoordinateError> {
        let trimmed = input.trim();
        let mut upper = [0u8; 3];
        if trimmed.is_empty() {
            return Err(CoordinateError::Empty);
        }
        if trimmed.len() > upper.len() || !trimmed.is_ascii() {
            return Err(CoordinateError::BadLength(trimmed.chars().count()));
        }
        for (slot, b) in upper.iter_mut().zip(trimmed.bytes()) {
            *slot = b.to_ascii_uppercase();
        }
        // ASCII in, ASCII out.
        let text = core::str::from_utf8(&upper[..trimmed.len()])
            .map_err(|_| CoordinateError::BadLength(trimmed.len()))?;
        coordinate_from_text(text)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter(), self.row)
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        coordinate_from_text(s)
    }
}

impl TryFrom<&str> for Coordinate {
    type Error = CoordinateError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        coordinate_from_text(s)
    }
}

/// Parse the canonical form `<A-J><1-10>`, e.g. `C7` or `J10`.
///
/// The check is strict: upper-case letter, no whitespace, no leading zero.
pub fn coordinate_from_text(text: &str) -> Result<Coordinate, CoordinateError> {
    let bytes = text.as_bytes();
    match bytes.len() {
        0 => return Err(CoordinateError::Empty),
        2 | 3 => {}
        n => return Err(CoordinateError::BadLength(n)),
    }
    let letter = bytes[0] as char;
    if !COLUMNS.contains(&letter) {
        return Err(CoordinateError::ColumnOutOfRange(letter));
    }
    let row = match &bytes[1..] {
        [d @ b'1'..=b'9'] => d - b'0',
        b"10" => 10,
        _ => return Err(CoordinateError::RowOutOfRange),
    };
    Coordinate::from_letter(letter, row).ok_or(CoordinateError::RowOutOfRange)
}

/// Non-failing form of [`coordinate_from_text`] for input validation.
pub fn is_valid_board_cell(text: &str) -> bool {
    coordinate_from_text(text).is_ok()
}
