//! Common types: shot outcomes, cell and vessel states, and the error enums
//! shared by the fleet, the players and the match controller.

use core::fmt;

/// Outcome of firing at one cell of a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Nothing was at the cell.
    Miss,
    /// A vessel was damaged but is still afloat.
    Hit,
    /// The shot destroyed the last intact cell of a vessel.
    Sunk,
}

impl ShotResult {
    /// `true` for `Hit` and `Sunk`: the cell held part of a vessel.
    pub fn is_struck(self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

/// Status of a single cell of a placed vessel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellStatus {
    #[default]
    Empty,
    Occupied,
    Struck,
}

/// Lifecycle of a vessel. `Sunk` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VesselState {
    #[default]
    Afloat,
    Damaged,
    Sunk,
}

/// Text that does not name a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateError {
    Empty,
    /// Only 2 or 3 characters can name a cell.
    BadLength(usize),
    ColumnOutOfRange(char),
    RowOutOfRange,
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::Empty => write!(f, "Malformed coordinate: empty text"),
            CoordinateError::BadLength(n) => {
                write!(f, "Malformed coordinate: expected 2 or 3 characters, got {}", n)
            }
            CoordinateError::ColumnOutOfRange(c) => {
                write!(f, "Malformed coordinate: column '{}' is not in A-J", c)
            }
            CoordinateError::RowOutOfRange => {
                write!(f, "Malformed coordinate: row is not in 1-10")
            }
        }
    }
}

/// Errors returned by fleet placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetError {
    /// A vessel cell would fall outside the board.
    OutOfBounds,
    /// A vessel already occupies one of the cells.
    CellOccupied,
    /// A cell touches another vessel, diagonals included.
    TooClose,
    /// The cells do not form one straight contiguous run.
    NotStraight,
    /// The run has the wrong number of cells.
    WrongLength { expected: usize, actual: usize },
    /// Random placement found no legal position.
    UnableToPlaceVessel,
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::OutOfBounds => write!(f, "Vessel placement is out of bounds"),
            FleetError::CellOccupied => write!(f, "Cell is already occupied by a vessel"),
            FleetError::TooClose => write!(f, "Vessel would touch another vessel"),
            FleetError::NotStraight => write!(f, "Vessel cells must form a straight line"),
            FleetError::WrongLength { expected, actual } => write!(
                f,
                "Vessel must be {} cells long, got {}",
                expected, actual
            ),
            FleetError::UnableToPlaceVessel => write!(f, "Unable to place vessel"),
        }
    }
}

/// Errors surfaced by a [`crate::Player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerError {
    Fleet(FleetError),
    /// The human input stream ended or could not be written to.
    InputClosed,
    /// Every cell of the opponent board has already been fired upon.
    NoTargetsLeft,
}

impl From<FleetError> for PlayerError {
    fn from(err: FleetError) -> Self {
        PlayerError::Fleet(err)
    }
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerError::Fleet(e) => write!(f, "Fleet error: {}", e),
            PlayerError::InputClosed => write!(f, "Input closed"),
            PlayerError::NoTargetsLeft => write!(f, "No cells left to target"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoordinateError {}
#[cfg(feature = "std")]
impl std::error::Error for FleetError {}
#[cfg(feature = "std")]
impl std::error::Error for PlayerError {}
