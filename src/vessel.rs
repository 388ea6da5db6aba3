//! Vessels: straight contiguous runs of cells with aggregate damage state.

use alloc::vec::Vec;

use crate::common::{CellStatus, FleetError, ShotResult, VesselState};
use crate::coordinate::Coordinate;

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Same row, consecutive columns.
    Horizontal,
    /// Same column, consecutive rows.
    Vertical,
}

impl Orientation {
    fn step(self) -> (i16, i16) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// One cell of a vessel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VesselCell {
    pub coord: Coordinate,
    pub status: CellStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vessel {
    cells: Vec<VesselCell>,
    damaged: usize,
    state: VesselState,
}

impl Vessel {
    /// The `length` cells starting at `origin` and extending right
    /// (horizontal) or down (vertical).
    pub fn span(
        origin: Coordinate,
        orientation: Orientation,
        length: usize,
    ) -> Result<Vec<Coordinate>, FleetError> {
        let (dc, dr) = orientation.step();
        (0..length as i16)
            .map(|k| origin.offset(dc * k, dr * k).ok_or(FleetError::OutOfBounds))
            .collect()
    }

    /// The run between two end cells, inclusive, in either order.
    pub fn between(start: Coordinate, end: Coordinate) -> Result<Vec<Coordinate>, FleetError> {
        let (from, to) = if start.index() <= end.index() {
            (start, end)
        } else {
            (end, start)
        };
        if from.row() == to.row() {
            Self::span(from, Orientation::Horizontal, (to.column() - from.column()) as usize + 1)
        } else if from.column() == to.column() {
            Self::span(from, Orientation::Vertical, (to.row() - from.row()) as usize + 1)
        } else {
            Err(FleetError::NotStraight)
        }
    }

    /// Create a vessel from its cells, which must be distinct and form one
    /// straight contiguous run in the order given (either direction).
    pub fn from_cells(cells: &[Coordinate]) -> Result<Self, FleetError> {
        if cells.is_empty() {
            return Err(FleetError::WrongLength {
                expected: 1,
                actual: 0,
            });
        }
        if !is_straight_run(cells) {
            return Err(FleetError::NotStraight);
        }
        Ok(Self {
            cells: cells
                .iter()
                .map(|&coord| VesselCell {
                    coord,
                    status: CellStatus::Occupied,
                })
                .collect(),
            damaged: 0,
            state: VesselState::Afloat,
        })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn damaged_count(&self) -> usize {
        self.damaged
    }

    pub fn state(&self) -> VesselState {
        self.state
    }

    pub fn is_sunk(&self) -> bool {
        self.state == VesselState::Sunk
    }

    pub fn cells(&self) -> &[VesselCell] {
        &self.cells
    }

    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.iter().map(|cell| cell.coord)
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells.iter().any(|cell| cell.coord == coord)
    }

    /// Status of `coord` within this vessel, `None` if it is not one of its cells.
    pub fn cell_status(&self, coord: Coordinate) -> Option<CellStatus> {
        self.cells
            .iter()
            .find(|cell| cell.coord == coord)
            .map(|cell| cell.status)
    }

    /// Register a shot at `coord`. Returns `None` if the vessel does not
    /// cover `coord`. A cell that is already struck adds no further damage.
    pub fn strike(&mut self, coord: Coordinate) -> Option<ShotResult> {
        let cell = self.cells.iter_mut().find(|cell| cell.coord == coord)?;
        if cell.status != CellStatus::Struck {
            cell.status = CellStatus::Struck;
            self.damaged += 1;
        }
        self.state = if self.damaged == self.cells.len() {
            VesselState::Sunk
        } else {
            VesselState::Damaged
        };
        Some(match self.state {
            VesselState::Sunk => ShotResult::Sunk,
            _ => ShotResult::Hit,
        })
    }
}

fn is_straight_run(cells: &[Coordinate]) -> bool {
    let Some((first, rest)) = cells.split_first() else {
        return false;
    };
    let Some(second) = rest.first() else {
        return true;
    };
    let dc = second.column() as i16 - first.column() as i16;
    let dr = second.row() as i16 - first.row() as i16;
    if !matches!((dc, dr), (0, 1) | (0, -1) | (1, 0) | (-1, 0)) {
        return false;
    }
    cells
        .windows(2)
        .all(|w| w[0].offset(dc, dr) == Some(w[1]))
}
