//! Per-player mapping from board cell to the vessel occupying it.

use alloc::vec::Vec;

use crate::bitboard::CellMask;
use crate::common::CellStatus;
use crate::config::BOARD_SIZE;
use crate::coordinate::Coordinate;
use crate::vessel::Vessel;

const CELLS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// Vessels are stored once; every cell they cover points back at them by index.
#[derive(Debug, Clone)]
pub struct FleetGrid {
    vessels: Vec<Vessel>,
    slots: [Option<usize>; CELLS],
    occupied: CellMask,
}

impl FleetGrid {
    pub fn new() -> Self {
        Self {
            vessels: Vec::new(),
            slots: [None; CELLS],
            occupied: CellMask::new(),
        }
    }

    /// Whether any vessel covers `coord`.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.occupied.contains(coord)
    }

    pub fn vessel_at(&self, coord: Coordinate) -> Option<&Vessel> {
        self.slots[coord.index()].map(|i| &self.vessels[i])
    }

    pub fn vessel_at_mut(&mut self, coord: Coordinate) -> Option<&mut Vessel> {
        let idx = self.slots[coord.index()]?;
        Some(&mut self.vessels[idx])
    }

    /// Status of the cell: `Empty` when no vessel covers it.
    pub fn cell_status(&self, coord: Coordinate) -> CellStatus {
        self.vessel_at(coord)
            .and_then(|v| v.cell_status(coord))
            .unwrap_or(CellStatus::Empty)
    }

    /// Record `vessel` at every one of its cells. The caller has checked
    /// that none of them is taken.
    pub(crate) fn insert(&mut self, vessel: Vessel) {
        let idx = self.vessels.len();
        for coord in vessel.coordinates() {
            debug_assert!(self.slots[coord.index()].is_none(), "{} already taken", coord);
            self.slots[coord.index()] = Some(idx);
            self.occupied.insert(coord);
        }
        self.vessels.push(vessel);
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Cells covered by any vessel.
    pub fn occupancy(&self) -> CellMask {
        self.occupied
    }
}

impl Default for FleetGrid {
    fn default() -> Self {
        Self::new()
    }
}
