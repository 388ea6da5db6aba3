//! Fleet manager: placement legality and shot resolution for one player's
//! fleet.

use alloc::vec::Vec;
use log::{debug, info, trace};
use rand::Rng;

use crate::bitboard::CellMask;
use crate::common::{CellStatus, FleetError, ShotResult};
use crate::config::{fleet_composition, BOARD_SIZE, FLEET_ATTEMPTS, PLACEMENT_ATTEMPTS};
use crate::coordinate::{self, Coordinate};
use crate::grid::FleetGrid;
use crate::vessel::{Orientation, Vessel};

/// Owns a player's [`FleetGrid`], the number of vessels still afloat and the
/// cells the opponent fired at without hitting anything.
#[derive(Debug, Clone, Default)]
pub struct FleetManager {
    grid: FleetGrid,
    afloat: usize,
    misses: Vec<Coordinate>,
}

impl FleetManager {
    /// Empty fleet, nothing placed.
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff the 1-based `(column, row)` pair lies on the board.
    pub fn is_on_board(column: i16, row: i16) -> bool {
        coordinate::is_on_board(column, row)
    }

    /// No vessel currently occupies `coord`.
    pub fn is_free(&self, coord: Coordinate) -> bool {
        !self.grid.contains(coord)
    }

    /// None of the eight cells around `coord` belongs to a placed vessel.
    /// Evaluated against the current grid on every call.
    pub fn is_acceptable(&self, coord: Coordinate) -> bool {
        !coord.neighbors().any(|n| self.grid.contains(n))
    }

    /// Checks a single cell against the occupancy and spacing rules.
    pub fn check_cell(&self, coord: Coordinate) -> Result<(), FleetError> {
        if !self.is_free(coord) {
            Err(FleetError::CellOccupied)
        } else if !self.is_acceptable(coord) {
            Err(FleetError::TooClose)
        } else {
            Ok(())
        }
    }

    /// Whether a vessel could legally be placed on `cells`.
    pub fn can_place(&self, cells: &[Coordinate]) -> bool {
        cells.iter().all(|&c| self.check_cell(c).is_ok())
    }

    /// Record a vessel on `cells`. Declines without touching the grid if any
    /// cell is already occupied. Spacing is not re-checked here; see
    /// [`FleetManager::try_place`].
    pub fn place_vessel(&mut self, cells: &[Coordinate]) -> Result<(), FleetError> {
        if cells.iter().any(|&c| !self.is_free(c)) {
            return Err(FleetError::CellOccupied);
        }
        let vessel = Vessel::from_cells(cells)?;
        debug!(
            "vessel of length {} placed at {}..{}",
            vessel.len(),
            cells[0],
            cells[cells.len() - 1]
        );
        self.grid.insert(vessel);
        self.afloat += 1;
        Ok(())
    }

    /// Place a vessel after checking every cell against both placement rules.
    pub fn try_place(&mut self, cells: &[Coordinate]) -> Result<(), FleetError> {
        for &cell in cells {
            self.check_cell(cell)?;
        }
        self.place_vessel(cells)
    }

    /// Place a vessel of `length` cells starting at `origin`.
    pub fn place(
        &mut self,
        origin: Coordinate,
        orientation: Orientation,
        length: usize,
    ) -> Result<(), FleetError> {
        let cells = Vessel::span(origin, orientation, length)?;
        self.try_place(&cells)
    }

    /// Returns the cells of a random legal position for a vessel of `length`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<Vec<Coordinate>, FleetError> {
        if length == 0 || length > BOARD_SIZE as usize {
            return Err(FleetError::OutOfBounds);
        }
        let far = BOARD_SIZE - length as u8 + 1;
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_col, max_row) = match orientation {
                Orientation::Horizontal => (far, BOARD_SIZE),
                Orientation::Vertical => (BOARD_SIZE, far),
            };
            let origin = Coordinate::new(
                rng.random_range(1..=max_col),
                rng.random_range(1..=max_row),
            )
            .ok_or(FleetError::OutOfBounds)?;
            let cells = Vessel::span(origin, orientation, length)?;
            if self.can_place(&cells) {
                return Ok(cells);
            }
        }
        Err(FleetError::UnableToPlaceVessel)
    }

    /// Replace the current layout with a complete random fleet. Restarts from
    /// an empty grid when a layout leaves no room for the remaining vessels.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), FleetError> {
        for attempt in 0..FLEET_ATTEMPTS {
            let mut trial = FleetManager::new();
            let placed = fleet_composition().try_for_each(|(_, length)| {
                let cells = trial.random_placement(rng, length)?;
                trial.place_vessel(&cells)
            });
            match placed {
                Ok(()) => {
                    *self = trial;
                    return Ok(());
                }
                Err(e) => trace!("random fleet attempt {} failed: {}", attempt, e),
            }
        }
        Err(FleetError::UnableToPlaceVessel)
    }

    /// Resolve an incoming shot. Misses are appended to the miss history;
    /// firing at the same empty cell twice records it twice.
    pub fn resolve_shot(&mut self, coord: Coordinate) -> ShotResult {
        let Some(vessel) = self.grid.vessel_at_mut(coord) else {
            self.misses.push(coord);
            return ShotResult::Miss;
        };
        let was_sunk = vessel.is_sunk();
        let result = match vessel.strike(coord) {
            Some(result) => result,
            None => {
                debug_assert!(false, "grid maps {} to a vessel not covering it", coord);
                self.misses.push(coord);
                return ShotResult::Miss;
            }
        };
        if result == ShotResult::Sunk && !was_sunk {
            self.afloat -= 1;
            info!("vessel sunk at {}, {} left afloat", coord, self.afloat);
        }
        result
    }

    /// True once every placed vessel is sunk.
    pub fn is_fleet_destroyed(&self) -> bool {
        self.afloat == 0
    }

    pub fn afloat_count(&self) -> usize {
        self.afloat
    }

    /// Cells the opponent fired at that held no vessel, oldest first.
    pub fn misses(&self) -> &[Coordinate] {
        &self.misses
    }

    pub fn grid(&self) -> &FleetGrid {
        &self.grid
    }

    pub fn cell_status(&self, coord: Coordinate) -> CellStatus {
        self.grid.cell_status(coord)
    }

    pub fn vessel_at(&self, coord: Coordinate) -> Option<&Vessel> {
        self.grid.vessel_at(coord)
    }

    pub fn vessels(&self) -> &[Vessel] {
        self.grid.vessels()
    }

    pub fn occupancy(&self) -> CellMask {
        self.grid.occupancy()
    }
}
