//! Shots a player has fired at the opponent, in chronological order.

use alloc::vec::Vec;

use crate::bitboard::CellMask;
use crate::common::ShotResult;
use crate::coordinate::Coordinate;

/// One fired shot. `outcome` stays `None` until the opponent has resolved it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotRecord {
    pub coord: Coordinate,
    pub outcome: Option<ShotResult>,
}

impl ShotRecord {
    /// The shot found a vessel cell (`Hit` or `Sunk`).
    pub fn is_struck(&self) -> bool {
        self.outcome.is_some_and(ShotResult::is_struck)
    }
}

/// Append-only list of shots with O(1) lookups for fired and struck cells.
#[derive(Debug, Clone, Default)]
pub struct TargetingHistory {
    records: Vec<ShotRecord>,
    fired: CellMask,
    struck: CellMask,
}

impl TargetingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provisional record for `coord`.
    pub fn push(&mut self, coord: Coordinate) {
        debug_assert!(!self.fired.contains(coord), "duplicate shot at {}", coord);
        self.records.push(ShotRecord {
            coord,
            outcome: None,
        });
        self.fired.insert(coord);
    }

    /// Store the authoritative outcome of the latest shot at `coord`.
    /// Returns `false` if `coord` was never fired at.
    pub fn record_result(&mut self, coord: Coordinate, result: ShotResult) -> bool {
        let Some(record) = self.records.iter_mut().rev().find(|r| r.coord == coord) else {
            return false;
        };
        record.outcome = Some(result);
        if result.is_struck() {
            self.struck.insert(coord);
        } else {
            self.struck.remove(coord);
        }
        true
    }

    /// Whether `coord` has been fired at.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.fired.contains(coord)
    }

    /// Whether a shot at `coord` found a vessel cell.
    pub fn is_struck(&self, coord: Coordinate) -> bool {
        self.struck.contains(coord)
    }

    /// Whether any struck cell other than `except` touches `coord`
    /// (eight-neighbour sense).
    pub fn borders_struck(&self, coord: Coordinate, except: Option<Coordinate>) -> bool {
        coord
            .neighbors()
            .any(|n| Some(n) != except && self.struck.contains(n))
    }

    /// Most recent shot.
    pub fn last(&self) -> Option<&ShotRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShotRecord> + '_ {
        self.records.iter()
    }

    /// Outcome recorded for `coord`, if it was fired at and resolved.
    pub fn outcome(&self, coord: Coordinate) -> Option<ShotResult> {
        self.records
            .iter()
            .rev()
            .find(|r| r.coord == coord)
            .and_then(|r| r.outcome)
    }

    pub fn fired(&self) -> CellMask {
        self.fired
    }

    pub fn struck_cells(&self) -> CellMask {
        self.struck
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
