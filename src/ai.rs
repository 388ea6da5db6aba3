// Hunt/target search used by the autonomous player.
//
// After a shot that damaged a vessel without sinking it, the next shot probes
// the orthogonal neighbours of that hit. Otherwise a random unfired cell is
// drawn, skipping cells that touch a struck cell: vessels never touch, so such
// a cell is either part of a vessel already being pursued or water. Once
// `SWEEP_THRESHOLD` shots have been fired the remaining cells are swept from a
// cached candidate list instead.

use alloc::vec::Vec;
use log::trace;
use rand::Rng;

use crate::common::ShotResult;
use crate::config::SWEEP_THRESHOLD;
use crate::coordinate::Coordinate;
use crate::history::TargetingHistory;

/// Selection mode, derived from the latest entry of the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No damaged vessel to finish off.
    Hunting,
    /// The latest shot damaged a vessel at this cell.
    Targeting(Coordinate),
}

/// Target selection state of one autonomous player for one match.
#[derive(Debug, Clone, Default)]
pub struct TargetingStrategy {
    history: TargetingHistory,
    sweep: Option<Vec<Coordinate>>,
}

impl TargetingStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shots fired so far, oldest first.
    pub fn history(&self) -> &TargetingHistory {
        &self.history
    }

    /// `Targeting` iff the most recent shot came back `Hit`.
    pub fn mode(&self) -> Mode {
        match self.history.last() {
            Some(record) if record.outcome == Some(ShotResult::Hit) => Mode::Targeting(record.coord),
            _ => Mode::Hunting,
        }
    }

    /// First orthogonal neighbour of `recent` (up, down, left, right) that is
    /// unfired and does not touch any other struck cell.
    pub fn follow_up(&self, recent: Coordinate) -> Option<Coordinate> {
        recent.orthogonal_neighbors().find(|&n| {
            !self.history.contains(n) && !self.history.borders_struck(n, Some(recent))
        })
    }

    /// Unfired cells that do not touch a struck cell, row-major.
    pub fn hunt_candidates(&self) -> Vec<Coordinate> {
        Coordinate::all()
            .filter(|&c| !self.history.contains(c) && !self.history.borders_struck(c, None))
            .collect()
    }

    /// Cells still waiting in the sweep list, if the sweep has started.
    pub fn sweep_remaining(&self) -> Option<&[Coordinate]> {
        self.sweep.as_deref()
    }

    /// Choose the next cell to fire at and append it to the history as a
    /// provisional record. `None` only once every cell has been fired at.
    pub fn next_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coordinate> {
        let follow_up = match self.mode() {
            Mode::Targeting(recent) => self.follow_up(recent),
            Mode::Hunting => None,
        };
        let coord = match follow_up {
            Some(coord) => {
                trace!("following up hit with {}", coord);
                coord
            }
            None => self.hunt(rng)?,
        };
        debug_assert!(!self.history.contains(coord), "{} selected twice", coord);
        self.history.push(coord);
        Some(coord)
    }

    /// Correct the provisional record for `coord` with the opponent's answer.
    pub fn record_result(&mut self, coord: Coordinate, result: ShotResult) -> bool {
        self.history.record_result(coord, result)
    }

    /// Append an already resolved shot that was chosen elsewhere.
    pub fn observe(&mut self, coord: Coordinate, result: ShotResult) {
        self.history.push(coord);
        self.history.record_result(coord, result);
    }

    /// Forget everything; used when a new match starts.
    pub fn reset(&mut self) {
        self.history.clear();
        self.sweep = None;
    }

    fn hunt<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coordinate> {
        if self.history.len() < SWEEP_THRESHOLD {
            let candidates = self.hunt_candidates();
            if !candidates.is_empty() {
                let coord = candidates[rng.random_range(0..candidates.len())];
                trace!("hunting at {} ({} candidates)", coord, candidates.len());
                return Some(coord);
            }
        }
        self.sweep_pick(rng)
    }

    fn sweep_pick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coordinate> {
        let history = &self.history;
        let remaining = self.sweep.get_or_insert_with(|| {
            trace!("building sweep list after {} shots", history.len());
            Coordinate::all().filter(|&c| !history.contains(c)).collect()
        });
        // follow-up shots since the list was built
        remaining.retain(|&c| !history.contains(c));
        if remaining.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..remaining.len());
        Some(remaining.swap_remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate_from_text as c;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn mode_follows_latest_outcome() {
        let mut strategy = TargetingStrategy::new();
        assert_eq!(strategy.mode(), Mode::Hunting);
        let d5 = c("D5").unwrap();
        strategy.history.push(d5);
        assert_eq!(strategy.mode(), Mode::Hunting, "provisional record");
        strategy.record_result(d5, ShotResult::Hit);
        assert_eq!(strategy.mode(), Mode::Targeting(d5));
        strategy.observe(c("D6").unwrap(), ShotResult::Sunk);
        assert_eq!(strategy.mode(), Mode::Hunting);
    }

    #[test]
    fn sweep_skips_cells_fired_after_it_was_built() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut strategy = TargetingStrategy::new();
        for coord in Coordinate::all().take(SWEEP_THRESHOLD) {
            strategy.observe(coord, ShotResult::Miss);
        }
        let first = strategy.next_target(&mut rng).unwrap();
        strategy.record_result(first, ShotResult::Miss);
        let late = Coordinate::all()
            .find(|&c| !strategy.history.contains(c))
            .unwrap();
        strategy.observe(late, ShotResult::Miss);
        while let Some(coord) = strategy.next_target(&mut rng) {
            assert_ne!(coord, late);
            strategy.record_result(coord, ShotResult::Miss);
        }
        assert_eq!(strategy.history.len(), 100);
    }
}
