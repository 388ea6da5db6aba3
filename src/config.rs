//! Fixed rules of the game: board dimensions, fleet composition and the
//! bounds used by the random generators.

pub const BOARD_SIZE: u8 = 10;

/// Column letters in board order.
pub const COLUMNS: [char; BOARD_SIZE as usize] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];

/// `(length, count)` pairs in placement order.
pub const FLEET_COMPOSITION: [(usize, usize); 4] = [(4, 1), (3, 2), (2, 3), (1, 4)];

/// Number of vessels in one complete fleet.
pub const FLEET_SIZE: usize = 1 + 2 + 3 + 4;

/// Total number of vessel cells in one complete fleet.
pub const TOTAL_VESSEL_CELLS: usize = 4 + 2 * 3 + 3 * 2 + 4;

/// Shot count at which the autonomous player stops drawing random cells and
/// sweeps the remaining candidates instead.
pub const SWEEP_THRESHOLD: usize = 51;

/// Random placement tries for a single vessel before giving up.
pub const PLACEMENT_ATTEMPTS: usize = 1_000;

/// Whole-fleet restarts allowed when a random layout paints itself into a corner.
pub const FLEET_ATTEMPTS: usize = 32;

/// Upper bound on turns in one match. Each side can fire at most once per cell.
pub const DEFAULT_TURN_LIMIT: usize = 2 * (BOARD_SIZE as usize * BOARD_SIZE as usize);

/// Yields `(ordinal, length)` for every vessel of a fleet, longest first.
/// Ordinals count from 1 within each length.
pub fn fleet_composition() -> impl Iterator<Item = (usize, usize)> {
    FLEET_COMPOSITION
        .iter()
        .flat_map(|&(length, count)| (1..=count).map(move |ordinal| (ordinal, length)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composition_matches_totals() {
        let fleet: alloc::vec::Vec<_> = fleet_composition().collect();
        assert_eq!(fleet.len(), FLEET_SIZE);
        assert_eq!(fleet.iter().map(|&(_, len)| len).sum::<usize>(), TOTAL_VESSEL_CELLS);
        assert_eq!(fleet[0], (1, 4));
        assert_eq!(fleet[9], (4, 1));
    }
}
