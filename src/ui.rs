#![cfg(feature = "std")]

//! Plain-text rendering of fleet and target boards.

use std::fmt::Write;
use std::string::String;

use crate::{
    common::CellStatus,
    config::{BOARD_SIZE, COLUMNS},
    coordinate::Coordinate,
    fleet::FleetManager,
    history::TargetingHistory,
};

fn render(cell: impl Fn(Coordinate) -> char) -> String {
    let mut out = String::from("   ");
    for letter in COLUMNS {
        let _ = write!(out, " {}", letter);
    }
    out.push('\n');
    for row in 1..=BOARD_SIZE {
        let _ = write!(out, "{:>2} ", row);
        for column in 1..=BOARD_SIZE {
            if let Some(coord) = Coordinate::new(column, row) {
                let _ = write!(out, " {}", cell(coord));
            }
        }
        out.push('\n');
    }
    out
}

/// A player's own board: `#` intact vessel cell (only with `reveal`),
/// `X` struck, `*` missed shot, `.` water.
pub fn render_fleet(fleet: &FleetManager, reveal: bool) -> String {
    render(|coord| match fleet.cell_status(coord) {
        CellStatus::Struck => 'X',
        CellStatus::Occupied if reveal => '#',
        _ if fleet.misses().contains(&coord) => '*',
        _ => '.',
    })
}

/// What a player knows of the opponent: `X` struck, `*` missed, `.` unknown.
pub fn render_targets(history: &TargetingHistory) -> String {
    render(|coord| {
        if history.is_struck(coord) {
            'X'
        } else if history.contains(coord) {
            '*'
        } else {
            '.'
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{coordinate_from_text as c, ShotResult};

    #[test]
    fn fleet_board_marks() {
        let mut fleet = FleetManager::new();
        fleet
            .place_vessel(&[c("B2").unwrap(), c("B3").unwrap()])
            .unwrap();
        fleet.resolve_shot(c("B2").unwrap());
        fleet.resolve_shot(c("J10").unwrap());
        let text = render_fleet(&fleet, true);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "    A B C D E F G H I J");
        assert_eq!(lines[2], " 2  . X . . . . . . . .");
        assert_eq!(lines[3], " 3  . # . . . . . . . .");
        assert_eq!(lines[10], "10  . . . . . . . . . *");
        let hidden = render_fleet(&fleet, false);
        assert!(!hidden.contains('#'));
    }

    #[test]
    fn target_board_marks() {
        let mut history = TargetingHistory::new();
        let a1 = c("A1").unwrap();
        let b1 = c("B1").unwrap();
        history.push(a1);
        history.record_result(a1, ShotResult::Hit);
        history.push(b1);
        let text = render_targets(&history);
        assert_eq!(text.lines().nth(1), Some(" 1  X * . . . . . . . ."));
    }
}
