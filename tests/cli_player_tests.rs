use sea_battle::{
    coordinate_from_text, CliPlayer, Coordinate, Player, PlayerError, ShotResult, FLEET_SIZE,
    TOTAL_VESSEL_CELLS,
};
use std::io::Cursor;

fn c(text: &str) -> Coordinate {
    coordinate_from_text(text).unwrap()
}

fn player(input: &str) -> CliPlayer<Cursor<&[u8]>, Vec<u8>> {
    CliPlayer::new("Ann", Cursor::new(input.as_bytes()), Vec::new())
}

fn output(player: CliPlayer<Cursor<&[u8]>, Vec<u8>>) -> String {
    String::from_utf8(player.into_output()).unwrap()
}

#[test]
fn test_placement_reprompts_until_legal() {
    let mut p = player("Z9\nA1\nC1\nA2\nB3\nc4\n");
    p.create_vessel(1, 2).unwrap();
    assert!(p.fleet().vessel_at(c("A1")).is_some());
    assert!(p.fleet().vessel_at(c("A2")).is_some());

    p.create_vessel(1, 1).unwrap();
    assert_eq!(p.fleet().afloat_count(), 2);
    assert!(p.fleet().vessel_at(c("C4")).is_some());
    assert!(p.fleet().vessel_at(c("B3")).is_none());

    let out = output(p);
    assert!(out.contains("Ann, create your fleet."));
    assert!(out.contains("Enter the start cell for vessel N:1 of length 2: "));
    assert!(out.contains("Not a valid cell, try another one!"));
    assert!(out.contains("Not a valid length. You should create a vessel of 2 cells."));
    assert!(out.contains("Try another one!"));
}

#[test]
fn test_full_fleet_from_input() {
    let layout = "A1\nA4\nC1\nC3\nE1\nE3\nG1\nG2\nI1\nI2\nA6\nA7\nC6\nE6\nG6\nI6\n";
    let mut p = player(layout);
    p.create_fleet().unwrap();
    assert_eq!(p.fleet().afloat_count(), FLEET_SIZE);
    assert_eq!(p.fleet().occupancy().count_ones(), TOTAL_VESSEL_CELLS);
    assert_eq!(p.fleet().vessel_at(c("A3")).unwrap().len(), 4);
}

#[test]
fn test_targeting_rejects_bad_and_repeated_cells() {
    let mut p = player("K1\nA1\n a1 \nB2\n");
    assert_eq!(p.get_targeted_cell(), Ok(c("A1")));
    p.record_result(c("A1"), ShotResult::Miss);
    assert_eq!(p.get_targeted_cell(), Ok(c("B2")));
    assert_eq!(p.history().len(), 2);
    assert_eq!(p.history().outcome(c("A1")), Some(ShotResult::Miss));
    assert_eq!(p.history().outcome(c("B2")), None);

    let out = output(p);
    assert!(out.contains("Enter your target cell: "));
    assert!(out.contains("Not a valid cell, try another one!"));
    assert!(out.contains("Blow past!"));
    assert!(out.contains("You have already targeted A1, try another one!"));
}

#[test]
fn test_incoming_shots_are_reported() {
    let mut p = player("A1\nA2\n");
    p.create_vessel(1, 2).unwrap();
    assert_eq!(p.check_targeted_cell(c("A1")), ShotResult::Hit);
    assert_eq!(p.check_targeted_cell(c("F5")), ShotResult::Miss);
    assert_eq!(p.check_targeted_cell(c("A2")), ShotResult::Sunk);
    assert!(p.is_fleet_destroyed());

    let out = output(p);
    assert!(out.contains("Opponent fired at A1 -> Hit"));
    assert!(out.contains("Opponent fired at A2 -> Sunk"));
}

#[test]
fn test_closed_input() {
    let mut p = player("");
    assert_eq!(p.get_targeted_cell(), Err(PlayerError::InputClosed));
    assert_eq!(p.create_vessel(1, 3), Err(PlayerError::InputClosed));

    let mut p = player("A1\n");
    assert_eq!(p.create_vessel(1, 3), Err(PlayerError::InputClosed));
    assert_eq!(p.fleet().afloat_count(), 0);
}
