use crate::{
    common::{PlayerError, ShotResult},
    config::fleet_composition,
    coordinate::Coordinate,
    fleet::FleetManager,
    history::TargetingHistory,
};

/// Interface implemented by the human and autonomous players.
///
/// A player owns its own fleet and the history of shots it has fired. The
/// match controller only ever routes a shot from one player to the other's
/// [`Player::check_targeted_cell`].
pub trait Player {
    fn name(&self) -> &str;

    /// The player's own fleet.
    fn fleet(&self) -> &FleetManager;

    /// Shots this player has fired at the opponent.
    fn history(&self) -> &TargetingHistory;

    /// Supply and place one vessel of `length` cells. `ordinal` counts the
    /// vessels of that length from 1.
    fn create_vessel(&mut self, ordinal: usize, length: usize) -> Result<(), PlayerError>;

    /// Choose the next cell to fire at and append it to the history.
    fn get_targeted_cell(&mut self) -> Result<Coordinate, PlayerError>;

    /// Store the opponent's answer to a shot fired by this player.
    fn record_result(&mut self, coord: Coordinate, result: ShotResult);

    /// Resolve a shot fired by the opponent against this player's fleet.
    fn check_targeted_cell(&mut self, incoming: Coordinate) -> ShotResult;

    fn is_fleet_destroyed(&self) -> bool {
        self.fleet().is_fleet_destroyed()
    }

    /// Place the whole fleet: longest vessels first, four sizes.
    fn create_fleet(&mut self) -> Result<(), PlayerError> {
        for (ordinal, length) in fleet_composition() {
            self.create_vessel(ordinal, length)?;
        }
        Ok(())
    }
}

impl<P: Player + ?Sized> Player for alloc::boxed::Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn fleet(&self) -> &FleetManager {
        (**self).fleet()
    }

    fn history(&self) -> &TargetingHistory {
        (**self).history()
    }

    fn create_vessel(&mut self, ordinal: usize, length: usize) -> Result<(), PlayerError> {
        (**self).create_vessel(ordinal, length)
    }

    fn get_targeted_cell(&mut self) -> Result<Coordinate, PlayerError> {
        (**self).get_targeted_cell()
    }

    fn record_result(&mut self, coord: Coordinate, result: ShotResult) {
        (**self).record_result(coord, result)
    }

    fn check_targeted_cell(&mut self, incoming: Coordinate) -> ShotResult {
        (**self).check_targeted_cell(incoming)
    }

    fn is_fleet_destroyed(&self) -> bool {
        (**self).is_fleet_destroyed()
    }

    fn create_fleet(&mut self) -> Result<(), PlayerError> {
        (**self).create_fleet()
    }
}
