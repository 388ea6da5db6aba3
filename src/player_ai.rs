use alloc::string::String;
use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    ai::TargetingStrategy,
    common::{PlayerError, ShotResult},
    coordinate::Coordinate,
    fleet::FleetManager,
    history::TargetingHistory,
    player::Player,
};

/// Autonomous player: random fleet layout and hunt/target shooting.
pub struct AiPlayer {
    name: String,
    fleet: FleetManager,
    strategy: TargetingStrategy,
    rng: SmallRng,
}

impl AiPlayer {
    /// Player drawing from the given generator for the whole match.
    pub fn with_rng(name: impl Into<String>, rng: SmallRng) -> Self {
        Self {
            name: name.into(),
            fleet: FleetManager::new(),
            strategy: TargetingStrategy::new(),
            rng,
        }
    }

    /// Reproducible player: the same seed yields the same layout and shots.
    pub fn seeded(name: impl Into<String>, seed: u64) -> Self {
        Self::with_rng(name, SmallRng::seed_from_u64(seed))
    }

    /// Player seeded from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn new(name: impl Into<String>) -> Self {
        let mut seed_rng = rand::rng();
        Self::with_rng(name, SmallRng::from_rng(&mut seed_rng))
    }

    pub fn strategy(&self) -> &TargetingStrategy {
        &self.strategy
    }

    /// Lay out the complete fleet at once, restarting from scratch when a
    /// layout leaves no room for the remaining vessels.
    pub fn place_fleet(&mut self) -> Result<(), PlayerError> {
        self.fleet.place_fleet_randomly(&mut self.rng)?;
        Ok(())
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn fleet(&self) -> &FleetManager {
        &self.fleet
    }

    fn history(&self) -> &TargetingHistory {
        self.strategy.history()
    }

    fn create_vessel(&mut self, ordinal: usize, length: usize) -> Result<(), PlayerError> {
        let cells = self.fleet.random_placement(&mut self.rng, length)?;
        debug!("{} places vessel {} of length {}", self.name, ordinal, length);
        self.fleet.place_vessel(&cells)?;
        Ok(())
    }

    fn get_targeted_cell(&mut self) -> Result<Coordinate, PlayerError> {
        self.strategy
            .next_target(&mut self.rng)
            .ok_or(PlayerError::NoTargetsLeft)
    }

    fn record_result(&mut self, coord: Coordinate, result: ShotResult) {
        self.strategy.record_result(coord, result);
    }

    fn check_targeted_cell(&mut self, incoming: Coordinate) -> ShotResult {
        self.fleet.resolve_shot(incoming)
    }

    /// Falls back to a whole-fleet layout if the vessel-by-vessel loop gets
    /// stuck, so a legal fleet is always produced when one exists.
    fn create_fleet(&mut self) -> Result<(), PlayerError> {
        let placed = crate::config::fleet_composition()
            .try_for_each(|(ordinal, length)| self.create_vessel(ordinal, length));
        match placed {
            Err(PlayerError::Fleet(e)) => {
                debug!("{}: {}, laying out the fleet again", self.name, e);
                self.place_fleet()
            }
            other => other,
        }
    }
}
