//! Match controller: places both fleets, alternates turns and detects the end
//! of the game.

use alloc::string::{String, ToString};
use core::fmt;
use log::{debug, info};

use crate::{
    common::{PlayerError, ShotResult},
    config::{fleet_composition, DEFAULT_TURN_LIMIT},
    coordinate::Coordinate,
    player::Player,
};

/// Which of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    InProgress,
    Finished { winner: Side },
}

/// Settings for one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Abort with [`MatchError::TurnLimitExceeded`] after this many turns.
    pub turn_limit: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            turn_limit: DEFAULT_TURN_LIMIT,
        }
    }
}

/// One resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub shooter: Side,
    pub target: Coordinate,
    pub result: ShotResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    /// A player failed to place or to choose a target.
    Player { side: Side, error: PlayerError },
    /// Neither fleet was destroyed within the configured number of turns.
    TurnLimitExceeded(usize),
    /// The match is already over.
    Finished,
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::Player { side, error } => write!(f, "{:?} player: {}", side, error),
            MatchError::TurnLimitExceeded(n) => write!(f, "No winner after {} turns", n),
            MatchError::Finished => write!(f, "Match is already finished"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatchError {}

/// Per-player summary of a finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct PlayerReport {
    pub name: String,
    pub shots: usize,
    pub hits: usize,
    pub afloat: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MatchReport {
    pub winner: Option<String>,
    pub turns: usize,
    pub first: PlayerReport,
    pub second: PlayerReport,
}

/// Two players taking turns until one fleet is destroyed.
pub struct Match<A: Player, B: Player> {
    first: A,
    second: B,
    turn: Side,
    turns: usize,
    config: MatchConfig,
}

impl<A: Player, B: Player> Match<A, B> {
    /// The first player shoots first.
    pub fn new(first: A, second: B) -> Self {
        Self::with_config(first, second, MatchConfig::default())
    }

    pub fn with_config(first: A, second: B, config: MatchConfig) -> Self {
        Self {
            first,
            second,
            turn: Side::First,
            turns: 0,
            config,
        }
    }

    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn second(&self) -> &B {
        &self.second
    }

    /// Side whose turn it is.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Turns played so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Create both fleets, alternating vessel by vessel, longest first.
    pub fn place_fleets(&mut self) -> Result<(), MatchError> {
        for (ordinal, length) in fleet_composition() {
            self.first
                .create_vessel(ordinal, length)
                .map_err(|error| MatchError::Player {
                    side: Side::First,
                    error,
                })?;
            self.second
                .create_vessel(ordinal, length)
                .map_err(|error| MatchError::Player {
                    side: Side::Second,
                    error,
                })?;
        }
        debug!("both fleets placed");
        Ok(())
    }

    /// Evaluate the current status. Only meaningful once fleets are placed.
    pub fn status(&self) -> MatchStatus {
        if self.first.is_fleet_destroyed() {
            MatchStatus::Finished {
                winner: Side::Second,
            }
        } else if self.second.is_fleet_destroyed() {
            MatchStatus::Finished {
                winner: Side::First,
            }
        } else {
            MatchStatus::InProgress
        }
    }

    fn players(&mut self) -> (&mut dyn Player, &mut dyn Player) {
        match self.turn {
            Side::First => (&mut self.first as &mut dyn Player, &mut self.second as &mut dyn Player),
            Side::Second => (&mut self.second as &mut dyn Player, &mut self.first as &mut dyn Player),
        }
    }

    /// The active player fires once; the turn then passes to the other side
    /// whatever the outcome.
    pub fn play_turn(&mut self) -> Result<Turn, MatchError> {
        if self.status() != MatchStatus::InProgress {
            return Err(MatchError::Finished);
        }
        let side = self.turn;
        let (shooter, opponent) = self.players();
        let target = shooter
            .get_targeted_cell()
            .map_err(|error| MatchError::Player { side, error })?;
        let result = opponent.check_targeted_cell(target);
        shooter.record_result(target, result);
        debug!("{} fires at {} -> {:?}", shooter.name(), target, result);
        self.turns += 1;
        self.turn = side.other();
        Ok(Turn {
            shooter: side,
            target,
            result,
        })
    }

    /// Play until one fleet is destroyed.
    pub fn run(&mut self) -> Result<MatchReport, MatchError> {
        while self.status() == MatchStatus::InProgress {
            if self.turns >= self.config.turn_limit {
                return Err(MatchError::TurnLimitExceeded(self.turns));
            }
            self.play_turn()?;
        }
        let report = self.report();
        info!(
            "match over after {} turns, winner: {}",
            report.turns,
            report.winner.as_deref().unwrap_or("none")
        );
        Ok(report)
    }

    pub fn winner(&self) -> Option<Side> {
        match self.status() {
            MatchStatus::Finished { winner } => Some(winner),
            MatchStatus::InProgress => None,
        }
    }

    pub fn report(&self) -> MatchReport {
        let winner = self.winner().map(|side| match side {
            Side::First => self.first.name().to_string(),
            Side::Second => self.second.name().to_string(),
        });
        MatchReport {
            winner,
            turns: self.turns,
            first: player_report(&self.first),
            second: player_report(&self.second),
        }
    }
}

fn player_report(player: &dyn Player) -> PlayerReport {
    PlayerReport {
        name: player.name().to_string(),
        shots: player.history().len(),
        hits: player.history().iter().filter(|r| r.is_struck()).count(),
        afloat: player.fleet().afloat_count(),
    }
}
