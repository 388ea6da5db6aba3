#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    common::{PlayerError, ShotResult},
    coordinate::Coordinate,
    fleet::FleetManager,
    history::TargetingHistory,
    player::Player,
    ui,
    vessel::Vessel,
};

/// Human player reading cells from `input` and writing prompts to `output`.
pub struct CliPlayer<R = io::StdinLock<'static>, W = io::Stdout> {
    name: String,
    fleet: FleetManager,
    history: TargetingHistory,
    input: R,
    output: W,
}

impl CliPlayer {
    /// Player on the process's standard input and output.
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            fleet: FleetManager::new(),
            history: TargetingHistory::new(),
            input,
            output,
        }
    }

    /// Consume the player, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, args: fmt::Arguments<'_>) -> Result<(), PlayerError> {
        self.output
            .write_fmt(args)
            .and_then(|()| self.output.flush())
            .map_err(|_| PlayerError::InputClosed)
    }

    fn read_line(&mut self) -> Result<String, PlayerError> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => Err(PlayerError::InputClosed),
            Ok(_) => Ok(line),
        }
    }

    /// Prompt until the answer names a board cell.
    fn ask_cell(&mut self, prompt: fmt::Arguments<'_>) -> Result<Coordinate, PlayerError> {
        loop {
            self.say(prompt)?;
            let line = self.read_line()?;
            match Coordinate::parse_lenient(&line) {
                Ok(coord) => return Ok(coord),
                Err(e) => self.say(format_args!("{}. Not a valid cell, try another one!\n", e))?,
            }
        }
    }

    /// Prompt until the answer names a cell where a vessel may go.
    fn ask_placement_cell(&mut self, prompt: fmt::Arguments<'_>) -> Result<Coordinate, PlayerError> {
        loop {
            let coord = self.ask_cell(prompt)?;
            match self.fleet.check_cell(coord) {
                Ok(()) => return Ok(coord),
                Err(e) => self.say(format_args!("{}. Try another one!\n", e))?,
            }
        }
    }

    fn ask_run(&mut self, ordinal: usize, length: usize) -> Result<Vec<Coordinate>, PlayerError> {
        let start = self.ask_placement_cell(format_args!(
            "Enter the start cell for vessel N:{} of length {}: ",
            ordinal, length
        ))?;
        if length == 1 {
            return Ok(vec![start]);
        }
        loop {
            let end = self.ask_placement_cell(format_args!(
                "Enter the end cell for vessel N:{} of length {}: ",
                ordinal, length
            ))?;
            match Vessel::between(start, end) {
                Ok(cells) if cells.len() == length => return Ok(cells),
                Ok(_) => self.say(format_args!(
                    "Not a valid length. You should create a vessel of {} cells.\n",
                    length
                ))?,
                Err(e) => self.say(format_args!("{}.\n", e))?,
            }
        }
    }

    fn report_last_shot(&mut self) -> Result<(), PlayerError> {
        let message = match self.history.last().and_then(|r| r.outcome) {
            Some(ShotResult::Miss) => "Blow past!",
            Some(ShotResult::Hit) => "Vessel damaged, keep on!",
            Some(ShotResult::Sunk) => "Great! Vessel sunk!",
            None => return Ok(()),
        };
        self.say(format_args!("{}\n", message))
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn fleet(&self) -> &FleetManager {
        &self.fleet
    }

    fn history(&self) -> &TargetingHistory {
        &self.history
    }

    fn create_vessel(&mut self, ordinal: usize, length: usize) -> Result<(), PlayerError> {
        let board = ui::render_fleet(&self.fleet, true);
        self.say(format_args!("{}, create your fleet.\n{}", self.name.clone(), board))?;
        loop {
            let cells = self.ask_run(ordinal, length)?;
            match self.fleet.try_place(&cells) {
                Ok(()) => return Ok(()),
                Err(e) => self.say(format_args!("Cannot place vessel there: {}.\n", e))?,
            }
        }
    }

    fn get_targeted_cell(&mut self) -> Result<Coordinate, PlayerError> {
        let targets = ui::render_targets(&self.history);
        let fleet = ui::render_fleet(&self.fleet, true);
        let name = self.name.clone();
        self.say(format_args!(
            "{}'s hit results\n{}\n{}'s fleet\n{}",
            name, targets, name, fleet
        ))?;
        self.report_last_shot()?;
        loop {
            let coord = self.ask_cell(format_args!("Enter your target cell: "))?;
            if self.history.contains(coord) {
                self.say(format_args!(
                    "You have already targeted {}, try another one!\n",
                    coord
                ))?;
                continue;
            }
            self.history.push(coord);
            return Ok(coord);
        }
    }

    fn record_result(&mut self, coord: Coordinate, result: ShotResult) {
        self.history.record_result(coord, result);
    }

    fn check_targeted_cell(&mut self, incoming: Coordinate) -> ShotResult {
        let result = self.fleet.resolve_shot(incoming);
        let _ = self.say(format_args!("Opponent fired at {} -> {:?}\n", incoming, result));
        result
    }
}
