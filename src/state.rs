use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::config::Format;
use crate::state_formatter::StateFormatter;

pub const MISSIONARIES: i8 = 3;
pub const CANNIBALS: i8 = 3;
pub const BOAT_CAPACITY: i8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BoatSide {
    Left,
    Right,
}

impl BoatSide {
    pub fn other(self) -> BoatSide {
        match self {
            BoatSide::Left => BoatSide::Right,
            BoatSide::Right => BoatSide::Left,
        }
    }
}

impl Display for BoatSide {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            BoatSide::Left => write!(f, "left"),
            BoatSide::Right => write!(f, "right"),
        }
    }
}

impl FromStr for BoatSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(BoatSide::Left),
            "right" => Ok(BoatSide::Right),
            _ => Err(format!("Boat side must be left or right, got: {}", s)),
        }
    }
}

/// People still on the left bank and the side of the boat.
///
/// Counts are signed so a hypothetical crossing can be applied first
/// and rejected by `is_valid` afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    pub(crate) left_missionaries: i8,
    pub(crate) left_cannibals: i8,
    pub(crate) boat: BoatSide,
}

impl State {
    pub fn new(left_missionaries: i8, left_cannibals: i8, boat: BoatSide) -> State {
        State {
            left_missionaries,
            left_cannibals,
            boat,
        }
    }

    /// The classic puzzle - everybody and the boat start on the left bank
    pub fn initial() -> State {
        State::new(MISSIONARIES, CANNIBALS, BoatSide::Left)
    }

    pub fn left_missionaries(&self) -> i8 {
        self.left_missionaries
    }

    pub fn left_cannibals(&self) -> i8 {
        self.left_cannibals
    }

    pub fn right_missionaries(&self) -> i8 {
        MISSIONARIES - self.left_missionaries
    }

    pub fn right_cannibals(&self) -> i8 {
        CANNIBALS - self.left_cannibals
    }

    pub fn boat(&self) -> BoatSide {
        self.boat
    }

    pub fn is_valid(&self) -> bool {
        if self.left_missionaries < 0 || self.left_cannibals < 0 {
            return false;
        }
        if self.left_missionaries > MISSIONARIES || self.left_cannibals > CANNIBALS {
            return false;
        }
        // missionaries are only in danger on a bank where at least one of them stands
        let left_outnumbered =
            self.left_missionaries > 0 && self.left_cannibals > self.left_missionaries;
        let right_outnumbered =
            self.right_missionaries() > 0 && self.right_cannibals() > self.right_missionaries();
        !left_outnumbered && !right_outnumbered
    }

    /// The boat can be on either side
    pub fn is_goal(&self) -> bool {
        self.left_missionaries == 0 && self.left_cannibals == 0
    }

    pub fn format(&self, format: Format) -> StateFormatter<'_> {
        StateFormatter::new(self, format)
    }

    pub fn text(&self) -> StateFormatter<'_> {
        self.format(Format::Text)
    }

    pub fn banks(&self) -> StateFormatter<'_> {
        self.format(Format::Banks)
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}
