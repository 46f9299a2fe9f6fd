use std::fmt::{self, Debug, Display, Formatter};
use std::iter;

use crate::config::Format;
use crate::state::{BoatSide, State, CANNIBALS, MISSIONARIES};

const RIVER: &str = "~~~~";
const BOAT: &str = "[B]";

pub struct StateFormatter<'a> {
    state: &'a State,
    format: Format,
}

impl<'a> StateFormatter<'a> {
    pub(crate) fn new(state: &'a State, format: Format) -> Self {
        Self { state, format }
    }

    fn write_text(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Missionaries: {}, Cannibals: {}, Boat Position: {}",
            self.state.left_missionaries, self.state.left_cannibals, self.state.boat
        )
    }

    fn write_banks(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = (MISSIONARIES + CANNIBALS) as usize;
        let left = Self::bank(self.state.left_missionaries, self.state.left_cannibals);
        let right = Self::bank(self.state.right_missionaries(), self.state.right_cannibals());

        write!(f, "{:<width$} ", left, width = width)?;
        match self.state.boat {
            BoatSide::Left => write!(f, "{}{}", BOAT, RIVER)?,
            BoatSide::Right => write!(f, "{}{}", RIVER, BOAT)?,
        }
        // no trailing whitespace when the right bank is empty
        if !right.is_empty() {
            write!(f, " {}", right)?;
        }
        Ok(())
    }

    fn bank(missionaries: i8, cannibals: i8) -> String {
        iter::repeat('M')
            .take(missionaries.max(0) as usize)
            .chain(iter::repeat('C').take(cannibals.max(0) as usize))
            .collect()
    }
}

impl Display for StateFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.format {
            Format::Text => self.write_text(f),
            Format::Banks => self.write_banks(f),
        }
    }
}

impl Debug for StateFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
