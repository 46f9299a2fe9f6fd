use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::state::State;

/// One line per state, from the initial state to the goal
pub struct SolutionFormatter<'a> {
    path_states: &'a [State],
    format: Format,
}

impl<'a> SolutionFormatter<'a> {
    pub fn new(path_states: &'a [State], format: Format) -> Self {
        Self {
            path_states,
            format,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for state in self.path_states {
            writeln!(f, "{}", state.format(self.format))?;
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
