//! Which list the front end is showing.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Persons,
    Events,
}

impl ViewState {
    pub fn toggled(self) -> Self {
        match self {
            ViewState::Persons => ViewState::Events,
            ViewState::Events => ViewState::Persons,
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewState::Persons => write!(f, "persons"),
            ViewState::Events => write!(f, "events"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_views() {
        assert_eq!(ViewState::default(), ViewState::Persons);
        assert_eq!(ViewState::Persons.toggled(), ViewState::Events);
        assert_eq!(ViewState::Events.toggled(), ViewState::Persons);
    }
}
