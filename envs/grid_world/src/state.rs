use std::fmt;
use std::hash::{Hash, Hasher};

use mdp_core::MdpState;
use serde::{Deserialize, Serialize};

/// A 1-indexed grid position plus a terminal flag.
///
/// Equality and hashing cover the coordinate only: two states at the same
/// cell are the same position regardless of terminality. Terminality is
/// decided when the model constructs the state and never changes afterward.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GridState {
    x: u32,
    y: u32,
    terminal: bool,
}

impl GridState {
    /// Non-terminal state at `(x, y)`.
    pub fn new(x: u32, y: u32) -> Self {
        Self {
            x,
            y,
            terminal: false,
        }
    }

    /// Finalizing constructor used by the model once terminality is known.
    pub(crate) fn with_terminal(x: u32, y: u32, terminal: bool) -> Self {
        Self { x, y, terminal }
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn loc(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }
}

impl MdpState for GridState {
    fn is_terminal(&self) -> bool {
        self.terminal
    }
}

impl PartialEq for GridState {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for GridState {}

impl Hash for GridState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.x, self.y).hash(state);
    }
}

impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_ignores_terminal_flag() {
        let plain = GridState::new(2, 3);
        let done = GridState::with_terminal(2, 3, true);
        assert_eq!(plain, done);
        assert_ne!(plain, GridState::new(3, 2));
    }

    #[test]
    fn hashing_matches_equality() {
        let mut seen = HashSet::new();
        seen.insert(GridState::new(5, 3));
        assert!(seen.contains(&GridState::with_terminal(5, 3, true)));
        assert!(!seen.contains(&GridState::new(3, 5)));
    }

    #[test]
    fn displays_as_coordinate_pair() {
        assert_eq!(GridState::new(4, 1).to_string(), "(4, 1)");
    }
}
