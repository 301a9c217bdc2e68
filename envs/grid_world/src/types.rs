use std::fmt;
use std::str::FromStr;

use mdp_core::MdpError;
use serde::{Deserialize, Serialize};

/// The four cardinal moves. Coordinates are 1-indexed from the bottom-left
/// corner, so `Up` increases `y` and `Right` increases `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum GridAction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl GridAction {
    /// The fixed action set, in index order.
    pub const ALL: [GridAction; 4] = [
        GridAction::Up,
        GridAction::Down,
        GridAction::Left,
        GridAction::Right,
    ];

    /// Directional offset as `(dx, dy)`.
    pub fn delta(self) -> (i32, i32) {
        match self {
            GridAction::Up => (0, 1),
            GridAction::Down => (0, -1),
            GridAction::Left => (-1, 0),
            GridAction::Right => (1, 0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GridAction::Up => "up",
            GridAction::Down => "down",
            GridAction::Left => "left",
            GridAction::Right => "right",
        }
    }
}

impl TryFrom<u8> for GridAction {
    type Error = MdpError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Ok(match v {
            0 => GridAction::Up,
            1 => GridAction::Down,
            2 => GridAction::Left,
            3 => GridAction::Right,
            _ => {
                return Err(MdpError::InvalidInput(format!(
                    "invalid action index {v} (expected 0..=3)"
                )))
            }
        })
    }
}

impl FromStr for GridAction {
    type Err = MdpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "up" => GridAction::Up,
            "down" => GridAction::Down,
            "left" => GridAction::Left,
            "right" => GridAction::Right,
            other => return Err(MdpError::InvalidInput(format!("invalid action '{other}'"))),
        })
    }
}

impl fmt::Display for GridAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
