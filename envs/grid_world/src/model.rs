use mdp_core::{MdpError, MdpModel};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use crate::state::GridState;
use crate::types::GridAction;

/// Construction parameters, JSON-friendly. Unset fields fall back to the
/// classic 5x3 layout with a single terminal goal at (5, 3).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub init_loc: Option<(u32, u32)>,
    pub goal_locs: Option<Vec<(u32, u32)>>,
    pub is_goal_terminal: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Some(5),
            height: Some(3),
            init_loc: Some((1, 1)),
            goal_locs: Some(vec![(5, 3)]),
            is_goal_terminal: Some(true),
        }
    }
}

/// Deterministic grid-world transition and reward model.
///
/// The model is immutable after construction and holds no episode state;
/// `mdp_core::MdpDriver` tracks the current state, so one model instance
/// can back any number of concurrent rollouts.
#[derive(Clone, Debug)]
pub struct GridWorldMdp {
    width: u32,
    height: u32,
    init_loc: (u32, u32),
    goal_locs: Vec<(u32, u32)>,
    is_goal_terminal: bool,
}

impl GridWorldMdp {
    /// Validates dimensions, the initial location, and every goal against
    /// the `[1, width] x [1, height]` extent.
    pub fn new(
        width: u32,
        height: u32,
        init_loc: (u32, u32),
        goal_locs: Vec<(u32, u32)>,
        is_goal_terminal: bool,
    ) -> Result<Self, MdpError> {
        if width == 0 || height == 0 {
            return Err(MdpError::Configuration(format!(
                "grid dimensions must be positive, got {width}x{height}"
            )));
        }
        if goal_locs.is_empty() {
            return Err(MdpError::Configuration(
                "at least one goal location is required".to_string(),
            ));
        }
        for &(gx, gy) in &goal_locs {
            if gx < 1 || gx > width || gy < 1 || gy > height {
                return Err(MdpError::Configuration(format!(
                    "goal ({gx}, {gy}) is off the {width}x{height} map"
                )));
            }
        }
        let (ix, iy) = init_loc;
        if ix < 1 || ix > width || iy < 1 || iy > height {
            return Err(MdpError::Configuration(format!(
                "initial location ({ix}, {iy}) is off the {width}x{height} map"
            )));
        }
        // Goal locations form a set; keep first-occurrence order.
        let mut goals: Vec<(u32, u32)> = Vec::with_capacity(goal_locs.len());
        for goal in goal_locs {
            if !goals.contains(&goal) {
                goals.push(goal);
            }
        }
        Ok(Self {
            width,
            height,
            init_loc,
            goal_locs: goals,
            is_goal_terminal,
        })
    }

    pub fn from_config(cfg: Config) -> Result<Self, MdpError> {
        Self::new(
            cfg.width.unwrap_or(5),
            cfg.height.unwrap_or(3),
            cfg.init_loc.unwrap_or((1, 1)),
            cfg.goal_locs.unwrap_or_else(|| vec![(5, 3)]),
            cfg.is_goal_terminal.unwrap_or(true),
        )
    }

    /// Build from a JSON value with the shape of [`Config`].
    pub fn from_json(value: Json) -> Result<Self, MdpError> {
        let cfg: Config = serde_json::from_value(value)
            .map_err(|e| MdpError::Configuration(format!("bad config: {e}")))?;
        Self::from_config(cfg)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn init_loc(&self) -> (u32, u32) {
        self.init_loc
    }

    pub fn goal_locs(&self) -> &[(u32, u32)] {
        &self.goal_locs
    }

    pub fn is_goal_terminal(&self) -> bool {
        self.is_goal_terminal
    }

    fn at_goal(&self, loc: (u32, u32)) -> bool {
        self.goal_locs.contains(&loc)
    }

    /// True iff `(state, action)` steps onto a goal cell.
    ///
    /// An agent already sitting on a goal under the terminal policy is done
    /// and cannot re-trigger a goal reward.
    pub fn is_goal_transition(&self, state: &GridState, action: GridAction) -> bool {
        if self.is_goal_terminal && self.at_goal(state.loc()) {
            return false;
        }
        // Unclamped offset: a move off the map can never land on a goal.
        let (dx, dy) = action.delta();
        let tx = i64::from(state.x()) + i64::from(dx);
        let ty = i64::from(state.y()) + i64::from(dy);
        tx >= 1 && ty >= 1 && self.at_goal((tx as u32, ty as u32))
    }

    /// Multi-line ASCII rendering with the agent at `state`. The top row is
    /// `y = height`; goals print as `G`, the agent as `A`.
    pub fn render(&self, state: &GridState) -> String {
        let mut out = String::new();
        for y in (1..=self.height).rev() {
            for x in 1..=self.width {
                let ch = if (x, y) == state.loc() {
                    'A'
                } else if self.at_goal((x, y)) {
                    'G'
                } else {
                    '.'
                };
                out.push(ch);
                if x < self.width {
                    out.push(' ');
                }
            }
            if y > 1 {
                out.push('\n');
            }
        }
        out
    }
}

impl MdpModel for GridWorldMdp {
    type State = GridState;
    type Action = GridAction;

    fn actions(&self) -> &[GridAction] {
        &GridAction::ALL
    }

    fn init_state(&self) -> GridState {
        let terminal = self.is_goal_terminal && self.at_goal(self.init_loc);
        GridState::with_terminal(self.init_loc.0, self.init_loc.1, terminal)
    }

    fn transition(&self, state: &GridState, action: GridAction) -> GridState {
        if state.is_terminal() {
            return *state;
        }
        let (x, y) = state.loc();
        let (nx, ny) = match action {
            GridAction::Up if y < self.height => (x, y + 1),
            GridAction::Down if y > 1 => (x, y - 1),
            GridAction::Right if x < self.width => (x + 1, y),
            GridAction::Left if x > 1 => (x - 1, y),
            _ => (x, y),
        };
        let terminal = self.is_goal_terminal && self.at_goal((nx, ny));
        GridState::with_terminal(nx, ny, terminal)
    }

    fn reward(&self, state: &GridState, action: GridAction) -> f64 {
        if self.is_goal_transition(state, action) {
            1.0
        } else {
            0.0
        }
    }

    fn id(&self) -> String {
        if !self.is_goal_terminal {
            return "gridworld-no-term".to_string();
        }
        format!("gridworld_h-{}_w-{}", self.height, self.width)
    }
}
