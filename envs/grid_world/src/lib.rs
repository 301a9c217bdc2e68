//! Grid-world MDP: deterministic navigation over a 1-indexed
//! `width x height` grid.
//!
//! - [`GridState`]: position plus terminal flag
//! - [`GridAction`]: the four cardinal moves
//! - [`GridWorldMdp`]: transition and reward model, pluggable into
//!   [`mdp_core::MdpDriver`]
//!
//! Movement clamps at the border. Stepping onto a goal cell pays 1.0 and,
//! with the default terminal-goal policy, ends the episode.

mod model;
mod state;
mod types;

pub use model::{Config, GridWorldMdp};
pub use state::GridState;
pub use types::GridAction;
