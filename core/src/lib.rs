//! Core traits and types for discrete MDPs.
//! A model supplies the transition and reward functions; `MdpDriver` layers
//! the agent-facing episode bookkeeping (tracked state, step count,
//! cumulative reward) on top of a shared, read-only model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by model construction and input parsing.
#[derive(Error, Debug)]
pub enum MdpError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// A state in a discrete MDP.
///
/// Terminal states are absorbing: a model must return an equal state for
/// every action taken from one.
pub trait MdpState: Clone + PartialEq + std::fmt::Debug {
    fn is_terminal(&self) -> bool;
}

/// Transition and reward model for a discrete MDP.
///
/// Both functions are pure with respect to the model: they read no mutable
/// model state, so one instance can serve concurrent callers (parallel
/// rollout workers) without synchronization.
pub trait MdpModel {
    type State: MdpState;
    type Action: Copy + PartialEq + std::fmt::Debug;

    /// The fixed action set.
    fn actions(&self) -> &[Self::Action];

    /// The state an episode starts in.
    fn init_state(&self) -> Self::State;

    /// Next state for `(state, action)`. Never aliases `state`.
    fn transition(&self, state: &Self::State, action: Self::Action) -> Self::State;

    /// Reward for taking `action` in `state`.
    fn reward(&self, state: &Self::State, action: Self::Action) -> f64;

    /// Human-readable model identifier.
    fn id(&self) -> String;
}

/// Outcome of a single driver step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step<S> {
    pub reward: f64,
    pub next_state: S,
    pub terminated: bool,
}

/// Agent-facing episode driver.
///
/// Owns the tracked current state; the model itself stays immutable.
#[derive(Clone, Debug)]
pub struct MdpDriver<M: MdpModel> {
    model: M,
    cur_state: M::State,
    step_count: u32,
    total_reward: f64,
}

impl<M: MdpModel> MdpDriver<M> {
    pub fn new(model: M) -> Self {
        let cur_state = model.init_state();
        Self {
            model,
            cur_state,
            step_count: 0,
            total_reward: 0.0,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn current_state(&self) -> &M::State {
        &self.cur_state
    }

    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    pub fn total_reward(&self) -> f64 {
        self.total_reward
    }

    /// Execute one action: the reward is computed for the outgoing state,
    /// then the tracked state advances.
    pub fn act(&mut self, action: M::Action) -> Step<M::State> {
        let reward = self.model.reward(&self.cur_state, action);
        let next_state = self.model.transition(&self.cur_state, action);
        self.cur_state = next_state.clone();
        self.step_count += 1;
        self.total_reward += reward;
        Step {
            reward,
            terminated: next_state.is_terminal(),
            next_state,
        }
    }

    /// Rewind to the initial state and clear the episode bookkeeping.
    pub fn reset(&mut self) {
        self.cur_state = self.model.init_state();
        self.step_count = 0;
        self.total_reward = 0.0;
    }
}
