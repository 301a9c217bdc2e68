//! Random-walk demo: builds a grid world from an optional JSON config
//! argument and rolls one episode, printing each step and the final grid.
//!
//! Usage: `grid_world_demo ['{"width": 5, "height": 10, "goal_locs": [[3, 3]]}']`

use grid_world_env::{Config, GridAction, GridWorldMdp};
use mdp_core::{MdpDriver, MdpError, MdpModel};
use rand::Rng;

const MAX_STEPS: u32 = 50;

fn main() -> Result<(), MdpError> {
    let model = match std::env::args().nth(1) {
        Some(raw) => {
            let value: serde_json::Value = serde_json::from_str(&raw)
                .map_err(|e| MdpError::Configuration(format!("bad config: {e}")))?;
            GridWorldMdp::from_json(value)?
        }
        None => GridWorldMdp::from_config(Config::default())?,
    };
    println!("{}", model.id());

    let mut driver = MdpDriver::new(model);
    let mut rng = rand::thread_rng();
    for step in 1..=MAX_STEPS {
        let action = GridAction::try_from(rng.gen_range(0u8..4))?;
        let out = driver.act(action);
        println!(
            "step {step:>2}: {action:<5} -> {} (reward {})",
            out.next_state, out.reward
        );
        if out.terminated {
            break;
        }
    }

    println!("{}", driver.model().render(driver.current_state()));
    println!(
        "steps: {}, total reward: {}",
        driver.step_count(),
        driver.total_reward()
    );
    Ok(())
}
