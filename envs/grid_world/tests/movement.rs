use grid_world_env::{Config, GridAction, GridState, GridWorldMdp};
use mdp_core::MdpModel;

fn default_world() -> GridWorldMdp {
    GridWorldMdp::from_config(Config::default()).unwrap()
}

#[test]
fn interior_moves_shift_one_cell() {
    let model = default_world();
    let start = GridState::new(2, 2);

    let cases = [
        (GridAction::Up, (2, 3)),
        (GridAction::Down, (2, 1)),
        (GridAction::Left, (1, 2)),
        (GridAction::Right, (3, 2)),
    ];
    for (action, expected) in cases {
        let next = model.transition(&start, action);
        assert_eq!(next.loc(), expected, "moving {action} from (2, 2)");
        assert!(!next.is_terminal());
    }
}

#[test]
fn moves_clamp_at_every_edge() {
    let model = default_world();

    // Each (state, action) pair pushes against one border of the 5x3 grid.
    let cases = [
        (GridState::new(5, 2), GridAction::Right),
        (GridState::new(1, 2), GridAction::Left),
        (GridState::new(2, 3), GridAction::Up),
        (GridState::new(2, 1), GridAction::Down),
    ];
    for (state, action) in cases {
        let next = model.transition(&state, action);
        assert_eq!(next.loc(), state.loc(), "{action} at {state} should clamp");
    }
}

#[test]
fn corner_clamps_on_both_axes() {
    let model = default_world();
    let corner = GridState::new(1, 1);
    assert_eq!(model.transition(&corner, GridAction::Left).loc(), (1, 1));
    assert_eq!(model.transition(&corner, GridAction::Down).loc(), (1, 1));
    // Moves away from the corner still work.
    assert_eq!(model.transition(&corner, GridAction::Right).loc(), (2, 1));
    assert_eq!(model.transition(&corner, GridAction::Up).loc(), (1, 2));
}

#[test]
fn coordinates_never_leave_the_grid() {
    let model = default_world();
    for x in 1..=model.width() {
        for y in 1..=model.height() {
            for action in GridAction::ALL {
                let next = model.transition(&GridState::new(x, y), action);
                assert!(next.x() >= 1 && next.x() <= model.width());
                assert!(next.y() >= 1 && next.y() <= model.height());
            }
        }
    }
}

#[test]
fn transition_returns_fresh_state() {
    let model = default_world();
    let start = GridState::new(3, 2);
    let next = model.transition(&start, GridAction::Right);
    assert_eq!(next.loc(), (4, 2));
    // Input is untouched.
    assert_eq!(start.loc(), (3, 2));
    assert!(!start.is_terminal());
}

#[test]
fn repeated_transitions_are_deterministic() {
    let model = default_world();
    let state = GridState::new(4, 3);
    let first = model.transition(&state, GridAction::Right);
    for _ in 0..10 {
        let again = model.transition(&state, GridAction::Right);
        assert_eq!(again, first);
        assert_eq!(again.is_terminal(), first.is_terminal());
    }
}

#[test]
fn terminal_state_ignores_every_action() {
    let model = default_world();
    // Enter the goal to obtain a terminal state.
    let done = model.transition(&GridState::new(4, 3), GridAction::Right);
    assert_eq!(done.loc(), (5, 3));
    assert!(done.is_terminal());

    for action in GridAction::ALL {
        let next = model.transition(&done, action);
        assert_eq!(next.loc(), done.loc());
        assert!(next.is_terminal(), "absorbing state must stay terminal");
    }
}
