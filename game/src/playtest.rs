use engine::GameLogic;

use crate::runner_core::RunnerCore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Noop,
    Jump,
    Restart,
}

/// Headless adapter for the runner: one input, then one tick, per frame.
/// Runs with the same seed are identical frame for frame.
#[derive(Debug, Clone)]
pub struct RunnerLogic {
    seed: u64,
}

impl RunnerLogic {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl GameLogic for RunnerLogic {
    type State = RunnerCore;
    type Input = InputAction;

    fn initial_state(&self) -> Self::State {
        let mut core = RunnerCore::new(self.seed);
        core.initialize_game();
        core
    }

    fn step(&self, state: &Self::State, input: Self::Input) -> Self::State {
        let mut next = state.clone();
        match input {
            InputAction::Noop => {}
            InputAction::Jump => next.jump(),
            InputAction::Restart => {
                // Restart is only meaningful from the game-over screen.
                if next.is_game_over() {
                    next.restart();
                }
            }
        }
        next.tick();
        next
    }
}
