use std::error::Error;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use engine::app::{AppConfig, AppContext, GameApp, InputFrame, run_game};
use engine::surface::SurfaceSize;
use winit::dpi::PhysicalSize;

use game::hiscore::HighScoreStore;
use game::runner_core::{RunnerCore, SURFACE_HEIGHT, SURFACE_WIDTH};
use game::scene;

struct DashApp {
    scores: HighScoreStore,
    best: u32,
    run_recorded: bool,
    seed: u64,
}

impl DashApp {
    fn new(scores: HighScoreStore, seed: u64) -> Self {
        let best = scores.load();
        Self {
            scores,
            best,
            run_recorded: false,
            seed,
        }
    }
}

impl GameApp for DashApp {
    type State = RunnerCore;

    fn init_state(&mut self, _ctx: &mut AppContext) -> RunnerCore {
        let mut core = RunnerCore::new(self.seed);
        core.initialize_game();
        core
    }

    fn update_state(
        &mut self,
        core: &mut RunnerCore,
        input: InputFrame,
        _dt: Duration,
        _ctx: &mut AppContext,
    ) {
        if input.jump {
            core.jump();
        }
        if input.restart && core.is_game_over() {
            core.restart();
            self.run_recorded = false;
        }

        core.tick();

        // Offer the final score to the store once per finished run.
        if core.is_game_over() && !self.run_recorded {
            self.run_recorded = true;
            let final_score = core.display_score();
            match self.scores.record(final_score) {
                Ok(true) => self.best = final_score,
                Ok(false) => {}
                Err(err) => eprintln!("warning: failed to persist high score: {err}"),
            }
        }
    }

    fn render(&mut self, core: &RunnerCore, frame: &mut [u8], size: SurfaceSize) {
        scene::draw_frame(frame, size, core, self.best);
    }
}

fn resolve_seed<F>(mut get_env: F) -> u64
where
    F: FnMut(&str) -> Option<String>,
{
    if let Some(seed) = get_env("DASH_SEED").and_then(|v| v.parse().ok()) {
        return seed;
    }

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(1)
}

fn main() -> Result<(), Box<dyn Error>> {
    let scores = HighScoreStore::from_env();
    let seed = resolve_seed(|key| std::env::var(key).ok());

    let config = AppConfig {
        title: "Dash Runner".to_string(),
        desired_size: PhysicalSize::new(SURFACE_WIDTH as u32, SURFACE_HEIGHT as u32),
        vsync: Some(true),
    };

    run_game(config, DashApp::new(scores, seed))
}
