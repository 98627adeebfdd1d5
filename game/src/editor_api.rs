use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use engine::HeadlessRunner;
use engine::editor::{RunSnapshot, RunStat};

use crate::playtest::{InputAction, RunnerLogic};
use crate::runner_core::RunnerCore;

#[derive(Debug)]
pub enum EditorApiError {
    UnknownActionId(String),
    EmptySource,
    Io(io::Error),
}

impl fmt::Display for EditorApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorApiError::UnknownActionId(id) => write!(f, "unknown actionId: {id}"),
            EditorApiError::EmptySource => write!(f, "replacement source is empty"),
            EditorApiError::Io(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for EditorApiError {}

impl From<io::Error> for EditorApiError {
    fn from(err: io::Error) -> Self {
        EditorApiError::Io(err)
    }
}

/// What the editor frontend talks to: the game's own source file, plus a
/// headless run it can step and inspect without opening a window.
pub struct EditorSession {
    runner: HeadlessRunner<RunnerLogic>,
    source_path: PathBuf,
}

impl EditorSession {
    pub fn new(seed: u64) -> Self {
        Self::with_source_path(seed, default_source_path())
    }

    pub fn with_source_path(seed: u64, source_path: PathBuf) -> Self {
        Self {
            runner: HeadlessRunner::new(RunnerLogic::new(seed)),
            source_path,
        }
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn source(&self) -> io::Result<String> {
        fs::read_to_string(&self.source_path)
    }

    /// Replaces the game source wholesale. Syntax checking stays with the
    /// editor frontend; only plainly unusable submissions are rejected here.
    pub fn save_source(&self, code: &str) -> Result<(), EditorApiError> {
        if code.trim().is_empty() {
            return Err(EditorApiError::EmptySource);
        }
        fs::write(&self.source_path, code)?;
        Ok(())
    }

    pub fn state(&self) -> RunSnapshot {
        snapshot_from_state(self.runner.frame(), self.runner.state())
    }

    pub fn step(&mut self, action_id: &str) -> Result<RunSnapshot, EditorApiError> {
        let action = action_from_id(action_id)
            .ok_or_else(|| EditorApiError::UnknownActionId(action_id.to_string()))?;
        let frame = self.runner.step(action);
        Ok(snapshot_from_state(frame, self.runner.state()))
    }

    pub fn reset(&mut self) -> RunSnapshot {
        let frame = self.runner.reset();
        snapshot_from_state(frame, self.runner.state())
    }
}

pub fn action_from_id(id: &str) -> Option<InputAction> {
    match id {
        "noop" => Some(InputAction::Noop),
        "jump" => Some(InputAction::Jump),
        "restart" => Some(InputAction::Restart),
        _ => None,
    }
}

pub fn default_source_path() -> PathBuf {
    if let Ok(explicit) = std::env::var("DASH_EDITOR_SOURCE_PATH") {
        return PathBuf::from(explicit);
    }

    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("runner_core.rs")
}

pub fn snapshot_from_state(frame: usize, core: &RunnerCore) -> RunSnapshot {
    let state_json = serde_json::to_value(core).expect("runner state should be json-serializable");

    let stats = vec![
        stat("score", core.display_score()),
        stat("obstacles", core.obstacles().len()),
        stat("playerY", core.player().y),
        stat("velocityY", core.player().velocity_y),
        stat("jumping", core.player().jumping),
        stat("gameOver", core.is_game_over()),
    ];

    RunSnapshot {
        frame,
        state: state_json,
        stats,
    }
}

fn stat(label: impl Into<String>, value: impl ToString) -> RunStat {
    RunStat {
        label: label.into(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_source(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "dash-runner-source-{}-{name}.rs",
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn step_advances_the_frame_counter() {
        let mut session = EditorSession::with_source_path(0, scratch_source("step", "// code"));
        let initial = session.state();

        let stepped = session.step("noop").expect("valid action");
        assert_eq!(stepped.frame, initial.frame + 1);
    }

    #[test]
    fn jump_step_is_visible_in_the_stats() {
        let mut session = EditorSession::with_source_path(0, scratch_source("jump", "// code"));
        let snapshot = session.step("jump").unwrap();

        let jumping = snapshot
            .stats
            .iter()
            .find(|s| s.label == "jumping")
            .expect("jumping stat present");
        assert_eq!(jumping.value, "true");
    }

    #[test]
    fn unknown_action_is_rejected() {
        let mut session = EditorSession::with_source_path(0, scratch_source("bad", "// code"));
        match session.step("doesNotExist").unwrap_err() {
            EditorApiError::UnknownActionId(id) => assert_eq!(id, "doesNotExist"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reset_rewinds_to_frame_zero() {
        let mut session = EditorSession::with_source_path(0, scratch_source("reset", "// code"));
        session.step("noop").unwrap();
        session.step("noop").unwrap();

        let snapshot = session.reset();
        assert_eq!(snapshot.frame, 0);
    }

    #[test]
    fn save_source_round_trips() {
        let path = scratch_source("save", "// before");
        let session = EditorSession::with_source_path(0, path.clone());

        session.save_source("// after").unwrap();
        assert_eq!(session.source().unwrap(), "// after");

        let _ = fs::remove_file(path);
    }

    #[test]
    fn empty_source_is_rejected_without_touching_the_file() {
        let path = scratch_source("empty", "// keep me");
        let session = EditorSession::with_source_path(0, path.clone());

        assert!(matches!(
            session.save_source("  \n\t"),
            Err(EditorApiError::EmptySource)
        ));
        assert_eq!(session.source().unwrap(), "// keep me");

        let _ = fs::remove_file(path);
    }

    #[test]
    fn snapshot_includes_raw_state_json() {
        let session = EditorSession::with_source_path(0, scratch_source("json", "// code"));
        assert!(!session.state().state.is_null());
    }
}
