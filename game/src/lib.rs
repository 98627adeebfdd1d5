pub mod editor_api;
pub mod hiscore;
pub mod playtest;
pub mod runner_core;
pub mod scene;
