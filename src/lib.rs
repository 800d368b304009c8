//! Neon Snake - a single-player arcade snake game
//!
//! - `game`, `snake`, `grid`: the simulation and its state machine
//! - `timing`: tick accumulation and frame pacing for the main loop
//! - `input`: key mapping and dispatch
//! - `render`, `audio`: neon drawing and the synthesised pop effect
//! - `high_score`, `config`: persistence and settings
//! - `app`: the ggez event handler tying it together

pub mod app;
pub mod audio;
pub mod config;
pub mod game;
pub mod grid;
pub mod high_score;
pub mod input;
pub mod render;
pub mod snake;
pub mod timing;
