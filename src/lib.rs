//! # Connect Four
//!
//! A two-player Connect Four game. The core is the board: gravity drops into
//! columns and win detection (four in a row horizontally, vertically, or on
//! either diagonal) evaluated after every move. A turn-taking state machine
//! and a terminal UI built with Ratatui sit on top of it.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`ui`] — Terminal UI: two-player game view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
