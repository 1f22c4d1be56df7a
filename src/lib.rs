//! # Connect Four
//!
//! A two-player Connect Four game: a rules engine and turn controller that
//! talk to the outside world only through commands and data-only events, plus
//! a terminal front end built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board engine, player, events, turn controller
//! - [`ui`]: Terminal UI that mirrors the board from controller events
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
