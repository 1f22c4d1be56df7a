//! Core Connect Four game logic: the board engine, player types, outbound
//! events, and the turn controller state machine.

mod board;
mod controller;
mod events;
mod player;

pub use board::{Board, Cell, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION, MIN_DIMENSION};
pub use controller::{GameStatus, TurnController};
pub use events::{EventSink, GameEvent};
pub use player::Player;
