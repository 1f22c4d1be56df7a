//! Terminal UI: the presentation layer. It forwards column choices to the turn
//! controller and redraws its own grid from the events that come back.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
