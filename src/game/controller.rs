use log::{debug, info};

use super::{Board, EventSink, GameEvent, Player};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Turn sequencing on top of a [`Board`].
///
/// Every accepted move emits `PiecePlaced`, followed by `GameWon` or
/// `GameTied` when it ends the game. Rejected input changes nothing and
/// emits nothing.
#[derive(Debug)]
pub struct TurnController<S: EventSink = Vec<GameEvent>> {
    board: Board,
    status: GameStatus,
    sink: S,
}

impl TurnController<Vec<GameEvent>> {
    /// Controller that queues its events; drain them with [`Self::take_events`].
    pub fn new(board: Board) -> Self {
        Self::with_sink(board, Vec::new())
    }

    /// Take every event emitted since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.sink)
    }
}

impl<S: EventSink> TurnController<S> {
    pub fn with_sink(mut board: Board, sink: S) -> Self {
        board.reset();
        TurnController {
            board,
            status: GameStatus::InProgress,
            sink,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Player whose turn it is (or who made the final move once the game is over)
    pub fn current_player(&self) -> Player {
        self.board.current_player()
    }

    /// Play the current player's piece in `column`. Invalid input is ignored.
    pub fn choose_column(&mut self, column: usize) {
        if let Err(e) = self.try_choose_column(column) {
            debug!("ignored move in column {column}: {e}");
        }
    }

    /// Same as [`Self::choose_column`] but reports why a move was turned down.
    pub fn try_choose_column(&mut self, column: usize) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::MoveAfterTerminal);
        }

        let player = self.board.current_player();
        let (row, column) = self.board.drop_piece(column)?;
        self.sink.emit(GameEvent::PiecePlaced {
            row,
            column,
            player,
        });

        if self.board.check_win(player) {
            info!("{player} won");
            self.status = GameStatus::Won(player);
            self.sink.emit(GameEvent::GameWon { player });
        } else if self.board.is_full() {
            info!("game tied");
            self.status = GameStatus::Tied;
            self.sink.emit(GameEvent::GameTied);
        } else {
            self.board.switch_player();
        }

        Ok(self.status)
    }

    /// Start a new game on the same board
    pub fn reset(&mut self) {
        self.board.reset();
        self.status = GameStatus::InProgress;
        info!("board cleared");
        self.sink.emit(GameEvent::BoardCleared);
    }
}
