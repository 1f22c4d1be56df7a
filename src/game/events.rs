use std::sync::mpsc;

use super::Player;

/// Data-only notifications sent from the turn controller to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PiecePlaced {
        row: usize,
        column: usize,
        player: Player,
    },
    GameWon {
        player: Player,
    },
    GameTied,
    BoardCleared,
}

/// Receiver side of the controller's outbound events.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

/// Queue events for the owner to drain.
impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Forward events to another thread. A hung-up receiver is ignored.
impl EventSink for mpsc::Sender<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        let _ = self.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_queues_in_order() {
        let mut sink: Vec<GameEvent> = Vec::new();
        sink.emit(GameEvent::BoardCleared);
        sink.emit(GameEvent::GameTied);
        assert_eq!(sink, vec![GameEvent::BoardCleared, GameEvent::GameTied]);
    }

    #[test]
    fn test_channel_sink_forwards_and_tolerates_hangup() {
        let (mut tx, rx) = mpsc::channel::<GameEvent>();
        tx.emit(GameEvent::GameWon { player: Player::Two });
        assert_eq!(rx.recv().unwrap(), GameEvent::GameWon { player: Player::Two });

        drop(rx);
        tx.emit(GameEvent::BoardCleared);
    }
}
