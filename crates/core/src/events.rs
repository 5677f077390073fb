use crate::{Card, HandKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    HandDealt { count: usize, deck_left: usize },
    CardSelected { card: Card, selected: bool },
    HandScored {
        hand: HandKind,
        scored: Vec<Card>,
        score: i64,
        total: i64,
    },
    CardsDiscarded { count: usize },
    RoundOver { score: i64 },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
