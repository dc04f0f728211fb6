use crate::Face;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    Dealt {
        name: String,
        tier: String,
        remaining: usize,
    },
    DeckExhausted,
    Flipped {
        index: usize,
        name: String,
        face: Face,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<TableEvent>,
}

impl EventBus {
    pub fn push(&mut self, event: TableEvent) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = TableEvent> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
