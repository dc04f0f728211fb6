use crate::{Card, CardRecord, Pack, Rect, RngState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckIndicator {
    Full,
    Empty,
}

/// Unopened cards from one pack. The last record is dealt first.
#[derive(Debug, Clone)]
pub struct Deck {
    pack_name: String,
    cards: Vec<CardRecord>,
    rect: Rect,
}

impl Deck {
    pub fn new(pack_name: impl Into<String>, cards: Vec<CardRecord>, rect: Rect) -> Self {
        Self {
            pack_name: pack_name.into(),
            cards,
            rect,
        }
    }

    pub fn open(pack: &dyn Pack, rng: &mut RngState, rect: Rect) -> Self {
        Self::new(pack.pack_name(), pack.open_pack(rng), rect)
    }

    pub fn pack_name(&self) -> &str {
        &self.pack_name
    }

    /// `None` once the deck is exhausted; that is a normal terminal state.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop().map(Card::new)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn indicator(&self) -> DeckIndicator {
        if self.is_empty() {
            DeckIndicator::Empty
        } else {
            DeckIndicator::Full
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }
}
