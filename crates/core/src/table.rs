use crate::{
    Card, Deck, EventBus, Hand, ImageError, ImageSource, Pack, Point, RngState, TableConfig,
    TableEvent,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableInput {
    Click(Point),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickOutcome {
    pub dealt: bool,
    pub flipped: Vec<usize>,
}

impl ClickOutcome {
    pub fn changed(&self) -> bool {
        self.dealt || !self.flipped.is_empty()
    }
}

/// Owns the deck and the hand and turns clicks into state changes.
#[derive(Debug, Clone)]
pub struct Table {
    config: TableConfig,
    deck: Deck,
    hand: Hand,
}

impl Table {
    pub fn new(config: TableConfig, deck: Deck) -> Self {
        Self {
            config,
            deck,
            hand: Hand::default(),
        }
    }

    pub fn open(config: TableConfig, pack: &dyn Pack, rng: &mut RngState) -> Self {
        let deck = Deck::open(pack, rng, config.deck_rect());
        Self::new(config, deck)
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Deals when `point` is on the deck, then flips every hand card under
    /// `point`. Cards dealt by this click are not flip candidates.
    pub fn click(&mut self, point: Point, events: &mut EventBus) -> ClickOutcome {
        let mut outcome = ClickOutcome::default();
        let existing = self.hand.len();
        if self.deck.rect().contains(point) {
            match self.deck.deal() {
                Some(card) => {
                    events.push(TableEvent::Dealt {
                        name: card.name().to_string(),
                        tier: card.tier().to_string(),
                        remaining: self.deck.remaining(),
                    });
                    self.hand.push(card);
                    outcome.dealt = true;
                }
                None => events.push(TableEvent::DeckExhausted),
            }
        }
        // every hit flips, not just the topmost
        for (index, card) in self.hand.cards_mut()[..existing].iter_mut().enumerate() {
            if card.hit(point) {
                let face = card.flip();
                events.push(TableEvent::Flipped {
                    index,
                    name: card.name().to_string(),
                    face,
                });
                outcome.flipped.push(index);
            }
        }
        outcome
    }

    pub fn handle(&mut self, input: TableInput, events: &mut EventBus) -> Flow {
        match input {
            TableInput::Click(point) => {
                self.click(point, events);
                Flow::Continue
            }
            TableInput::Quit => Flow::Quit,
        }
    }

    /// Applies inputs in arrival order. Nothing after a quit is applied.
    pub fn process<I>(&mut self, inputs: I, events: &mut EventBus) -> Flow
    where
        I: IntoIterator<Item = TableInput>,
    {
        for input in inputs {
            if self.handle(input, events) == Flow::Quit {
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    pub fn tick(&mut self) {
        let grid = self.config.grid();
        self.hand.layout(&grid);
    }

    /// Loads front images for hand cards currently showing their front.
    /// Blocks for as long as the source does; the first error stops the pass.
    pub fn resolve_fronts(&mut self, source: &mut dyn ImageSource) -> Result<usize, ImageError> {
        let mut loaded = 0;
        for card in self.hand.cards_mut() {
            if card.is_closed() || card.loaded_front().is_some() {
                continue;
            }
            card.front_image(source)?;
            loaded += 1;
        }
        Ok(loaded)
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.hand.get(index)
    }
}
