use crate::{Card, GridSpec, Point, Rect};

/// Top-left corners for `count` cells laid left to right, wrapping before a
/// cell would run into the right-hand gap margin.
pub fn grid_positions(count: usize, grid: &GridSpec) -> Vec<Point> {
    let mut positions = Vec::with_capacity(count);
    let mut x = 0;
    let mut y = grid.top;
    for _ in 0..count {
        // checked for every cell, the first of a row included
        if x + grid.cell_width > grid.table_width - grid.gap {
            y += grid.cell_height + grid.gap;
            x = 0;
        }
        positions.push(Point::new(x, y));
        x += grid.cell_width + grid.gap;
    }
    positions
}

/// Dealt cards in deal order.
#[derive(Debug, Default, Clone)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Recomputes every card's rect from scratch.
    pub fn layout(&mut self, grid: &GridSpec) {
        let positions = grid_positions(self.cards.len(), grid);
        for (card, pos) in self.cards.iter_mut().zip(positions) {
            card.place(Rect::new(pos.x, pos.y, grid.cell_width, grid.cell_height));
        }
    }
}
