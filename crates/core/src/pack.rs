use crate::RngState;
use serde::{Deserialize, Serialize};

/// Raw catalog data for one card before it is dealt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardRecord {
    pub name: String,
    pub tier: String,
}

impl CardRecord {
    pub fn new(name: impl Into<String>, tier: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tier: tier.into(),
        }
    }
}

/// A named source of card records. Opening yields the deck's initial sequence,
/// in the order the pack emits them.
pub trait Pack {
    fn pack_name(&self) -> &str;
    fn open_pack(&self, rng: &mut RngState) -> Vec<CardRecord>;
}

/// A pack with a fixed opening. Handy for scripted tables and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPack {
    pub name: String,
    pub cards: Vec<CardRecord>,
}

impl FixedPack {
    pub fn new(name: impl Into<String>, cards: Vec<CardRecord>) -> Self {
        Self {
            name: name.into(),
            cards,
        }
    }
}

impl Pack for FixedPack {
    fn pack_name(&self) -> &str {
        &self.name
    }

    fn open_pack(&self, _rng: &mut RngState) -> Vec<CardRecord> {
        self.cards.clone()
    }
}
