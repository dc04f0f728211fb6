use cardtable_core::{CardRecord, Pack, RngState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierDef {
    pub name: String,
    pub weight: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackDef {
    pub name: String,
    pub size: usize,
    #[serde(default)]
    pub tiers: Vec<TierDef>,
    pub cards: Vec<CardRecord>,
}

impl PackDef {
    /// Tier weights actually in play: listed tiers that have cards, or every
    /// card tier at weight 1 when none are listed.
    fn weighted_tiers(&self) -> Vec<(&str, u32)> {
        if self.tiers.is_empty() {
            let mut seen: Vec<(&str, u32)> = Vec::new();
            for card in &self.cards {
                if !seen.iter().any(|(tier, _)| *tier == card.tier) {
                    seen.push((card.tier.as_str(), 1));
                }
            }
            return seen;
        }
        self.tiers
            .iter()
            .filter(|tier| self.cards.iter().any(|card| card.tier == tier.name))
            .map(|tier| (tier.name.as_str(), tier.weight))
            .collect()
    }

    fn cards_of_tier(&self, tier: &str) -> Vec<&CardRecord> {
        self.cards.iter().filter(|card| card.tier == tier).collect()
    }
}

impl Pack for PackDef {
    fn pack_name(&self) -> &str {
        &self.name
    }

    fn open_pack(&self, rng: &mut RngState) -> Vec<CardRecord> {
        let tiers = self.weighted_tiers();
        let weights: Vec<u32> = tiers.iter().map(|(_, weight)| *weight).collect();
        let mut opened = Vec::with_capacity(self.size);
        for _ in 0..self.size {
            let Some(tier_idx) = rng.weighted_index(&weights) else {
                break;
            };
            let pool = self.cards_of_tier(tiers[tier_idx].0);
            if pool.is_empty() {
                continue;
            }
            opened.push(pool[rng.index(pool.len())].clone());
        }
        opened
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    pub packs: Vec<PackDef>,
}

/// Pack definitions keyed by pack name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    packs: BTreeMap<String, PackDef>,
}

impl Catalog {
    pub fn new(packs: BTreeMap<String, PackDef>) -> Self {
        Self { packs }
    }

    pub fn pack(&self, name: &str) -> Option<&PackDef> {
        self.packs.get(name)
    }

    pub fn pack_names(&self) -> impl Iterator<Item = &str> {
        self.packs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.packs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack(tiers: Vec<TierDef>) -> PackDef {
        PackDef {
            name: "Test".to_string(),
            size: 12,
            tiers,
            cards: vec![
                CardRecord::new("Slime", "Common"),
                CardRecord::new("Bat", "Common"),
                CardRecord::new("Wyrm", "Gold"),
            ],
        }
    }

    #[test]
    fn open_pack_yields_size_cards_from_pool() {
        let pack = pack(Vec::new());
        let mut rng = RngState::from_seed(5);
        let opened = pack.open_pack(&mut rng);
        assert_eq!(opened.len(), 12);
        assert!(opened.iter().all(|card| pack.cards.contains(card)));
    }

    #[test]
    fn zero_weight_tier_never_opens() {
        let pack = pack(vec![
            TierDef {
                name: "Common".to_string(),
                weight: 4,
            },
            TierDef {
                name: "Gold".to_string(),
                weight: 0,
            },
        ]);
        let mut rng = RngState::from_seed(9);
        let opened = pack.open_pack(&mut rng);
        assert_eq!(opened.len(), 12);
        assert!(opened.iter().all(|card| card.tier == "Common"));
    }

    #[test]
    fn same_seed_opens_same_pack() {
        let pack = pack(Vec::new());
        let first = pack.open_pack(&mut RngState::from_seed(42));
        let second = pack.open_pack(&mut RngState::from_seed(42));
        assert_eq!(first, second);
    }
}
