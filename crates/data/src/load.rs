use crate::schema::{Catalog, CatalogFile, PackDef};
use anyhow::{bail, Context};
use cardtable_core::TableConfig;
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

const PACKS_FILE: &str = "packs.json";
const TABLE_FILE: &str = "table.json";

pub fn load_catalog(dir: &Path) -> anyhow::Result<Catalog> {
    let path = dir.join(PACKS_FILE);
    let file: CatalogFile = load_json(&path)?;
    catalog_from_file(file).with_context(|| format!("validate {}", path.display()))
}

pub fn catalog_from_file(file: CatalogFile) -> anyhow::Result<Catalog> {
    let mut packs = BTreeMap::new();
    for pack in file.packs {
        validate_pack(&pack)?;
        if packs.contains_key(&pack.name) {
            bail!("duplicate pack name: {}", pack.name);
        }
        packs.insert(pack.name.clone(), pack);
    }
    Ok(Catalog::new(packs))
}

fn validate_pack(pack: &PackDef) -> anyhow::Result<()> {
    if pack.cards.is_empty() {
        bail!("pack {} has no cards", pack.name);
    }
    if pack.size == 0 {
        bail!("pack {} opens zero cards", pack.name);
    }
    if pack.tiers.is_empty() {
        return Ok(());
    }
    let known: HashSet<&str> = pack.tiers.iter().map(|tier| tier.name.as_str()).collect();
    for card in &pack.cards {
        if !known.contains(card.tier.as_str()) {
            bail!(
                "card {} in pack {} has unknown tier {}",
                card.name,
                pack.name,
                card.tier
            );
        }
    }
    let drawable = pack.tiers.iter().any(|tier| {
        tier.weight > 0 && pack.cards.iter().any(|card| card.tier == tier.name)
    });
    if !drawable {
        bail!("pack {} has no drawable tier", pack.name);
    }
    Ok(())
}

pub fn find_pack<'a>(catalog: &'a Catalog, name: &str) -> anyhow::Result<&'a PackDef> {
    match catalog.pack(name) {
        Some(pack) => Ok(pack),
        None => {
            let known: Vec<&str> = catalog.pack_names().collect();
            bail!("unknown pack {name:?}; known packs: {}", known.join(", "))
        }
    }
}

pub fn load_table_config(dir: &Path) -> anyhow::Result<TableConfig> {
    let path = dir.join(TABLE_FILE);
    if !path.exists() {
        return Ok(TableConfig::default());
    }
    load_json(path)
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
