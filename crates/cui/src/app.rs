use crate::viewport::Viewport;
use anyhow::{Context, Result};
use cardtable_cache::{CacheConfig, ImageCache};
use cardtable_core::{EventBus, Face, Flow, ImageSource, RngState, Table, TableEvent, TableInput};
use cardtable_data::{find_pack, load_catalog, load_table_config};
use std::collections::VecDeque;
use std::path::PathBuf;

pub const DEFAULT_PACK: &str = "Beginner Booster";
const MAX_EVENT_LOG: usize = 200;

#[derive(Debug, Clone)]
pub struct TableSetup {
    pub pack: String,
    pub seed: u64,
    pub assets_dir: PathBuf,
    pub cache: CacheConfig,
}

pub struct App {
    pub table: Table,
    pub images: Box<dyn ImageSource>,
    pub cache_dir: PathBuf,
    pub seed: u64,
    pub events: EventBus,
    pub event_log: VecDeque<String>,
    pub status_line: String,
    pub show_help: bool,
    pub should_quit: bool,
    pub viewport: Viewport,
}

impl App {
    pub fn bootstrap(setup: &TableSetup) -> Result<Self> {
        let catalog = load_catalog(&setup.assets_dir).context("load pack catalog")?;
        let config = load_table_config(&setup.assets_dir).context("load table config")?;
        let pack = find_pack(&catalog, &setup.pack)?;
        let mut rng = RngState::from_seed(setup.seed);
        let table = Table::open(config, pack, &mut rng);

        let cache = ImageCache::new(setup.cache.clone()).context("create image cache")?;
        cache
            .ensure_dir()
            .with_context(|| format!("create cache dir {}", setup.cache.dir.display()))?;
        tracing::info!(
            pack = %setup.pack,
            seed = setup.seed,
            cards = table.deck().remaining(),
            cache_dir = %setup.cache.dir.display(),
            "table opened"
        );
        Ok(Self::new(
            table,
            Box::new(cache),
            setup.cache.dir.clone(),
            setup.seed,
        ))
    }

    pub fn new(table: Table, images: Box<dyn ImageSource>, cache_dir: PathBuf, seed: u64) -> Self {
        let viewport = Viewport::fit(table.config(), u16::MAX, u16::MAX);
        Self {
            table,
            images,
            cache_dir,
            seed,
            events: EventBus::default(),
            event_log: VecDeque::new(),
            status_line: "click the deck to deal".to_string(),
            show_help: false,
            should_quit: false,
            viewport,
        }
    }

    pub fn resize(&mut self, columns: u16, rows: u16) {
        self.viewport = Viewport::fit(self.table.config(), columns, rows);
    }

    pub fn apply(&mut self, input: TableInput) {
        if self.table.handle(input, &mut self.events) == Flow::Quit {
            self.should_quit = true;
        }
        self.flush_events();
    }

    /// Lays out the hand and loads any missing front art. Art loading may
    /// block on the network; its failure ends the session.
    pub fn on_tick(&mut self) -> Result<()> {
        self.table.tick();
        let loaded = self
            .table
            .resolve_fronts(self.images.as_mut())
            .context("resolve card art")?;
        if loaded > 0 {
            tracing::debug!(loaded, "front art loaded");
        }
        Ok(())
    }

    pub fn deck_lines(&self) -> Vec<String> {
        let deck = self.table.deck();
        vec![
            deck.pack_name().to_string(),
            format!("{} cards left", deck.remaining()),
        ]
    }

    pub fn recent_events(&self, count: usize) -> impl Iterator<Item = &String> {
        let skip = self.event_log.len().saturating_sub(count);
        self.event_log.iter().skip(skip)
    }

    fn flush_events(&mut self) {
        let drained: Vec<_> = self.events.drain().collect();
        for event in drained {
            tracing::debug!(?event, "table event");
            let line = format_event(&event);
            self.status_line = line.clone();
            self.push_event_line(line);
        }
    }

    fn push_event_line(&mut self, line: String) {
        if self.event_log.len() >= MAX_EVENT_LOG {
            let _ = self.event_log.pop_front();
        }
        self.event_log.push_back(line);
    }
}

fn format_event(event: &TableEvent) -> String {
    match event {
        TableEvent::Dealt {
            name,
            tier,
            remaining,
        } => format!("dealt {name} (tier {tier}), {remaining} left"),
        TableEvent::DeckExhausted => "deck is empty".to_string(),
        TableEvent::Flipped { index, name, face } => {
            let side = match face {
                Face::Front => "front",
                Face::Back => "back",
            };
            format!("card {} {name} shows its {side}", index + 1)
        }
    }
}
