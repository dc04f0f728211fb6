use cardtable_core::{
    Card, CardRecord, EventBus, Face, FixedPack, Flow, FrontImage, ImageError, ImageSource, Point,
    RngState, Table, TableConfig, TableEvent, TableInput,
};
use std::collections::HashMap;
use std::path::PathBuf;

fn beginner_booster() -> FixedPack {
    FixedPack::new(
        "Beginner Booster",
        ["A", "B", "C", "D", "E"]
            .iter()
            .map(|name| CardRecord::new(*name, "Gold"))
            .collect(),
    )
}

fn new_table() -> Table {
    let mut rng = RngState::from_seed(11);
    Table::open(TableConfig::default(), &beginner_booster(), &mut rng)
}

fn deck_click(table: &Table) -> TableInput {
    let rect = table.deck().rect();
    TableInput::Click(Point::new(rect.x + rect.w / 2, rect.y + rect.h / 2))
}

#[derive(Default)]
struct MemorySource {
    loads: HashMap<String, usize>,
}

impl ImageSource for MemorySource {
    fn load_front(&mut self, identity: &str) -> Result<FrontImage, ImageError> {
        *self.loads.entry(identity.to_string()).or_default() += 1;
        Ok(FrontImage {
            path: PathBuf::from(format!("images/{identity}.png")),
            bytes: identity.as_bytes().to_vec(),
        })
    }
}

#[test]
fn beginner_booster_deals_in_stack_order() {
    let mut table = new_table();
    let mut events = EventBus::default();
    assert_eq!(table.deck().pack_name(), "Beginner Booster");
    assert_eq!(table.deck().remaining(), 5);

    let click = deck_click(&table);
    for _ in 0..5 {
        assert_eq!(table.process([click], &mut events), Flow::Continue);
        table.tick();
    }
    assert!(table.deck().is_empty());

    table.process([click], &mut events);
    assert_eq!(table.hand().len(), 5);

    let names: Vec<&str> = table.hand().iter().map(Card::name).collect();
    assert_eq!(names, vec!["E", "D", "C", "B", "A"]);
    assert!(table.hand().iter().all(|card| card.face() == Face::Front));

    let first = events.drain().next();
    assert_eq!(
        first,
        Some(TableEvent::Dealt {
            name: "E".to_string(),
            tier: "Gold".to_string(),
            remaining: 4,
        })
    );
}

#[test]
fn full_hand_wraps_after_x_735() {
    let records: Vec<CardRecord> = (0..9)
        .map(|idx| CardRecord::new(format!("Card {idx}"), "blue"))
        .collect();
    let pack = FixedPack::new("Big Box", records);
    let mut rng = RngState::from_seed(1);
    let mut table = Table::open(TableConfig::default(), &pack, &mut rng);
    let mut events = EventBus::default();
    let click = deck_click(&table);
    table.process(std::iter::repeat(click).take(9), &mut events);
    table.tick();

    let rects: Vec<_> = table.hand().iter().filter_map(Card::rect).collect();
    assert_eq!(rects.len(), 9);
    let last_in_row = rects[6];
    assert_eq!((last_in_row.x, last_in_row.y), (630, 120));
    // a card at x = 735 would end at 835, past the 795 margin
    assert_eq!((rects[7].x, rects[7].y), (0, 225));
}

#[test]
fn flipping_toggles_through_clicks_and_fronts_load_lazily() {
    let mut table = new_table();
    let mut events = EventBus::default();
    let mut source = MemorySource::default();
    let click = deck_click(&table);
    table.process([click, click], &mut events);
    table.tick();
    assert_eq!(table.resolve_fronts(&mut source).expect("resolve"), 2);
    assert_eq!(table.resolve_fronts(&mut source).expect("resolve"), 0);

    let on_first = TableInput::Click(Point::new(50, 170));
    table.process([on_first], &mut events);
    assert_eq!(table.card(0).map(Card::face), Some(Face::Back));
    table.process([on_first], &mut events);
    assert_eq!(table.card(0).map(Card::face), Some(Face::Front));

    table.process([click], &mut events);
    table.tick();
    table.process([TableInput::Click(Point::new(215, 130))], &mut events);
    assert_eq!(table.card(2).map(Card::face), Some(Face::Back));
    assert_eq!(table.resolve_fronts(&mut source).expect("resolve"), 0);
    assert!(table.card(2).and_then(Card::loaded_front).is_none());

    assert!(source.loads.values().all(|count| *count == 1));
    assert_eq!(source.loads.len(), 2);
}
