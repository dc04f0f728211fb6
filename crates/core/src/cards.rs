use crate::{CardRecord, FrontImage, ImageError, ImageSource, Point, Rect};
use ratatui::style::Color;
use std::str::FromStr;

pub const FALLBACK_BACK_COLOR: Color = Color::Red;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
}

impl Face {
    pub fn flipped(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

/// Tiers are free-form: some name a color, most do not.
pub fn tier_color(tier: &str) -> Color {
    Color::from_str(tier.trim()).unwrap_or(FALLBACK_BACK_COLOR)
}

/// A dealt card with two sides. It starts front-facing.
#[derive(Debug, Clone)]
pub struct Card {
    record: CardRecord,
    closed: bool,
    back_color: Color,
    front: Option<FrontImage>,
    rect: Option<Rect>,
}

impl Card {
    pub fn new(record: CardRecord) -> Self {
        let back_color = tier_color(&record.tier);
        Self {
            record,
            closed: false,
            back_color,
            front: None,
            rect: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn tier(&self) -> &str {
        &self.record.tier
    }

    pub fn record(&self) -> &CardRecord {
        &self.record
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn face(&self) -> Face {
        if self.closed {
            Face::Back
        } else {
            Face::Front
        }
    }

    pub fn flip(&mut self) -> Face {
        self.closed = !self.closed;
        self.face()
    }

    pub fn back_color(&self) -> Color {
        self.back_color
    }

    /// Loads the front image on first use; later calls return the retained copy.
    /// A failed load caches nothing.
    pub fn front_image(&mut self, source: &mut dyn ImageSource) -> Result<&FrontImage, ImageError> {
        let image = match self.front.take() {
            Some(image) => image,
            None => source.load_front(&self.record.name)?,
        };
        Ok(&*self.front.insert(image))
    }

    pub fn loaded_front(&self) -> Option<&FrontImage> {
        self.front.as_ref()
    }

    /// `None` until the first layout pass places the card.
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    pub fn place(&mut self, rect: Rect) {
        self.rect = Some(rect);
    }

    pub fn hit(&self, point: Point) -> bool {
        self.rect.map_or(false, |rect| rect.contains(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct CountingSource {
        calls: usize,
        fail: bool,
    }

    impl ImageSource for CountingSource {
        fn load_front(&mut self, identity: &str) -> Result<FrontImage, ImageError> {
            self.calls += 1;
            if self.fail {
                return Err(ImageError::Fetch {
                    url: identity.to_string(),
                    reason: "offline".to_string(),
                });
            }
            Ok(FrontImage {
                path: PathBuf::from(format!("{identity}.png")),
                bytes: vec![1, 2, 3],
            })
        }
    }

    fn card(tier: &str) -> Card {
        Card::new(CardRecord::new("Ember Drake", tier))
    }

    #[test]
    fn starts_front_facing() {
        let card = card("Common");
        assert!(!card.is_closed());
        assert_eq!(card.face(), Face::Front);
        assert_eq!(card.rect(), None);
    }

    #[test]
    fn double_flip_restores_face() {
        let mut card = card("Common");
        assert_eq!(card.flip(), Face::Back);
        assert_eq!(card.flip(), Face::Front);
        for _ in 0..5 {
            let before = card.face();
            assert_eq!(card.flip(), before.flipped());
        }
    }

    #[test]
    fn color_tier_is_used_directly() {
        assert_eq!(card("red").back_color(), Color::Red);
        assert_eq!(card("Blue").back_color(), Color::Blue);
        assert_eq!(card("#102030").back_color(), Color::Rgb(0x10, 0x20, 0x30));
    }

    #[test]
    fn non_color_tier_falls_back() {
        assert_eq!(card("Gold").back_color(), FALLBACK_BACK_COLOR);
        assert_eq!(card("Mythic Rare").back_color(), FALLBACK_BACK_COLOR);
        assert_eq!(card("").back_color(), FALLBACK_BACK_COLOR);
    }

    #[test]
    fn front_image_loads_once() {
        let mut source = CountingSource {
            calls: 0,
            fail: false,
        };
        let mut card = card("Common");
        let first = card.front_image(&mut source).expect("load").clone();
        let second = card.front_image(&mut source).expect("load").clone();
        assert_eq!(first, second);
        assert_eq!(source.calls, 1);
        assert_eq!(first.path, PathBuf::from("Ember Drake.png"));
    }

    #[test]
    fn failed_front_load_is_not_cached() {
        let mut source = CountingSource {
            calls: 0,
            fail: true,
        };
        let mut card = card("Common");
        assert!(card.front_image(&mut source).is_err());
        assert!(card.loaded_front().is_none());
        source.fail = false;
        assert!(card.front_image(&mut source).is_ok());
        assert_eq!(source.calls, 2);
    }
}
