use crate::Rect;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub table_width: i32,
    pub table_height: i32,
    pub card_width: i32,
    pub card_height: i32,
    pub gap: i32,
    pub hand_top: i32,
    pub deck_width: i32,
    pub deck_height: i32,
    pub fps: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            table_width: 800,
            table_height: 600,
            card_width: 100,
            card_height: 100,
            gap: 5,
            hand_top: 600 / 5,
            deck_width: 100,
            deck_height: 100,
            fps: 60,
        }
    }
}

impl TableConfig {
    pub fn grid(&self) -> GridSpec {
        GridSpec {
            cell_width: self.card_width,
            cell_height: self.card_height,
            gap: self.gap,
            table_width: self.table_width,
            top: self.hand_top,
        }
    }

    pub fn deck_rect(&self) -> Rect {
        Rect::mid_top(self.table_width, self.deck_width, self.deck_height)
    }

    pub fn frame_millis(&self) -> u64 {
        1000 / u64::from(self.fps.max(1))
    }
}

/// Constants of the hand grid: cell size, gap, table width and first row offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub cell_width: i32,
    pub cell_height: i32,
    pub gap: i32,
    pub table_width: i32,
    pub top: i32,
}
