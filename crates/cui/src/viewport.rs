use cardtable_core::{Point, Rect as TableRect, TableConfig};
use ratatui::layout::Rect;

pub const UNITS_PER_COLUMN: i32 = 10;
pub const UNITS_PER_ROW: i32 = 20;

/// Maps table units onto terminal cells and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub area: Rect,
}

impl Viewport {
    /// The table sits in the top-left corner of the terminal, clipped to it.
    pub fn fit(config: &TableConfig, columns: u16, rows: u16) -> Self {
        let width = cells(config.table_width, UNITS_PER_COLUMN).min(columns);
        let height = cells(config.table_height, UNITS_PER_ROW).min(rows);
        Self {
            area: Rect::new(0, 0, width, height),
        }
    }

    /// Center of the clicked cell in table units, or `None` off the table.
    pub fn to_table(&self, column: u16, row: u16) -> Option<Point> {
        if column < self.area.x
            || row < self.area.y
            || column >= self.area.right()
            || row >= self.area.bottom()
        {
            return None;
        }
        let col = i32::from(column - self.area.x);
        let row = i32::from(row - self.area.y);
        Some(Point::new(
            col * UNITS_PER_COLUMN + UNITS_PER_COLUMN / 2,
            row * UNITS_PER_ROW + UNITS_PER_ROW / 2,
        ))
    }

    /// Terminal cells covered by `rect`, clipped to the table area.
    pub fn to_cells(&self, rect: TableRect) -> Option<Rect> {
        let left = rect.x.div_euclid(UNITS_PER_COLUMN).max(0);
        let top = rect.y.div_euclid(UNITS_PER_ROW).max(0);
        let right = rect.right().div_euclid(UNITS_PER_COLUMN);
        let bottom = rect.bottom().div_euclid(UNITS_PER_ROW);
        let right = right.min(i32::from(self.area.width));
        let bottom = bottom.min(i32::from(self.area.height));
        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect::new(
            self.area.x + left as u16,
            self.area.y + top as u16,
            (right - left) as u16,
            (bottom - top) as u16,
        ))
    }

    /// Rows below the table, for the status panel.
    pub fn below(&self, columns: u16, rows: u16) -> Rect {
        let top = self.area.bottom().min(rows);
        Rect::new(0, top, columns, rows - top)
    }
}

fn cells(units: i32, per_cell: i32) -> u16 {
    u16::try_from((units.max(0) + per_cell - 1) / per_cell).unwrap_or(u16::MAX)
}
