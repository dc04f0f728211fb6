use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

const PNG_SIGNATURE_LEN: usize = 8;
const HALF_BLOCK: &str = "\u{2580}";

/// Terminal rendition of a card's front image: a mirrored mosaic sampled
/// from the image bytes, two pixels per cell.
pub struct ArtWidget<'a> {
    bytes: &'a [u8],
}

impl<'a> ArtWidget<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    fn payload(&self) -> &'a [u8] {
        if self.bytes.len() > PNG_SIGNATURE_LEN {
            &self.bytes[PNG_SIGNATURE_LEN..]
        } else {
            self.bytes
        }
    }

    /// Color of mosaic pixel `(x, y)` on a `width`-pixel-wide tile.
    pub fn pixel(&self, x: u16, y: u16, width: u16) -> Color {
        let payload = self.payload();
        if payload.is_empty() {
            return Color::DarkGray;
        }
        let half = width.div_ceil(2).max(1);
        let x = if x >= half { width - 1 - x } else { x };
        let slot = usize::from(y) * usize::from(half) + usize::from(x);
        // spread samples over the whole payload so headers do not dominate
        let stride = (payload.len() / 3 / 64).max(1) * 3;
        let base = (slot * stride) % payload.len();
        let channel = |offset: usize| payload[(base + offset) % payload.len()];
        Color::Rgb(channel(0), channel(1), channel(2))
    }
}

impl Widget for ArtWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            for col in 0..area.width {
                let top = self.pixel(col, row * 2, area.width);
                let bottom = self.pixel(col, row * 2 + 1, area.width);
                buf.set_string(
                    area.x + col,
                    area.y + row,
                    HALF_BLOCK,
                    Style::default().fg(top).bg(bottom),
                );
            }
        }
    }
}
