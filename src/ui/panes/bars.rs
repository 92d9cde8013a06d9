//! Bar chart rendering
//!
//! Each array element is a column of cells growing up from the bottom of the
//! chart. Heights are scaled against the configured maximum in eighths of a
//! cell so that small differences stay visible on short terminals.

use crate::config::PADDING_SIDE;
use crate::sorting::ColorMap;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Widget},
    Frame,
};

const EIGHTHS: [&str; 8] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇"];
const FULL: &str = "█";

/// Width of every bar: the available columns split evenly, never less than one
pub fn bar_width(available: u16, count: usize) -> u16 {
    let count = u16::try_from(count.max(1)).unwrap_or(u16::MAX);
    (available / count).max(1)
}

/// Height of a bar in eighths of a cell.
///
/// Any positive value gets at least one eighth so no bar disappears.
pub fn bar_height_eighths(value: u32, max_value: u32, rows: u16) -> u32 {
    if value == 0 || max_value == 0 {
        return 0;
    }
    let value = u64::from(value.min(max_value));
    let total = u64::from(rows) * 8;
    let eighths = value * total / u64::from(max_value);
    (eighths as u32).max(1)
}

/// The bar chart widget
pub struct Bars<'a> {
    data: &'a [u32],
    colors: &'a ColorMap,
    max_value: u32,
}

impl<'a> Bars<'a> {
    pub fn new(data: &'a [u32], colors: &'a ColorMap, max_value: u32) -> Self {
        Bars {
            data,
            colors,
            max_value,
        }
    }
}

impl Widget for Bars<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.data.is_empty() || area.height == 0 || area.width <= PADDING_SIDE * 2 {
            return;
        }

        let available = area.width - PADDING_SIDE * 2;
        let width = bar_width(available, self.data.len());
        let left = area.x + PADDING_SIDE;
        let right = left + available;

        for (i, &value) in self.data.iter().enumerate() {
            let Some(x0) = usize::from(width)
                .checked_mul(i)
                .and_then(|offset| u16::try_from(offset).ok())
                .and_then(|offset| left.checked_add(offset))
                .filter(|&x| x < right)
            else {
                // Everything from here on is clipped
                break;
            };

            let color = DEFAULT_THEME.bar_color(self.colors.get(&i).copied());
            let eighths = bar_height_eighths(value, self.max_value, area.height);
            let full_rows = (eighths / 8) as u16;
            let partial = EIGHTHS[(eighths % 8) as usize];

            for x in x0..(x0 + width).min(right) {
                for row in 0..area.height {
                    let symbol = if row < full_rows {
                        FULL
                    } else if row == full_rows && eighths % 8 != 0 {
                        partial
                    } else {
                        break;
                    };
                    let y = area.bottom() - 1 - row;
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_symbol(symbol).set_fg(color);
                    }
                }
            }
        }
    }
}

/// Render the bar chart pane
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    data: &[u32],
    colors: &ColorMap,
    max_value: u32,
) {
    let block = Block::default()
        .title(format!(" {} bars ", data.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Bars::new(data, colors, max_value), inner);
}
