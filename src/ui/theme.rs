use crate::sorting::Highlight;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub bar: Color,           // Grey
    pub comparing: Color,     // Red
    pub left_run: Color,      // Blue
    pub right_run: Color,     // Orange
    pub write_pointer: Color, // Yellow
    pub sorted: Color,        // Green
    pub comment: Color,
    pub border: Color,
    pub status_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    bar: Color::Rgb(189, 189, 189),
    comparing: Color::Rgb(239, 83, 80),
    left_run: Color::Rgb(66, 165, 245),
    right_run: Color::Rgb(255, 167, 38),
    write_pointer: Color::Rgb(255, 238, 88),
    sorted: Color::Rgb(76, 175, 80),
    comment: Color::Rgb(108, 112, 134),
    border: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
};

impl Theme {
    /// Bar color for a highlight role, or the neutral bar color
    pub fn bar_color(&self, highlight: Option<Highlight>) -> Color {
        match highlight {
            None => self.bar,
            Some(Highlight::Comparing) => self.comparing,
            Some(Highlight::LeftRun) => self.left_run,
            Some(Highlight::RightRun) => self.right_run,
            Some(Highlight::WritePointer) => self.write_pointer,
            Some(Highlight::Sorted) => self.sorted,
        }
    }
}
