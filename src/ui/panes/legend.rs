//! Key bindings and color legend

use crate::sorting::{Algorithm, Highlight};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Rows taken by the legend pane, borders included
pub const LEGEND_HEIGHT: u16 = 10;

const COLOR_KEY: [(Option<Highlight>, &str); 6] = [
    (Some(Highlight::Comparing), "Comparing / swapping"),
    (Some(Highlight::LeftRun), "Left half (merge)"),
    (Some(Highlight::RightRun), "Right half (merge)"),
    (Some(Highlight::WritePointer), "Write pointer"),
    (Some(Highlight::Sorted), "Sorted"),
    (None, "Unsorted"),
];

fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {:^5} ", key),
            Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black),
        ),
        Span::styled(
            format!(" {}", description),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
    ])
}

/// Key binding lines, one per command
pub fn control_lines() -> Vec<Line<'static>> {
    let mut lines = vec![key_line("r", "Reset"), key_line("space", "Play / Pause")];
    lines.extend(
        Algorithm::ALL
            .into_iter()
            .map(|a| key_line(&a.key().to_string(), a.name())),
    );
    lines.push(key_line("esc", "Quit"));
    lines
}

/// Color key lines, each swatch drawn in its bar color
pub fn color_key_lines() -> Vec<Line<'static>> {
    COLOR_KEY
        .iter()
        .map(|&(highlight, label)| {
            Line::from(vec![
                Span::styled(
                    "██ ",
                    Style::default().fg(DEFAULT_THEME.bar_color(highlight)),
                ),
                Span::styled(label, Style::default().fg(DEFAULT_THEME.fg)),
            ])
        })
        .collect()
}

/// Render the legend pane
pub fn render_legend_pane(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border))
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    frame.render_widget(Paragraph::new(control_lines()), columns[0]);
    frame.render_widget(Paragraph::new(color_key_lines()), columns[1]);
}
