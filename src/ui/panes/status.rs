//! Status bar rendering with run state indicators

use crate::sorting::Algorithm;
use crate::ui::app::RunState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Badge text and background for a run state
pub fn state_badge(state: RunState) -> (&'static str, Color) {
    match state {
        RunState::Idle => (" IDLE ", DEFAULT_THEME.comment),
        RunState::Sorting => (" ▶ SORTING ", DEFAULT_THEME.right_run),
        RunState::Paused => (" ⏸ PAUSED ", DEFAULT_THEME.write_pointer),
        RunState::Sorted => (" ✔ SORTED ", DEFAULT_THEME.sorted),
    }
}

/// Render the status bar at the bottom.
///
/// `algorithm` is the current or most recent run, `None` before the first run
/// or after a reset.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    algorithm: Option<Algorithm>,
    steps: usize,
    bars: usize,
    state: RunState,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let label = match algorithm {
        Some(algorithm) => format!(" {} ", algorithm.name()),
        None => " No algorithm ".to_string(),
    };

    let left_spans = vec![
        Span::styled(
            label,
            Style::default()
                .bg(DEFAULT_THEME.left_run)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);
    let (badge, badge_bg) = state_badge(state);

    let right_spans = vec![
        Span::styled(format!(" Step {} ", steps), desc_style),
        Span::styled("│", sep_style),
        Span::styled(format!(" {} bars ", bars), desc_style),
        Span::styled("│", sep_style),
        Span::styled(
            badge,
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
