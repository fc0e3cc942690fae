//! Algorithm selector tabs

use crate::algorithms::Algorithm;
use crate::playback::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Render the algorithm tabs; the active algorithm is highlighted
pub fn render_header(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let titles: Vec<Line> = Algorithm::ALL
        .iter()
        .map(|algorithm| Line::from(format!(" [{}] {} ", algorithm.index() + 1, algorithm.name())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(snapshot.algorithm.index())
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(DEFAULT_THEME.border)),
        )
        .style(
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .bg(DEFAULT_THEME.panel_bg),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");

    frame.render_widget(tabs, area);
}
