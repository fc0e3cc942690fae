//! Status bar rendering with counters, keybindings and state indicators

use crate::playback::{Mode, Snapshot};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the two-line status bar at the bottom.
///
/// The first line carries the playback state and counters, the second the
/// keybindings and the transient `message`.
pub fn render_status_bar(frame: &mut Frame, area: Rect, snapshot: &Snapshot, message: &str) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let panel = Style::default().bg(DEFAULT_THEME.panel_bg);
    let label_style = panel.fg(DEFAULT_THEME.comment);
    let value_style = panel.fg(DEFAULT_THEME.fg).add_modifier(Modifier::BOLD);
    let sep = Span::styled("  │  ", label_style);

    let step_text = match snapshot.current_step {
        Some(kind) if snapshot.mode != Mode::Finished => {
            format!("{}/{} ({})", snapshot.cursor, snapshot.sequence_len, kind.label())
        }
        _ => format!("{}/{}", snapshot.cursor, snapshot.sequence_len),
    };

    let state_spans = vec![
        Span::styled(
            format!(" {} ", snapshot.mode.label()),
            Style::default()
                .bg(mode_color(snapshot.mode))
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ", panel),
        Span::styled(snapshot.algorithm.complexity(), value_style),
        sep.clone(),
        Span::styled("Comparisons: ", label_style),
        Span::styled(snapshot.comparisons.to_string(), value_style),
        sep.clone(),
        Span::styled("Mutations: ", label_style),
        Span::styled(snapshot.mutations.to_string(), value_style),
        sep.clone(),
        Span::styled("Step: ", label_style),
        Span::styled(step_text, value_style),
        sep.clone(),
        Span::styled("Speed: ", label_style),
        Span::styled(snapshot.speed.to_string(), value_style),
        sep,
        Span::styled("Size: ", label_style),
        Span::styled(snapshot.element_count.to_string(), value_style),
    ];

    frame.render_widget(
        Paragraph::new(Line::from(state_spans))
            .style(panel)
            .alignment(Alignment::Left),
        rows[0],
    );

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(rows[1]);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {} ", message),
            panel.fg(DEFAULT_THEME.fg),
        )))
        .style(panel),
        bottom[0],
    );

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = panel.fg(DEFAULT_THEME.fg);
    let mut key_spans = Vec::new();
    for (key, desc) in [
        (" ⎵ ", " start/pause "),
        (" → ", " step "),
        (" ↵ ", " end "),
        (" r ", " shuffle "),
        (" ↑/↓ ", " speed "),
        (" +/- ", " size "),
        (" 1-6 ", " algo "),
        (" q ", " quit "),
    ] {
        key_spans.push(Span::styled(key, key_style));
        key_spans.push(Span::styled(desc, desc_style));
    }

    frame.render_widget(
        Paragraph::new(Line::from(key_spans))
            .style(panel)
            .alignment(Alignment::Right),
        bottom[1],
    );
}

fn mode_color(mode: Mode) -> Color {
    match mode {
        Mode::Idle => DEFAULT_THEME.primary,
        Mode::Running => DEFAULT_THEME.secondary,
        Mode::Paused => DEFAULT_THEME.error,
        Mode::Finished => DEFAULT_THEME.success,
    }
}
