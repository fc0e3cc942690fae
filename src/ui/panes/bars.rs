//! Bar chart pane
//!
//! Every value is drawn as a vertical bar whose height is proportional to the
//! value. Heights are resolved to eighths of a cell using the block elements
//! `▁`..`█`, so even a short terminal shows a smooth staircase.
//!
//! When there are more values than columns, each column shows the element
//! under its left edge; when there are fewer, each bar is widened and a
//! one-column gap is kept between bars if there is room.

use crate::buffer::Annotation;
use crate::playback::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const EIGHTHS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render the bar chart for the current snapshot
pub fn render_bars_pane(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let block = Block::default()
        .title(format!(
            " {} · {} elements ",
            snapshot.algorithm.name(),
            snapshot.element_count
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border))
        .style(Style::default().bg(DEFAULT_THEME.bg));

    let inner = block.inner(area);
    let columns = column_layout(snapshot.values.len(), inner.width as usize);
    let height = inner.height as usize;
    let max_value = snapshot.values.len().max(1);

    let lines: Vec<Line> = (0..height)
        .map(|row| {
            // Rows count down from the top; `level` is this row's distance from the bottom
            let level = height - 1 - row;
            let spans: Vec<Span> = columns
                .iter()
                .map(|column| match column {
                    Some(index) => {
                        let value = snapshot.values[*index] as usize;
                        let eighths = value * height * 8 / max_value;
                        let annotation = snapshot
                            .annotations
                            .get(*index)
                            .copied()
                            .unwrap_or(Annotation::Idle);
                        Span::styled(
                            cell_glyph(eighths, level).to_string(),
                            Style::default().fg(DEFAULT_THEME.bar_color(annotation)),
                        )
                    }
                    None => Span::raw(" "),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Map each terminal column to the element it shows, or `None` for a gap
fn column_layout(count: usize, width: usize) -> Vec<Option<usize>> {
    if count == 0 || width == 0 {
        return Vec::new();
    }
    if count >= width {
        return (0..width).map(|column| Some(column * count / width)).collect();
    }

    let slot = width / count;
    let (bar_width, gap) = if slot >= 3 { (slot - 1, 1) } else { (slot, 0) };
    let mut columns = Vec::with_capacity(width);
    for index in 0..count {
        columns.extend(std::iter::repeat(Some(index)).take(bar_width));
        columns.extend(std::iter::repeat(None).take(gap));
    }
    columns
}

/// Glyph for the cell `level` rows above the bottom of a bar `eighths` tall
fn cell_glyph(eighths: usize, level: usize) -> char {
    let filled = eighths.saturating_sub(level * 8).min(8);
    EIGHTHS[filled]
}
