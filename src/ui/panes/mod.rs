//! TUI pane rendering modules
//!
//! - [`header`]: algorithm tabs with their hotkeys
//! - [`bars`]: the bar chart, one bar per value, coloured by annotation
//! - [`status`]: counters, playback state and keybindings
//!
//! Each module exports a single `render_*` function taking the current
//! [`Snapshot`](crate::playback::Snapshot).

pub mod bars;
pub mod header;
pub mod status;

pub use bars::render_bars_pane;
pub use header::render_header;
pub use status::render_status_bar;
