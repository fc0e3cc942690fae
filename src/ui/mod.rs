//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! This is a thin presentation shell over [`PlaybackController`]: it turns key
//! presses into [`Command`]s, feeds frame time to the controller, and draws the
//! controller's [`Snapshot`] every frame.
//!
//! - **[`app`]** — application state and the keyboard/frame event loop
//! - **[`panes`]** — stateless render functions (algorithm tabs, bar chart, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! [`PlaybackController`]: crate::playback::PlaybackController
//! [`Command`]: crate::playback::Command
//! [`Snapshot`]: crate::playback::Snapshot

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
