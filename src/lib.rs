//! # Introduction
//!
//! Sortty animates comparison sorts as a bar chart in the terminal. Each
//! algorithm is run once, up front, and recorded as a sequence of discrete
//! steps; playback then replays those steps at a user-selected rate.
//!
//! ## Pipeline
//!
//! ```text
//! Shuffle → ValueBuffer → Driver → StepSequence → PlaybackController → TUI
//! ```
//!
//! 1. [`buffer`] — the permutation being sorted, per-element annotations and
//!    running counters.
//! 2. [`step`] — [`step::Step`] records, the immutable [`step::StepSequence`]
//!    and the [`step::StepRecorder`] drivers write into.
//! 3. [`algorithms`] — one driver per supported sort, plus plain reference
//!    implementations used to check the recorded counts.
//! 4. [`playback`] — the state machine that applies steps per tick and
//!    exposes a read-only [`playback::Snapshot`] for rendering.
//! 5. [`config`] — startup settings and their validation errors.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Bubble, selection, insertion, bottom-up merge, quick (Lomuto, last-element
//! pivot) and heap sort.

pub mod algorithms;
pub mod buffer;
pub mod config;
pub mod playback;
pub mod step;
pub mod ui;
