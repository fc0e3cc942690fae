//! Sorting algorithm drivers
//!
//! Each driver runs its algorithm once, synchronously, against a
//! [`StepRecorder`]'s private working copy and records one [`Step`] per
//! visual event:
//! - [`bubble`]: one step per adjacent comparison
//! - [`selection`]: one step per outer index (minimum scan plus swap)
//! - [`insertion`]: one step per key (whole shift loop)
//! - [`merge`]: bottom-up, one step per merge window
//! - [`quick`]: Lomuto partition over a work stack, one step per partition
//! - [`heap`]: one step per sift-down level and per root extraction
//!
//! [`reference`] holds plain implementations with the same counting rules.
//!
//! [`Step`]: crate::step::Step

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod reference;
pub mod selection;

use crate::config::errors::ConfigError;
use crate::step::{StepRecorder, StepSequence};
use std::fmt;
use std::str::FromStr;

/// The supported comparison sorts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
        }
    }

    /// Average-case time complexity
    pub fn complexity(self) -> &'static str {
        match self {
            Algorithm::Bubble | Algorithm::Selection | Algorithm::Insertion => "O(n²)",
            Algorithm::Merge | Algorithm::Quick | Algorithm::Heap => "O(n log n)",
        }
    }

    /// Zero-based position in [`Algorithm::ALL`]
    pub fn index(self) -> usize {
        match self {
            Algorithm::Bubble => 0,
            Algorithm::Selection => 1,
            Algorithm::Insertion => 2,
            Algorithm::Merge => 3,
            Algorithm::Quick => 4,
            Algorithm::Heap => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Algorithm> {
        Self::ALL.get(index).copied()
    }

    /// Cycle forward through [`Algorithm::ALL`]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Cycle backward through [`Algorithm::ALL`]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Run the driver over `initial` and return the recorded steps
    pub fn record(self, initial: &[u32]) -> StepSequence {
        let mut recorder = StepRecorder::new(initial);
        match self {
            Algorithm::Bubble => bubble::record(&mut recorder),
            Algorithm::Selection => selection::record(&mut recorder),
            Algorithm::Insertion => insertion::record(&mut recorder),
            Algorithm::Merge => merge::record(&mut recorder),
            Algorithm::Quick => quick::record(&mut recorder),
            Algorithm::Heap => heap::record(&mut recorder),
        }
        recorder.finish()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        let name = normalized.strip_suffix("sort").unwrap_or(&normalized);
        match name {
            "bubble" => Ok(Algorithm::Bubble),
            "selection" => Ok(Algorithm::Selection),
            "insertion" => Ok(Algorithm::Insertion),
            "merge" => Ok(Algorithm::Merge),
            "quick" => Ok(Algorithm::Quick),
            "heap" => Ok(Algorithm::Heap),
            _ => Err(ConfigError::UnknownAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}
