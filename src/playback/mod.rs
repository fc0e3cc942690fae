//! Playback controller
//!
//! [`PlaybackController`] owns the [`ValueBuffer`], the [`StepSequence`] built
//! for it, and the cursor into that sequence. It is driven by two inputs:
//! [`Command`]s from the user and time from the frame loop.
//!
//! # State machine
//!
//! ```text
//!            start                    cursor == len
//!   Idle ───────────▶ Running ◀──────▶ Paused     Running ───────────▶ Finished
//!    ▲                        pause                                       │
//!    └────────────────────────── reset (from any state) ─────────────────┘
//! ```
//!
//! Illegal transitions are silent no-ops. Each pulse applies
//! [`steps_per_tick`] steps, so the work done per frame is bounded by the
//! highest speed level.

use crate::algorithms::Algorithm;
use crate::buffer::{Annotation, Counters, ValueBuffer};
use crate::config::{Config, MAX_ELEMENTS};
use crate::step::{StepKind, StepSequence};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;
use tracing::{debug, info};

pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 10;

/// Element counts reachable with grow/shrink
pub const SIZE_PRESETS: [usize; 6] = [25, 50, 75, 100, 150, 200];

/// Most pulses a single [`PlaybackController::tick`] will run to catch up
pub const MAX_CATCH_UP_PULSES: u32 = 4;

const SPEED_BASE: f64 = 2.8;
const SPEED_SCALE: f64 = 3.0;

/// Steps applied per pulse at a given speed level.
///
/// Exponential in the level: 1 step at level 1, 22 at level 10.
pub fn steps_per_tick(speed: u8) -> usize {
    let level = speed.clamp(MIN_SPEED, MAX_SPEED) - 1;
    SPEED_BASE.powf(f64::from(level) / SPEED_SCALE).round() as usize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No step sequence built yet
    Idle,
    Running,
    Paused,
    /// Every step applied
    Finished,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Idle => "READY",
            Mode::Running => "RUNNING",
            Mode::Paused => "PAUSED",
            Mode::Finished => "SORTED",
        }
    }
}

/// User commands accepted by [`PlaybackController::command`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Build the step sequence and run it (only from `Idle`)
    Start,
    /// Toggle between `Running` and `Paused`
    Pause,
    /// Reshuffle and return to `Idle`
    Reset,
    SpeedUp,
    SpeedDown,
    /// Next larger size preset (not while `Running`)
    GrowSize,
    /// Next smaller size preset (not while `Running`)
    ShrinkSize,
    /// Apply a single step (from `Idle` or `Paused`)
    StepOnce,
    /// Apply every remaining step
    SkipToEnd,
}

/// Read-only view handed to the renderer each frame
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub values: &'a [u32],
    pub annotations: &'a [Annotation],
    pub comparisons: u64,
    pub mutations: u64,
    pub cursor: usize,
    pub sequence_len: usize,
    pub mode: Mode,
    pub speed: u8,
    pub element_count: usize,
    pub algorithm: Algorithm,
    /// Kind of the most recently applied step
    pub current_step: Option<StepKind>,
}

/// Owns the buffer and steps through its recorded sort
#[derive(Debug)]
pub struct PlaybackController {
    algorithm: Algorithm,
    buffer: ValueBuffer,
    sequence: Option<StepSequence>,
    cursor: usize,
    mode: Mode,
    speed: u8,
    counters: Counters,
    rng: ChaCha8Rng,
    frame_interval: Duration,
    /// Wall time not yet turned into pulses
    pending: Duration,
}

impl PlaybackController {
    /// Create a controller with a freshly shuffled buffer
    pub fn new(config: Config) -> Self {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let buffer = ValueBuffer::shuffled(config.element_count, &mut rng);
        info!(
            algorithm = %config.algorithm,
            elements = buffer.len(),
            seed = ?config.seed,
            "controller created"
        );

        PlaybackController {
            algorithm: config.algorithm,
            buffer,
            sequence: None,
            cursor: 0,
            mode: Mode::Idle,
            speed: config.speed.clamp(MIN_SPEED, MAX_SPEED),
            counters: Counters::default(),
            rng,
            frame_interval: config.frame_interval,
            pending: Duration::ZERO,
        }
    }

    /// Switch algorithm and element count, then reshuffle.
    ///
    /// The count is clamped to `1..=MAX_ELEMENTS`.
    pub fn configure(&mut self, algorithm: Algorithm, element_count: usize) {
        self.algorithm = algorithm;
        self.reshuffle(element_count.clamp(1, MAX_ELEMENTS));
    }

    /// Replace the buffer with a fixed permutation of `1..=len` and return to `Idle`.
    ///
    /// Panics under the same conditions as [`ValueBuffer::from_values`].
    pub fn load_permutation(&mut self, values: Vec<u32>) {
        let buffer = ValueBuffer::from_values(values);
        self.discard_run();
        self.buffer = buffer;
    }

    pub fn command(&mut self, command: Command) {
        match command {
            Command::Start => self.start(),
            Command::Pause => self.toggle_run(),
            Command::Reset => self.reshuffle(self.buffer.len()),
            Command::SpeedUp => self.change_speed(1),
            Command::SpeedDown => self.change_speed(-1),
            Command::GrowSize => self.grow_size(),
            Command::ShrinkSize => self.shrink_size(),
            Command::StepOnce => self.step_once(),
            Command::SkipToEnd => self.skip_to_end(),
        }
    }

    /// Feed elapsed wall time; runs one pulse per frame interval that has passed
    pub fn tick(&mut self, delta: Duration) {
        if self.mode != Mode::Running {
            self.pending = Duration::ZERO;
            return;
        }

        self.pending += delta;
        let mut pulses = 0;
        while self.pending >= self.frame_interval && pulses < MAX_CATCH_UP_PULSES {
            self.pending -= self.frame_interval;
            self.pulse();
            pulses += 1;
        }
        if pulses == MAX_CATCH_UP_PULSES {
            // Drop the backlog rather than stall the next frame
            self.pending = Duration::ZERO;
        }
    }

    /// One playback tick: apply up to [`steps_per_tick`] steps if running
    pub fn pulse(&mut self) {
        if self.mode != Mode::Running {
            return;
        }
        self.advance(steps_per_tick(self.speed));
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let current_step = self
            .cursor
            .checked_sub(1)
            .and_then(|index| self.sequence.as_ref()?.get(index))
            .map(|step| step.kind);

        Snapshot {
            values: self.buffer.values(),
            annotations: self.buffer.annotations(),
            comparisons: self.counters.comparisons,
            mutations: self.counters.mutations,
            cursor: self.cursor,
            sequence_len: self.sequence.as_ref().map_or(0, StepSequence::len),
            mode: self.mode,
            speed: self.speed,
            element_count: self.buffer.len(),
            algorithm: self.algorithm,
            current_step,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    pub fn buffer(&self) -> &ValueBuffer {
        &self.buffer
    }

    pub fn sequence(&self) -> Option<&StepSequence> {
        self.sequence.as_ref()
    }

    fn start(&mut self) {
        if self.mode != Mode::Idle {
            return;
        }
        self.build();
        self.set_mode(Mode::Running);
    }

    fn build(&mut self) {
        let sequence = self.algorithm.record(self.buffer.values());
        debug_assert!(sequence.validate().is_ok(), "{:?}", sequence.validate());
        debug!(
            algorithm = %self.algorithm,
            elements = self.buffer.len(),
            steps = sequence.len(),
            comparisons = sequence.totals().comparisons,
            "step sequence built"
        );
        self.buffer.clear_annotations();
        self.sequence = Some(sequence);
        self.cursor = 0;
        self.counters = Counters::default();
    }

    fn toggle_run(&mut self) {
        match self.mode {
            Mode::Running => self.set_mode(Mode::Paused),
            Mode::Paused => self.set_mode(Mode::Running),
            Mode::Idle | Mode::Finished => {}
        }
    }

    fn step_once(&mut self) {
        match self.mode {
            Mode::Idle => {
                self.build();
                self.set_mode(Mode::Paused);
                self.advance(1);
            }
            Mode::Paused => self.advance(1),
            Mode::Running | Mode::Finished => {}
        }
    }

    fn skip_to_end(&mut self) {
        match self.mode {
            Mode::Idle => {
                self.build();
                self.set_mode(Mode::Paused);
            }
            Mode::Running | Mode::Paused => {}
            Mode::Finished => return,
        }
        let remaining = self.sequence.as_ref().map_or(0, StepSequence::len) - self.cursor;
        self.advance(remaining);
    }

    /// Apply up to `count` pending steps, finishing when the sequence runs out
    fn advance(&mut self, count: usize) {
        let Some(sequence) = self.sequence.as_ref() else {
            return;
        };
        if sequence.is_empty() {
            return;
        }

        let end = (self.cursor + count).min(sequence.len());
        for step in sequence.iter().take(end).skip(self.cursor) {
            step.apply(&mut self.buffer, &mut self.counters);
        }
        self.cursor = end;

        if self.cursor == sequence.len() {
            self.buffer.settle_all();
            self.set_mode(Mode::Finished);
        }
    }

    fn change_speed(&mut self, delta: i8) {
        let speed = self
            .speed
            .saturating_add_signed(delta)
            .clamp(MIN_SPEED, MAX_SPEED);
        if speed != self.speed {
            debug!(from = self.speed, to = speed, "speed changed");
            self.speed = speed;
        }
    }

    fn grow_size(&mut self) {
        if self.mode == Mode::Running {
            return;
        }
        let current = self.buffer.len();
        if let Some(&size) = SIZE_PRESETS.iter().find(|&&size| size > current) {
            self.reshuffle(size);
        }
    }

    fn shrink_size(&mut self) {
        if self.mode == Mode::Running {
            return;
        }
        let current = self.buffer.len();
        if let Some(&size) = SIZE_PRESETS.iter().rev().find(|&&size| size < current) {
            self.reshuffle(size);
        }
    }

    /// Drop any in-flight run and shuffle a new buffer of `size` elements
    fn reshuffle(&mut self, size: usize) {
        self.discard_run();
        self.buffer.reset(size, &mut self.rng);
        info!(
            algorithm = %self.algorithm,
            elements = self.buffer.len(),
            "buffer shuffled"
        );
    }

    fn discard_run(&mut self) {
        self.set_mode(Mode::Idle);
        self.sequence = None;
        self.cursor = 0;
        self.counters = Counters::default();
        self.pending = Duration::ZERO;
    }

    fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            debug!(from = ?self.mode, to = ?mode, cursor = self.cursor, "mode changed");
            self.mode = mode;
        }
    }
}
