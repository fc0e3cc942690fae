// Sortty: step-recording sorting visualizer for the terminal

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use sortty::algorithms::{reference, Algorithm};
use sortty::config::Config;
use sortty::playback::{Command, Mode, PlaybackController};
use sortty::ui::App;

/// Environment variable holding the log filter (e.g. `sortty=debug`)
const LOG_ENV: &str = "SORTTY_LOG";

#[derive(Parser, Debug)]
#[command(name = "sortty", version, about = "Watch comparison sorts run, one step at a time")]
struct Args {
    /// Algorithm to start with (bubble, selection, insertion, merge, quick, heap)
    #[arg(short, long, default_value = "bubble")]
    algorithm: Algorithm,

    /// Number of elements to sort
    #[arg(short = 'n', long, default_value_t = 100)]
    size: usize,

    /// Playback speed level (1-10)
    #[arg(short, long, default_value_t = 5)]
    speed: u8,

    /// Seed for the shuffle, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Playback ticks per second
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Write logs to this file (filter with SORTTY_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Run to completion without the TUI and print the counters
    #[arg(long)]
    headless: bool,

    /// With --headless, run every algorithm on the same permutation
    #[arg(long, requires = "headless")]
    all: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let config = Config {
        algorithm: args.algorithm,
        element_count: args.size,
        speed: args.speed,
        seed: args.seed,
        ..Config::default()
    };
    let config = match config.with_fps(args.fps) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if args.headless {
        run_headless(config, args.all);
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(PlaybackController::new(config));
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Install a file-backed subscriber; stderr belongs to the TUI
fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Play each selected algorithm to the end and print its counters next to
/// the reference implementation's
fn run_headless(config: Config, all: bool) {
    // Every algorithm must see the same permutation
    let seed = config.seed.unwrap_or_else(rand::random);
    let algorithms: Vec<Algorithm> = if all {
        Algorithm::ALL.to_vec()
    } else {
        vec![config.algorithm]
    };

    println!(
        "{} elements, speed {}, seed {}",
        config.element_count, config.speed, seed
    );
    println!(
        "{:<16} {:>8} {:>8} {:>12} {:>10} {:>12} {:>10}  check",
        "algorithm", "steps", "ticks", "comparisons", "mutations", "ref cmp", "ref mut"
    );

    for algorithm in algorithms {
        let mut controller = PlaybackController::new(Config {
            algorithm,
            seed: Some(seed),
            ..config.clone()
        });
        let mut reference_values = controller.buffer().values().to_vec();
        let expected = reference::sort(algorithm, &mut reference_values);

        controller.command(Command::Start);
        let mut ticks = 0u64;
        while controller.mode() == Mode::Running {
            controller.pulse();
            ticks += 1;
        }

        let snapshot = controller.snapshot();
        let sorted = controller.buffer().is_sorted();
        let matches = controller.counters() == expected;
        println!(
            "{:<16} {:>8} {:>8} {:>12} {:>10} {:>12} {:>10}  {}",
            algorithm.name(),
            snapshot.sequence_len,
            ticks,
            snapshot.comparisons,
            snapshot.mutations,
            expected.comparisons,
            expected.mutations,
            if sorted && matches { "ok" } else { "MISMATCH" }
        );
    }
}
