#![warn(clippy::all)]

use anyhow::{Context, Result};
use clap::Parser;
use conway_console::{
    parse_rle, prompt, seed,
    terminal::{KeyboardPacer, TerminalRenderer, TerminalSession},
    Config, Grid, InitMode, NiceInt, Simulation, SpeedMode, TerminationReason,
};
use std::{
    io,
    path::{Path, PathBuf},
    sync::Mutex,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Conway's Game of Life in the terminal. Stops on extinction or when a
/// configuration repeats.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Number of rows (asked interactively if omitted)
    #[arg(long)]
    rows: Option<usize>,

    /// Number of columns (asked interactively if omitted)
    #[arg(long)]
    cols: Option<usize>,

    /// Pause between generations (asked interactively if omitted)
    #[arg(short, long, value_enum)]
    speed: Option<SpeedMode>,

    /// How to fill the initial board (asked interactively if omitted)
    #[arg(short, long, value_enum, conflicts_with = "pattern")]
    init: Option<InitMode>,

    /// Start from a pattern in RLE format, centred on the board
    #[arg(short, long)]
    pattern: Option<PathBuf>,

    /// Random seed for reproducible boards
    #[arg(long)]
    seed: Option<u64>,

    /// Probability of a cell being alive on a random board
    #[arg(long, default_value_t = Config::DEFAULT_FILL_RATE)]
    fill_rate: f64,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}

fn pattern_board(cli: &Cli, path: &Path) -> Result<Grid> {
    let data =
        std::fs::read(path).with_context(|| format!("cannot read pattern {}", path.display()))?;
    let pattern = parse_rle(&data).with_context(|| format!("cannot parse {}", path.display()))?;
    let rows = cli.rows.unwrap_or(0).max(pattern.rows());
    let cols = cli.cols.unwrap_or(0).max(pattern.cols());
    let mut grid = Grid::new(rows, cols)?;
    grid.place(
        &pattern,
        (rows - pattern.rows()) / 2 + 1,
        (cols - pattern.cols()) / 2 + 1,
    )?;
    Ok(grid)
}

/// Fills in everything the command line left out, in the order the
/// interactive menu asks for it: dimensions, speed, then the board itself.
fn setup(
    cli: &Cli,
    input: &mut impl io::BufRead,
    output: &mut impl io::Write,
) -> Result<(Grid, SpeedMode)> {
    let pattern = cli.pattern.as_ref().map(|path| pattern_board(cli, path)).transpose()?;
    let dimensions = match &pattern {
        Some(grid) => (grid.rows(), grid.cols()),
        None => prompt::complete_dimensions(input, output, cli.rows, cli.cols)?,
    };
    let speed = match cli.speed {
        Some(speed) => speed,
        None => prompt::ask_speed(input, output)?,
    };
    if let Some(grid) = pattern {
        return Ok((grid, speed));
    }

    let (rows, cols) = dimensions;
    let mode = match cli.init {
        Some(mode) => mode,
        None => prompt::ask_init_mode(input, output)?,
    };
    let grid = match mode {
        InitMode::Random => seed::random(rows, cols, cli.seed, cli.fill_rate)?,
        InitMode::Manual => {
            let mut grid = Grid::new(rows, cols)?;
            prompt::ask_live_cells(input, output, &mut grid)?;
            grid
        }
    };
    Ok((grid, speed))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let (stdin, stdout) = (io::stdin(), io::stdout());
    let (mut input, mut output) = (stdin.lock(), stdout.lock());
    let (grid, speed) = setup(&cli, &mut input, &mut output)?;
    drop((input, output));
    info!(seed = cli.seed, fill_rate = cli.fill_rate, "board ready");

    let mut pacer = KeyboardPacer::default();
    let outcome = {
        let _session = TerminalSession::start().context("cannot set up the terminal")?;
        let mut renderer = TerminalRenderer::new(io::stdout(), speed);
        Simulation::new(grid, speed).run(&mut renderer, &mut pacer)?
    };
    info!(rate = pacer.rate(), "generations per second");

    match outcome.reason {
        TerminationReason::Extinct => println!("Game ended: extinction."),
        TerminationReason::Repeating => {
            println!("Game ended: stable or repeating configuration detected.")
        }
        TerminationReason::Interrupted => println!("Game interrupted."),
    }
    println!("Generations: {}", NiceInt::from(outcome.generations));
    Ok(())
}
