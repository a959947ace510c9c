use clap::{Parser, ValueEnum};
use forest_fire_core::{
    CellStatus, ForestGrid, ForestSimulation, SimulationConfig, SimulationStats, UpdateMode,
};
use std::error::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Forest fire automaton without a display
#[derive(Parser, Debug)]
#[command(name = "forest-fire-headless")]
#[command(about = "Run the forest fire automaton and print population reports", long_about = None)]
struct Args {
    /// Grid height in cells
    #[arg(long, default_value_t = 120)]
    rows: usize,

    /// Grid width in cells
    #[arg(long, default_value_t = 160)]
    cols: usize,

    /// Pixel size of one cell in render positions
    #[arg(long, default_value_t = 5)]
    cell_size: u32,

    /// Number of ticks to run
    #[arg(short, long, default_value_t = 1000)]
    ticks: u64,

    /// Generator seed (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print a report every N ticks
    #[arg(short, long, default_value_t = 50)]
    report_interval: u64,

    /// How each tick commits cell updates
    #[arg(short, long, value_enum, default_value_t = ModeArg::InPlace)]
    mode: ModeArg,

    /// Status every cell starts in
    #[arg(long, value_enum, default_value_t = StatusArg::Young)]
    initial: StatusArg,

    /// Set a cell on fire before the first tick, as ROW,COL (repeatable)
    #[arg(short, long = "ignite", value_parser = parse_cell)]
    ignite: Vec<(usize, usize)>,

    /// Stop early once no cell is burning
    #[arg(long)]
    stop_when_out: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    InPlace,
    DoubleBuffered,
}

impl From<ModeArg> for UpdateMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::InPlace => UpdateMode::InPlace,
            ModeArg::DoubleBuffered => UpdateMode::DoubleBuffered,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StatusArg {
    Young,
    Mature,
    Ashes,
}

impl From<StatusArg> for CellStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Young => CellStatus::Young,
            StatusArg::Mature => CellStatus::Mature,
            StatusArg::Ashes => CellStatus::Ashes,
        }
    }
}

fn parse_cell(raw: &str) -> Result<(usize, usize), String> {
    let (row, col) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{raw}'"))?;
    let row = row.trim().parse().map_err(|e| format!("bad row '{row}': {e}"))?;
    let col = col.trim().parse().map_err(|e| format!("bad column '{col}': {e}"))?;
    Ok((row, col))
}

/// Pixel extent covered by the grid, from the far corner's render position
fn canvas_size(grid: &ForestGrid, cell_size: u32) -> (u64, u64) {
    let corner = grid.cell_at(grid.rows() - 1, grid.cols() - 1).position();
    (
        u64::from(corner.x) + u64::from(cell_size),
        u64::from(corner.y) + u64::from(cell_size),
    )
}

fn print_report(stats: &SimulationStats) {
    println!(
        "{:6} | {:6} | {:6} | {:6} | {:6} | {:6} | {:6}",
        stats.tick,
        stats.count(CellStatus::Young),
        stats.count(CellStatus::Mature),
        stats.count(CellStatus::StartBurning),
        stats.count(CellStatus::Burning),
        stats.count(CellStatus::EndBurning),
        stats.count(CellStatus::Ashes),
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = SimulationConfig::new(args.rows, args.cols)
        .with_cell_size(args.cell_size)
        .with_initial_status(args.initial.into())
        .with_update_mode(args.mode.into());
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut sim = ForestSimulation::new(&config)?;

    for &(row, col) in &args.ignite {
        if !sim.ignite(row, col) {
            return Err(format!(
                "ignition point {row},{col} is outside the {}x{} grid",
                sim.rows(),
                sim.cols()
            )
            .into());
        }
    }

    println!("=== Forest Fire Automaton ===");
    println!("Grid: {} x {} cells", sim.rows(), sim.cols());
    let (width, height) = canvas_size(sim.grid(), args.cell_size);
    println!("Canvas: {width} x {height} px");
    println!("Seed: {}", sim.seed());
    println!("Update mode: {:?}", sim.update_mode());
    println!("Ignition points: {}", args.ignite.len());
    println!();
    println!("  Tick |  Young | Mature |  Start |   Burn |    End |  Ashes");
    println!("-------|--------|--------|--------|--------|--------|-------");

    let report_interval = args.report_interval.max(1);
    let mut peak_burning = 0;
    let mut peak_tick = 0;
    print_report(&sim.stats());

    while sim.tick_count() < args.ticks {
        sim.tick();
        let stats = sim.stats();

        if stats.burning() > peak_burning {
            peak_burning = stats.burning();
            peak_tick = stats.tick;
        }
        if stats.tick % report_interval == 0 {
            print_report(&stats);
        }
        if args.stop_when_out && stats.burning() == 0 {
            info!("Fire is out after {} ticks", stats.tick);
            break;
        }
    }

    let stats = sim.stats();
    println!("\n=== Simulation Complete ===");
    println!("Ticks run: {}", stats.tick);
    println!("Peak burning cells: {peak_burning} (tick {peak_tick})");
    println!("Final census: {stats}");
    for status in CellStatus::ALL {
        println!("  {:>14}: {:5.1}%", status.name(), stats.fraction(status) * 100.0);
    }

    Ok(())
}
