//! Interactive Forest Fire Viewer
//!
//! Draws the automaton in the terminal, one colored block per cell, and
//! advances it once per frame.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package demo-interactive -- --seed 42
//! ```
//!
//! # Keys
//!
//! - `q` / `Esc` - Quit
//! - `Space` - Pause or resume
//! - `s` - Advance one tick while paused
//! - `i` - Ignite the center cell
//! - `r` - Restart with the same config
//! - `m` - Toggle in-place / double-buffered updates
//!
//! Logs go to `forest-fire.log` (filter with `RUST_LOG`) since the terminal
//! is taken over by the viewer.

use clap::Parser;
use forest_fire_core::{
    CellStatus, ForestCell, ForestGrid, ForestSimulation, SimulationConfig, UpdateMode,
};
use ratatui::{
    buffer::Buffer,
    crossterm::event::{self, Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
    DefaultTerminal, Frame,
};
use std::{
    error::Error,
    fs::File,
    io,
    sync::Mutex,
    thread,
    time::{Duration, Instant},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "forest-fire.log";

/// Terminal viewer for the forest fire automaton
#[derive(Parser, Debug)]
#[command(name = "forest-fire-viewer")]
#[command(about = "Watch the forest fire automaton in the terminal", long_about = None)]
struct Args {
    /// Grid height in cells
    #[arg(long, default_value_t = 40)]
    rows: usize,

    /// Grid width in cells
    #[arg(long, default_value_t = 80)]
    cols: usize,

    /// Generator seed (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Pixel size of one cell in render positions
    #[arg(long, default_value_t = 5)]
    cell_size: u32,

    /// Target time per frame in milliseconds
    #[arg(short, long, default_value_t = 100)]
    frame_ms: u64,

    /// Start with every cell mature instead of young
    #[arg(long)]
    mature: bool,

    /// Use double-buffered updates
    #[arg(long)]
    double_buffered: bool,
}

impl Args {
    fn to_config(&self) -> SimulationConfig {
        let initial = if self.mature {
            CellStatus::Mature
        } else {
            CellStatus::Young
        };
        let mode = if self.double_buffered {
            UpdateMode::DoubleBuffered
        } else {
            UpdateMode::InPlace
        };

        let mut config = SimulationConfig::new(self.rows, self.cols)
            .with_initial_status(initial)
            .with_update_mode(mode)
            .with_cell_size(self.cell_size)
            .with_frame_interval_ms(self.frame_ms);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

/// Display color of each status
fn status_color(status: CellStatus) -> Color {
    match status {
        CellStatus::Young => Color::LightGreen,
        CellStatus::Mature => Color::Green,
        CellStatus::StartBurning => Color::Yellow,
        CellStatus::Burning => Color::Red,
        CellStatus::EndBurning => Color::LightRed,
        CellStatus::Ashes => Color::DarkGray,
    }
}

/// Terminal columns per cell, so blocks look roughly square
const COLUMNS_PER_CELL: u16 = 2;

/// Grid widget drawing every cell at its render position.
///
/// Pixel positions are divided by the grid's cell size to get one terminal
/// row per cell row. Cells that do not fit in the area are clipped.
struct ForestView<'a> {
    grid: &'a ForestGrid,
    cell_size: u32,
}

impl ForestView<'_> {
    /// Terminal offset of a cell inside the widget area, `None` once off-screen
    fn offset(&self, cell: &ForestCell, area: Rect) -> Option<(u16, u16)> {
        let position = cell.position();
        let col = u16::try_from(position.x / self.cell_size).ok()?;
        let row = u16::try_from(position.y / self.cell_size).ok()?;
        let dx = col.checked_mul(COLUMNS_PER_CELL)?;
        if row >= area.height || dx.checked_add(COLUMNS_PER_CELL)? > area.width {
            return None;
        }
        Some((dx, row))
    }
}

impl Widget for ForestView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for cell in self.grid.cells() {
            let Some((dx, dy)) = self.offset(cell, area) else {
                continue;
            };
            let color = status_color(cell.status());
            for step in 0..COLUMNS_PER_CELL {
                if let Some(target) = buf.cell_mut((area.x + dx + step, area.y + dy)) {
                    target.set_symbol("█").set_fg(color);
                }
            }
        }
    }
}

struct App {
    config: SimulationConfig,
    sim: ForestSimulation,
    paused: bool,
    step_once: bool,
}

impl App {
    fn new(config: SimulationConfig) -> Result<Self, Box<dyn Error>> {
        let sim = Self::fresh_simulation(&config)?;
        Ok(Self {
            config,
            sim,
            paused: false,
            step_once: false,
        })
    }

    fn fresh_simulation(config: &SimulationConfig) -> Result<ForestSimulation, Box<dyn Error>> {
        let mut sim = ForestSimulation::new(config)?;
        sim.ignite(config.rows / 2, config.cols / 2);
        Ok(sim)
    }

    fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.config.frame_interval_ms)
    }

    /// Drain pending input. Returns false once the user asked to quit.
    fn handle_events(&mut self) -> io::Result<bool> {
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(false),
                KeyCode::Char(' ') => self.paused = !self.paused,
                KeyCode::Char('s') => self.step_once = true,
                KeyCode::Char('i') => {
                    self.sim.ignite(self.sim.rows() / 2, self.sim.cols() / 2);
                }
                KeyCode::Char('m') => {
                    let mode = match self.sim.update_mode() {
                        UpdateMode::InPlace => UpdateMode::DoubleBuffered,
                        UpdateMode::DoubleBuffered => UpdateMode::InPlace,
                    };
                    info!("Switching update mode to {:?}", mode);
                    self.sim.set_update_mode(mode);
                }
                KeyCode::Char('r') => match Self::fresh_simulation(&self.config) {
                    Ok(sim) => {
                        info!("Restarted simulation");
                        self.sim = sim;
                    }
                    Err(e) => warn!("Restart failed: {}", e),
                },
                _ => {}
            }
        }
        Ok(true)
    }

    fn advance(&mut self) {
        if !self.paused || self.step_once {
            self.sim.tick();
            self.step_once = false;
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let [grid_area, status_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(frame.area());

        let title = format!(
            " Forest Fire {}x{} seed {} ",
            self.sim.rows(),
            self.sim.cols(),
            self.sim.seed()
        );
        let block = Block::default().borders(Borders::ALL).title(title);
        let inner = block.inner(grid_area);
        frame.render_widget(block, grid_area);
        frame.render_widget(
            ForestView {
                grid: self.sim.grid(),
                cell_size: self.config.cell_size,
            },
            inner,
        );

        let stats = self.sim.stats();
        let state = if self.paused { "paused" } else { "running" };
        let status_line = Line::from(format!(
            "{stats} | burning={} | {:?} | {state}",
            stats.burning(),
            self.sim.update_mode()
        ));
        let help = Block::default()
            .borders(Borders::ALL)
            .title(" q quit | space pause | s step | i ignite | r restart | m mode ");
        frame.render_widget(
            Paragraph::new(status_line)
                .style(Style::default().fg(Color::White))
                .block(help),
            status_area,
        );
    }
}

/// Frame loop: input, draw, tick, then sleep out the rest of the frame budget.
fn run(terminal: &mut DefaultTerminal, app: &mut App) -> Result<(), Box<dyn Error>> {
    let frame_interval = app.frame_interval();
    loop {
        let frame_start = Instant::now();

        if !app.handle_events()? {
            return Ok(());
        }
        terminal.draw(|frame| app.draw(frame))?;
        app.advance();

        thread::sleep(frame_interval.saturating_sub(frame_start.elapsed()));
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let log_file = File::create(LOG_FILE)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let args = Args::parse();
    let mut app = App::new(args.to_config())?;

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &mut app);
    ratatui::restore();

    info!("Viewer closed after {} ticks", app.sim.tick_count());
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_places_cells_by_render_position() {
        let grid = ForestGrid::new(3, 4, 5, CellStatus::Young).unwrap();
        let view = ForestView {
            grid: &grid,
            cell_size: 5,
        };
        let area = Rect::new(0, 0, 6, 2);

        // (row 1, col 2) sits at pixel (10, 5): terminal row 1, columns 4-5
        assert_eq!(view.offset(grid.cell_at(1, 2), area), Some((4, 1)));
        // Column 3 needs terminal columns 6-7 and row 2 is below the area
        assert_eq!(view.offset(grid.cell_at(0, 3), area), None);
        assert_eq!(view.offset(grid.cell_at(2, 0), area), None);
    }

    #[test]
    fn test_render_clips_to_area() {
        let grid = ForestGrid::new(2, 2, 3, CellStatus::Ashes).unwrap();
        let area = Rect::new(1, 1, 3, 2);
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 4));
        ForestView {
            grid: &grid,
            cell_size: 3,
        }
        .render(area, &mut buf);

        let painted: Vec<(u16, u16)> = (0..4)
            .flat_map(|y| (0..6).map(move |x| (x, y)))
            .filter(|&(x, y)| buf[(x, y)].symbol() == "█")
            .collect();
        // Only column 0 of each row fits in three terminal columns
        assert_eq!(painted, vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
        assert_eq!(buf[(1, 1)].fg, status_color(CellStatus::Ashes));
    }
}
