//! Frame sinks: a text renderer for the terminal and a JSON Lines writer.

use std::io::{self, Write};

use serde::Serialize;

use voidrun_core::constants::{GRID_HEIGHT, GRID_WIDTH};
use voidrun_core::enums::GamePhase;
use voidrun_core::state::{FrameSnapshot, GameOverReport};

const EMPTY_CELL: char = '.';

/// Receives everything the driver shows the player.
pub trait FrameSink: Send {
    /// One line produced outside a tick, e.g. the reply to an input token.
    fn log(&mut self, line: &str) -> io::Result<()>;
    /// The state after one tick.
    fn frame(&mut self, snapshot: &FrameSnapshot) -> io::Result<()>;
    /// Final statistics, written once.
    fn game_over(&mut self, report: &GameOverReport) -> io::Result<()>;
}

/// Writes frames as plain text.
pub struct ConsoleSink<W: Write + Send> {
    out: W,
    show_grid: bool,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            show_grid: true,
        }
    }

    pub fn with_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> FrameSink for ConsoleSink<W> {
    fn log(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")?;
        self.out.flush()
    }

    fn frame(&mut self, snapshot: &FrameSnapshot) -> io::Result<()> {
        writeln!(
            self.out,
            "[tick {}] {}",
            snapshot.time.tick,
            stat_line(snapshot)
        )?;
        if snapshot.phase == GamePhase::Paused {
            writeln!(self.out, "-- paused --")?;
        }
        if self.show_grid {
            write!(self.out, "{}", render_grid(snapshot))?;
        }
        for line in &snapshot.log_lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }

    fn game_over(&mut self, report: &GameOverReport) -> io::Result<()> {
        writeln!(self.out, "{report}")?;
        self.out.flush()
    }
}

/// `Score: 0 | Health: 100 | ...`
pub fn stat_line(snapshot: &FrameSnapshot) -> String {
    snapshot
        .stats
        .iter()
        .map(|s| format!("{}: {}", s.label, s.value))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Draw the grid, one row per line. Later entities overwrite earlier ones,
/// so the ship is always visible.
pub fn render_grid(snapshot: &FrameSnapshot) -> String {
    let mut cells = vec![vec![EMPTY_CELL; GRID_WIDTH as usize]; GRID_HEIGHT as usize];
    for view in &snapshot.entities {
        if view.pos().in_bounds() {
            cells[view.y as usize][view.x as usize] = view.kind.glyph();
        }
    }
    let mut grid = String::with_capacity(((GRID_WIDTH + 1) * GRID_HEIGHT) as usize);
    for row in cells {
        grid.extend(row);
        grid.push('\n');
    }
    grid
}

/// One line of JSON output.
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum JsonRecord<'a> {
    Log { line: &'a str },
    Frame { snapshot: &'a FrameSnapshot },
    GameOver { report: &'a GameOverReport },
}

/// Writes every frame, log line and the final report as one JSON object
/// per line.
pub struct JsonSink<W: Write + Send> {
    out: W,
}

impl JsonSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_record(&mut self, record: &JsonRecord<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, record)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: Write + Send> FrameSink for JsonSink<W> {
    fn log(&mut self, line: &str) -> io::Result<()> {
        self.write_record(&JsonRecord::Log { line })
    }

    fn frame(&mut self, snapshot: &FrameSnapshot) -> io::Result<()> {
        self.write_record(&JsonRecord::Frame { snapshot })
    }

    fn game_over(&mut self, report: &GameOverReport) -> io::Result<()> {
        self.write_record(&JsonRecord::GameOver { report })
    }
}
