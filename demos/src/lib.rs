//! Shared pieces of the mazepath terminal demos: maze selection from the
//! command line and ASCII rendering of search results.

use std::error::Error;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use mazepath_core::{Maze, MazeGen, Position};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Preset maze sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Side length of the square maze.
    pub const fn size(self) -> usize {
        match self {
            Self::Easy => 11,
            Self::Medium => 15,
            Self::Hard => 21,
        }
    }
}

/// How to build a random maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeConfig {
    pub width: usize,
    pub height: usize,
    /// `None` draws a fresh seed from the thread RNG.
    pub seed: Option<u64>,
    /// Extra walls knocked out after carving, to create loops.
    pub loops: usize,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self::from(Difficulty::default())
    }
}

impl From<Difficulty> for MazeConfig {
    fn from(d: Difficulty) -> Self {
        Self {
            width: d.size(),
            height: d.size(),
            seed: None,
            loops: d.size() / 2,
        }
    }
}

impl MazeConfig {
    /// Generate the maze; start is the top-left room, end the bottom-right.
    pub fn generate(&self) -> Result<(Maze, Position, Position), Box<dyn Error>> {
        let seed = self.seed.unwrap_or_else(rand::random);
        log::debug!("generating {}x{} maze, seed {seed}", self.width, self.height);
        let mut mg = MazeGen::new(StdRng::seed_from_u64(seed));
        let mut maze = mg.backtracker(self.width, self.height)?;
        mg.braid(&mut maze, self.loops);
        let start = Position::new(1, 1);
        let end = Position::new(maze.width() as i32 - 2, maze.height() as i32 - 2);
        Ok((maze, start, end))
    }
}

/// Maze selection flags shared by the demo binaries.
#[derive(Debug, Args)]
pub struct MazeArgs {
    /// Preset size of the generated maze
    #[arg(short, long, value_enum, default_value_t = Difficulty::Easy)]
    pub difficulty: Difficulty,

    /// Seed for the maze generator (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Load an ASCII maze instead ('#' wall, '.' open, 'S' start, 'E' end)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Override the start position, as "x,z"
    #[arg(long)]
    pub start: Option<Position>,

    /// Override the end position, as "x,z"
    #[arg(long)]
    pub end: Option<Position>,
}

impl MazeArgs {
    /// Build the maze and endpoints described by the flags.
    pub fn load(&self) -> Result<(Maze, Position, Position), Box<dyn Error>> {
        let (maze, start, end) = match &self.file {
            Some(path) => {
                let text = std::fs::read_to_string(path)?;
                let parsed = Maze::parse(&text)?;
                let start = parsed.start.or(self.start).ok_or("maze has no start ('S')")?;
                let end = parsed.end.or(self.end).ok_or("maze has no end ('E')")?;
                (parsed.maze, start, end)
            }
            None => MazeConfig {
                seed: self.seed,
                ..MazeConfig::from(self.difficulty)
            }
            .generate()?,
        };
        let start = self.start.unwrap_or(start);
        let end = self.end.unwrap_or(end);
        maze.check_endpoints(start, end)?;
        Ok((maze, start, end))
    }
}

/// Draw `maze` with the exploration trace and path on top.
///
/// `#` wall, `.` unexplored, `o` explored, `*` path, `S` / `E` endpoints.
pub fn render(
    maze: &Maze,
    start: Position,
    end: Position,
    visited: &[Position],
    path: &[Position],
) -> String {
    let mut glyphs: Vec<char> = maze
        .iter()
        .map(|(_, c)| if c.is_wall { '#' } else { '.' })
        .collect();
    let mut mark = |p: Position, ch: char| {
        if let Some(i) = maze.index(p) {
            glyphs[i] = ch;
        }
    };
    for &p in visited {
        mark(p, 'o');
    }
    for &p in path {
        mark(p, '*');
    }
    mark(start, 'S');
    mark(end, 'E');

    let mut out = String::with_capacity(glyphs.len() + maze.height());
    for row in glyphs.chunks(maze.width()) {
        out.extend(row);
        out.push('\n');
    }
    out
}

/// Format a millisecond duration the way the demos print it.
pub fn format_ms(ms: f64) -> String {
    format!("{ms:.3}ms")
}
