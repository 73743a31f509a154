use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use maze_core::types::{Direction, Pos};
use maze_core::{
    Maze, MazeContext, SolveTrace, load_trace, record_astar, record_backtrack, replay, save_trace,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Carve a maze and print it with its hint path overlaid.
    Generate {
        #[arg(long, default_value_t = 10)]
        width: usize,
        #[arg(long, default_value_t = 10)]
        height: usize,
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
    },
    /// Run a solver from the start to the finish, optionally recording a
    /// trace file.
    Solve {
        #[arg(long, default_value_t = 10)]
        width: usize,
        #[arg(long, default_value_t = 10)]
        height: usize,
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        #[arg(long, value_enum, default_value_t = SolverArg::Astar)]
        solver: SolverArg,
        /// Exploration seed for the backtracking walker.
        #[arg(long, default_value_t = 0)]
        walk_seed: u64,
        #[arg(long)]
        trace_out: Option<PathBuf>,
    },
    /// Load a trace file, verify its digest, and replay it for determinism.
    Replay {
        trace: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SolverArg {
    Astar,
    Backtrack,
}

fn main() -> Result<()> {
    match Args::parse().command {
        Command::Generate { width, height, seed } => generate(width, height, seed),
        Command::Solve { width, height, seed, solver, walk_seed, trace_out } => {
            solve(width, height, seed, solver, walk_seed, trace_out)
        }
        Command::Replay { trace } => replay_file(&trace),
    }
}

fn generate(width: usize, height: usize, seed: u64) -> Result<()> {
    let ctx = MazeContext::generate(width, height, seed)
        .map_err(|e| anyhow::anyhow!("generation failed: {e:?}"))?;
    let hint = ctx.hint_path().map_err(|e| anyhow::anyhow!("hint failed: {e:?}"))?;

    print!("{}", render_maze(ctx.maze(), &hint));
    println!("seed:        {seed}");
    println!("finish:      ({}, {})", ctx.maze().finish().x, ctx.maze().finish().y);
    println!("hint length: {}", hint.len());
    println!("fingerprint: {:016x}", ctx.maze().fingerprint());
    Ok(())
}

fn solve(
    width: usize,
    height: usize,
    seed: u64,
    solver: SolverArg,
    walk_seed: u64,
    trace_out: Option<PathBuf>,
) -> Result<()> {
    let trace: SolveTrace = match solver {
        SolverArg::Astar => record_astar(width, height, seed),
        SolverArg::Backtrack => record_backtrack(width, height, seed, walk_seed),
    }
    .map_err(|e| anyhow::anyhow!("solve failed: {e:?}"))?;

    let goal = trace.positions.last().expect("a recorded run is never empty");
    println!("solver:    {:?}", trace.solver);
    println!("moves:     {}", trace.positions.len() - 1);
    println!("reached:   ({}, {})", goal.x, goal.y);

    if let Some(path) = trace_out {
        save_trace(&path, &trace).map_err(|e| anyhow::anyhow!("saving trace failed: {e}"))?;
        println!("trace written to {}", path.display());
    }
    Ok(())
}

fn replay_file(path: &Path) -> Result<()> {
    let trace =
        load_trace(path).map_err(|e| anyhow::anyhow!("loading {} failed: {e}", path.display()))?;
    let report =
        replay(&trace).map_err(|e| anyhow::anyhow!("replay diverged: {e:?}"))?;

    println!("Replay verified.");
    println!("steps:            {}", report.steps);
    println!("maze fingerprint: {:016x}", report.maze_fingerprint);
    Ok(())
}

/// ASCII wall art: `S` start, `F` finish, `.` hint cells. The north row is
/// printed first, so the start sits at the bottom-left.
fn render_maze(maze: &Maze, hint: &[Pos]) -> String {
    let hint_cells: BTreeSet<Pos> = hint.iter().copied().collect();
    let mut out = String::new();

    out.push('+');
    for _ in 0..maze.width() {
        out.push_str("--+");
    }
    out.push('\n');

    for y in (0..maze.height()).rev() {
        for x in 0..maze.width() {
            let pos = Pos { y: y as i32, x: x as i32 };
            out.push(if maze.is_open(pos, Direction::West) { ' ' } else { '|' });
            if pos == maze.start() {
                out.push_str("S ");
            } else if pos == maze.finish() {
                out.push_str("F ");
            } else if hint_cells.contains(&pos) {
                out.push_str(". ");
            } else {
                out.push_str("  ");
            }
        }
        out.push('|');
        out.push('\n');

        out.push('+');
        for x in 0..maze.width() {
            let pos = Pos { y: y as i32, x: x as i32 };
            out.push_str(if maze.is_open(pos, Direction::South) { "  +" } else { "--+" });
        }
        out.push('\n');
    }
    out
}
