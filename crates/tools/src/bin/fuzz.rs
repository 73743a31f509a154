use std::collections::BTreeSet;

use anyhow::Result;
use clap::Parser;
use maze_core::types::{Pos, START};
use maze_core::{MazeContext, build_hint_path, find_path};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 500)]
    cases: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();
    println!("Starting fuzz harness on seed {} for {} cases...", args.seed, args.cases);

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    for case in 0..args.cases {
        let width = 1 + (rng.next_u64() as usize % 16);
        let height = 1 + (rng.next_u64() as usize % 16);
        let maze_seed = rng.next_u64();
        let walk_seed = rng.next_u64();

        let ctx = MazeContext::generate(width, height, maze_seed)
            .map_err(|e| anyhow::anyhow!("case {case}: generation failed: {e:?}"))?;
        let maze = ctx.maze();
        let field = ctx.field();

        // Spanning-tree shape.
        assert_eq!(
            maze.open_edge_count(),
            width * height - 1,
            "case {case}: open edge count for {width}x{height} seed {maze_seed}"
        );

        // Distance field anchors.
        assert_eq!(field.distance(START).expect("start"), 0, "case {case}");
        assert_eq!(
            field.distance(maze.finish()).expect("finish"),
            field.max_distance(),
            "case {case}: finish must be the farthest cell"
        );

        // Hint path descends to the start within the cell-count cap.
        let hint = build_hint_path(maze, field)
            .map_err(|e| anyhow::anyhow!("case {case}: hint failed: {e:?}"))?;
        assert!(hint.len() <= width * height, "case {case}: hint too long");
        assert_eq!(*hint.last().expect("nonempty"), START, "case {case}");

        // A* is optimal against the BFS distance.
        let path = find_path(&ctx, START, maze.finish())
            .map_err(|e| anyhow::anyhow!("case {case}: astar failed: {e:?}"))?;
        assert_eq!(
            path.len() - 1,
            field.max_distance() as usize,
            "case {case}: astar path is not shortest"
        );

        // The walker completes within its bound on a simple path.
        let mut walker = ctx
            .backtrack_walker_seeded(START, maze.finish(), walk_seed)
            .map_err(|e| anyhow::anyhow!("case {case}: walker setup failed: {e:?}"))?;
        let walk = walker
            .run_to_completion(&ctx)
            .map_err(|e| anyhow::anyhow!("case {case}: walk failed: {e:?}"))?;
        let unique: BTreeSet<Pos> = walk.iter().copied().collect();
        assert_eq!(unique.len(), walk.len(), "case {case}: walk path has a cycle");
        assert_eq!(*walk.last().expect("nonempty"), maze.finish(), "case {case}");
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
