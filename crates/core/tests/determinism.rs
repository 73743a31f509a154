use maze_core::types::START;
use maze_core::{MazeContext, generate_maze, record_astar, record_backtrack, replay};

#[test]
fn identical_seeds_produce_identical_mazes_and_hints() {
    let left = MazeContext::generate(9, 7, 42).expect("generate");
    let right = MazeContext::generate(9, 7, 42).expect("generate");

    assert_eq!(left.maze().canonical_bytes(), right.maze().canonical_bytes());
    assert_eq!(left.maze().fingerprint(), right.maze().fingerprint());
    assert_eq!(left.hint_path().expect("hint"), right.hint_path().expect("hint"));
}

#[test]
fn different_seeds_produce_different_mazes() {
    for (a, b) in [(1_u64, 2_u64), (42, 43), (1_000, 1_000_000)] {
        let left = generate_maze(9, 7, a).expect("carve");
        let right = generate_maze(9, 7, b).expect("carve");
        assert_ne!(
            left.canonical_bytes(),
            right.canonical_bytes(),
            "seeds {a} and {b} should carve different walls"
        );
    }
}

#[test]
fn recorded_astar_runs_replay_bit_for_bit() {
    for seed in [0_u64, 7, 12_345, u64::MAX] {
        let trace = record_astar(8, 8, seed).expect("record");
        replay(&trace).expect("replay");
    }
}

#[test]
fn recorded_backtrack_runs_replay_bit_for_bit() {
    for (maze_seed, walk_seed) in [(1_u64, 1_u64), (7, 99), (12_345, 0)] {
        let trace = record_backtrack(8, 8, maze_seed, walk_seed).expect("record");
        replay(&trace).expect("replay");
    }
}

#[test]
fn exploration_seed_does_not_change_the_final_path() {
    let ctx = MazeContext::generate(10, 10, 500).expect("generate");
    let goal = ctx.maze().finish();

    let mut a = ctx.backtrack_walker_seeded(START, goal, 1).expect("walker");
    let mut b = ctx.backtrack_walker_seeded(START, goal, 2).expect("walker");
    let path_a = a.run_to_completion(&ctx).expect("walk");
    let path_b = b.run_to_completion(&ctx).expect("walk");

    // Both routes end at the same finish; the maze is a tree, so the simple
    // path is unique even when the exploration order differs.
    assert_eq!(path_a, path_b);
}

#[test]
fn regeneration_with_the_same_seed_reproduces_the_maze() {
    let mut ctx = MazeContext::generate(6, 6, 77).expect("generate");
    let original = ctx.maze().canonical_bytes();

    ctx.regenerate(78).expect("regenerate");
    assert_ne!(ctx.maze().canonical_bytes(), original);

    ctx.regenerate(77).expect("regenerate");
    assert_eq!(ctx.maze().canonical_bytes(), original);
    assert_eq!(ctx.epoch(), 2, "epoch advances even when the walls repeat");
}
