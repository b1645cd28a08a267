//! End-to-end random-walk rollout example.
//!
//! Demonstrates: build profile → GridWorld → perform actions → read
//! observations and rewards → reset on goal → repeat; then the same
//! loop over a batch.

use labyrinth_bench::{open_room, random_actions, reference_profile};
use labyrinth_env::{BatchedGridWorld, EnvConfig, GridWorld};

fn main() {
    // RUST_LOG=labyrinth_env=debug shows resets and episode ends.
    tracing_subscriber::fmt::init();

    println!("=== Labyrinth Random Walk Example ===\n");

    // --- Small room, printed ---
    let room = open_room(5, 7).unwrap();
    let mut world = GridWorld::new(room, EnvConfig::default()).unwrap();
    println!("Start:\n{}\n", world.render());
    for a in random_actions(6, 1) {
        let step = world.perform_action(a).unwrap();
        println!(
            "  action={} outcome={:<8} obs={:?} reward={}",
            step.action.map(|a| a.to_string()).unwrap_or_default(),
            step.outcome.map(|o| o.as_str()).unwrap_or("-"),
            step.observation.map(|s| s.0),
            step.reward,
        );
    }
    println!("\nAfter 6 steps:\n{}\n", world.render());

    // --- Reference profile: episodes until the budget runs out ---
    let (t, cfg) = reference_profile(42).unwrap();
    let mut world = GridWorld::new(t, cfg).unwrap();
    let actions = random_actions(200_000, 42);
    let mut returns = Vec::new();

    println!("Reference profile: 200000 random steps on a 100x100 comb maze");
    for &a in &actions {
        world.perform_action(a).unwrap();
        if world.is_ended() {
            returns.push(world.metrics().episode_return);
            world.reset().unwrap();
        }
    }
    let m = world.metrics();
    println!(
        "  episodes completed={}, unfinished steps={}, wall hits={}, slips={}",
        m.episodes_completed, m.steps, m.wall_hits, m.slips
    );
    if !returns.is_empty() {
        let mean = returns.iter().sum::<f64>() / returns.len() as f64;
        println!("  mean return over finished episodes={mean:.3}");
    }

    // --- Batched ---
    let (t, cfg) = reference_profile(7).unwrap();
    let mut batch = BatchedGridWorld::new(&t, &cfg, 8).unwrap();
    println!("\nBatched: 8 worlds x 1000 steps");
    let mut finished = 0;
    for tick in 0..1000u64 {
        let actions = random_actions(batch.num_worlds(), tick);
        batch.step_all(&actions).unwrap();
        finished += batch.reset_ended().unwrap();
    }
    println!("  episodes finished across the batch={finished}");
    println!("  final observations={:?}", batch.observe_all());

    println!("\n=== Done ===");
}
