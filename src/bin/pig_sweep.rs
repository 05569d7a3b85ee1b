//! Solve Pig for several goals in parallel.
//!
//! Usage:
//!   cargo run --release --bin pig_sweep -- --goals 10,20,50,100 [--epsilon 1e-9]

use std::env;
use std::process;
use std::time::Instant;

use pig_solver::pig::{solve_many, SolverConfig, DEFAULT_EPSILON};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let mut goals: Vec<usize> = vec![10, 20, 50, 100];
    let mut epsilon = DEFAULT_EPSILON;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--goals" => {
                i += 1;
                let parsed: Result<Vec<usize>, _> = args
                    .get(i)
                    .map(|s| s.split(',').map(|g| g.trim().parse::<usize>()).collect())
                    .unwrap_or_else(|| Ok(Vec::new()));
                match parsed {
                    Ok(list) if !list.is_empty() => goals = list,
                    _ => {
                        eprintln!("--goals expects a comma-separated list of scores");
                        process::exit(2);
                    }
                }
            }
            "--epsilon" | "-e" => {
                i += 1;
                match args.get(i).and_then(|s| s.parse().ok()) {
                    Some(e) => epsilon = e,
                    None => {
                        eprintln!("--epsilon expects a number");
                        process::exit(2);
                    }
                }
            }
            "--help" | "-h" => {
                println!("Usage: pig_sweep [--goals 10,20,50] [--epsilon 1e-9]");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(2);
            }
        }
        i += 1;
    }

    println!("=== Pig Goal Sweep ===\n");
    println!("Solving {} goals (epsilon {:e})...\n", goals.len(), epsilon);

    let start = Instant::now();
    let configs: Vec<SolverConfig> = goals.iter().map(|&g| SolverConfig::new(g, epsilon)).collect();
    let results = solve_many(&configs);

    println!("{:>6} {:>12} {:>10} {:>8}", "Goal", "P(first)", "Hold@0-0", "Sweeps");
    let mut failed = false;
    for (config, result) in configs.iter().zip(results) {
        match result {
            Ok(solver) => println!(
                "{:>6} {:>12.6} {:>10} {:>8}",
                config.goal,
                solver.first_player_win_prob(),
                solver.hold_threshold(0, 0),
                solver.stats().sweeps
            ),
            Err(e) => {
                failed = true;
                println!("{:>6} error: {}", config.goal, e);
            }
        }
    }

    println!("\nTotal time: {:.2}s", start.elapsed().as_secs_f64());
    if failed {
        process::exit(1);
    }
}
