//! Pig policy solver binary.
//!
//! Usage:
//!   cargo run --release --bin pig_solve -- [OPTIONS]
//!
//! Options:
//!   --goal <N>           Target score (default: 100)
//!   --epsilon <E>        Convergence threshold (default: 1e-9)
//!   --max-sweeps <N>     Sweep safety bound (default: 10000)
//!   --config <FILE>      Configuration JSON file (optional)
//!   --csv <FILE>         Threshold CSV output (default: policy_output.csv)
//!   --json <FILE>        JSON solution output (optional)
//!   --summary            Print the endgame policy window
//!   --holds              Print every hold threshold
//!   --simulate <N>       Play N games of optimal vs optimal and vs hold-at-20
//!   --seed <N>           Simulation seed (default: 42)

use std::env;
use std::process;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use pig_solver::pig::{PigSolver, SolverConfig};
use pig_solver::report::{self, Headline, SolutionOutput};
use pig_solver::simulate::{simulate, HoldAt, OptimalStrategy, Strategy};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();

    let mut config_file: Option<String> = None;
    let mut goal: Option<usize> = None;
    let mut epsilon: Option<f64> = None;
    let mut max_sweeps: Option<u64> = None;
    let mut csv_file = "policy_output.csv".to_string();
    let mut json_file: Option<String> = None;
    let mut show_summary = false;
    let mut show_holds = false;
    let mut sim_games: u64 = 0;
    let mut seed: u64 = 42;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => config_file = Some(value(&args, &mut i)),
            "--goal" | "-g" => goal = Some(parse(&args, &mut i)),
            "--epsilon" | "-e" => epsilon = Some(parse(&args, &mut i)),
            "--max-sweeps" => max_sweeps = Some(parse(&args, &mut i)),
            "--csv" | "-o" => csv_file = value(&args, &mut i),
            "--json" => json_file = Some(value(&args, &mut i)),
            "--summary" => show_summary = true,
            "--holds" => show_holds = true,
            "--simulate" => sim_games = parse(&args, &mut i),
            "--seed" | "-s" => seed = parse(&args, &mut i),
            "--help" | "-h" => {
                print_help();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                process::exit(2);
            }
        }
        i += 1;
    }

    let mut config = match &config_file {
        Some(path) => match SolverConfig::from_json_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                process::exit(1);
            }
        },
        None => SolverConfig::default(),
    };
    if let Some(goal) = goal {
        config = config.with_goal(goal);
    }
    if let Some(epsilon) = epsilon {
        config = config.with_epsilon(epsilon);
    }
    if let Some(max_sweeps) = max_sweeps {
        config = config.with_max_sweeps(max_sweeps);
    }

    println!("=================================================");
    println!("  Pig Solver");
    println!("=================================================");
    println!("Goal: {} | Epsilon: {:e} | Max sweeps: {}", config.goal, config.epsilon, config.max_sweeps);
    println!();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} [{elapsed}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));

    let solver = match PigSolver::with_callback(config, |progress| {
        spinner.set_message(format!(
            "sweep {} | max delta {:.3e} (target {:.0e})",
            progress.sweep, progress.max_delta, progress.epsilon
        ));
    }) {
        Ok(solver) => solver,
        Err(e) => {
            spinner.finish_and_clear();
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    spinner.finish_and_clear();

    let stats = solver.stats();
    println!(
        "Converged in {} sweeps ({:.2}s, {:.1} sweeps/s, {} states per sweep)",
        stats.sweeps, stats.elapsed_seconds, stats.sweeps_per_second, stats.states_per_sweep
    );
    println!();

    let headline = Headline::from_solver(&solver);
    println!("First player win probability: {}", headline.first_player_win);
    println!("Lowest turn total where player should hold: {}", headline.first_hold);
    println!(
        "Second player win probability from the start: {}",
        headline.second_player_win
    );
    println!();

    match report::write_thresholds_csv(&solver, &csv_file) {
        Ok(()) => println!("Policy written to: {}", csv_file),
        Err(e) => eprintln!("Failed to write policy to CSV: {}", e),
    }

    if let Some(path) = &json_file {
        match SolutionOutput::from_solver(&solver).save_json(path) {
            Ok(()) => println!("Solution written to: {}", path),
            Err(e) => eprintln!("Failed to write solution JSON: {}", e),
        }
    }

    if show_holds {
        println!();
        if let Err(e) = report::write_hold_values(&solver, &mut std::io::stdout().lock()) {
            eprintln!("Error printing hold values: {}", e);
        }
    }

    if show_summary {
        println!();
        report::print_summary(&solver);
    }

    if sim_games > 0 {
        println!();
        println!("Simulating {} games per matchup (seed {})...", sim_games, seed);
        let optimal = OptimalStrategy::new(&solver);
        let hold_20 = HoldAt(20);
        let matchups: [(&dyn Strategy, &dyn Strategy); 3] = [
            (&optimal, &optimal),
            (&optimal, &hold_20),
            (&hold_20, &optimal),
        ];
        for (first, second) in matchups {
            let result = simulate(solver.goal(), first, second, sim_games, seed);
            println!(
                "  {:<10} vs {:<10} first player wins {:.2}%{}",
                first.name(),
                second.name(),
                result.first_win_rate() * 100.0,
                if result.unfinished > 0 {
                    format!(" ({} unfinished)", result.unfinished)
                } else {
                    String::new()
                }
            );
        }
    }
}

/// Take the value following a flag.
fn value(args: &[String], i: &mut usize) -> String {
    *i += 1;
    match args.get(*i) {
        Some(v) => v.clone(),
        None => {
            eprintln!("Missing value for {}", args[*i - 1]);
            process::exit(2);
        }
    }
}

/// Take and parse the value following a flag.
fn parse<T: std::str::FromStr>(args: &[String], i: &mut usize) -> T {
    let flag = args[*i].clone();
    let raw = value(args, i);
    match raw.parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("Invalid value for {}: {}", flag, raw);
            process::exit(2);
        }
    }
}

fn print_help() {
    println!("Pig Policy Solver");
    println!();
    println!("Usage: pig_solve [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -g, --goal <N>         Target score (default: 100)");
    println!("  -e, --epsilon <E>      Convergence threshold (default: 1e-9)");
    println!("      --max-sweeps <N>   Sweep safety bound (default: 10000)");
    println!("  -c, --config <FILE>    Configuration JSON file");
    println!("  -o, --csv <FILE>       Threshold CSV output (default: policy_output.csv)");
    println!("      --json <FILE>      JSON solution output");
    println!("      --summary          Print the endgame policy window");
    println!("      --holds            Print every hold threshold");
    println!("      --simulate <N>     Play N games per matchup");
    println!("  -s, --seed <N>         Simulation seed (default: 42)");
    println!("  -h, --help             Show this help");
}
