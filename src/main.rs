use anyhow::Result;
use clap::Parser;
use fivebuttons::{Problem, SolutionReport, DEFAULT_MAX_STATES};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Find the shortest button sequence turning START into GOAL.
///
/// Lights are written as G/g (green), R/r (red) or _/X/x/space (off).
#[derive(Parser)]
#[command(name = "fivebuttons", version)]
struct Cli {
    /// Starting lights, e.g. "XXXXX"
    start: String,

    /// Goal lights, same length as START
    goal: String,

    /// Maximum number of transitions to explore
    #[arg(long, default_value_t = DEFAULT_MAX_STATES)]
    max_states: usize,

    /// Print a JSON report instead of the step list
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let problem = Problem::parse(&cli.start, &cli.goal)?;
    info!(max_states = cli.max_states, "parsed problem");

    if !cli.json {
        println!(
            "Searching path from {} to {}",
            problem.start().printable_state(),
            problem.goal().printable_state()
        );
    }

    let solution = problem.solve(cli.max_states)?;

    if cli.json {
        println!(
            "{}",
            SolutionReport::new(&problem, &solution, cli.max_states).to_json()?
        );
    } else {
        println!("Found solution!");
        for step in solution.path.printable_path() {
            println!("{step}");
        }
    }
    Ok(())
}
