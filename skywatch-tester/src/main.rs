mod scenarios;

use anyhow::{Context, Result};
use clap::Parser;
use colored::{ColoredString, Colorize};
use skywatch_adaptive::DifficultyLevel;

use scenarios::{Scenario, ScenarioRun, run_scenario};

#[derive(Debug, Parser)]
#[command(name = "skywatch-tester", version)]
#[command(about = "Headless QA harness for the Skywatch adaptive difficulty core")]
struct Args {
    /// Scenarios to run (comma-separated, or "all")
    #[arg(long, default_value = "all")]
    scenarios: String,

    /// Seeds to run (comma-separated)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Evaluation intervals per scenario run
    #[arg(long, default_value_t = 40)]
    intervals: usize,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["console", "json"])]
    report: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_scenarios {
        for scenario in Scenario::ALL {
            println!("{:<20} {}", scenario.name(), scenario.description());
        }
        return Ok(());
    }

    let scenarios = resolve_scenarios(&args.scenarios)?;
    let seeds = resolve_seeds(&args.seeds)?;

    let mut runs = Vec::new();
    for &scenario in &scenarios {
        for &seed in &seeds {
            runs.push(run_scenario(scenario, seed, args.intervals));
        }
    }

    match args.report.as_str() {
        "json" => print_json(&runs)?,
        _ => print_console(&runs),
    }
    Ok(())
}

fn resolve_scenarios(raw: &str) -> Result<Vec<Scenario>> {
    if raw.trim().eq_ignore_ascii_case("all") {
        return Ok(Scenario::ALL.to_vec());
    }
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| Scenario::parse(name).with_context(|| format!("unknown scenario '{name}'")))
        .collect()
}

fn resolve_seeds(raw: &str) -> Result<Vec<u64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|seed| !seed.is_empty())
        .map(|seed| {
            seed.parse::<u64>()
                .with_context(|| format!("invalid seed '{seed}'"))
        })
        .collect()
}

fn print_json(runs: &[ScenarioRun]) -> Result<()> {
    let encoded = serde_json::to_string_pretty(runs).context("serializing report")?;
    println!("{encoded}");
    Ok(())
}

fn print_console(runs: &[ScenarioRun]) {
    for run in runs {
        println!(
            "{} seed {} ({} intervals): final {}",
            run.scenario.bold(),
            run.seed,
            run.intervals,
            level_colored(run.final_difficulty),
        );
        if run.transitions.is_empty() {
            println!("  no difficulty changes");
        }
        for transition in &run.transitions {
            println!(
                "  interval {:>3}: {} -> {}",
                transition.interval,
                level_colored(transition.from),
                level_colored(transition.to),
            );
        }
        if let Some(archive) = run.snapshot.archive {
            println!(
                "  archive: {} scores, min {} / median {} / max {}",
                archive.count, archive.min, archive.median, archive.max,
            );
        }
        if run.snapshot.struggling {
            println!("  {}", "struggling signal active at end of run".red());
        }
    }
}

fn level_colored(level: DifficultyLevel) -> ColoredString {
    match level {
        DifficultyLevel::Easy => level.as_str().green(),
        DifficultyLevel::Medium => level.as_str().yellow(),
        DifficultyLevel::Hard => level.as_str().red(),
    }
}
