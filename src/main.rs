use clap::Parser;
use reel_library::{Category, ProgressEvent, ShowcaseConfig, run_showcase};
use std::process;

/// Generate a fake movie library, simulate viewing traffic and print the
/// most-viewed titles.
#[derive(Debug, Parser)]
#[command(name = "reel_library", version, about)]
struct Cli {
    /// Number of films to generate
    #[arg(long, default_value_t = 10)]
    films: usize,

    /// Number of series to generate (each contributes several episodes)
    #[arg(long, default_value_t = 3)]
    series: usize,

    /// Number of simulated play events
    #[arg(long, default_value_t = 200)]
    rounds: usize,

    /// Number of entries in the ranked report
    #[arg(long, default_value_t = 5)]
    top: usize,

    /// Category the ranking covers
    #[arg(long, value_enum, default_value = "all")]
    category: Category,

    /// Maximum view amount a single simulated play event may add
    #[arg(long, default_value_t = 100)]
    max_views: u64,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Look up a title (case-insensitive) after the simulation
    #[arg(long, value_name = "TITLE")]
    find: Option<String>,

    /// Print the number of episodes of a series (exact title)
    #[arg(long, value_name = "TITLE")]
    episodes_of: Option<String>,

    /// Emit the ranked report as JSON instead of text
    #[arg(long)]
    json: bool,
}

/// Handles progress events and prints formatted output to stdout
fn handle_progress_event(event: ProgressEvent) {
    match event {
        ProgressEvent::Started { films, series } => {
            println!(
                "Building a library of {} film(s) and {} series...",
                films, series
            );
        }
        ProgressEvent::LibraryPopulated {
            film_count,
            episode_count,
        } => {
            println!(
                "Library ready: {} film(s), {} episode(s)\n",
                film_count, episode_count
            );
        }
        ProgressEvent::SimulatingViews { rounds } => {
            println!("Simulating {} play event(s)...", rounds);
        }
        ProgressEvent::SimulationComplete { total_views } => {
            println!("Simulation complete, {} view(s) recorded\n", total_views);
        }
        ProgressEvent::Complete { .. } => {}
    }
}

fn main() {
    let cli = Cli::parse();

    let config = ShowcaseConfig {
        films: cli.films,
        series: cli.series,
        rounds: cli.rounds,
        top: cli.top,
        category: cli.category,
        max_views: cli.max_views,
        seed: cli.seed,
    };

    // Keep stdout clean for the JSON payload
    let progress: fn(ProgressEvent) = if cli.json { |_| {} } else { handle_progress_event };

    let showcase = match run_showcase(&config, progress) {
        Ok(showcase) => showcase,
        Err(e) => {
            eprintln!("Error during showcase run: {}", e);
            process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&showcase.report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing report: {}", e);
                process::exit(1);
            }
        }
    } else {
        println!("=== Top Titles ===\n");

        if showcase.report.entries.is_empty() {
            println!("Nothing to rank.");
        } else {
            for line in showcase.report.lines() {
                println!("{}", line);
            }
        }

        if let Some(available) = showcase.report.shortfall() {
            println!(
                "\nOnly {} of {} requested title(s) available.",
                available, showcase.report.requested
            );
        }
    }

    if let Some(title) = &cli.find {
        match showcase.catalog.find_by_title(title) {
            Some(record) => println!("\nFound: {}, views {}", record, record.views()),
            None => println!("\nNo title matching '{}' found.", title),
        }
    }

    if let Some(title) = &cli.episodes_of {
        println!(
            "\n'{}' has {} episode(s) in the library.",
            title,
            showcase.catalog.episode_count(title)
        );
    }
}
