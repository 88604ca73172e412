use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use velopool::results::{RaceKey, DEFAULT_BASE_URL};
use velopool::scoring::Tier;

const EXIT_SUCCESS: i32 = 0;
const EXIT_NETWORK: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score the pool and print the standings (default if no subcommand)
    Standings {
        /// Tab-separated output for scripting
        #[arg(long)]
        tsv: bool,

        /// JSON output for machine consumption
        #[arg(long, conflicts_with = "tsv")]
        json: bool,
    },
    /// Fetch and print the race's top finishers without scoring
    Results,
    /// Open the race results page in a browser
    Open,
    /// Create a pool config file interactively
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "velopool")]
#[command(about = "Cycling prediction pool scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/velopool/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Override the configured tier (gold, silver, bronze)
    #[arg(short, long, global = true)]
    tier: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for rustls 0.23+)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Standings {
        tsv: false,
        json: false,
    });
    let start_time = Instant::now();

    if let Commands::Init = command {
        let config_path = cli.config.map(PathBuf::from);
        if let Err(e) = velopool::config::run_init_wizard(config_path) {
            eprintln!("Init error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match velopool::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Tier: CLI override wins over the config file
    let tier = match &cli.tier {
        Some(raw) => match raw.parse::<Tier>() {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Tier error: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        },
        None => config.tier,
    };

    let race = RaceKey::new(&config.race.name, &config.race.year);

    if cli.verbose {
        eprintln!(
            "Pool: {} players, tier {}, race {} {}",
            config.players.len(),
            tier,
            race.name,
            race.year
        );
    }

    if let Commands::Open = command {
        let url = race.result_url(DEFAULT_BASE_URL);
        if let Err(e) = velopool::browser::open_url(&url) {
            eprintln!("Failed to open browser: {}", e);
            std::process::exit(EXIT_NETWORK);
        }
        println!("Opening results page: {}", url);
        std::process::exit(EXIT_SUCCESS);
    }

    // Validate the roster before anything touches the network
    let entries = match velopool::scoring::build_entries(&config.players) {
        Ok(entries) => entries,
        Err(errors) => {
            eprintln!("Roster errors:");
            for error in errors {
                eprintln!("  - {}", error);
            }
            std::process::exit(EXIT_CONFIG);
        }
    };

    let source = match velopool::fetch::results_source(&config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to create results source: {}", e);
            std::process::exit(EXIT_NETWORK);
        }
    };

    if cli.verbose && config.results.is_some() {
        eprintln!("Using manual results from config, skipping fetch");
    }

    let outcome = match velopool::fetch::fetch_and_score(
        source.as_ref(),
        tier,
        &entries,
        &race,
        cli.verbose,
    )
    .await
    {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Failed to fetch results: {:#}", e);
            std::process::exit(EXIT_NETWORK);
        }
    };

    let use_colors = velopool::output::should_use_colors();

    match command {
        Commands::Results => {
            println!(
                "{}",
                velopool::output::format_results_list(&outcome.finishers, use_colors)
            );
        }
        Commands::Standings { tsv, json } => {
            let Some(sheet) = outcome.sheet else {
                println!("No results posted yet for {} {}.", race.name, race.year);
                std::process::exit(EXIT_SUCCESS);
            };

            if json {
                match velopool::output::format_json(&sheet.standings) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Output error: {}", e);
                        std::process::exit(EXIT_CONFIG);
                    }
                }
            } else if tsv {
                println!("{}", velopool::output::format_tsv(&sheet.standings));
            } else if cli.verbose {
                // Verbose mode: per-player breakdown, then the table
                for detail in &sheet.details {
                    println!(
                        "{}",
                        velopool::output::format_player_detail(detail, use_colors)
                    );
                    println!();
                }
                println!(
                    "{}",
                    velopool::output::format_standings_table(&sheet.standings, use_colors)
                );
            } else {
                println!(
                    "{}",
                    velopool::output::format_standings_table(&sheet.standings, use_colors)
                );
            }
        }
        Commands::Open | Commands::Init => unreachable!("handled above"),
    }

    if cli.verbose {
        eprintln!();
        eprintln!(
            "Scored {} players in {:?}",
            entries.len(),
            start_time.elapsed()
        );
    }

    std::process::exit(EXIT_SUCCESS);
}
