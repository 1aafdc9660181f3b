//! Binary entrypoint for the Malango CLI.
//!
//! Commands:
//! - `classify <words...>` - split words into tense prefix + root
//! - `init` - create a starter `config.toml`
//! - `status` - print progression stats for the stored session
//! - `travel <village>` - attempt to travel to a village
//! - `quiz <village> [--failed]` - record a quiz attempt
//! - `destinations` - list reachable unlocked villages
//! - `reset` - wipe progress back to defaults
//!
//! See the library crate docs for module-level details: `malango::`.
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use std::str::FromStr;

use malango::atlas::{canonical_world, load_world_from_json, AtlasEngine, AtlasEvent, ProgressStore};
use malango::config::Config;
use malango::lexicon::{classify_all, LanguageVariant};

#[derive(Parser)]
#[command(name = "malango")]
#[command(about = "Core learning engine for the Malango Shimaoré/Kibouchi vocabulary app")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify words into tense prefix and root
    Classify {
        /// Words to classify
        words: Vec<String>,
        /// Language variant (shimaore or kibouchi); defaults to the config value
        #[arg(short = 'l', long)]
        variant: Option<String>,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Initialize a new configuration file
    Init,
    /// Show progression status and statistics
    Status,
    /// Travel to a village
    Travel {
        /// Destination village id (e.g. koungou)
        village: String,
    },
    /// Record a quiz attempt for a village
    Quiz {
        /// Village id the quiz belongs to
        village: String,
        /// Record the attempt as failed
        #[arg(long)]
        failed: bool,
    },
    /// List unlocked villages reachable from the current one
    Destinations,
    /// Wipe saved progress back to defaults
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Init has no config yet; everything else loads it first.
    let config = if matches!(cli.command, Commands::Init) {
        None
    } else {
        Some(Config::load(&cli.config).await?)
    };
    init_logging(&config, cli.verbose);

    match cli.command {
        Commands::Classify { words, variant, json } => {
            let config = config.expect("config loaded");
            let variant = match variant {
                Some(name) => LanguageVariant::from_str(&name).map_err(anyhow::Error::msg)?,
                None => config.default_variant()?,
            };
            let refs: Vec<&str> = words.iter().map(String::as_str).collect();
            let classified = classify_all(refs, variant);
            if json {
                println!("{}", serde_json::to_string_pretty(&classified)?);
            } else {
                for entry in &classified {
                    let c = &entry.classification;
                    if c.is_verb {
                        println!(
                            "{:<20} {:>8}  {}+{}  {}",
                            entry.word, c.tense.to_string(), c.prefix, c.root, entry.color
                        );
                    } else {
                        println!("{:<20} {:>8}  -  {}", entry.word, "-", entry.color);
                    }
                }
            }
        }
        Commands::Init => {
            Config::create_default(&cli.config).await?;
            println!("Wrote starter configuration to {}", cli.config);
        }
        Commands::Status => {
            let mut engine = open_engine(&config.expect("config loaded"))?;
            engine.drain_events();
            let stats = engine.stats();
            let progress = engine.progress();
            println!("Current village: {}", progress.current_village);
            println!(
                "Villages visited: {}/{}",
                stats.villages_visited, stats.total_villages
            );
            println!(
                "Quizzes completed: {}/{}",
                stats.quizzes_completed, stats.total_quizzes
            );
            println!("Badges: {}/{}", stats.badges, stats.total_badges);
            println!("Score: {}", stats.score);
            println!("Last played: {}", progress.last_play_time);
        }
        Commands::Travel { village } => {
            let mut engine = open_engine(&config.expect("config loaded"))?;
            engine.drain_events();
            if engine.travel_to(&village) {
                println!("Traveled to {}.", village);
                report_events(&mut engine);
            } else {
                println!("Cannot travel to {} from here.", village);
            }
        }
        Commands::Quiz { village, failed } => {
            let mut engine = open_engine(&config.expect("config loaded"))?;
            engine.drain_events();
            engine.complete_quiz(&village, !failed);
            println!(
                "Recorded {} quiz for {}.",
                if failed { "failed" } else { "successful" },
                village
            );
            report_events(&mut engine);
        }
        Commands::Destinations => {
            let engine = open_engine(&config.expect("config loaded"))?;
            let from = engine.progress().current_village.clone();
            let destinations = engine.available_destinations(&from);
            if destinations.is_empty() {
                println!("No destinations reachable from {}.", from);
            } else {
                println!("From {}:", from);
                for village in destinations {
                    println!("  {} ({})", village.name, village.id);
                }
            }
        }
        Commands::Reset => {
            let mut engine = open_engine(&config.expect("config loaded"))?;
            engine.reset();
            info!("progress reset to defaults");
            println!("Progress reset.");
        }
    }

    Ok(())
}

/// Open the progress store and world named by the config and build a session.
fn open_engine(config: &Config) -> Result<AtlasEngine> {
    let store = ProgressStore::open(&config.storage.data_dir)?;
    let world = match &config.world.seed_file {
        Some(path) => load_world_from_json(path)?,
        None => canonical_world(),
    };
    Ok(AtlasEngine::new(store, world))
}

/// Surface unlock/badge notifications produced by the last operation.
fn report_events(engine: &mut AtlasEngine) {
    for event in engine.drain_events() {
        match event {
            AtlasEvent::VillageUnlocked { village } => {
                println!("New village unlocked: {}", village);
            }
            AtlasEvent::BadgeEarned { badge } => {
                println!("Badge earned: {}", badge);
            }
            AtlasEvent::Initialized
            | AtlasEvent::Traveled { .. }
            | AtlasEvent::QuizRecorded { .. } => {}
        }
    }
}

/// Configure env_logger: RUST_LOG wins, then -v flags, then the config level.
fn init_logging(config: &Option<Config>, verbose: u8) {
    if std::env::var_os("RUST_LOG").is_some() {
        env_logger::init();
        return;
    }
    let level = match verbose {
        0 => config
            .as_ref()
            .map(|c| c.logging.level.clone())
            .unwrap_or_else(|| "info".to_string()),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(&level);
    let _ = builder.try_init();
}
