mod config;
mod display;
mod draft;
mod error;
mod logging;
mod report;

use clap::{Parser, Subcommand};
use config::{ensure_output_dir, EnvSource, Overrides, ProcessEnv, ResolvedConfig};
use display::output::{display_draft_board, display_error};
use draft::board::Draft;
use draft::catalog::TagCatalog;
use error::AppError;
use report::Report;
use std::path::PathBuf;

const DEFAULT_TAGS_FILE: &str = "champ_tags/TAGS.csv";

#[derive(Parser, Debug)]
#[command(name = "eusguri")]
#[command(about = "É us guri: draft helper CLI", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Riot API key (falls back to RIOT_API_KEY)
    #[arg(long)]
    riot_api_key: Option<String>,

    /// Comma-separated regions (falls back to REGIONS, default: br1)
    #[arg(long)]
    regions: Option<String>,

    /// Days of history to cover (falls back to WINDOW_DAYS, default: 30)
    #[arg(long, allow_negative_numbers = true)]
    window_days: Option<i64>,

    /// Output directory (falls back to OUTPUT_DIR, default: out)
    #[arg(long)]
    output: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare the tags of both sides of a draft
    Draft(DraftArgs),
}

#[derive(clap::Args, Debug)]
struct DraftArgs {
    /// Champion tags CSV (falls back to TAGS_FILE, default: champ_tags/TAGS.csv)
    #[arg(long)]
    tags: Option<PathBuf>,

    /// Comma-separated picks for your team
    #[arg(long, default_value = "")]
    team: String,

    /// Comma-separated picks for the enemy team
    #[arg(long, default_value = "")]
    enemy: String,

    /// Comma-separated bans (both sides)
    #[arg(long, default_value = "")]
    bans: String,

    /// Print the board as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let dotenv = dotenvy::dotenv();
    logging::init();
    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded environment file"),
        Err(e) => tracing::debug!("no environment file loaded: {}", e),
    }

    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    match args.command {
        Some(Command::Draft(draft_args)) => run_draft(draft_args, &ProcessEnv),
        None => {
            let overrides = Overrides {
                riot_api_key: args.riot_api_key,
                regions: args.regions,
                window_days: args.window_days,
                output: args.output,
            };
            run_summary(&overrides, &ProcessEnv)
        }
    }
}

fn run_summary(overrides: &Overrides, env: &impl EnvSource) -> Result<(), AppError> {
    let config = ResolvedConfig::resolve(overrides, env)?;
    tracing::info!(
        regions = ?config.regions,
        window_days = config.window_days,
        output = %config.output_dir,
        "resolved configuration"
    );

    ensure_output_dir(&config)?;

    // The collectors are not wired in yet; the report only names the files.
    let report = Report::from_config(&config);
    println!("{}", report.to_json()?);

    Ok(())
}

fn run_draft(args: DraftArgs, env: &impl EnvSource) -> Result<(), AppError> {
    let tags_path = args
        .tags
        .or_else(|| env.get("TAGS_FILE").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TAGS_FILE));

    let catalog = TagCatalog::load(&tags_path)?;
    if catalog.is_empty() {
        tracing::warn!(path = %tags_path.display(), "tag catalog has no champions");
    }
    tracing::debug!(champions = ?catalog.champions(), "available champions");

    let draft = Draft::from_lists(&args.team, &args.enemy, &args.bans);
    let summary = draft.summarize(&catalog)?;

    if args.json {
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| AppError::JsonError(e.to_string()))?;
        println!("{}", json);
    } else {
        display_draft_board(&summary);
    }

    Ok(())
}
