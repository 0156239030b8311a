mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use steam_api::SteamApiHandler;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "steam-api")]
#[command(about = "Query the Steam Web API and print the raw response")]
struct Cli {
    /// Output format: raw or pretty (re-indented JSON)
    #[arg(long, default_value = "raw", global = true)]
    output: String,

    /// Override the API host (falls back to STEAM_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// ISteamUserStats: achievements, stats and player counts
    UserStats(commands::user_stats::UserStatsArgs),
    /// ISteamUser: profiles, friends, bans and vanity URLs
    User(commands::user::UserArgs),
    /// IPlayerService: owned games, playtime, levels and badges
    Player(commands::player::PlayerArgs),
    /// IEconService: trade offers and trade history
    Econ(commands::econ::EconArgs),
    /// IGameServersService: game server accounts
    GameServers(commands::game_servers::GameServersArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("steam_api=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "pretty" => OutputFormat::Pretty,
        _ => OutputFormat::Raw,
    };

    let api_key = std::env::var("STEAM_API_KEY").unwrap_or_default();
    if api_key.is_empty() {
        tracing::warn!("STEAM_API_KEY is not set; only public endpoints will succeed");
    }

    let steam = match cli
        .base_url
        .or_else(|| std::env::var("STEAM_API_BASE_URL").ok())
    {
        Some(url) => SteamApiHandler::with_base_url(&url, &api_key),
        None => SteamApiHandler::new(&api_key),
    };

    match &cli.command {
        Commands::UserStats(args) => commands::user_stats::run(args, &steam, &format).await?,
        Commands::User(args) => commands::user::run(args, &steam, &format).await?,
        Commands::Player(args) => commands::player::run(args, &steam, &format).await?,
        Commands::Econ(args) => commands::econ::run(args, &steam, &format).await?,
        Commands::GameServers(args) => commands::game_servers::run(args, &steam, &format).await?,
    }

    Ok(())
}
