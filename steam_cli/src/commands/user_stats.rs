use anyhow::Result;
use clap::{Args, Subcommand};
use steam_api::{GlobalStatsQuery, SteamApiHandler};

use crate::output::{print_body, OutputFormat};

#[derive(Args)]
pub struct UserStatsArgs {
    #[command(subcommand)]
    pub command: UserStatsCommand,
}

#[derive(Subcommand)]
pub enum UserStatsCommand {
    /// Number of players currently in a game (no API key needed)
    CurrentPlayers {
        #[arg(long)]
        appid: u32,
    },
    /// Global achievement unlock percentages (no API key needed)
    AchievementPercentages {
        #[arg(long)]
        gameid: u32,
    },
    /// Aggregated global stats for a game
    GlobalStats {
        #[arg(long)]
        appid: u32,
        /// Stat names, comma separated or repeated
        #[arg(long = "name", value_delimiter = ',', required = true)]
        names: Vec<String>,
        /// Number of stats; defaults to the number of names
        #[arg(long)]
        count: Option<u32>,
        /// Start date for daily totals (unix time)
        #[arg(long)]
        startdate: Option<u64>,
        /// End date for daily totals (unix time)
        #[arg(long)]
        enddate: Option<u64>,
    },
    /// A player's achievements for a game
    PlayerAchievements {
        #[arg(long)]
        steamid: u64,
        #[arg(long)]
        appid: u32,
        /// Language for achievement names (e.g. english, german)
        #[arg(long)]
        language: Option<String>,
    },
    /// Stats and achievements defined for a game
    Schema {
        #[arg(long)]
        appid: u32,
        #[arg(long)]
        language: Option<String>,
    },
    /// Stats a player has set in a game
    UserStats {
        #[arg(long)]
        steamid: u64,
        #[arg(long)]
        appid: u32,
    },
}

pub async fn run(args: &UserStatsArgs, steam: &SteamApiHandler, format: &OutputFormat) -> Result<()> {
    let stats = steam.user_stats();
    let body = match &args.command {
        UserStatsCommand::CurrentPlayers { appid } => {
            stats.get_number_of_current_players(*appid).await?
        }
        UserStatsCommand::AchievementPercentages { gameid } => {
            stats
                .get_global_achievement_percentages_for_app(*gameid)
                .await?
        }
        UserStatsCommand::GlobalStats {
            appid,
            names,
            count,
            startdate,
            enddate,
        } => {
            let mut query = GlobalStatsQuery::new(*appid).with_names(names);
            if let Some(count) = count {
                query = query.with_count(*count);
            }
            if let Some(startdate) = startdate {
                query = query.with_startdate(*startdate);
            }
            if let Some(enddate) = enddate {
                query = query.with_enddate(*enddate);
            }
            stats.get_global_stats_for_game(&query).await?
        }
        UserStatsCommand::PlayerAchievements {
            steamid,
            appid,
            language,
        } => {
            stats
                .get_player_achievements(*steamid, *appid, language.as_deref())
                .await?
        }
        UserStatsCommand::Schema { appid, language } => {
            stats.get_schema_for_game(*appid, language.as_deref()).await?
        }
        UserStatsCommand::UserStats { steamid, appid } => {
            stats.get_user_stats_for_game(*steamid, *appid).await?
        }
    };

    print_body(&body, format);
    Ok(())
}
