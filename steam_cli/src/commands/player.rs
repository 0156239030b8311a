use anyhow::Result;
use clap::{Args, Subcommand};
use steam_api::{OwnedGamesQuery, SteamApiHandler};

use crate::output::{print_body, OutputFormat};

#[derive(Args)]
pub struct PlayerArgs {
    #[command(subcommand)]
    pub command: PlayerCommand,
}

#[derive(Subcommand)]
pub enum PlayerCommand {
    /// Recently played games
    RecentGames {
        #[arg(long)]
        steamid: u64,
        /// Number of games to return (0: all)
        #[arg(long, default_value = "0")]
        count: u32,
    },
    /// Playtime for a single game
    Playtime {
        #[arg(long)]
        steamid: u64,
        #[arg(long)]
        appid: u32,
    },
    /// Games owned by a player
    OwnedGames {
        #[arg(long)]
        steamid: u64,
        /// Include game name and icon
        #[arg(long)]
        appinfo: bool,
        /// Include free games the player has played
        #[arg(long)]
        played_free_games: bool,
        /// Restrict to these app ids, comma separated or repeated
        #[arg(long = "appid", value_delimiter = ',')]
        appids: Vec<u32>,
    },
    /// Steam level
    Level {
        #[arg(long)]
        steamid: u64,
    },
    /// Owned badges
    Badges {
        #[arg(long)]
        steamid: u64,
    },
    /// Quest progress towards a community badge
    BadgeProgress {
        #[arg(long)]
        steamid: u64,
        #[arg(long)]
        badgeid: u32,
    },
}

pub async fn run(args: &PlayerArgs, steam: &SteamApiHandler, format: &OutputFormat) -> Result<()> {
    let player = steam.player();
    let body = match &args.command {
        PlayerCommand::RecentGames { steamid, count } => {
            player.get_recently_played_games(*steamid, *count).await?
        }
        PlayerCommand::Playtime { steamid, appid } => {
            player.get_single_game_playtime(*steamid, *appid).await?
        }
        PlayerCommand::OwnedGames {
            steamid,
            appinfo,
            played_free_games,
            appids,
        } => {
            let query = OwnedGamesQuery::new(*steamid)
                .with_appinfo(*appinfo)
                .with_played_free_games(*played_free_games)
                .with_appids_filter(appids);
            player.get_owned_games(&query).await?
        }
        PlayerCommand::Level { steamid } => player.get_steam_level(*steamid).await?,
        PlayerCommand::Badges { steamid } => player.get_badges(*steamid).await?,
        PlayerCommand::BadgeProgress { steamid, badgeid } => {
            player
                .get_community_badge_progress(*steamid, *badgeid)
                .await?
        }
    };

    print_body(&body, format);
    Ok(())
}
