use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use steam_api::{Relationship, SteamApiHandler, VanityUrlType};

use crate::output::{print_body, OutputFormat};

#[derive(Args)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Subcommand)]
pub enum UserCommand {
    /// Friend list of a user
    Friends {
        #[arg(long)]
        steamid: u64,
        /// Relationship filter: all, friend
        #[arg(long)]
        relationship: Option<String>,
    },
    /// VAC, game and community bans
    Bans {
        /// Steam IDs, comma separated or repeated
        #[arg(long = "steamid", value_delimiter = ',', required = true)]
        steamids: Vec<u64>,
    },
    /// Profile summaries (up to 100 ids)
    Summaries {
        /// Steam IDs, comma separated or repeated
        #[arg(long = "steamid", value_delimiter = ',', required = true)]
        steamids: Vec<u64>,
    },
    /// Resolve a vanity name or community URL to a Steam ID
    ResolveVanity {
        /// Bare name (gabelogannewell) or full URL (https://steamcommunity.com/id/gabelogannewell/)
        vanity: String,
        /// URL type: individual, group, game-group
        #[arg(long)]
        url_type: Option<String>,
    },
}

pub async fn run(args: &UserArgs, steam: &SteamApiHandler, format: &OutputFormat) -> Result<()> {
    let user = steam.user();
    let body = match &args.command {
        UserCommand::Friends {
            steamid,
            relationship,
        } => {
            let relationship = match relationship {
                Some(r) => Some(
                    r.parse::<Relationship>()
                        .map_err(|_| anyhow!("Unknown relationship '{}'; expected all or friend", r))?,
                ),
                None => None,
            };
            user.get_friend_list(*steamid, relationship).await?
        }
        UserCommand::Bans { steamids } => user.get_player_bans(steamids).await?,
        UserCommand::Summaries { steamids } => user.get_player_summaries(steamids).await?,
        UserCommand::ResolveVanity { vanity, url_type } => {
            let url_type = match url_type {
                Some(t) => Some(t.parse::<VanityUrlType>().map_err(|_| {
                    anyhow!(
                        "Unknown URL type '{}'; expected individual, group or game-group",
                        t
                    )
                })?),
                None => None,
            };
            user.resolve_vanity_url(vanity, url_type).await?
        }
    };

    print_body(&body, format);
    Ok(())
}
