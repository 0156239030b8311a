use anyhow::Result;
use clap::{Args, Subcommand};
use steam_api::SteamApiHandler;

use crate::output::{print_body, OutputFormat};

#[derive(Args)]
pub struct GameServersArgs {
    #[command(subcommand)]
    pub command: GameServersCommand,
}

#[derive(Subcommand)]
pub enum GameServersCommand {
    /// Game server accounts owned by the key holder
    AccountList,
}

pub async fn run(
    args: &GameServersArgs,
    steam: &SteamApiHandler,
    format: &OutputFormat,
) -> Result<()> {
    let body = match &args.command {
        GameServersCommand::AccountList => steam.game_servers().get_account_list().await?,
    };

    print_body(&body, format);
    Ok(())
}
