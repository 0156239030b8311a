use anyhow::Result;
use clap::{Args, Subcommand};
use steam_api::{SteamApiHandler, TradeHistoryQuery, TradeOffersQuery};

use crate::output::{print_body, OutputFormat};

#[derive(Args)]
pub struct EconArgs {
    #[command(subcommand)]
    pub command: EconCommand,
}

#[derive(Subcommand)]
pub enum EconCommand {
    /// Trade history of the key holder
    TradeHistory {
        #[arg(long, default_value = "100")]
        max_trades: u32,
        /// Time of the last trade on the previous page (unix time)
        #[arg(long, requires = "start_after_tradeid")]
        start_after_time: Option<u64>,
        /// Trade id of the last trade on the previous page
        #[arg(long, requires = "start_after_time")]
        start_after_tradeid: Option<u64>,
        /// Return the page before the start anchor instead of after it
        #[arg(long)]
        navigating_back: bool,
        #[arg(long)]
        descriptions: bool,
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        include_failed: bool,
        #[arg(long)]
        include_total: bool,
    },
    /// Sent and/or received trade offers
    TradeOffers {
        #[arg(long)]
        sent: bool,
        #[arg(long)]
        received: bool,
        #[arg(long)]
        descriptions: bool,
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        active_only: bool,
        #[arg(long)]
        historical_only: bool,
        /// With --active-only, also return offers updated since this unix time
        #[arg(long)]
        time_historical_cutoff: Option<u64>,
    },
    /// A single trade offer
    TradeOffer {
        #[arg(long)]
        tradeofferid: u64,
        #[arg(long, default_value = "english")]
        language: String,
    },
    /// Counts of pending and new trade offers
    OffersSummary {
        /// Time of the last visit to the trade offer page (unix time)
        #[arg(long, default_value = "0")]
        time_last_visit: u64,
    },
}

pub async fn run(args: &EconArgs, steam: &SteamApiHandler, format: &OutputFormat) -> Result<()> {
    let econ = steam.econ();
    let body = match &args.command {
        EconCommand::TradeHistory {
            max_trades,
            start_after_time,
            start_after_tradeid,
            navigating_back,
            descriptions,
            language,
            include_failed,
            include_total,
        } => {
            let mut query = TradeHistoryQuery::new(*max_trades)
                .with_navigating_back(*navigating_back)
                .with_descriptions(*descriptions)
                .with_include_failed(*include_failed)
                .with_include_total(*include_total);
            if let (Some(time), Some(tradeid)) = (start_after_time, start_after_tradeid) {
                query = query.with_start_after(*time, *tradeid);
            }
            if let Some(language) = language {
                query = query.with_language(language);
            }
            econ.get_trade_history(&query).await?
        }
        EconCommand::TradeOffers {
            sent,
            received,
            descriptions,
            language,
            active_only,
            historical_only,
            time_historical_cutoff,
        } => {
            let mut query = TradeOffersQuery::default()
                .with_sent_offers(*sent)
                .with_received_offers(*received)
                .with_descriptions(*descriptions)
                .with_active_only(*active_only)
                .with_historical_only(*historical_only);
            if let Some(language) = language {
                query = query.with_language(language);
            }
            if let Some(cutoff) = time_historical_cutoff {
                query = query.with_time_historical_cutoff(*cutoff);
            }
            econ.get_trade_offers(&query).await?
        }
        EconCommand::TradeOffer {
            tradeofferid,
            language,
        } => econ.get_trade_offer(*tradeofferid, language).await?,
        EconCommand::OffersSummary { time_last_visit } => {
            econ.get_trade_offers_summary(*time_last_visit).await?
        }
    };

    print_body(&body, format);
    Ok(())
}
