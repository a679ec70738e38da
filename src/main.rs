//! # feltbot — cooldown-scheduled income grinder and blackjack player
//!
//! Wiring only: the scheduling and strategy cores consume already-structured
//! events. This binary reads newline-delimited JSON [`Event`]s on stdin and
//! writes dispatch and play decisions as JSON lines on stdout; an external
//! transport turns chat messages into events and delivers our lines back to
//! the game.
//!
//! Usage:
//!   feltbot                         # default config (~/.feltbot/config.toml)
//!   feltbot --config ./bot.toml     # explicit config
//!   feltbot --verbose               # debug logging

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{Mutex, mpsc};
use tracing_subscriber::EnvFilter;

use feltbot_core::{BotConfig, Event, SessionLedger};
use feltbot_scheduler::{Scheduler, spawn_scheduler};
use feltbot_strategy::{Action, Card, StrategyResolver, StrategyTables};

#[derive(Parser)]
#[command(name = "feltbot", version, about = "Income grinder and blackjack player for chat economy games")]
struct Cli {
    /// Config file path (default: ~/.feltbot/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// The reply to a hand observation.
#[derive(Serialize)]
struct Play {
    action: Action,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "feltbot=debug,feltbot_core=debug,feltbot_strategy=debug,feltbot_scheduler=debug"
    } else {
        "feltbot=info,feltbot_core=info,feltbot_strategy=info,feltbot_scheduler=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .init();

    let config = match &cli.config {
        Some(path) => BotConfig::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => BotConfig::load().context("loading default config")?,
    };

    // Dataset load failure is the one fatal startup error: without the tables
    // the bot cannot make decisions.
    let tables = Arc::new(StrategyTables::load().context("loading strategy tables")?);
    let resolver = StrategyResolver::new(tables);
    let mut ledger = SessionLedger::new();

    let scheduler = Arc::new(Mutex::new(Scheduler::from_config(&config)));
    let (dispatch_tx, mut dispatch_rx) = mpsc::channel(16);
    let _scheduler_task = spawn_scheduler(
        scheduler.clone(),
        dispatch_tx,
        Duration::from_secs(config.tick_secs),
    );

    tracing::info!(
        "feltbot started: {} actions, {}s spacing",
        config.actions.len(),
        config.spacing_secs
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            Some(dispatch) = dispatch_rx.recv() => {
                println!("{}", serde_json::to_string(&dispatch)?);
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                let event = match serde_json::from_str::<Event>(&line) {
                    Ok(event) => event,
                    Err(e) => {
                        tracing::warn!("Skipping malformed event: {e}");
                        continue;
                    }
                };
                handle_event(event, &scheduler, &resolver, &mut ledger).await;
            }
        }
    }

    tracing::info!("Input closed; session balance ${}", ledger.balance());
    Ok(())
}

/// Apply one structured event. A bad event is logged and skipped; nothing
/// here can take the scheduling loop down.
async fn handle_event(
    event: Event,
    scheduler: &Arc<Mutex<Scheduler>>,
    resolver: &StrategyResolver,
    ledger: &mut SessionLedger,
) {
    match event {
        Event::CooldownReset { action_id, resume_at } => {
            scheduler.lock().await.resync(&action_id, resume_at);
        }
        Event::TaskEarning { amount } => {
            ledger.record(amount);
        }
        Event::HandObservation { player_cards, dealer_card, options } => {
            let hand: Vec<Card> = match player_cards.iter().map(|s| Card::parse(s)).collect() {
                Ok(hand) => hand,
                Err(e) => {
                    tracing::warn!("Skipping hand with bad card: {e}");
                    return;
                }
            };
            let dealer = match Card::parse(&dealer_card) {
                Ok(dealer) => dealer,
                Err(e) => {
                    tracing::warn!("Skipping hand with bad dealer card: {e}");
                    return;
                }
            };
            let action = resolver.decide(&hand, &dealer, options);
            tracing::info!("Playing {action} against dealer {dealer}");
            match serde_json::to_string(&Play { action }) {
                Ok(json) => println!("{json}"),
                Err(e) => tracing::error!("Failed to serialize play: {e}"),
            }
        }
        Event::Unrecognized => {
            tracing::debug!("Unrecognized event, skipping");
        }
    }
}
