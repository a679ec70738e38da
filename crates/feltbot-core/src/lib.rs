//! # feltbot Core
//!
//! Shared foundation for the feltbot workspace: the error type, the toml
//! configuration, the structured event boundary, and the in-memory session
//! ledger.
//!
//! Everything here operates on already-structured data. Turning raw chat
//! messages into [`events::Event`] values, and delivering
//! [`events::Dispatch`] values to the game, are transport concerns that live
//! outside this workspace.

pub mod config;
pub mod error;
pub mod events;
pub mod ledger;

pub use config::{ActionConfig, BotConfig};
pub use error::{BotError, Result};
pub use events::{Dispatch, Event, PlayOptions};
pub use ledger::SessionLedger;
