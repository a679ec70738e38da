//! Workspace-wide error type.
//!
//! Only [`BotError::MalformedDataset`] and [`BotError::Config`] are fatal, and
//! only at startup. Everything else is scoped to a single card parse or table
//! lookup; the scheduling loop never terminates over one bad event.

use thiserror::Error;

/// All errors raised by the feltbot crates.
#[derive(Debug, Error)]
pub enum BotError {
    /// The card identifier did not decode to a rank and suit.
    #[error("invalid card identifier '{0}': expected 2-3 chars of rank then suit")]
    InvalidCardFormat(String),

    /// `value()` was called on an Ace. Aces are worth 1 or 11 depending on the
    /// rest of the hand, so only the hand classifier may resolve them.
    #[error("an Ace has no single value; the hand classifier must resolve it")]
    AmbiguousValue,

    /// A strategy grid did not match its declared row/column vocabulary.
    #[error("malformed strategy dataset '{name}': {reason}")]
    MalformedDataset { name: String, reason: String },

    /// A lookup key fell outside a table's fixed vocabulary. Indicates a hand
    /// classification defect upstream, not bad input.
    #[error("strategy table has no entry at row '{row}', column '{column}'")]
    UnknownKey { row: String, column: String },

    /// A hand summed outside the bands the tables cover (soft [2,9], hard [5,20]).
    #[error("hand total {total} ({kind}) is outside the strategy tables")]
    UndefinedHandTotal { total: u32, kind: &'static str },

    /// Configuration could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),
}

/// Workspace result alias.
pub type Result<T> = std::result::Result<T, BotError>;
