//! # feltbot Strategy
//!
//! Blackjack basic-strategy play resolution.
//!
//! ## Architecture
//! ```text
//! HandObservation (structured, from feltbot-core)
//!   ├── Card::parse      "8h" → Eight of Hearts
//!   ├── classify hand    Pair("8-8") | Soft("A-6") | Hard("16")
//!   ├── StrategyTables   (row, dealer column) → H/S/D/P
//!   └── downgrade        recommended play vs. currently offered options
//! ```
//!
//! The three strategy grids are embedded in the binary and parsed once at
//! startup via [`StrategyTables::load`]; a malformed grid is fatal there and
//! nowhere else. Resolution itself is pure: same hand, dealer, and options in,
//! same [`Action`] out.

pub mod card;
pub mod resolver;
pub mod table;

pub use card::{Card, Rank, Suit};
pub use resolver::{StrategyResolver, downgrade};
pub use table::{Action, StrategyTable, StrategyTables};
