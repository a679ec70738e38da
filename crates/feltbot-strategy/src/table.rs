//! Basic-strategy tables — immutable (row, dealer column) → action grids.
//!
//! Three grids cover the whole decision space: hard totals, soft totals, and
//! pairs. Each is a rectangle of single-character codes embedded at compile
//! time, one line per row key in the declared order, no headers. The grids are
//! parsed and validated once at startup and shared read-only afterwards.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use feltbot_core::{BotError, Result};

/// Dealer up-card columns, shared by all three tables.
pub const DEALER_COLUMNS: [&str; 10] = ["2", "3", "4", "5", "6", "7", "8", "9", "T", "A"];

/// Hard-total rows, high to low.
pub const HARD_ROWS: [&str; 16] = [
    "20", "19", "18", "17", "16", "15", "14", "13", "12", "11", "10", "9", "8", "7", "6", "5",
];

/// Soft-total rows (ace plus the shown total), high to low.
pub const SOFT_ROWS: [&str; 8] = ["A-9", "A-8", "A-7", "A-6", "A-5", "A-4", "A-3", "A-2"];

/// Paired-rank rows, high to low.
pub const PAIR_ROWS: [&str; 10] = [
    "A-A", "T-T", "9-9", "8-8", "7-7", "6-6", "5-5", "4-4", "3-3", "2-2",
];

/// A recommended blackjack play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Hit,
    Stand,
    Double,
    Split,
}

impl Action {
    /// Decode a single-character table code.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'H' => Some(Action::Hit),
            'S' => Some(Action::Stand),
            'D' => Some(Action::Double),
            'P' => Some(Action::Split),
            _ => None,
        }
    }

    /// The table code for this action.
    pub fn code(&self) -> char {
        match self {
            Action::Hit => 'H',
            Action::Stand => 'S',
            Action::Double => 'D',
            Action::Split => 'P',
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = match self {
            Action::Hit => "hit",
            Action::Stand => "stand",
            Action::Double => "double down",
            Action::Split => "split",
        };
        write!(f, "{verb}")
    }
}

/// One immutable strategy grid.
#[derive(Debug)]
pub struct StrategyTable {
    name: String,
    cells: HashMap<(String, String), Action>,
}

impl StrategyTable {
    /// Parse a rectangular grid of codes against its declared row and column
    /// vocabularies. Any dimension mismatch or unknown code char fails with
    /// [`BotError::MalformedDataset`].
    pub fn load(name: &str, data: &str, rows: &[&str], columns: &[&str]) -> Result<Self> {
        let malformed = |reason: String| BotError::MalformedDataset {
            name: name.to_string(),
            reason,
        };

        let lines: Vec<&str> = data.lines().filter(|l| !l.is_empty()).collect();
        if lines.len() != rows.len() {
            return Err(malformed(format!(
                "expected {} rows, found {}",
                rows.len(),
                lines.len()
            )));
        }

        let mut cells = HashMap::with_capacity(rows.len() * columns.len());
        for (row_key, line) in rows.iter().zip(&lines) {
            let codes: Vec<char> = line.chars().collect();
            if codes.len() != columns.len() {
                return Err(malformed(format!(
                    "row '{row_key}' has {} columns, expected {}",
                    codes.len(),
                    columns.len()
                )));
            }
            for (col_key, code) in columns.iter().zip(codes) {
                let action = Action::from_code(code)
                    .ok_or_else(|| malformed(format!("invalid code '{code}' in row '{row_key}'")))?;
                cells.insert((row_key.to_string(), col_key.to_string()), action);
            }
        }

        tracing::debug!("Loaded strategy table '{name}' ({} cells)", cells.len());
        Ok(Self { name: name.to_string(), cells })
    }

    /// Look up the recommended action. A miss means the keys fell outside the
    /// fixed vocabulary, which indicates a hand classification bug upstream.
    pub fn lookup(&self, row: &str, column: &str) -> Result<Action> {
        self.cells
            .get(&(row.to_string(), column.to_string()))
            .copied()
            .ok_or_else(|| BotError::UnknownKey {
                row: row.to_string(),
                column: column.to_string(),
            })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The three grids, loaded together at startup.
#[derive(Debug)]
pub struct StrategyTables {
    pub hard: StrategyTable,
    pub soft: StrategyTable,
    pub pair: StrategyTable,
}

impl StrategyTables {
    /// Parse the embedded baseline datasets. Failure here is fatal: the bot
    /// cannot make decisions without the tables.
    pub fn load() -> Result<Self> {
        Ok(Self {
            hard: StrategyTable::load(
                "baseline_hard",
                include_str!("../data/baseline_hard.dat"),
                &HARD_ROWS,
                &DEALER_COLUMNS,
            )?,
            soft: StrategyTable::load(
                "baseline_soft",
                include_str!("../data/baseline_soft.dat"),
                &SOFT_ROWS,
                &DEALER_COLUMNS,
            )?,
            pair: StrategyTable::load(
                "baseline_pairs",
                include_str!("../data/baseline_pairs.dat"),
                &PAIR_ROWS,
                &DEALER_COLUMNS,
            )?,
        })
    }
}
