//! The structured event boundary.
//!
//! Raw chat messages are classified outside this workspace (regex extraction
//! of amounts, durations, and card glyphs is a transport concern). What
//! crosses into the core is a tagged [`Event`]; what crosses out is a
//! [`Dispatch`]. Anything the classifier does not recognize maps to
//! [`Event::Unrecognized`], which callers log and skip.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An inbound, already-structured notification from the game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// The game reported an authoritative resume time for one command.
    CooldownReset {
        action_id: String,
        resume_at: DateTime<Utc>,
    },
    /// An income command paid out (or fined, when negative).
    TaskEarning { amount: i64 },
    /// A blackjack turn is in progress and awaiting a response.
    HandObservation {
        /// The player's cards, in dealt order, as raw identifiers (`"8h"`).
        player_cards: Vec<String>,
        /// The dealer's visible card.
        dealer_card: String,
        /// What the game currently offers for this turn.
        options: PlayOptions,
    },
    /// Anything the upstream classifier could not place.
    #[serde(other)]
    Unrecognized,
}

/// What the player may do on the current blackjack turn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayOptions {
    pub hit: bool,
    pub stand: bool,
    pub double: bool,
    pub split: bool,
}

impl PlayOptions {
    /// Every response offered; the usual state on a fresh two-card hand.
    pub fn all() -> Self {
        Self { hit: true, stand: true, double: true, split: true }
    }
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self::all()
    }
}

impl std::fmt::Display for PlayOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "hit={} stand={} double={} split={}",
            self.hit, self.stand, self.double, self.split
        )
    }
}

/// An outbound command the scheduler has decided to send.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dispatch {
    pub action_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cooldown_reset_parses() {
        let json = r#"{"type":"cooldown_reset","action_id":"$work","resume_at":"2026-08-26T12:00:00Z"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        match event {
            Event::CooldownReset { action_id, .. } => assert_eq!(action_id, "$work"),
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn test_hand_observation_parses() {
        let json = r#"{
            "type": "hand_observation",
            "player_cards": ["8h", "8c"],
            "dealer_card": "6d",
            "options": {"hit": true, "stand": true, "double": true, "split": true}
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        match event {
            Event::HandObservation { player_cards, dealer_card, options } => {
                assert_eq!(player_cards, vec!["8h", "8c"]);
                assert_eq!(dealer_card, "6d");
                assert!(options.split);
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_tag_classifies_as_unrecognized() {
        let json = r#"{"type":"deposit_receipt","amount":500}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert!(matches!(event, Event::Unrecognized));
    }
}
