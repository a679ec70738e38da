//! Card identifiers — parsing and classification.

use std::str::FromStr;

use feltbot_core::{BotError, Result};

/// Card rank. Ten is a numeral, distinct from the face cards even though both
/// are worth ten points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

/// Card suit. Carried for identity and display only; it never affects value
/// or strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

/// A playing card decoded from a 2-3 character identifier such as `8h`,
/// `10s`, or `Ad`.
///
/// Equality compares ranks only — `8h == 8c` — which is exactly what pair
/// detection needs.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Card {}

impl Card {
    /// Parse a card identifier: a 1-2 digit numeral or one of `a`/`j`/`q`/`k`,
    /// followed by a suit letter, case-insensitive.
    pub fn parse(identifier: &str) -> Result<Self> {
        let invalid = || BotError::InvalidCardFormat(identifier.to_string());

        if identifier.len() < 2 || identifier.len() > 3 || !identifier.is_ascii() {
            return Err(invalid());
        }

        let lower = identifier.to_ascii_lowercase();
        let (rank_part, suit_part) = lower.split_at(lower.len() - 1);

        let rank = match rank_part {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" => Rank::Ten,
            "j" => Rank::Jack,
            "q" => Rank::Queen,
            "k" => Rank::King,
            "a" => Rank::Ace,
            _ => return Err(invalid()),
        };
        let suit = match suit_part {
            "c" => Suit::Clubs,
            "d" => Suit::Diamonds,
            "h" => Suit::Hearts,
            "s" => Suit::Spades,
            _ => return Err(invalid()),
        };

        Ok(Self { rank, suit })
    }

    /// The card's blackjack point value.
    ///
    /// Fails with [`BotError::AmbiguousValue`] for aces: an Ace is worth 1 or
    /// 11 depending on the rest of the hand, and only the hand classifier may
    /// decide which.
    pub fn value(&self) -> Result<u32> {
        match self.rank {
            Rank::Ace => Err(BotError::AmbiguousValue),
            Rank::Jack | Rank::Queen | Rank::King => Ok(10),
            Rank::Two => Ok(2),
            Rank::Three => Ok(3),
            Rank::Four => Ok(4),
            Rank::Five => Ok(5),
            Rank::Six => Ok(6),
            Rank::Seven => Ok(7),
            Rank::Eight => Ok(8),
            Rank::Nine => Ok(9),
            Rank::Ten => Ok(10),
        }
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }

    /// Whether the card is a face card (Jack, Queen, or King).
    pub fn is_face(&self) -> bool {
        matches!(self.rank, Rank::Jack | Rank::Queen | Rank::King)
    }

    /// Whether the card is a numeral (not face or ace).
    pub fn is_numeric(&self) -> bool {
        !self.is_ace() && !self.is_face()
    }

    /// The strategy-table vocabulary token for this card: dealer column, or
    /// the partial soft/pair row. Aces map to `A`, face cards to `T`, numerals
    /// to their own digits.
    pub fn table_key(&self) -> &'static str {
        match self.rank {
            Rank::Ace => "A",
            Rank::Jack | Rank::Queen | Rank::King => "T",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
        }
    }
}

impl FromStr for Card {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        };
        write!(f, "{name}")
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        };
        write!(f, "{name}")
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_forms() {
        assert_eq!(Card::parse("8h").unwrap().rank, Rank::Eight);
        assert_eq!(Card::parse("10s").unwrap().rank, Rank::Ten);
        assert_eq!(Card::parse("AD").unwrap().rank, Rank::Ace);
        assert_eq!(Card::parse("kc").unwrap().rank, Rank::King);
        assert_eq!(Card::parse("Qh").unwrap().suit, Suit::Hearts);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "h", "8", "11h", "8x", "xh", "10hs", "ah8", "1h"] {
            assert!(
                matches!(Card::parse(bad), Err(BotError::InvalidCardFormat(_))),
                "expected InvalidCardFormat for '{bad}'"
            );
        }
    }

    #[test]
    fn test_value() {
        assert_eq!(Card::parse("2c").unwrap().value().unwrap(), 2);
        assert_eq!(Card::parse("10c").unwrap().value().unwrap(), 10);
        assert_eq!(Card::parse("jd").unwrap().value().unwrap(), 10);
        assert!(matches!(
            Card::parse("ah").unwrap().value(),
            Err(BotError::AmbiguousValue)
        ));
    }

    #[test]
    fn test_classification() {
        let ace = Card::parse("as").unwrap();
        let king = Card::parse("kh").unwrap();
        let nine = Card::parse("9d").unwrap();
        assert!(ace.is_ace() && !ace.is_face() && !ace.is_numeric());
        assert!(king.is_face() && !king.is_ace() && !king.is_numeric());
        assert!(nine.is_numeric() && !nine.is_ace() && !nine.is_face());
    }

    #[test]
    fn test_table_key() {
        assert_eq!(Card::parse("as").unwrap().table_key(), "A");
        assert_eq!(Card::parse("jh").unwrap().table_key(), "T");
        assert_eq!(Card::parse("qd").unwrap().table_key(), "T");
        assert_eq!(Card::parse("kc").unwrap().table_key(), "T");
        assert_eq!(Card::parse("7h").unwrap().table_key(), "7");
        assert_eq!(Card::parse("10h").unwrap().table_key(), "10");
    }

    #[test]
    fn test_equality_ignores_suit() {
        assert_eq!(Card::parse("8h").unwrap(), Card::parse("8c").unwrap());
        assert_ne!(Card::parse("8h").unwrap(), Card::parse("9h").unwrap());
        // Jack and King both key as "T" but are not equal ranks.
        assert_ne!(Card::parse("jh").unwrap(), Card::parse("kh").unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::parse("8h").unwrap().to_string(), "Eight of Hearts");
    }
}
