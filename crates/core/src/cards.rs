use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Spades,
    Clubs,
    Hearts,
    Diamonds,
}

impl Suit {
    /// Generation order of a fresh deck.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Clubs, Suit::Hearts, Suit::Diamonds];

    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => 's',
            Suit::Clubs => 'c',
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_lowercase() {
            's' => Some(Suit::Spades),
            'c' => Some(Suit::Clubs),
            'h' => Some(Suit::Hearts),
            'd' => Some(Suit::Diamonds),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Ace,
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
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value, 1 (ace) through 13 (king).
    pub fn value(self) -> u8 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
        }
    }

    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }

    pub fn face(self) -> String {
        match self {
            Rank::Ace => "A".to_string(),
            Rank::Jack => "J".to_string(),
            Rank::Queen => "Q".to_string(),
            Rank::King => "K".to_string(),
            other => other.value().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Host-facing face such as `♠A` or `♥10`.
    pub fn label(&self) -> String {
        format!("{}{}", self.suit.glyph(), self.rank.face())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.symbol(), self.rank.value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    #[error("empty card text")]
    Empty,
    #[error("unknown suit '{0}'")]
    UnknownSuit(char),
    #[error("invalid rank '{0}'")]
    InvalidRank(String),
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the compact `<suit><rank>` form, e.g. `s1`, `h10`, `d13`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        let mut chars = text.chars();
        let symbol = chars.next().ok_or(ParseCardError::Empty)?;
        let suit = Suit::from_symbol(symbol).ok_or(ParseCardError::UnknownSuit(symbol))?;
        let rest = chars.as_str();
        let rank = rest
            .parse::<u8>()
            .ok()
            .and_then(Rank::from_value)
            .ok_or_else(|| ParseCardError::InvalidRank(rest.to_string()))?;
        Ok(Card::new(suit, rank))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_structural() {
        let a = Card::new(Suit::Hearts, Rank::Queen);
        let b = Card::new(Suit::Hearts, Rank::Queen);
        assert_eq!(a, b);
        assert_ne!(a, Card::new(Suit::Diamonds, Rank::Queen));
        assert_ne!(a, Card::new(Suit::Hearts, Rank::King));
    }

    #[test]
    fn parses_compact_text() {
        assert_eq!("s1".parse::<Card>(), Ok(Card::new(Suit::Spades, Rank::Ace)));
        assert_eq!("D13".parse::<Card>(), Ok(Card::new(Suit::Diamonds, Rank::King)));
        assert_eq!(" h10 ".parse::<Card>(), Ok(Card::new(Suit::Hearts, Rank::Ten)));
        assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
        assert_eq!("x3".parse::<Card>(), Err(ParseCardError::UnknownSuit('x')));
        assert_eq!(
            "c14".parse::<Card>(),
            Err(ParseCardError::InvalidRank("14".to_string()))
        );
        assert_eq!(
            "c0".parse::<Card>(),
            Err(ParseCardError::InvalidRank("0".to_string()))
        );
    }

    #[test]
    fn display_matches_parse() {
        let card = Card::new(Suit::Clubs, Rank::Jack);
        assert_eq!(card.to_string(), "c11");
        assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        assert_eq!(card.label(), "♣J");
    }

    #[test]
    fn rank_values_cover_one_to_thirteen() {
        for (idx, rank) in Rank::ALL.iter().enumerate() {
            assert_eq!(usize::from(rank.value()), idx + 1);
            assert_eq!(Rank::from_value(rank.value()), Some(*rank));
        }
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
    }
}
