use crate::{Card, Cards, CardsError, Rank, RngState, Suit};
use serde::{Deserialize, Serialize};

/// The draw pile. Immutable like the collection it wraps: `shuffle` and
/// `draw` hand back a new deck and the caller rebinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Cards,
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard52()
    }
}

impl Deck {
    /// One card per (suit, rank), suits outer and ranks ascending inner.
    pub fn generate() -> Cards {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(suit, rank)))
            .collect()
    }

    pub fn standard52() -> Self {
        Self::from_cards(Self::generate())
    }

    pub fn from_cards(cards: Cards) -> Self {
        Self { cards }
    }

    pub fn shuffle(&self, rng: &mut RngState) -> Self {
        Self::from_cards(self.cards.shuffle(rng))
    }

    pub fn draw(&self) -> Result<(Card, Deck), CardsError> {
        let (card, remains) = self.cards.draw()?;
        Ok((card, Self::from_cards(remains)))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &Cards {
        &self.cards
    }
}
