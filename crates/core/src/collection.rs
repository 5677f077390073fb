use crate::{Card, RngState};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardsError {
    #[error("cannot draw from an empty collection")]
    EmptyCollection,
}

/// Ordered, immutable run of cards. Every derivation returns a new
/// collection; the receiver is never touched, so older snapshots stay valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cards {
    list: Vec<Card>,
}

impl Cards {
    pub fn new(list: Vec<Card>) -> Self {
        Self { list }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn shuffle(&self, rng: &mut RngState) -> Self {
        Self::new(rng.shuffled(&self.list))
    }

    pub fn sort_by<F>(&self, compare: F) -> Self
    where
        F: FnMut(&Card, &Card) -> Ordering,
    {
        let mut list = self.list.clone();
        list.sort_by(compare);
        Self::new(list)
    }

    /// Splits off the first card.
    pub fn draw(&self) -> Result<(Card, Self), CardsError> {
        let (first, rest) = self
            .list
            .split_first()
            .ok_or(CardsError::EmptyCollection)?;
        Ok((*first, Self::new(rest.to_vec())))
    }

    pub fn filter<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&Card) -> bool,
    {
        Self::new(self.list.iter().copied().filter(|card| keep(card)).collect())
    }

    pub fn push(&self, card: Card) -> Self {
        let mut list = Vec::with_capacity(self.list.len() + 1);
        list.extend_from_slice(&self.list);
        list.push(card);
        Self::new(list)
    }

    /// Drops every card equal to `card`.
    pub fn remove(&self, card: Card) -> Self {
        self.filter(|it| *it != card)
    }

    pub fn map<T, F>(&self, f: F) -> Vec<T>
    where
        F: FnMut(&Card) -> T,
    {
        self.list.iter().map(f).collect()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.list.iter().any(|it| *it == card)
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Card> {
        self.list.get(index).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.list.iter()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.list
    }
}

impl FromIterator<Card> for Cards {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Cards {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    fn sample() -> Cards {
        Cards::new(vec![
            Card::new(Suit::Spades, Rank::Five),
            Card::new(Suit::Hearts, Rank::Ace),
            Card::new(Suit::Clubs, Rank::King),
        ])
    }

    #[test]
    fn draw_splits_first_card() {
        let cards = sample();
        let (card, rest) = cards.draw().expect("non-empty");
        assert_eq!(card, Card::new(Suit::Spades, Rank::Five));
        assert_eq!(rest.as_slice(), &cards.as_slice()[1..]);
        assert_eq!(cards.len(), 3);
    }

    #[test]
    fn draw_from_empty_fails() {
        assert_eq!(Cards::empty().draw(), Err(CardsError::EmptyCollection));
    }

    #[test]
    fn remove_uses_value_equality() {
        let cards = sample();
        let removed = cards.remove(Card::new(Suit::Hearts, Rank::Ace));
        assert_eq!(removed.len(), 2);
        assert!(!removed.contains(Card::new(Suit::Hearts, Rank::Ace)));
        assert!(cards.contains(Card::new(Suit::Hearts, Rank::Ace)));
    }

    #[test]
    fn map_projects_in_order() {
        assert_eq!(sample().map(|card| card.rank.value()), vec![5, 1, 13]);
    }
}
