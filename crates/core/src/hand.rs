use crate::{Card, Cards, Rank, Suit};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HandKind {
    None,
    StraightFlush,
    FourCard,
    FullHouse,
    Flush,
    Straight,
    ThreeCard,
    TwoPair,
    OnePair,
    HighCard,
}

impl HandKind {
    /// In classification check order; `None` is checked first.
    pub const ALL: [HandKind; 10] = [
        HandKind::None,
        HandKind::StraightFlush,
        HandKind::FourCard,
        HandKind::FullHouse,
        HandKind::Flush,
        HandKind::Straight,
        HandKind::ThreeCard,
        HandKind::TwoPair,
        HandKind::OnePair,
        HandKind::HighCard,
    ];

    pub fn id(self) -> &'static str {
        match self {
            HandKind::None => "none",
            HandKind::StraightFlush => "straightFlush",
            HandKind::FourCard => "fourCard",
            HandKind::FullHouse => "fullHouse",
            HandKind::Flush => "flush",
            HandKind::Straight => "straight",
            HandKind::ThreeCard => "threeCard",
            HandKind::TwoPair => "twoPair",
            HandKind::OnePair => "onePair",
            HandKind::HighCard => "highCard",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    pub fn base_score(self) -> i64 {
        match self {
            HandKind::StraightFlush => 80,
            HandKind::FourCard => 60,
            HandKind::FullHouse => 40,
            HandKind::Flush => 30,
            HandKind::Straight => 20,
            HandKind::ThreeCard => 15,
            HandKind::TwoPair => 10,
            HandKind::OnePair => 5,
            HandKind::HighCard => 1,
            HandKind::None => 0,
        }
    }
}

/// Cards bucketed by suit and by rank. Buckets keep collection order and
/// iterate in ascending suit / rank order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardGroups {
    pub by_suit: BTreeMap<Suit, Vec<Card>>,
    pub by_rank: BTreeMap<Rank, Vec<Card>>,
}

impl CardGroups {
    pub fn from_cards(cards: &Cards) -> Self {
        let mut groups = Self::default();
        for card in cards {
            groups.by_suit.entry(card.suit).or_default().push(*card);
            groups.by_rank.entry(card.rank).or_default().push(*card);
        }
        groups
    }

    /// Rank buckets holding exactly `size` cards, ascending by rank.
    pub fn rank_buckets(&self, size: usize) -> impl Iterator<Item = &Vec<Card>> + '_ {
        self.by_rank.values().filter(move |cards| cards.len() == size)
    }

    pub fn has_rank_bucket(&self, size: usize) -> bool {
        self.rank_buckets(size).next().is_some()
    }

    pub fn has_suit_bucket(&self, size: usize) -> bool {
        self.by_suit.values().any(|cards| cards.len() == size)
    }
}

/// Cards committed for scoring. Kind, scored cards and score are derived
/// from the current list on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableCards {
    cards: Cards,
}

impl TableCards {
    pub fn new(list: Vec<Card>) -> Self {
        Self {
            cards: Cards::new(list),
        }
    }

    pub fn add(&self, card: Card) -> Self {
        Self {
            cards: self.cards.push(card),
        }
    }

    pub fn remove(&self, card: Card) -> Self {
        Self {
            cards: self.cards.remove(card),
        }
    }

    pub fn cards(&self) -> &Cards {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(card)
    }

    pub fn groups(&self) -> CardGroups {
        CardGroups::from_cards(&self.cards)
    }

    pub fn kind(&self) -> HandKind {
        if self.cards.is_empty() {
            return HandKind::None;
        }
        let groups = self.groups();
        let straight = self.is_straight();
        let flush = groups.has_suit_bucket(5);

        if straight && flush {
            return HandKind::StraightFlush;
        }
        if groups.has_rank_bucket(4) {
            return HandKind::FourCard;
        }
        if groups.has_rank_bucket(3) && groups.has_rank_bucket(2) {
            return HandKind::FullHouse;
        }
        if flush {
            return HandKind::Flush;
        }
        if straight {
            return HandKind::Straight;
        }
        if groups.has_rank_bucket(3) {
            return HandKind::ThreeCard;
        }
        if groups.rank_buckets(2).count() == 2 {
            return HandKind::TwoPair;
        }
        if groups.has_rank_bucket(2) {
            return HandKind::OnePair;
        }
        HandKind::HighCard
    }

    pub fn scored_cards(&self) -> Vec<Card> {
        let groups = self.groups();
        match self.kind() {
            HandKind::StraightFlush
            | HandKind::FullHouse
            | HandKind::Flush
            | HandKind::Straight => self.cards.as_slice().to_vec(),
            HandKind::FourCard => first_bucket(&groups, 4),
            HandKind::ThreeCard => first_bucket(&groups, 3),
            HandKind::TwoPair => groups.rank_buckets(2).flatten().copied().collect(),
            HandKind::OnePair => first_bucket(&groups, 2),
            HandKind::HighCard => highest_card(&self.cards).into_iter().collect(),
            HandKind::None => Vec::new(),
        }
    }

    /// Base score of the kind plus the rank values of the scored cards.
    pub fn score(&self) -> i64 {
        self.kind().base_score() + rank_sum(&self.scored_cards())
    }

    /// Five cards whose ranks run consecutively, or the ace-high run 10-J-Q-K-A.
    pub fn is_straight(&self) -> bool {
        if self.cards.len() != 5 {
            return false;
        }
        let mut values = self.cards.map(|card| card.rank.value());
        values.sort_unstable();
        let consecutive = values
            .iter()
            .enumerate()
            .all(|(idx, value)| usize::from(*value) == usize::from(values[0]) + idx);
        consecutive || values == [1, 10, 11, 12, 13]
    }

    pub fn is_flush(&self) -> bool {
        self.groups().has_suit_bucket(5)
    }
}

/// Sum of the rank values, ace counting 1.
pub fn rank_sum(cards: &[Card]) -> i64 {
    cards.iter().map(|card| i64::from(card.rank.value())).sum()
}

fn first_bucket(groups: &CardGroups, size: usize) -> Vec<Card> {
    groups.rank_buckets(size).next().cloned().unwrap_or_default()
}

// Stable sort, so ties on the top rank go to the earliest card.
fn highest_card(cards: &Cards) -> Option<Card> {
    cards
        .sort_by(|a, b| b.rank.cmp(&a.rank))
        .get(0)
}
