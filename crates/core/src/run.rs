use crate::{
    score_hand, Card, Cards, CardsError, Deck, Event, EventBus, GameConfig, RngState,
    ScoreTables, TableCards,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RunError {
    #[error("round is over")]
    RoundOver,
    #[error("no discards left")]
    NoDiscardsLeft,
    #[error("no cards selected")]
    EmptySelection,
    #[error("selection is full ({0} cards)")]
    SelectionFull(usize),
    #[error("card {0} is not in hand")]
    CardNotInHand(Card),
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    #[error("deck error: {0}")]
    Cards(#[from] CardsError),
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortMode {
    Suit,
    #[default]
    Rank,
}

/// One round: a shrinking deck, the hand dealt from it and the cards
/// picked for the next play. Each transition returns a new snapshot.
#[derive(Debug, Clone)]
pub struct RunState {
    config: GameConfig,
    tables: ScoreTables,
    seed: u64,
    plays_left: u8,
    discards_left: u8,
    score: i64,
    deck: Deck,
    hand: Cards,
    table: TableCards,
    sort_mode: SortMode,
}

impl RunState {
    /// Shuffles a fresh deck and deals the opening hand.
    pub fn new(
        config: GameConfig,
        rng: &mut RngState,
        events: &mut EventBus,
    ) -> Result<Self, RunError> {
        if config.hand_size == 0 {
            return Err(RunError::InvalidConfig("hand_size must be at least 1"));
        }
        if config.max_selected == 0 {
            return Err(RunError::InvalidConfig("max_selected must be at least 1"));
        }
        let deck = Deck::standard52().shuffle(rng);
        log::debug!("new round with seed {}", rng.seed());
        let state = Self {
            tables: ScoreTables::from_config(&config),
            seed: rng.seed(),
            plays_left: config.plays,
            discards_left: config.discards,
            score: 0,
            deck,
            hand: Cards::empty(),
            table: TableCards::default(),
            sort_mode: SortMode::default(),
            config,
        };
        Ok(state.deal(events)?.sorted())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn plays_left(&self) -> u8 {
        self.plays_left
    }

    pub fn discards_left(&self) -> u8 {
        self.discards_left
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn hand(&self) -> &Cards {
        &self.hand
    }

    pub fn table(&self) -> &TableCards {
        &self.table
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn is_selected(&self, card: Card) -> bool {
        self.table.contains(card)
    }

    pub fn is_over(&self) -> bool {
        self.plays_left == 0 || (self.hand.is_empty() && self.deck.is_empty())
    }

    /// Refills the hand up to the configured size, stopping early once the
    /// deck runs dry.
    pub fn deal(&self, events: &mut EventBus) -> Result<Self, RunError> {
        let mut deck = self.deck.clone();
        let mut hand = self.hand.clone();
        let mut count = 0usize;
        while hand.len() < self.config.hand_size && !deck.is_empty() {
            let (card, remains) = deck.draw()?;
            hand = hand.push(card);
            deck = remains;
            count += 1;
        }
        log::debug!("dealt {count} cards, {} left in deck", deck.len());
        events.push(Event::HandDealt {
            count,
            deck_left: deck.len(),
        });
        Ok(Self {
            deck,
            hand,
            ..self.clone()
        })
    }

    /// Hand ordered highest first by the current sort mode.
    pub fn sorted(&self) -> Self {
        let hand = match self.sort_mode {
            SortMode::Rank => self.hand.sort_by(|a, b| b.rank.cmp(&a.rank)),
            SortMode::Suit => self
                .hand
                .sort_by(|a, b| b.suit.symbol().cmp(&a.suit.symbol())),
        };
        Self {
            hand,
            ..self.clone()
        }
    }

    pub fn with_sort_mode(&self, sort_mode: SortMode) -> Self {
        Self {
            sort_mode,
            ..self.clone()
        }
        .sorted()
    }

    /// Toggles a hand card in or out of the table.
    pub fn select(&self, card: Card, events: &mut EventBus) -> Result<Self, RunError> {
        self.ensure_active()?;
        if !self.hand.contains(card) {
            return Err(RunError::CardNotInHand(card));
        }
        let selected = !self.table.contains(card);
        let table = if selected {
            if self.table.len() >= self.config.max_selected {
                return Err(RunError::SelectionFull(self.config.max_selected));
            }
            self.table.add(card)
        } else {
            self.table.remove(card)
        };
        events.push(Event::CardSelected { card, selected });
        Ok(Self {
            table,
            ..self.clone()
        })
    }

    /// Scores the table, adds it to the running total and refills the hand.
    pub fn play(&self, events: &mut EventBus) -> Result<Self, RunError> {
        self.ensure_active()?;
        if self.table.is_empty() {
            return Err(RunError::EmptySelection);
        }
        let breakdown = score_hand(&self.table, &self.tables);
        let score = self.score + breakdown.total;
        log::info!(
            "played {} for {} (total {score})",
            breakdown.hand.id(),
            breakdown.total
        );
        events.push(Event::HandScored {
            hand: breakdown.hand,
            scored: breakdown.scored,
            score: breakdown.total,
            total: score,
        });
        Self {
            plays_left: self.plays_left - 1,
            score,
            ..self.clear_table()
        }
        .finish_transition(events)
    }

    /// Throws the table away unscored and refills the hand.
    pub fn discard(&self, events: &mut EventBus) -> Result<Self, RunError> {
        self.ensure_active()?;
        if self.discards_left == 0 {
            return Err(RunError::NoDiscardsLeft);
        }
        if self.table.is_empty() {
            return Err(RunError::EmptySelection);
        }
        log::debug!("discarding {} cards", self.table.len());
        events.push(Event::CardsDiscarded {
            count: self.table.len(),
        });
        Self {
            discards_left: self.discards_left - 1,
            ..self.clear_table()
        }
        .finish_transition(events)
    }

    /// Refills and re-sorts the hand, announcing the end of the round when
    /// nothing is left to do.
    fn finish_transition(&self, events: &mut EventBus) -> Result<Self, RunError> {
        let next = self.deal(events)?.sorted();
        if next.is_over() {
            log::info!("round over with {}", next.score);
            events.push(Event::RoundOver { score: next.score });
        }
        Ok(next)
    }

    fn clear_table(&self) -> Self {
        Self {
            hand: self.hand.filter(|card| !self.table.contains(*card)),
            table: TableCards::default(),
            ..self.clone()
        }
    }

    fn ensure_active(&self) -> Result<(), RunError> {
        if self.is_over() {
            return Err(RunError::RoundOver);
        }
        Ok(())
    }
}
