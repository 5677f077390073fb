use crate::{rank_sum, Card, GameConfig, HandKind, TableCards};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Base score per hand kind, resolved from config. Kinds the config leaves
/// out use [`HandKind::base_score`].
#[derive(Debug, Clone, Default)]
pub struct ScoreTables {
    hand_bases: HashMap<HandKind, i64>,
}

impl ScoreTables {
    pub fn from_config(config: &GameConfig) -> Self {
        let mut hand_bases = HashMap::new();
        for hand in &config.hands {
            hand_bases.insert(hand.kind, hand.base);
        }
        Self { hand_bases }
    }

    pub fn hand_base(&self, kind: HandKind) -> i64 {
        self.hand_bases
            .get(&kind)
            .copied()
            .unwrap_or_else(|| kind.base_score())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub hand: HandKind,
    pub base: i64,
    pub rank_sum: i64,
    pub scored: Vec<Card>,
    pub total: i64,
}

pub fn score_hand(table: &TableCards, tables: &ScoreTables) -> ScoreBreakdown {
    let hand = table.kind();
    let base = tables.hand_base(hand);
    let scored = table.scored_cards();
    let ranks = rank_sum(&scored);
    ScoreBreakdown {
        hand,
        base,
        rank_sum: ranks,
        scored,
        total: base + ranks,
    }
}
