use crate::HandKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandRule {
    pub kind: HandKind,
    pub base: i64,
}

/// Round settings. Every field may be omitted from a config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    pub hand_size: usize,
    pub plays: u8,
    pub discards: u8,
    pub max_selected: usize,
    pub hands: Vec<HandRule>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: 8,
            plays: 3,
            discards: 3,
            max_selected: 5,
            hands: HandKind::ALL
                .into_iter()
                .map(|kind| HandRule {
                    kind,
                    base: kind.base_score(),
                })
                .collect(),
        }
    }
}
