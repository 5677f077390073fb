//! Card, deck and hand-scoring logic. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod collection;
pub mod config;
pub mod deck;
pub mod events;
pub mod hand;
pub mod rng;
pub mod run;
pub mod scoring;

pub use cards::*;
pub use collection::*;
pub use config::*;
pub use deck::*;
pub use events::*;
pub use hand::*;
pub use rng::*;
pub use run::*;
pub use scoring::*;
