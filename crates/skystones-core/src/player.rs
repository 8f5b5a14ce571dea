//! Players and their hands of unplayed cards.

use crate::card::{Card, CardId};
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two seats at the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    Host,
    Visitor,
}

impl PlayerId {
    /// The opponent of this player
    pub const fn other(self) -> PlayerId {
        match self {
            PlayerId::Host => PlayerId::Visitor,
            PlayerId::Visitor => PlayerId::Host,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PlayerId::Host => "Host",
            PlayerId::Visitor => "Visitor",
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlayerId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "host" => Ok(PlayerId::Host),
            "visitor" => Ok(PlayerId::Visitor),
            _ => Err(GameError::FormatError(format!(
                "expected 'host' or 'visitor', got '{s}'"
            ))),
        }
    }
}

/// A player's cards that have not been placed yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    owner: PlayerId,
    cards: Vec<Card>,
}

impl Hand {
    /// Create a hand, assigning every card to `owner`
    pub fn new(owner: PlayerId, cards: Vec<Card>) -> Self {
        let cards = cards
            .into_iter()
            .map(|mut card| {
                card.set_owner(owner);
                card
            })
            .collect();
        Self { owner, cards }
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card by identity
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id() == id)
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.get(id).is_some()
    }

    /// Take a card out of the hand
    pub(crate) fn remove(&mut self, id: CardId) -> Option<Card> {
        let pos = self.cards.iter().position(|c| c.id() == id)?;
        Some(self.cards.remove(pos))
    }
}
