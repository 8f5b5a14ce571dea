//! Cards and their directional values.
//!
//! A `Card` is a specific copy in play. Its facing values are fixed when it
//! is created; the only thing that ever changes is who owns it.

use crate::coord::Direction;
use crate::error::GameError;
use crate::player::PlayerId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identity of one card copy.
///
/// Two cards with identical values are still different cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Elemental tag printed on some cards. Not used by capture rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Tech,
    Fire,
    Water,
    Life,
    Air,
    Earth,
    Magic,
}

impl Element {
    pub const ALL: [Element; 7] = [
        Element::Tech,
        Element::Fire,
        Element::Water,
        Element::Life,
        Element::Air,
        Element::Earth,
        Element::Magic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Element::Tech => "tech",
            Element::Fire => "fire",
            Element::Water => "water",
            Element::Life => "life",
            Element::Air => "air",
            Element::Earth => "earth",
            Element::Magic => "magic",
        }
    }
}

impl FromStr for Element {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Element::ALL
            .into_iter()
            .find(|e| e.name() == lower)
            .ok_or_else(|| GameError::UnknownElement(s.to_string()))
    }
}

/// The four edge strengths of a card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Facing {
    pub north: u32,
    pub south: u32,
    pub east: u32,
    pub west: u32,
}

impl Facing {
    pub const fn new(north: u32, south: u32, east: u32, west: u32) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// Value on the given edge
    pub const fn get(&self, direction: Direction) -> u32 {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }
}

/// A card copy, in a hand or on the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    name: String,
    element: Option<Element>,
    facing: Facing,
    owner: Option<PlayerId>,
}

impl Card {
    /// Create an unowned card
    pub fn new(id: CardId, name: impl Into<String>, facing: Facing) -> Self {
        Self {
            id,
            name: name.into(),
            element: None,
            facing,
            owner: None,
        }
    }

    pub fn with_element(mut self, element: Option<Element>) -> Self {
        self.element = element;
        self
    }

    pub fn with_owner(mut self, owner: PlayerId) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn element(&self) -> Option<Element> {
        self.element
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Value on one edge
    pub fn value(&self, direction: Direction) -> u32 {
        self.facing.get(direction)
    }

    /// Current owner; `None` before the card is dealt
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// Only dealing and capture change ownership
    pub(crate) fn set_owner(&mut self, owner: PlayerId) {
        self.owner = Some(owner);
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.facing;
        write!(
            f,
            "<{} N:{} S:{} E:{} W:{} Owner:",
            self.name, v.north, v.south, v.east, v.west
        )?;
        match self.owner {
            Some(owner) => write!(f, "{owner}>"),
            None => f.write_str("None>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_lookup() {
        let facing = Facing::new(1, 2, 3, 4);
        assert_eq!(facing.get(Direction::North), 1);
        assert_eq!(facing.get(Direction::South), 2);
        assert_eq!(facing.get(Direction::East), 3);
        assert_eq!(facing.get(Direction::West), 4);
    }

    #[test]
    fn test_identity_not_value() {
        let a = Card::new(CardId::new(1), "Rock", Facing::new(3, 2, 1, 5));
        let b = Card::new(CardId::new(2), "Rock", Facing::new(3, 2, 1, 5));
        let a_again = Card::new(CardId::new(1), "Other", Facing::new(0, 0, 0, 0));
        assert_ne!(a, b);
        assert_eq!(a, a_again);
    }

    #[test]
    fn test_new_card_is_unowned() {
        let card = Card::new(CardId::new(7), "Shard", Facing::new(3, 3, 4, 1));
        assert_eq!(card.owner(), None);
        assert_eq!(card.clone().with_owner(PlayerId::Host).owner(), Some(PlayerId::Host));
    }

    #[test]
    fn test_element_parse() {
        assert_eq!("Fire".parse::<Element>().unwrap(), Element::Fire);
        assert_eq!("magic".parse::<Element>().unwrap(), Element::Magic);
        assert!(matches!(
            "plasma".parse::<Element>(),
            Err(GameError::UnknownElement(_))
        ));
    }

    #[test]
    fn test_display() {
        let card =
            Card::new(CardId::new(1), "Rock", Facing::new(3, 2, 1, 5)).with_owner(PlayerId::Host);
        assert_eq!(card.to_string(), "<Rock N:3 S:2 E:1 W:5 Owner:Host>");
    }
}
