//! Card library - the catalog of named cards.
//!
//! The library holds immutable `CardDefinition`s keyed by a string id
//! (e.g. `"mace_major_3"`). Cards in play are created from a definition with
//! [`CardDefinition::instantiate`], which gives each copy its own identity.

use crate::card::{Card, CardId, Element, Facing};
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Static data for one kind of card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub id: String,
    pub name: String,
    pub element: Option<Element>,
    pub facing: Facing,
}

impl CardDefinition {
    /// Create an unowned card copy with the given identity
    pub fn instantiate(&self, instance: CardId) -> Card {
        Card::new(instance, self.name.clone(), self.facing).with_element(self.element)
    }
}

/// One catalog entry as stored in JSON
#[derive(Debug, Deserialize)]
struct RawEntry {
    name: String,
    #[serde(default)]
    element: Option<String>,
    north: u32,
    south: u32,
    east: u32,
    west: u32,
}

/// Built-in catalog: (id, name, element, north, south, east, west)
const STANDARD_CARDS: &[(&str, &str, Option<Element>, u32, u32, u32, u32)] = &[
    ("drow_lance_master_1", "Drow Lance Master 1", None, 1, 0, 0, 1),
    ("drow_lance_master_2", "Drow Lance Master 2", None, 2, 0, 0, 2),
    ("drow_lance_master_3", "Drow Lance Master 3", None, 3, 0, 0, 3),
    ("drow_lance_master_4", "Drow Lance Master 4", None, 3, 1, 1, 3),
    ("mohawk_cyclops_1", "Mohawk Cyclops 1", None, 1, 0, 1, 0),
    ("mohawk_cyclops_2", "Mohawk Cyclops 2", None, 2, 0, 2, 0),
    ("mohawk_cyclops_3", "Mohawk Cyclops 3", None, 3, 0, 3, 0),
    ("mohawk_cyclops_4", "Mohawk Cyclops 4", None, 3, 1, 3, 1),
    ("mace_major_1", "Mace Major 1", None, 0, 1, 0, 1),
    ("mace_major_2", "Mace Major 2", None, 0, 2, 0, 2),
    ("mace_major_3", "Mace Major 3", None, 0, 3, 0, 3),
    ("mace_major_4", "Mace Major 4", None, 1, 3, 1, 3),
    ("chompy_bot_9000_1", "Chompy Bot 9000 1", None, 1, 1, 0, 0),
    ("chompy_bot_9000_2", "Chompy Bot 9000 2", None, 1, 1, 1, 1),
    ("chompy_bot_9000_3", "Chompy Bot 9000 3", None, 2, 2, 1, 1),
    ("chompy_bot_9000_4", "Chompy Bot 9000 4", None, 2, 2, 2, 2),
    ("chompy_bot_9000_5", "Chompy Bot 9000 5", None, 3, 3, 2, 2),
    ("chompy_bot_9000_6", "Chompy Bot 9000 6", None, 3, 3, 3, 3),
    ("arkeyan_jouster_1", "Arkeyan Jouster 1", None, 2, 0, 1, 1),
    ("arkeyan_jouster_2", "Arkeyan Jouster 2", None, 3, 0, 1, 1),
    ("arkeyan_jouster_3", "Arkeyan Jouster 3", None, 3, 0, 2, 2),
    ("arkeyan_jouster_4", "Arkeyan Jouster 4", None, 3, 1, 2, 2),
    ("arkeyan_jouster_5", "Arkeyan Jouster 5", None, 3, 2, 2, 2),
    ("conquertron", "CONQUERTRON", None, 4, 4, 4, 4),
    ("arkeyan_ultron", "Arkeyan Ultron", Some(Element::Tech), 2, 2, 2, 2),
    ("enfuego_chompy_1", "Enfuego Chompy 1", Some(Element::Fire), 1, 0, 0, 0),
    ("frigid_chompy_1", "Frigid Chompy 1", Some(Element::Water), 0, 1, 0, 0),
    ("goliath_drow", "Goliath Drow", Some(Element::Life), 4, 0, 1, 1),
    ("dragonet", "Dragonet", Some(Element::Air), 1, 2, 3, 2),
    ("shadow_duke", "Shadow Duke", None, 4, 0, 0, 0),
    ("boulder_bowler", "Boulder Bowler", Some(Element::Earth), 2, 0, 2, 2),
    ("life_spell_punk", "Life Spell Punk", Some(Element::Magic), 2, 0, 1, 3),
];

/// Catalog of card definitions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardLibrary {
    cards: BTreeMap<String, CardDefinition>,
}

impl CardLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog
    pub fn standard() -> Self {
        let mut library = Self::new();
        for &(id, name, element, north, south, east, west) in STANDARD_CARDS {
            library.insert(CardDefinition {
                id: id.to_string(),
                name: name.to_string(),
                element,
                facing: Facing::new(north, south, east, west),
            });
        }
        library
    }

    /// Load a catalog from a JSON object of `id -> {name, element, north, south, east, west}`
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let raw: BTreeMap<String, RawEntry> =
            serde_json::from_str(json).map_err(|e| GameError::Library(e.to_string()))?;

        let mut library = Self::new();
        for (id, entry) in raw {
            let element = entry.element.as_deref().map(str::parse::<Element>).transpose()?;
            library.insert(CardDefinition {
                id,
                name: entry.name,
                element,
                facing: Facing::new(entry.north, entry.south, entry.east, entry.west),
            });
        }
        Ok(library)
    }

    /// Add or replace a definition
    pub fn insert(&mut self, card: CardDefinition) {
        self.cards.insert(card.id.clone(), card);
    }

    pub fn get(&self, id: &str) -> Option<&CardDefinition> {
        self.cards.get(id)
    }

    /// All ids, sorted
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.cards.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Definitions carrying `element`; pass `None` for untagged cards
    pub fn by_element(&self, element: Option<Element>) -> Vec<&CardDefinition> {
        self.cards.values().filter(|c| c.element == element).collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
