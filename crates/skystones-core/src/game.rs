//! Core game state machine.
//!
//! This module contains the `GameState` struct: turn order, both hands, and
//! the board. A game runs from an empty board until every cell is filled;
//! the player owning more cards at that point wins.

use crate::actions::GameEvent;
use crate::board::Board;
use crate::card::{Card, CardId};
use crate::coord::Position;
use crate::error::GameError;
use crate::player::{Hand, PlayerId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::info;

/// Outcome of comparing owned-card counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Winner(PlayerId),
    Tie,
}

impl GameResult {
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(player) => Some(*player),
            GameResult::Tie => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(player) => write!(f, "{player}"),
            GameResult::Tie => f.write_str("Tie"),
        }
    }
}

/// Game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for `player` to place a card
    AwaitingMove { player: PlayerId },
    /// Board is full
    Finished { result: GameResult },
}

/// Table rules chosen before the first move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Who moves first
    pub first_player: PlayerId,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: PlayerId::Host,
        }
    }
}

/// The complete game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    host_hand: Hand,
    visitor_hand: Hand,
    current_player: PlayerId,
    moves_played: usize,
    config: GameConfig,
}

impl GameState {
    /// Create a game with the Host moving first.
    ///
    /// Every card is assigned to the hand it is dealt into. Card ids must be
    /// unique across both hands.
    pub fn new(host_cards: Vec<Card>, visitor_cards: Vec<Card>) -> Result<Self, GameError> {
        Self::with_config(GameConfig::default(), host_cards, visitor_cards)
    }

    /// Create a game with explicit table rules
    pub fn with_config(
        config: GameConfig,
        host_cards: Vec<Card>,
        visitor_cards: Vec<Card>,
    ) -> Result<Self, GameError> {
        let mut seen = HashSet::new();
        for card in host_cards.iter().chain(&visitor_cards) {
            if !seen.insert(card.id()) {
                return Err(GameError::DuplicateCard(card.id()));
            }
        }

        Ok(Self {
            board: Board::new(),
            host_hand: Hand::new(PlayerId::Host, host_cards),
            visitor_hand: Hand::new(PlayerId::Visitor, visitor_cards),
            current_player: config.first_player,
            moves_played: 0,
            config,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Whose turn it is
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Number of cards placed so far
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Unplayed cards of a player
    pub fn hand(&self, player: PlayerId) -> &Hand {
        match player {
            PlayerId::Host => &self.host_hand,
            PlayerId::Visitor => &self.visitor_hand,
        }
    }

    fn hand_mut(&mut self, player: PlayerId) -> &mut Hand {
        match player {
            PlayerId::Host => &mut self.host_hand,
            PlayerId::Visitor => &mut self.visitor_hand,
        }
    }

    /// Current phase of the game
    pub fn phase(&self) -> GamePhase {
        if self.is_game_over() {
            GamePhase::Finished {
                result: self.check_winner(),
            }
        } else {
            GamePhase::AwaitingMove {
                player: self.current_player,
            }
        }
    }

    /// Place a card from the current player's hand.
    ///
    /// Either the whole move happens (placement, captures, hand removal and
    /// turn change) or nothing does.
    pub fn play_turn(
        &mut self,
        card: CardId,
        row: usize,
        col: usize,
    ) -> Result<Vec<GameEvent>, GameError> {
        let player = self.current_player;

        let Some(to_play) = self.hand(player).get(card).cloned() else {
            return match self.hand(player.other()).get(card) {
                Some(theirs) => Err(GameError::WrongOwner {
                    expected: player,
                    found: theirs.owner(),
                }),
                None => Err(GameError::CardNotInHand(card)),
            };
        };

        let captures = self.board.place(row, col, to_play)?;
        self.hand_mut(player).remove(card);
        self.moves_played += 1;

        let mut events = vec![GameEvent::CardPlaced {
            player,
            card,
            position: Position::new(row, col),
        }];
        events.extend(captures.into_iter().map(|capture| GameEvent::CardCaptured {
            card: capture.card,
            position: capture.position,
            direction: capture.direction,
            from: capture.from,
            to: capture.to,
        }));

        if self.is_game_over() {
            let result = self.check_winner();
            let (host, visitor) = self.score();
            info!(%result, host, visitor, "game finished");
            events.push(GameEvent::GameFinished { result });
        } else {
            let next_player = player.other();
            self.current_player = next_player;
            events.push(GameEvent::TurnEnded {
                player,
                next_player,
            });
        }

        Ok(events)
    }

    /// Give up the turn. Only allowed with an empty hand.
    pub fn pass_turn(&mut self) -> Result<GameEvent, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        let player = self.current_player;
        if !self.hand(player).is_empty() {
            return Err(GameError::HandNotEmpty);
        }
        let next_player = player.other();
        self.current_player = next_player;
        info!(%player, "turn passed with empty hand");
        Ok(GameEvent::TurnPassed {
            player,
            next_player,
        })
    }

    /// Compare owned-card counts on the board right now
    pub fn check_winner(&self) -> GameResult {
        let (host, visitor) = self.score();
        match host.cmp(&visitor) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::Host),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::Visitor),
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }

    /// Owned-card counts as (host, visitor)
    pub fn score(&self) -> (usize, usize) {
        (
            self.board.count_owned(PlayerId::Host),
            self.board.count_owned(PlayerId::Visitor),
        )
    }

    pub fn is_game_over(&self) -> bool {
        self.board.is_full()
    }

    /// Both hands are empty but the board still has room
    pub fn is_stalled(&self) -> bool {
        !self.is_game_over() && self.host_hand.is_empty() && self.visitor_hand.is_empty()
    }

    /// Cells still to be filled
    pub fn moves_remaining(&self) -> usize {
        self.board.empty_cells().count()
    }

    /// JSON snapshot for renderers
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
