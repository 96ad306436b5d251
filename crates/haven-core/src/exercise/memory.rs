//! Memory match over a shuffled deck of icon pairs.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::error::{HavenError, Result};

pub const MEMORY_ICONS: [&str; 6] = ["leaf", "cloud", "star", "heart", "moon", "sun"];
pub const MEMORY_COLUMNS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub icon: &'static str,
    pub face_up: bool,
    pub matched: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FlipOutcome {
    /// Face-down card turned over, waiting for its partner.
    First,
    /// Second card shares the first one's icon. Both stay up.
    Match,
    /// Icons differ. Both stay up until [`MemoryMatch::resolve`].
    Mismatch,
    /// Card already up or matched, or a mismatch is still showing.
    Ignored,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryMatch {
    cards: Vec<Card>,
    up: Vec<usize>,
    moves: u32,
}

impl MemoryMatch {
    /// Deals every icon twice in shuffled order.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut icons: Vec<&'static str> =
            MEMORY_ICONS.iter().chain(&MEMORY_ICONS).copied().collect();
        icons.shuffle(rng);
        Self::with_icons(icons)
    }

    fn with_icons(icons: Vec<&'static str>) -> Self {
        Self {
            cards: icons
                .into_iter()
                .map(|icon| Card {
                    icon,
                    face_up: false,
                    matched: false,
                })
                .collect(),
            up: Vec::with_capacity(2),
            moves: 0,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Pairs turned over so far, matched or not.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// True while a mismatched pair is waiting to be turned back.
    pub fn awaiting_resolve(&self) -> bool {
        self.up.len() == 2
    }

    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(|c| c.matched)
    }

    pub fn flip(&mut self, index: usize) -> Result<FlipOutcome> {
        let len = self.cards.len();
        let card = self.cards.get(index).ok_or_else(|| {
            HavenError::invalid_input(format!("card {index} is outside the deck of {len}"))
        })?;
        if self.awaiting_resolve() || card.face_up || card.matched {
            return Ok(FlipOutcome::Ignored);
        }

        self.cards[index].face_up = true;
        self.up.push(index);
        let [first, second] = self.up[..] else {
            return Ok(FlipOutcome::First);
        };

        self.moves += 1;
        if self.cards[first].icon != self.cards[second].icon {
            return Ok(FlipOutcome::Mismatch);
        }
        for i in [first, second] {
            self.cards[i].matched = true;
        }
        self.up.clear();
        Ok(FlipOutcome::Match)
    }

    /// Turns a showing mismatch face down again.
    pub fn resolve(&mut self) {
        for i in self.up.drain(..) {
            self.cards[i].face_up = false;
        }
    }

    /// Deals a new shuffled deck.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::new(rng);
    }
}
