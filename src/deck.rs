//! Ordered card container used for the draw pile, the hands and the discard pile.

use alloc::vec::Vec;
use core::fmt;
use core::slice;

use rand::Rng;

use crate::card::{Card, PACK_SIZE, Rank, Suit};

/// An ordered pile of cards.
///
/// The last card is the top of the pile: [`draw_card`](Self::draw_card)
/// takes it and [`add_card`](Self::add_card) puts a card on top of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Builds an unshuffled deck of `packs` full packs.
    ///
    /// Cards are laid out pack by pack, suit by suit, rank by rank.
    ///
    /// Note: This function does not validate `packs`. Use
    /// [`GameOptions::validate`](crate::GameOptions::validate) to enforce the
    /// supported range.
    #[must_use]
    pub fn initialize(packs: u8) -> Self {
        let mut cards = Vec::with_capacity(packs as usize * PACK_SIZE);

        for _ in 0..packs {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        Self { cards }
    }

    /// Shuffles the deck in place.
    ///
    /// Walks backwards from the last card, swapping each position `i` with a
    /// uniformly chosen position in `0..=i`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    /// Puts a card on top of the deck.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Takes the top card, or `None` if the deck is empty.
    pub fn draw_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Removes the card at `index`, keeping the order of the remaining cards.
    pub fn take_card(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Moves every card of `other` on top of this deck, preserving order.
    ///
    /// `other` is left empty.
    pub fn append_from(&mut self, other: &mut Self) {
        self.cards.append(&mut other.cards);
    }

    /// Sorts the cards by ascending rank. Suits are not compared.
    pub fn sort_by_rank(&mut self) {
        self.cards.sort_by_key(|card| card.rank);
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates over the cards, bottom first.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One `"<Rank> of <Suit>"` line per card, bottom first.
impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            writeln!(f, "{card}")?;
        }
        Ok(())
    }
}
