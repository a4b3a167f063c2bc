//! Core card-related types: Card, Rank, Suit

use std::fmt;

/// Suits in canonical deck order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Suit {
    Spades,
    Diamonds,
    Clubs,
    Hearts,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Suit::Spades => "SPADES",
            Suit::Diamonds => "DIAMONDS",
            Suit::Clubs => "CLUBS",
            Suit::Hearts => "HEARTS",
        }
    }

    pub(crate) fn from_canonical(s: &str) -> Option<Self> {
        Suit::ALL.into_iter().find(|suit| suit.as_str() == s)
    }
}

/// Ranks in canonical deck order (ace low).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Rank::Ace => "ACE",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "JACK",
            Rank::Queen => "QUEEN",
            Rank::King => "KING",
        }
    }

    pub(crate) fn from_canonical(s: &str) -> Option<Self> {
        Rank::ALL.into_iter().find(|rank| rank.as_str() == s)
    }
}

/// A playing card. Equality is by suit and rank; the code is derived.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Short code: numeric ranks keep all digits ("10C"), others use their
    /// initial ("AS", "KH"); the suit always contributes its initial.
    pub fn code(&self) -> String {
        let rank = self.rank.as_str();
        let suit_initial = &self.suit.as_str()[..1];
        if rank.parse::<u8>().is_ok() {
            format!("{rank}{suit_initial}")
        } else {
            format!("{}{suit_initial}", &rank[..1])
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

/// Full 52-card sequence in canonical order: suits Spades, Diamonds, Clubs,
/// Hearts; ranks Ace through King within each suit.
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(Suit::ALL.len() * Rank::ALL.len());
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}
