use std::fmt;

use anchor_lang::prelude::*;

use crate::constants::{CARDS_PER_COMBINATION, COMBINATION_LENGTH};
use crate::errors::DracoErrorCode;

/// Rank tokens in ascending order. Ten is `T`, never `10`.
pub const RANK_TOKENS: [u8; 13] = *b"23456789TJQKA";

/// Suits a winning combination can be drawn from (the wildcard is ticket-only).
pub const DRAWN_SUITS: [Suit; 4] = [Suit::Spades, Suit::Clubs, Suit::Hearts, Suit::Diamonds];

const DECK_SIZE: usize = DRAWN_SUITS.len() * RANK_TOKENS.len();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Suit {
    Spades,
    Clubs,
    Hearts,
    Diamonds,
    /// `W`: matches any drawn suit at the same position.
    Wild,
}

impl Suit {
    pub fn from_token(token: u8) -> Option<Self> {
        match token {
            b'S' => Some(Suit::Spades),
            b'C' => Some(Suit::Clubs),
            b'H' => Some(Suit::Hearts),
            b'D' => Some(Suit::Diamonds),
            b'W' => Some(Suit::Wild),
            _ => None,
        }
    }

    pub fn token(self) -> u8 {
        match self {
            Suit::Spades => b'S',
            Suit::Clubs => b'C',
            Suit::Hearts => b'H',
            Suit::Diamonds => b'D',
            Suit::Wild => b'W',
        }
    }

    #[inline]
    pub fn covers(self, drawn: Suit) -> bool {
        self == Suit::Wild || self == drawn
    }
}

/// Index into `RANK_TOKENS` (0 = `2`, 12 = `A`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rank(u8);

impl Rank {
    pub fn from_token(token: u8) -> Option<Self> {
        RANK_TOKENS
            .iter()
            .position(|&t| t == token)
            .map(|i| Rank(i as u8))
    }

    pub fn token(self) -> u8 {
        RANK_TOKENS[self.0 as usize]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    #[inline]
    pub fn matches(&self, drawn: &Card) -> bool {
        self.rank == drawn.rank && self.suit.covers(drawn.suit)
    }
}

/// A parsed ticket or winning combination: four (suit, rank) cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Combination {
    pub cards: [Card; CARDS_PER_COMBINATION],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidCombination {
    BadLength { len: usize },
    BadToken { position: usize },
}

impl From<InvalidCombination> for anchor_lang::error::Error {
    fn from(e: InvalidCombination) -> Self {
        match e {
            InvalidCombination::BadLength { len } => {
                msg!("combination length={} expected={}", len, COMBINATION_LENGTH);
                error!(DracoErrorCode::InvalidCombinationLength)
            }
            InvalidCombination::BadToken { position } => {
                msg!("combination bad token at position={}", position);
                error!(DracoErrorCode::InvalidCombinationToken)
            }
        }
    }
}

/// Parses a ticket combination string.
///
/// Length is checked on raw bytes before any token, so `W2H10C8CA` is a
/// length error even though every symbol in it is meaningful.
pub fn validate(combination: &str) -> std::result::Result<Combination, InvalidCombination> {
    Combination::from_bytes(combination.as_bytes())
}

impl Combination {
    pub fn from_bytes(bytes: &[u8]) -> std::result::Result<Self, InvalidCombination> {
        if bytes.len() != COMBINATION_LENGTH {
            return Err(InvalidCombination::BadLength { len: bytes.len() });
        }

        let mut cards = [Card { suit: Suit::Wild, rank: Rank(0) }; CARDS_PER_COMBINATION];
        for (i, pair) in bytes.chunks_exact(2).enumerate() {
            let suit = Suit::from_token(pair[0])
                .ok_or(InvalidCombination::BadToken { position: 2 * i })?;
            let rank = Rank::from_token(pair[1])
                .ok_or(InvalidCombination::BadToken { position: 2 * i + 1 })?;
            cards[i] = Card { suit, rank };
        }

        Ok(Self { cards })
    }

    pub fn to_bytes(&self) -> [u8; COMBINATION_LENGTH] {
        let mut out = [0u8; COMBINATION_LENGTH];
        for (i, card) in self.cards.iter().enumerate() {
            out[2 * i] = card.suit.token();
            out[2 * i + 1] = card.rank.token();
        }
        out
    }

    /// Number of positions where this (ticket) card matches the winning card.
    pub fn match_count(&self, winning: &Combination) -> u8 {
        self.cards
            .iter()
            .zip(winning.cards.iter())
            .filter(|(ticket, drawn)| ticket.matches(drawn))
            .count() as u8
    }

    /// Derives a winning combination from a settled oracle value.
    ///
    /// Card `i` consumes bytes `2i..2i+2` as a big-endian u16 and draws
    /// `value % remaining` from the ordered deck without replacement, so the
    /// same value always yields the same four distinct cards.
    pub fn from_randomness(raw: &[u8; 32]) -> Self {
        let mut deck: Vec<u8> = (0..DECK_SIZE as u8).collect();
        let mut cards = [Card { suit: Suit::Spades, rank: Rank(0) }; CARDS_PER_COMBINATION];

        for (i, card) in cards.iter_mut().enumerate() {
            let value = u16::from_be_bytes([raw[2 * i], raw[2 * i + 1]]) as usize;
            let picked = deck.remove(value % deck.len()) as usize;
            *card = Card {
                suit: DRAWN_SUITS[picked / RANK_TOKENS.len()],
                rank: Rank((picked % RANK_TOKENS.len()) as u8),
            };
        }

        Self { cards }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in self.cards.iter() {
            write!(f, "{}{}", card.suit.token() as char, card.rank.token() as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_combination_with_wildcard_and_ten() {
        let combo = validate("W2HTC8CA").unwrap();
        assert_eq!(combo.cards[0].suit, Suit::Wild);
        assert_eq!(combo.cards[1].rank, Rank::from_token(b'T').unwrap());
        assert_eq!(combo.cards[3].suit, Suit::Clubs);
        assert_eq!(&combo.to_bytes(), b"W2HTC8CA");
        assert_eq!(combo.to_string(), "W2HTC8CA");
    }

    #[test]
    fn two_character_ten_is_a_length_error() {
        assert_eq!(
            validate("W2H10C8CA"),
            Err(InvalidCombination::BadLength { len: 9 })
        );
    }

    #[test]
    fn any_other_length_is_rejected_before_tokens() {
        for bad in ["", "W2", "W2HTC8C", "ZZZZZZZZZ", "W2HTC8CAS2"] {
            assert_eq!(
                validate(bad),
                Err(InvalidCombination::BadLength { len: bad.len() }),
                "{bad}"
            );
        }
    }

    #[test]
    fn reports_first_bad_token_position() {
        assert_eq!(validate("X2HTC8CA"), Err(InvalidCombination::BadToken { position: 0 }));
        assert_eq!(validate("W1HTC8CA"), Err(InvalidCombination::BadToken { position: 1 }));
        assert_eq!(validate("W2HTc8CA"), Err(InvalidCombination::BadToken { position: 4 }));
        assert_eq!(validate("W2HTC8CW"), Err(InvalidCombination::BadToken { position: 7 }));
    }

    #[test]
    fn non_ascii_bytes_are_bad_tokens() {
        // 'é' is two bytes, so the total is still eight
        assert_eq!(validate("W2HTC8é"), Err(InvalidCombination::BadToken { position: 6 }));
    }

    #[test]
    fn maps_into_anchor_errors() {
        let err: anchor_lang::error::Error = InvalidCombination::BadLength { len: 9 }.into();
        assert_eq!(err, error!(DracoErrorCode::InvalidCombinationLength));

        let err: anchor_lang::error::Error = InvalidCombination::BadToken { position: 3 }.into();
        assert_eq!(err, error!(DracoErrorCode::InvalidCombinationToken));
    }

    #[test]
    fn match_count_is_position_wise() {
        let winning = validate("S2HTC8DA").unwrap();

        assert_eq!(validate("S2HTC8DA").unwrap().match_count(&winning), 4);
        assert_eq!(validate("W2WTW8WA").unwrap().match_count(&winning), 4);
        assert_eq!(validate("W2HTC8CA").unwrap().match_count(&winning), 3);
        // same cards, wrong positions
        assert_eq!(validate("DAC8HTS2").unwrap().match_count(&winning), 0);
        // suit right, rank wrong
        assert_eq!(validate("S3HJC9DK").unwrap().match_count(&winning), 0);
    }

    #[test]
    fn zero_randomness_draws_the_top_of_the_deck() {
        let combo = Combination::from_randomness(&[0u8; 32]);
        assert_eq!(combo.to_string(), "S2S3S4S5");
    }

    #[test]
    fn randomness_reduction_uses_big_endian_pairs() {
        let mut raw = [0u8; 32];
        raw[1] = 13; // first card: index 13 -> clubs 2
        raw[2] = 0x01;
        raw[3] = 0x00; // 256 % 51 = 1 -> second remaining card
        let combo = Combination::from_randomness(&raw);
        assert_eq!(&combo.to_bytes()[..4], b"C2S3");
    }

    #[test]
    fn randomness_reduction_is_deterministic_and_distinct() {
        let mut raw = [0u8; 32];
        for (i, b) in raw.iter_mut().enumerate() {
            *b = (i as u8).wrapping_mul(97).wrapping_add(31);
        }

        let a = Combination::from_randomness(&raw);
        let b = Combination::from_randomness(&raw);
        assert_eq!(a, b);

        for (i, card) in a.cards.iter().enumerate() {
            assert_ne!(card.suit, Suit::Wild);
            for other in a.cards.iter().skip(i + 1) {
                assert_ne!(card, other);
            }
        }

        // the derived combination is itself a valid ticket combination
        let encoded = a.to_bytes();
        assert_eq!(Combination::from_bytes(&encoded), Ok(a));
    }
}
