use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Rack marker for a blank tile.
pub const JOKER: char = '*';

/// Static letter inventory: (letter, count in a full bag, point value).
/// 100 tiles in total.
pub const LETTER_TABLE: [(char, u8, u32); 30] = [
    ('A', 12, 1),
    ('B', 2, 3),
    ('C', 2, 4),
    ('Ç', 2, 4),
    ('D', 2, 3),
    ('E', 8, 1),
    ('F', 1, 7),
    ('G', 1, 5),
    ('Ğ', 1, 8),
    ('H', 1, 5),
    ('I', 4, 2),
    ('İ', 7, 1),
    ('J', 1, 10),
    ('K', 7, 1),
    ('L', 7, 1),
    ('M', 4, 2),
    ('N', 5, 1),
    ('O', 3, 2),
    ('Ö', 1, 7),
    ('P', 1, 5),
    ('R', 6, 1),
    ('S', 3, 2),
    ('Ş', 2, 4),
    ('T', 5, 1),
    ('U', 3, 2),
    ('Ü', 2, 3),
    ('V', 1, 7),
    ('Y', 2, 3),
    ('Z', 2, 4),
    (JOKER, 2, 0),
];

/// Point value of an uppercase letter. Jokers and unknown characters score 0.
#[inline]
pub fn letter_value(ch: char) -> u32 {
    LETTER_TABLE
        .iter()
        .find(|(c, _, _)| *c == ch)
        .map_or(0, |&(_, _, v)| v)
}

/// Whether `ch` is a playable letter of the alphabet (jokers excluded).
#[inline]
pub fn is_alphabet_letter(ch: char) -> bool {
    ch != JOKER && LETTER_TABLE.iter().any(|(c, _, _)| *c == ch)
}

/// Total number of tiles in a full bag.
pub fn full_bag_size() -> usize {
    LETTER_TABLE.iter().map(|&(_, n, _)| usize::from(n)).sum()
}

/// Remaining undrawn letters of one game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterBag {
    letters: Vec<char>,
}

impl LetterBag {
    /// A complete, shuffled bag.
    pub fn full<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut letters = Vec::with_capacity(full_bag_size());
        for &(ch, count, _) in &LETTER_TABLE {
            letters.extend(std::iter::repeat(ch).take(usize::from(count)));
        }
        letters.shuffle(rng);
        Self { letters }
    }

    /// Bag with an explicit content, in draw-agnostic order.
    pub fn from_letters(letters: Vec<char>) -> Self {
        Self { letters }
    }

    /// Rebuild the full multiset and reshuffle.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::full(rng);
    }

    /// Draw `min(n, len)` letters uniformly at random without replacement.
    pub fn draw<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) -> Vec<char> {
        let take = n.min(self.letters.len());
        let mut drawn = Vec::with_capacity(take);
        for _ in 0..take {
            let i = rng.gen_range(0..self.letters.len());
            drawn.push(self.letters.swap_remove(i));
        }
        drawn
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }
}

/// Top `rack` up to `size` letters from `bag`. Returns how many were drawn.
pub fn refill_rack<R: Rng + ?Sized>(rack: &mut Vec<char>, size: usize, bag: &mut LetterBag, rng: &mut R) -> usize {
    let missing = size.saturating_sub(rack.len());
    let drawn = bag.draw(missing, rng);
    let n = drawn.len();
    rack.extend(drawn);
    n
}
