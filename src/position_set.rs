//! Leaf position set types.

use std::fmt;

const WORD_BITS: usize = u64::BITS as usize;

/// A set of leaf positions, stored as a bitset over the window of words
/// between its smallest and largest member.
///
/// The window never starts or ends with a zero word, and an empty set has no
/// words and a zero offset, so equal sets have equal representations.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct PositionSet {
    offset: usize, // index of the first word
    words: Vec<u64>,
}

impl PositionSet {
    /// Creates a new empty position set.
    #[must_use]
    pub const fn new() -> Self {
        PositionSet {
            offset: 0,
            words: Vec::new(),
        }
    }

    /// Creates a set holding only `position`.
    #[must_use]
    pub fn singleton(position: usize) -> Self {
        let (word, bit) = split(position);
        PositionSet {
            offset: word,
            words: vec![bit],
        }
    }

    /// Adds `position` to the set. Returns `true` if it was not already
    /// present.
    pub fn insert(&mut self, position: usize) -> bool {
        let (word, bit) = split(position);
        self.cover(word, word + 1);
        let slot = &mut self.words[word - self.offset];
        let was_set = *slot & bit != 0;
        *slot |= bit;
        !was_set
    }

    /// Returns `true` if the set contains `position`.
    #[inline]
    #[must_use]
    pub fn contains(&self, position: usize) -> bool {
        let (word, bit) = split(position);
        word.checked_sub(self.offset)
            .and_then(|i| self.words.get(i))
            .is_some_and(|w| w & bit != 0)
    }

    /// Adds every member of `other` to the set. Returns `true` if the set
    /// grew.
    pub fn union_with(&mut self, other: &PositionSet) -> bool {
        if other.words.is_empty() {
            return false;
        }
        self.cover(other.offset, other.offset + other.words.len());

        let start = other.offset - self.offset;
        let mut grew = false;
        for (mine, theirs) in self.words[start..].iter_mut().zip(&other.words) {
            let merged = *mine | theirs;
            grew |= merged != *mine;
            *mine = merged;
        }
        grew
    }

    /// Widens the window to include the words `start..end`.
    fn cover(&mut self, start: usize, end: usize) {
        if self.words.is_empty() {
            self.offset = start;
            self.words.resize(end - start, 0);
            return;
        }
        if start < self.offset {
            let mut words = vec![0; self.offset - start];
            words.append(&mut self.words);
            self.words = words;
            self.offset = start;
        }
        if end > self.offset + self.words.len() {
            self.words.resize(end - self.offset, 0);
        }
    }

    /// Returns the number of positions in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the largest position in the set.
    #[must_use]
    pub fn max(&self) -> Option<usize> {
        let last = self.words.last()?;
        let word = self.offset + self.words.len() - 1;
        Some(word * WORD_BITS + (WORD_BITS - 1 - last.leading_zeros() as usize))
    }

    /// Iterates over the positions in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            words: &self.words,
            offset: self.offset,
            index: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }
}

#[inline]
fn split(position: usize) -> (usize, u64) {
    (position / WORD_BITS, 1 << (position % WORD_BITS))
}

/// Ascending iterator over a [`PositionSet`].
pub struct Iter<'a> {
    words: &'a [u64],
    offset: usize,
    index: usize,
    current: u64,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.current == 0 {
            self.index += 1;
            self.current = *self.words.get(self.index)?;
        }
        let bit = self.current.trailing_zeros() as usize;
        self.current &= self.current - 1;
        Some((self.offset + self.index) * WORD_BITS + bit)
    }
}

impl<'a> IntoIterator for &'a PositionSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl FromIterator<usize> for PositionSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<usize> for PositionSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for position in iter {
            self.insert(position);
        }
    }
}

impl fmt::Debug for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
