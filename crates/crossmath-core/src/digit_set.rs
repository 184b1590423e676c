//! Candidate digits (1–9) for a single cell.

use std::{fmt, iter::FusedIterator};

/// A set of digits in the range 1–9.
///
/// The implementation uses a 16-bit integer where bits 0–8 represent
/// digits 1–9 respectively, so the set is `Copy` and cheap to snapshot.
/// Iteration is always in ascending digit order, which keeps solving and
/// generation reproducible.
///
/// # Examples
///
/// ```
/// use crossmath_core::DigitSet;
///
/// let mut candidates = DigitSet::FULL;
/// candidates.remove(5);
/// candidates.remove(7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(5));
/// assert!(candidates.contains(1));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

const MASK: u16 = 0x1ff;

fn bit(digit: u8) -> u16 {
    assert!((1..=9).contains(&digit), "digit out of range: {digit}");
    1 << (digit - 1)
}

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing every digit 1–9.
    pub const FULL: Self = Self(MASK);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing a single digit.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1–9.
    #[must_use]
    pub fn from_elem(digit: u8) -> Self {
        Self(bit(digit))
    }

    /// Inserts a digit into the set.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1–9.
    pub fn insert(&mut self, digit: u8) {
        self.0 |= bit(digit);
    }

    /// Removes a digit from the set. No-op if the digit is absent.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1–9.
    pub fn remove(&mut self, digit: u8) {
        self.0 &= !bit(digit);
    }

    /// Returns `true` if the set contains the digit.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1–9.
    #[must_use]
    pub fn contains(self, digit: u8) -> bool {
        self.0 & bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole digit if the set has exactly one element.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossmath_core::DigitSet;
    ///
    /// assert_eq!(DigitSet::from_elem(4).as_single(), Some(4));
    /// assert_eq!(DigitSet::FULL.as_single(), None);
    /// assert_eq!(DigitSet::EMPTY.as_single(), None);
    /// ```
    #[must_use]
    pub const fn as_single(self) -> Option<u8> {
        if self.0.count_ones() == 1 {
            Some(self.0.trailing_zeros() as u8 + 1)
        } else {
            None
        }
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> DigitSetIter {
        DigitSetIter(self.0)
    }
}

impl Default for DigitSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<u8> for DigitSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = u8;
    type IntoIter = DigitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitSet`], in ascending order.
#[derive(Debug, Clone)]
pub struct DigitSetIter(u16);

impl Iterator for DigitSetIter {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.0 == 0 {
            return None;
        }
        let digit = self.0.trailing_zeros() as u8 + 1;
        self.0 &= self.0 - 1;
        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for DigitSetIter {}
impl FusedIterator for DigitSetIter {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn basic_operations() {
        let mut set = DigitSet::new();
        set.insert(1);
        set.insert(9);
        assert!(set.contains(1));
        assert!(set.contains(9));
        assert!(!set.contains(5));
        assert_eq!(set.len(), 2);

        set.remove(1);
        assert!(!set.contains(1));
        assert_eq!(set.len(), 1);

        // removing an absent digit is a no-op
        set.remove(1);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert!(DigitSet::EMPTY.is_empty());
        assert_eq!(DigitSet::FULL.len(), 9);
        for digit in 1..=9 {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn as_single() {
        assert_eq!(DigitSet::from_elem(7).as_single(), Some(7));
        assert_eq!(DigitSet::from_iter([2, 3]).as_single(), None);
        assert_eq!(DigitSet::EMPTY.as_single(), None);
    }

    #[test]
    fn iteration_order_is_ascending() {
        let set = DigitSet::from_iter([9, 1, 5, 3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![1, 3, 5, 9]);
    }

    #[test]
    #[should_panic(expected = "digit out of range: 0")]
    fn insert_zero_panics() {
        let mut set = DigitSet::new();
        set.insert(0);
    }

    #[test]
    #[should_panic(expected = "digit out of range: 10")]
    fn insert_ten_panics() {
        let mut set = DigitSet::new();
        set.insert(10);
    }

    proptest! {
        #[test]
        fn iter_matches_contains(bits in 0u16..0x200) {
            let set = DigitSet(bits);
            let digits: Vec<_> = set.iter().collect();
            prop_assert_eq!(digits.len(), set.len());
            prop_assert!(digits.is_sorted());
            for digit in 1..=9 {
                prop_assert_eq!(digits.contains(&digit), set.contains(digit));
            }
        }

        #[test]
        fn insert_remove_round_trip(bits in 0u16..0x200, digit in 1u8..=9) {
            let mut set = DigitSet(bits);
            set.insert(digit);
            prop_assert!(set.contains(digit));
            set.remove(digit);
            prop_assert!(!set.contains(digit));
        }
    }
}
