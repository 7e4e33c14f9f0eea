use core::iter::Sum;
use core::ops::{Add, AddAssign};

use serde::Serialize;

/// The five counters reported for one input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Counts {
    /// Number of `\n` bytes.
    pub lines: usize,
    /// Number of whitespace-delimited words.
    pub words: usize,
    /// Number of decoded characters.
    pub chars: usize,
    /// Number of bytes.
    pub bytes: usize,
    /// Largest display width of any line.
    pub max_line_length: usize,
}

impl Counts {
    /// Creates zeroed counts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Cumulative totals: counters add up, the line length keeps its maximum.
impl AddAssign for Counts {
    fn add_assign(&mut self, rhs: Self) {
        self.lines += rhs.lines;
        self.words += rhs.words;
        self.chars += rhs.chars;
        self.bytes += rhs.bytes;
        self.max_line_length = self.max_line_length.max(rhs.max_line_length);
    }
}

impl Add for Counts {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl Sum for Counts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), Add::add)
    }
}

impl<'a> Sum<&'a Counts> for Counts {
    fn sum<I: Iterator<Item = &'a Counts>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(lines: usize, max_line_length: usize) -> Counts {
        Counts {
            lines,
            words: lines * 2,
            chars: lines * 3,
            bytes: lines * 4,
            max_line_length,
        }
    }

    #[test]
    fn add_sums_counters_and_keeps_longest_line() {
        let total = counts(1, 40) + counts(2, 7);
        assert_eq!(total.lines, 3);
        assert_eq!(total.words, 6);
        assert_eq!(total.chars, 9);
        assert_eq!(total.bytes, 12);
        assert_eq!(total.max_line_length, 40);
    }

    #[test]
    fn sum_of_nothing_is_zero() {
        let total: Counts = core::iter::empty::<Counts>().sum();
        assert_eq!(total, Counts::new());
    }

    #[test]
    fn sum_by_reference() {
        let values = [counts(1, 3), counts(5, 9), counts(2, 1)];
        let total: Counts = values.iter().sum();
        assert_eq!(total.lines, 8);
        assert_eq!(total.max_line_length, 9);
    }
}
