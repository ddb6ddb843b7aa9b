//! Modified Levenshtein distance with free skipping of whole leading and
//! trailing haystack segments.
//!
//! The haystack is split at the separator character. Whole segments before
//! the aligned region and whole segments after it are skipped at zero cost,
//! so `"needle"` scores 0 against both `"prefix needle"` and
//! `"needle postfix"`. Skipping is only free at separator boundaries:
//! `"dle"` against `"needle"` still pays for the three dropped graphemes.
//!
//! Every DP cell carries a `matched` flag next to its cost. Without it a path
//! that skips the haystack for free and deletes the whole needle would look
//! like a cheap match even though no grapheme was ever aligned.

use crate::{Distance, MatchResult, NO_MATCH};
use std::borrow::Cow;
use std::cmp::Ordering;
use unicode_segmentation::UnicodeSegmentation;

pub const DEFAULT_SEPARATOR: char = '_';

/// One cell of the cost grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Cell {
    pub(crate) cost: Distance,
    /// At least one needle grapheme was aligned with an equal haystack
    /// grapheme on the path leading here.
    pub(crate) matched: bool,
}

impl Cell {
    #[inline]
    pub(crate) const fn unmatched(cost: Distance) -> Self {
        Self {
            cost,
            matched: false,
        }
    }

    /// Lower cost wins outright; on a tie the flags are OR-ed.
    #[inline]
    pub(crate) fn merge(self, other: Cell) -> Cell {
        match self.cost.cmp(&other.cost) {
            Ordering::Less => self,
            Ordering::Greater => other,
            Ordering::Equal => Cell {
                cost: self.cost,
                matched: self.matched || other.matched,
            },
        }
    }

    /// Insertion or deletion.
    #[inline]
    pub(crate) fn bump(self) -> Cell {
        Cell {
            cost: self.cost + 1,
            matched: self.matched,
        }
    }

    /// Diagonal move: free on equal graphemes, a substitution otherwise.
    #[inline]
    pub(crate) fn step(self, same: bool) -> Cell {
        if same {
            Cell {
                cost: self.cost,
                matched: true,
            }
        } else {
            self.bump()
        }
    }

    #[inline]
    pub(crate) fn distance(self) -> Distance {
        if self.matched { self.cost } else { NO_MATCH }
    }
}

/// A case-folded grapheme of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Unit<'a> {
    pub(crate) text: Cow<'a, str>,
    pub(crate) separator: bool,
}

/// Scores a single needle against a single haystack.
///
/// ```rust
/// use fuzzy_needle::{EditDistanceScorer, NO_MATCH};
///
/// let scorer = EditDistanceScorer::default();
/// assert_eq!(scorer.score("needle", "prefix needle").distance(), 0);
/// assert_eq!(scorer.score("needle", "needle postfix").distance(), 0);
/// assert_eq!(scorer.score("needle", "prefix needleXXX").distance(), 3);
/// assert_eq!(scorer.score("x", "abc def").distance(), NO_MATCH);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditDistanceScorer {
    pub(crate) separator: char,
    pub(crate) normalize_spaces: bool,
}

impl Default for EditDistanceScorer {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            normalize_spaces: true,
        }
    }
}

impl EditDistanceScorer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scorer for haystacks that already use `separator` as their word
    /// boundary. Spaces are compared as ordinary characters.
    #[must_use]
    pub fn with_separator(separator: char) -> Self {
        Self {
            separator,
            normalize_spaces: false,
        }
    }

    #[must_use]
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Rewrite spaces as the separator before comparing (on by default).
    #[must_use]
    pub fn normalize_spaces(mut self, value: bool) -> Self {
        self.normalize_spaces = value;
        self
    }

    #[must_use]
    pub fn separator_char(&self) -> char {
        self.separator
    }

    /// With space normalization on, spaces are rewritten as the separator in
    /// both the needle and the haystack, so `"apache http"` scores 0 against
    /// `"apache_http"`.
    #[must_use]
    pub fn score(&self, needle: &str, haystack: &str) -> MatchResult {
        MatchResult::new(needle, self.distance(needle, haystack))
    }

    /// Modified edit distance, or [`NO_MATCH`] when either side is empty or
    /// nothing could be aligned.
    #[must_use]
    pub fn distance(&self, needle: &str, haystack: &str) -> Distance {
        if needle.is_empty() || haystack.is_empty() {
            return NO_MATCH;
        }
        let needle: Vec<Cow<str>> = self.fold(needle).into_iter().map(|u| u.text).collect();
        let haystack = self.fold(haystack);
        modified_distance(&needle, &haystack).distance()
    }

    pub(crate) fn fold<'a>(&self, text: &'a str) -> Vec<Unit<'a>> {
        text.graphemes(true)
            .map(|g| {
                let space = self.normalize_spaces && g == " ";
                let separator = space || is_single(g, self.separator);
                let text = if space {
                    Cow::Owned(self.separator.to_lowercase().collect())
                } else if g.chars().any(|c| c.to_lowercase().ne(std::iter::once(c))) {
                    Cow::Owned(g.to_lowercase())
                } else {
                    Cow::Borrowed(g)
                };
                Unit { text, separator }
            })
            .collect()
    }
}

#[inline]
fn is_single(grapheme: &str, ch: char) -> bool {
    let mut chars = grapheme.chars();
    chars.next() == Some(ch) && chars.next().is_none()
}

/// Score `needle` with the default scorer (`_` separator, spaces normalized).
#[must_use]
pub fn score(needle: &str, haystack: &str) -> MatchResult {
    EditDistanceScorer::default().score(needle, haystack)
}

/// Runs the DP over two rolling rows and returns the winning cell.
///
/// Row 0 restarts at zero right after every separator, which makes skipping
/// leading segments free. Each last-row cell sitting just before a separator
/// is a candidate for skipping the trailing segments, and is merged into the
/// bottom-right cell.
pub(crate) fn modified_distance(needle: &[Cow<'_, str>], haystack: &[Unit<'_>]) -> Cell {
    let width = haystack.len() + 1;

    let mut prev: Vec<Cell> = Vec::with_capacity(width);
    let mut restart = 0;
    prev.push(Cell::unmatched(0));
    for (j, unit) in haystack.iter().enumerate() {
        if unit.separator {
            restart = j + 1;
        }
        prev.push(Cell::unmatched(j + 1 - restart));
    }

    let mut current = vec![Cell::default(); width];
    for (i, n) in needle.iter().enumerate() {
        current[0] = Cell::unmatched(i + 1);
        for (j, unit) in haystack.iter().enumerate() {
            let diagonal = prev[j].step(*n == unit.text);
            let up = prev[j + 1].bump();
            let left = current[j].bump();
            current[j + 1] = diagonal.merge(up).merge(left);
        }
        std::mem::swap(&mut prev, &mut current);
    }

    haystack
        .iter()
        .enumerate()
        .filter(|(_, unit)| unit.separator)
        .fold(prev[width - 1], |best, (j, _)| best.merge(prev[j]))
}
