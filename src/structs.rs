use crate::distance::EditDistanceScorer;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use unicode_segmentation::UnicodeSegmentation;

pub type Distance = usize;

/// Distance reported when a needle could not be aligned against the haystack
/// at all. Strictly greater than any computable edit cost.
pub const NO_MATCH: Distance = Distance::MAX;

/// A string to look for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needle {
    pub text: String,
}

impl From<&str> for Needle {
    fn from(s: &str) -> Self {
        Needle { text: s.to_owned() }
    }
}

impl From<String> for Needle {
    fn from(s: String) -> Self {
        Needle { text: s }
    }
}

impl From<&String> for Needle {
    fn from(s: &String) -> Self {
        Needle { text: s.clone() }
    }
}

/// A needle folded once at build time so repeated searches skip the
/// segmentation work.
#[derive(Debug)]
pub(crate) struct PreparedNeedle {
    pub(crate) needle: Needle,
    pub(crate) units: Vec<Cow<'static, str>>,
}

/// Ranks a fixed list of needles against arbitrary haystacks.
///
/// Built through [`NeedleListMatcherBuilder`](crate::NeedleListMatcherBuilder)
/// or [`NeedleListMatcher::new`]. The needle list never changes after
/// construction, so one matcher can be shared freely between threads.
pub struct NeedleListMatcher {
    pub(crate) needles: Vec<PreparedNeedle>,
    pub(crate) scorer: EditDistanceScorer,
    pub(crate) parallel_threshold: usize,
}

impl fmt::Debug for NeedleListMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NeedleListMatcher")
            .field("scorer", &self.scorer)
            .field("parallel_threshold", &self.parallel_threshold)
            .field(
                "needles",
                &self.needles.iter().map(|n| &n.needle.text).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Result of scoring one needle against one haystack.
///
/// Ordered best first: lower distance wins, and on equal distance the longer
/// (more specific) needle wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchResult {
    needle: String,
    distance: Distance,
    /// Grapheme count of `needle`, the ordering tie-break.
    needle_len: usize,
}

impl MatchResult {
    pub fn new(needle: impl Into<String>, distance: Distance) -> Self {
        let needle = needle.into();
        let needle_len = needle.graphemes(true).count();
        Self {
            needle,
            distance,
            needle_len,
        }
    }

    #[inline]
    #[must_use]
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Edit cost, or [`NO_MATCH`].
    #[inline]
    #[must_use]
    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// `false` when the distance is the [`NO_MATCH`] sentinel.
    #[inline]
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.distance != NO_MATCH
    }

    /// Compound result for an identifier assembled from two sub-matches,
    /// e.g. vendor and product.
    ///
    /// ```rust
    /// use fuzzy_needle::MatchResult;
    ///
    /// let joined = MatchResult::new("a", 1).concat(&MatchResult::new("b", 2));
    /// assert_eq!(joined.needle(), "a:b");
    /// assert_eq!(joined.distance(), 3);
    /// ```
    #[must_use]
    pub fn concat(&self, other: &MatchResult) -> MatchResult {
        MatchResult::new(
            format!("{}:{}", self.needle, other.needle),
            // NO_MATCH absorbs
            self.distance.saturating_add(other.distance),
        )
    }
}

impl Ord for MatchResult {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| other.needle_len.cmp(&self.needle_len))
            .then_with(|| self.needle.cmp(&other.needle))
    }
}

impl PartialOrd for MatchResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.needle, self.distance)
    }
}

/// Sorted output of [`NeedleListMatcher::search`], best match first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matches {
    pub(crate) inner: Vec<MatchResult>,
}
