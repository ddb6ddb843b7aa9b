//! Fuzzy matching of short identifiers ("needles") inside longer descriptive
//! strings ("haystacks") such as release or file names.
//!
//! ```rust
//! use fuzzy_needle::NeedleListMatcher;
//!
//! let matcher = NeedleListMatcher::new(["apache_http_server", "nginx", "tomcat"]);
//! let matches = matcher.search("Apache HTTP Server 2.4");
//! assert_eq!(matches.best().map(|m| m.needle()), Some("apache_http_server"));
//! assert_eq!(matches.best().map(|m| m.distance()), Some(0));
//! ```
mod builder;
mod distance;
mod matches;
mod structs;

pub use builder::{DEFAULT_PARALLEL_THRESHOLD, NeedleListMatcherBuilder};
pub use distance::{DEFAULT_SEPARATOR, EditDistanceScorer, score};
pub use structs::*;

use distance::{Unit, modified_distance};
use rayon::prelude::*;

#[allow(unused_macros)]
#[cfg(test)]
macro_rules! trace {
    ($($arg:tt)*) => { println!($($arg)*); };
}
#[allow(unused_macros)]
#[cfg(not(test))]
macro_rules! trace {
    ($($arg:tt)*) => { log::trace!($($arg)*); };
}

/// Batch ranking engine
impl NeedleListMatcher {
    /// Matcher with the default configuration, see
    /// [`NeedleListMatcherBuilder::new`].
    pub fn new<T>(needles: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<Needle>,
    {
        NeedleListMatcherBuilder::new().build(needles)
    }

    #[inline]
    fn score_one(&self, prepared: &PreparedNeedle, haystack: &[Unit<'_>]) -> MatchResult {
        let distance = if prepared.units.is_empty() || haystack.is_empty() {
            NO_MATCH
        } else {
            modified_distance(&prepared.units, haystack).distance()
        };
        MatchResult::new(prepared.needle.text.as_str(), distance)
    }

    /// Scores every needle against `haystack` and returns one result per
    /// needle, best first.
    #[must_use]
    pub fn search(&self, haystack: &str) -> Matches {
        let units = self.scorer.fold(haystack);
        let parallel = self.needles.len() >= self.parallel_threshold;
        log::debug!(
            "ranking {} needles against {haystack:?} (parallel: {parallel})",
            self.needles.len()
        );

        let results: Vec<MatchResult> = if parallel {
            self.needles
                .par_iter()
                .map(|n| self.score_one(n, &units))
                .collect()
        } else {
            self.needles
                .iter()
                .map(|n| self.score_one(n, &units))
                .collect()
        };

        let matches = Matches::new(results);
        if let Some(best) = matches.best() {
            trace!("best match for {haystack:?}: {best}");
        }
        matches
    }

    /// Needles in construction order.
    pub fn needles(&self) -> impl Iterator<Item = &str> {
        self.needles.iter().map(|n| n.needle.text.as_str())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.needles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needles.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn scorer(&self) -> &EditDistanceScorer {
        &self.scorer
    }
}
