use crate::distance::EditDistanceScorer;
use crate::{Needle, NeedleListMatcher, PreparedNeedle};
use std::borrow::Cow;

/// Needle lists at least this long are scored on the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Builder for [`NeedleListMatcher`].
///
/// ```rust
/// use fuzzy_needle::NeedleListMatcherBuilder;
///
/// let matcher = NeedleListMatcherBuilder::new()
///     .separator('-')
///     .build(["openssl", "libressl"]);
///
/// let matches = matcher.search("libressl-portable");
/// assert_eq!(matches.best().map(|m| m.needle()), Some("libressl"));
/// ```
#[derive(Debug, Clone)]
pub struct NeedleListMatcherBuilder {
    scorer: EditDistanceScorer,
    parallel_threshold: usize,
}

impl Default for NeedleListMatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NeedleListMatcherBuilder {
    /// `_` separator, spaces normalized, parallel scoring from
    /// [`DEFAULT_PARALLEL_THRESHOLD`] needles up.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scorer: EditDistanceScorer::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Word boundary character in haystacks.
    #[must_use]
    pub fn separator(mut self, separator: char) -> Self {
        self.scorer = self.scorer.separator(separator);
        self
    }

    /// Treat spaces as separators (default `true`).
    #[must_use]
    pub fn normalize_spaces(mut self, value: bool) -> Self {
        self.scorer = self.scorer.normalize_spaces(value);
        self
    }

    /// Replace the scorer wholesale.
    #[must_use]
    pub fn scorer(mut self, scorer: EditDistanceScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Minimum needle count for scoring in parallel. `usize::MAX` disables
    /// the parallel path, `0` forces it.
    #[must_use]
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Copies the needles in and folds each of them once.
    pub fn build<T>(self, inputs: impl IntoIterator<Item = T>) -> NeedleListMatcher
    where
        T: Into<Needle>,
    {
        let needles = inputs
            .into_iter()
            .map(Into::into)
            .map(|needle: Needle| {
                let units = self
                    .scorer
                    .fold(&needle.text)
                    .into_iter()
                    .map(|u| Cow::Owned(u.text.into_owned()))
                    .collect();
                PreparedNeedle { needle, units }
            })
            .collect();

        NeedleListMatcher {
            needles,
            scorer: self.scorer,
            parallel_threshold: self.parallel_threshold,
        }
    }
}
