use crate::{Distance, MatchResult, Matches};

impl Matches {
    /// Sorts best first.
    pub(crate) fn new(mut inner: Vec<MatchResult>) -> Self {
        inner.sort();
        Self { inner }
    }

    /// The top-ranked result, even if it is a [`NO_MATCH`](crate::NO_MATCH).
    #[inline]
    #[must_use]
    pub fn best(&self) -> Option<&MatchResult> {
        self.inner.first()
    }

    /// Drops results carrying the no-match sentinel.
    #[must_use]
    pub fn candidates(mut self) -> Self {
        self.inner.retain(MatchResult::is_match);
        self
    }

    /// Keeps results whose distance does not exceed `max_distance`.
    ///
    /// ```rust
    /// use fuzzy_needle::NeedleListMatcher;
    ///
    /// let matcher = NeedleListMatcher::new(["needle1", "ndl2", "ndl3"]);
    /// let close = matcher.search("ndl2").within(1);
    /// assert_eq!(close.len(), 2);
    /// ```
    #[must_use]
    pub fn within(mut self, max_distance: Distance) -> Self {
        self.inner.retain(|m| m.is_match() && m.distance() <= max_distance);
        self
    }

    /// Keeps at most `cutoff` best results.
    #[must_use]
    pub fn truncate(mut self, cutoff: usize) -> Self {
        self.inner.truncate(cutoff);
        self
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &MatchResult> {
        self.inner.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[MatchResult] {
        &self.inner
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<MatchResult> {
        self.inner
    }
}

impl IntoIterator for Matches {
    type Item = MatchResult;
    type IntoIter = std::vec::IntoIter<MatchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a Matches {
    type Item = &'a MatchResult;
    type IntoIter = std::slice::Iter<'a, MatchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
