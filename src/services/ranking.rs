//! Two-stage selection shared by racket and string recommendations.
//!
//! The primary stage filters and scores candidates and hands back a
//! [`Shortlist`], which is non-empty by construction. When filtering
//! leaves nothing, it reports [`EmptyCandidates`] instead and the caller
//! runs [`cheapest`], the fallback stage.

/// Number of entries returned per recommendation category
pub const SHORTLIST_LEN: usize = 3;

/// Synthetic scores handed to fallback picks, highest first
const FALLBACK_TOP_SCORE: f64 = 10.0;

/// No candidate of the given kind survived filtering
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no {kind} candidates available")]
pub struct EmptyCandidates {
    pub kind: &'static str,
}

impl EmptyCandidates {
    pub fn new(kind: &'static str) -> Self {
        Self { kind }
    }
}

/// A catalog entry with the score it earned
#[derive(Debug, Clone, PartialEq)]
pub struct Scored<T> {
    pub item: T,
    pub score: f64,
}

impl<T> Scored<T> {
    pub fn new(item: T, score: f64) -> Self {
        Self { item, score }
    }
}

/// Ranked picks, best first, never empty
#[derive(Debug, Clone, PartialEq)]
pub struct Shortlist<T> {
    top: Scored<T>,
    rest: Vec<Scored<T>>,
}

impl<T> Shortlist<T> {
    /// Sorts `candidates` by descending score and keeps the first `limit`.
    ///
    /// The sort is stable, so ties keep catalog order and results are
    /// deterministic.
    pub fn rank(
        mut candidates: Vec<Scored<T>>,
        limit: usize,
        kind: &'static str,
    ) -> Result<Self, EmptyCandidates> {
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
        candidates.truncate(limit.max(1));
        Self::from_vec(candidates, kind)
    }

    fn from_vec(candidates: Vec<Scored<T>>, kind: &'static str) -> Result<Self, EmptyCandidates> {
        let mut iter = candidates.into_iter();
        match iter.next() {
            Some(top) => Ok(Self {
                top,
                rest: iter.collect(),
            }),
            None => Err(EmptyCandidates::new(kind)),
        }
    }

    /// The highest-ranked pick
    pub fn top(&self) -> &Scored<T> {
        &self.top
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scored<T>> {
        std::iter::once(&self.top).chain(self.rest.iter())
    }

    pub fn into_vec(self) -> Vec<Scored<T>> {
        let mut all = Vec::with_capacity(1 + self.rest.len());
        all.push(self.top);
        all.extend(self.rest);
        all
    }
}

/// Fallback stage: the `limit` cheapest entries, ignoring every filter,
/// scored 10, 9, 8, ...
pub fn cheapest<T: Clone>(
    items: &[T],
    price: impl Fn(&T) -> f64,
    limit: usize,
    kind: &'static str,
) -> Result<Shortlist<T>, EmptyCandidates> {
    let mut by_price: Vec<&T> = items.iter().collect();
    by_price.sort_by(|a, b| price(a).total_cmp(&price(b)));

    let picks = by_price
        .into_iter()
        .take(limit.max(1))
        .enumerate()
        .map(|(index, item)| Scored::new(item.clone(), FALLBACK_TOP_SCORE - index as f64))
        .collect();

    Shortlist::from_vec(picks, kind)
}
