//! Ranking and filtering candidates by their bounded distance to a query.
//!
//! This is a plain scan over the candidates, one bounded distance per
//! candidate. With the `parallel` feature the scan is spread over the
//! `rayon` thread pool; the result is the same either way.

use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::cost::Distance;
use crate::error::Result;
use crate::strategy::EditDistance;

/// A candidate within the bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'a> {
    /// Position of the candidate in the input slice.
    pub index: usize,
    pub candidate: &'a str,
    pub distance: Distance,
}

/// Returns every candidate within `max_d` of `query`, closest first.
///
/// Ties keep input order. Fails if the query or any candidate is longer
/// than the metric's maximum length.
///
/// # Examples
///
/// ```
/// use fuzzystr::EditDistance;
/// use fuzzystr::search::rank;
///
/// let words = ["apple", "apply", "ample", "maple", "orange"];
/// let matches = rank("aple", &words, &EditDistance::new(), 1).unwrap();
/// let names: Vec<&str> = matches.iter().map(|m| m.candidate).collect();
/// assert_eq!(names, vec!["apple", "ample", "maple"]);
/// ```
pub fn rank<'a, S>(
    query: &str,
    candidates: &'a [S],
    metric: &EditDistance,
    max_d: Distance,
) -> Result<Vec<Match<'a>>>
where
    S: AsRef<str> + Sync,
{
    let score = |(index, candidate): (usize, &'a S)| -> Result<Option<Match<'a>>> {
        let candidate = candidate.as_ref();
        let distance = metric.distance_bounded(query, candidate, max_d)?;
        Ok((distance <= max_d).then_some(Match {
            index,
            candidate,
            distance,
        }))
    };

    #[cfg(feature = "parallel")]
    let scored: Result<Vec<Option<Match<'a>>>> =
        candidates.par_iter().enumerate().map(score).collect();
    #[cfg(not(feature = "parallel"))]
    let scored: Result<Vec<Option<Match<'a>>>> =
        candidates.iter().enumerate().map(score).collect();

    let mut matches: Vec<Match<'a>> = scored?.into_iter().flatten().collect();
    matches.sort_by_key(|m| (m.distance, m.index));
    debug!(
        "{} of {} candidates within {max_d} of query",
        matches.len(),
        candidates.len()
    );
    Ok(matches)
}

/// The closest candidate within `max_d`, if any.
pub fn closest<'a, S>(
    query: &str,
    candidates: &'a [S],
    metric: &EditDistance,
    max_d: Distance,
) -> Result<Option<Match<'a>>>
where
    S: AsRef<str> + Sync,
{
    Ok(rank(query, candidates, metric, max_d)?.into_iter().next())
}
