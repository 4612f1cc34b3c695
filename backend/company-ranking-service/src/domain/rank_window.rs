/// Rank window resolution
///
/// Given every company ranked 1..=n by some descending sort key, pick the
/// five companies surrounding a target. The window is centred on the target
/// (two above, two below) and slides inwards at either end of the ranking so
/// that it stays full whenever at least five companies exist.
use std::cmp::Reverse;
use std::collections::HashSet;

use super::{DomainError, DomainResult};

/// Number of companies returned by [`resolve_window`]
pub const WINDOW_SIZE: usize = 5;

/// Ranks on each side of the target in the primary window
const WINDOW_RADIUS: i64 = 2;

/// Anything carrying a unique id and a 1-based global rank
pub trait Ranked {
    fn id(&self) -> i64;
    fn rank(&self) -> i64;
}

/// Resolve the neighborhood of `target_id` inside an already-ranked population.
///
/// The population must carry ranks computed over the whole collection. Ties
/// are expected to be broken upstream; this function never reorders entries
/// with equal sort keys, it only looks at `rank`.
///
/// Returns `min(WINDOW_SIZE, population.len())` entries in ascending rank
/// order, always including the target.
pub fn resolve_window<T>(population: &[T], target_id: i64) -> DomainResult<Vec<T>>
where
    T: Ranked + Clone,
{
    if population.is_empty() {
        return Err(DomainError::InvalidInput(
            "cannot resolve a rank window over an empty population".to_string(),
        ));
    }

    let target_rank = population
        .iter()
        .find(|entry| entry.id() == target_id)
        .map(Ranked::rank)
        .ok_or_else(|| DomainError::NotFound(format!("company {} is not ranked", target_id)))?;

    let primary_ranks =
        target_rank.saturating_sub(WINDOW_RADIUS)..=target_rank.saturating_add(WINDOW_RADIUS);
    let primary = population
        .iter()
        .filter(|entry| primary_ranks.contains(&entry.rank()));

    // Top-of-list correction: when the target sits at rank 1 or 2 the primary
    // window loses its upper half, so pull in the ranks that follow it.
    let mut following: Vec<&T> = population
        .iter()
        .filter(|entry| entry.rank() > target_rank)
        .collect();
    following.sort_by_key(|entry| entry.rank());
    following.truncate(WINDOW_SIZE);

    let mut seen = HashSet::new();
    let mut window: Vec<T> = primary
        .chain(following)
        .filter(|entry| seen.insert(entry.id()))
        .cloned()
        .collect();
    window.sort_by_key(Ranked::rank);
    window.truncate(WINDOW_SIZE);

    // Bottom-of-list correction: near the last rank nothing follows the
    // target, so backfill with the closest preceding ranks instead.
    let wanted = WINDOW_SIZE.min(population.len());
    if window.len() < wanted {
        let first_rank = window.first().map(Ranked::rank).unwrap_or(target_rank);
        let mut preceding: Vec<&T> = population
            .iter()
            .filter(|entry| entry.rank() < first_rank)
            .collect();
        preceding.sort_by_key(|entry| Reverse(entry.rank()));

        let missing = wanted - window.len();
        window.extend(preceding.into_iter().take(missing).cloned());
        window.sort_by_key(Ranked::rank);
    }

    Ok(window)
}
