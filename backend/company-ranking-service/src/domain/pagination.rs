//! Leaderboard paging

/// Page size of the selections leaderboard
pub const SELECTIONS_PAGE_SIZE: i64 = 5;
/// Default page size of the flat leaderboard
pub const DEFAULT_LEADERBOARD_LIMIT: i64 = 10;
/// Upper bound on caller-supplied page sizes
pub const MAX_LEADERBOARD_LIMIT: i64 = 100;

/// A slice of the global ranking: ranks `offset + 1 ..= offset + limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Page {
    /// Build a page from 1-based `page` numbers.
    ///
    /// A missing page, `0` and `1` all address the first page; negative values
    /// are treated the same way. `limit` is clamped to `1..=MAX_LEADERBOARD_LIMIT`.
    pub fn new(page: Option<i64>, limit: i64) -> Self {
        let limit = limit.clamp(1, MAX_LEADERBOARD_LIMIT);
        let offset = match page {
            Some(p) if p > 1 => (p - 1).saturating_mul(limit),
            _ => 0,
        };

        Self { limit, offset }
    }

    /// Rank of the first row on this page
    pub fn first_rank(&self) -> i64 {
        self.offset.saturating_add(1)
    }

    /// Rank of the last row this page can hold
    pub fn last_rank(&self) -> i64 {
        self.offset.saturating_add(self.limit)
    }
}
