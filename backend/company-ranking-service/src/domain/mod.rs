//! Pure ranking logic, independent of HTTP and the database
//!
//! - `rank_window`: five-company neighborhood around a target rank
//! - `sort`: allow-listed sort fields and directions
//! - `pagination`: leaderboard offset arithmetic

pub mod pagination;
pub mod rank_window;
pub mod sort;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

pub use pagination::Page;
pub use rank_window::{resolve_window, Ranked, WINDOW_SIZE};
pub use sort::{SortField, SortOrder};
