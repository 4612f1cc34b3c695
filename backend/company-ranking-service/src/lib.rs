//! Company Ranking Service
//!
//! Read-only HTTP service over the `companies` table: side-by-side
//! comparison, the five-company window around a company's rank, and
//! paginated leaderboards.

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod openapi;
pub mod routes;

// Public re-exports
pub use config::Config;
pub use error::{AppError, Result};
