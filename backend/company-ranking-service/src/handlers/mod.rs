/// HTTP handlers for company-ranking-service
///
/// - Comparison: side-by-side view of selected companies
/// - Rank: five-company window around one company
/// - Leaderboard: paginated global rankings, with or without categories
/// - Health: liveness and readiness probes
pub mod comparison;
pub mod health;
pub mod leaderboard;
pub mod rank;

pub use comparison::get_comparison;
pub use health::{health_summary, liveness_check, readiness_summary};
pub use leaderboard::{get_leaderboard, get_selections};
pub use rank::get_company_rank;
