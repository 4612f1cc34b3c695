/// Data models for company-ranking-service
///
/// - `RankedCompany`: a company row plus its global rank for one sort field
/// - `RankedCompanyWithCategories`: the same with category labels attached
/// - `CompanySummary`: the column subset shown side by side on comparison
pub mod bigint;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Ranked;

/// Company row with its 1-based rank over the whole table
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RankedCompany {
    #[serde(with = "bigint::string")]
    #[schema(value_type = String, example = "9007199254740993")]
    pub id: i64,
    pub name: String,
    pub description: String,
    pub brand_image: Option<String>,
    #[serde(with = "bigint::string")]
    #[schema(value_type = String)]
    pub actual_investment: i64,
    #[serde(with = "bigint::string")]
    #[schema(value_type = String)]
    pub virtual_investment: i64,
    #[serde(with = "bigint::string")]
    #[schema(value_type = String)]
    pub revenue: i64,
    pub total_employees: i32,
    pub selected_count: i32,
    pub compared_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub rank: i64,
}

impl Ranked for RankedCompany {
    fn id(&self) -> i64 {
        self.id
    }

    fn rank(&self) -> i64 {
        self.rank
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct RankedCompanyWithCategories {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub company: RankedCompany,
    pub categories: Vec<String>,
}

/// Comparison view of a company
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanySummary {
    #[serde(with = "bigint::string")]
    #[schema(value_type = String, example = "9007199254740993")]
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(with = "bigint::string")]
    #[schema(value_type = String)]
    pub actual_investment: i64,
    #[serde(with = "bigint::string")]
    #[schema(value_type = String)]
    pub revenue: i64,
    pub total_employees: i32,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRequest {
    /// Company ids, as strings or integers
    #[serde(deserialize_with = "bigint::deserialize_list")]
    #[schema(value_type = Vec<String>)]
    pub comparison_ids: Vec<i64>,
}

/// One leaderboard page plus the size of the whole ranking
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse<T> {
    pub list: Vec<T>,
    pub total_count: i64,
}
