/// Leaderboard handlers - paginated global rankings
///
/// The count and the page are independent reads; both run concurrently and
/// the first failure wins.
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use tracing::debug;

use crate::db::CompanyRepository;
use crate::domain::pagination::{DEFAULT_LEADERBOARD_LIMIT, SELECTIONS_PAGE_SIZE};
use crate::domain::{Page, SortField, SortOrder};
use crate::error::Result;
use crate::models::LeaderboardResponse;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardQuery {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl LeaderboardQuery {
    fn sort(&self) -> (SortField, SortOrder) {
        (
            SortField::parse_or(self.sort_by.as_deref(), SortField::SelectedCount),
            SortOrder::parse_or(self.order.as_deref(), SortOrder::Asc),
        )
    }
}

/// Selection leaderboard with category labels
#[utoipa::path(
    get,
    path = "/api/v1/companies/selections",
    tag = "leaderboard",
    params(
        ("sortBy" = Option<String>, Query, description = "Ranking field (default selectedCount)"),
        ("order" = Option<String>, Query, description = "Display order of the page by rank (default asc)"),
        ("page" = Option<i64>, Query, description = "1-based page; 0 or absent means the first page"),
    ),
    responses(
        (status = 200, description = "`{list, totalCount}`, five companies per page"),
    )
)]
pub async fn get_selections(
    pool: web::Data<PgPool>,
    query: web::Query<LeaderboardQuery>,
) -> Result<HttpResponse> {
    let (field, order) = query.sort();
    let page = Page::new(query.page, SELECTIONS_PAGE_SIZE);
    let repo = CompanyRepository::new(pool.get_ref().clone());

    let (total_count, list) =
        tokio::try_join!(repo.count(), repo.selections_page(field, order, page))?;

    debug!(sort_by = %field, offset = page.offset, rows = list.len(), "Served selections page");
    Ok(HttpResponse::Ok().json(LeaderboardResponse { list, total_count }))
}

/// Flat leaderboard with a caller-chosen page size
#[utoipa::path(
    get,
    path = "/api/v1/companies/leaderboard",
    tag = "leaderboard",
    params(
        ("sortBy" = Option<String>, Query, description = "Ranking field (default selectedCount)"),
        ("order" = Option<String>, Query, description = "Display order of the page by rank (default asc)"),
        ("page" = Option<i64>, Query, description = "1-based page; 0 or absent means the first page"),
        ("limit" = Option<i64>, Query, description = "Page size, 1..=100 (default 10)"),
    ),
    responses(
        (status = 200, description = "`{list, totalCount}`"),
    )
)]
pub async fn get_leaderboard(
    pool: web::Data<PgPool>,
    query: web::Query<LeaderboardQuery>,
) -> Result<HttpResponse> {
    let (field, order) = query.sort();
    let page = Page::new(query.page, query.limit.unwrap_or(DEFAULT_LEADERBOARD_LIMIT));
    let repo = CompanyRepository::new(pool.get_ref().clone());

    let (total_count, list) =
        tokio::try_join!(repo.count(), repo.leaderboard_page(field, order, page))?;

    debug!(sort_by = %field, offset = page.offset, rows = list.len(), "Served leaderboard page");
    Ok(HttpResponse::Ok().json(LeaderboardResponse { list, total_count }))
}
