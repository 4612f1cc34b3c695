/// Comparison handler - side-by-side view of the companies a user picked
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use tracing::debug;

use crate::db::CompanyRepository;
use crate::domain::sort::comparison_sort;
use crate::error::{AppError, Result};
use crate::models::{CompanySummary, ComparisonRequest};

/// Upper bound on companies compared in one request
pub const MAX_COMPARISON_IDS: usize = 20;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonQuery {
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// Compare companies
#[utoipa::path(
    post,
    path = "/api/v1/companies/comparison",
    tag = "companies",
    request_body = ComparisonRequest,
    params(
        ("sortBy" = Option<String>, Query, description = "revenue | totalEmployees | actualInvestment (default revenue)"),
        ("order" = Option<String>, Query, description = "asc | desc (default asc)"),
    ),
    responses(
        (status = 200, description = "Requested companies in the chosen order", body = [CompanySummary]),
        (status = 400, description = "Empty or oversized id list"),
        (status = 404, description = "None of the companies exist"),
    )
)]
pub async fn get_comparison(
    pool: web::Data<PgPool>,
    query: web::Query<ComparisonQuery>,
    req: web::Json<ComparisonRequest>,
) -> Result<HttpResponse> {
    let mut ids = req.into_inner().comparison_ids;
    ids.sort_unstable();
    ids.dedup();

    if ids.is_empty() {
        return Err(AppError::BadRequest(
            "comparisonIds must contain at least one company id".to_string(),
        ));
    }
    if ids.len() > MAX_COMPARISON_IDS {
        return Err(AppError::BadRequest(format!(
            "At most {} companies can be compared at once",
            MAX_COMPARISON_IDS
        )));
    }

    let (field, order) = comparison_sort(query.sort_by.as_deref(), query.order.as_deref());
    debug!(count = ids.len(), sort_by = %field, order = %order, "Comparing companies");

    let companies = CompanyRepository::new(pool.get_ref().clone())
        .find_for_comparison(&ids, field, order)
        .await?;

    if companies.is_empty() {
        return Err(AppError::NotFound("Company not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(companies))
}
