/// Rank handler - the companies ranked right around one company
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use tracing::debug;

use crate::db::CompanyRepository;
use crate::domain::{resolve_window, SortField};
use crate::error::{AppError, Result};
use crate::models::RankedCompany;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankQuery {
    pub sort_by: Option<String>,
}

/// Parse a BIGINT path segment
pub(crate) fn parse_company_id(raw: &str) -> Result<i64> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid company ID".to_string()))
}

/// Get the rank window of a company
#[utoipa::path(
    get,
    path = "/api/v1/companies/{company_id}/rank",
    tag = "companies",
    params(
        ("company_id" = String, Path, description = "Company id"),
        ("sortBy" = Option<String>, Query, description = "Ranking field (default revenue)"),
    ),
    responses(
        (status = 200, description = "Up to five companies around the target, best rank first", body = [RankedCompany]),
        (status = 400, description = "Malformed id or nothing to rank"),
        (status = 404, description = "Company not found"),
    )
)]
pub async fn get_company_rank(
    pool: web::Data<PgPool>,
    company_id: web::Path<String>,
    query: web::Query<RankQuery>,
) -> Result<HttpResponse> {
    let company_id = parse_company_id(&company_id)?;
    let field = SortField::parse_or(query.sort_by.as_deref(), SortField::Revenue);

    let population = CompanyRepository::new(pool.get_ref().clone())
        .ranked_population(field)
        .await?;
    let window = resolve_window(&population, company_id)?;

    debug!(
        company_id,
        sort_by = %field,
        population = population.len(),
        "Resolved rank window"
    );

    Ok(HttpResponse::Ok().json(window))
}
