/// OpenAPI documentation for the Company Ranking Service
use actix_web::HttpResponse;
use utoipa::OpenApi;

use crate::handlers;
use crate::models::{CompanySummary, ComparisonRequest, RankedCompany, RankedCompanyWithCategories};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Company Ranking Service API",
        version = "1.0.0",
        description = "Side-by-side company comparison, rank windows and paginated leaderboards. \
                       64-bit integers (ids, revenue, investments) are encoded as JSON strings.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8090", description = "Development server"),
    ),
    paths(
        handlers::comparison::get_comparison,
        handlers::rank::get_company_rank,
        handlers::leaderboard::get_selections,
        handlers::leaderboard::get_leaderboard,
    ),
    components(schemas(
        CompanySummary,
        ComparisonRequest,
        RankedCompany,
        RankedCompanyWithCategories,
    )),
    tags(
        (name = "companies", description = "Comparison and rank window"),
        (name = "leaderboard", description = "Paginated global rankings"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi_json_path() -> &'static str {
        "/api/v1/openapi.json"
    }
}

pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
