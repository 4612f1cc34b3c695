/// Route table, shared by the binary and the HTTP tests
use actix_web::middleware::from_fn;
use actix_web::web;

use crate::openapi::ApiDoc;
use crate::{handlers, metrics, openapi};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/metrics", web::get().to(metrics::serve_metrics))
        .route(ApiDoc::openapi_json_path(), web::get().to(openapi::openapi_json))
        .route("/api/v1/health", web::get().to(handlers::health_summary))
        .route("/api/v1/health/ready", web::get().to(handlers::readiness_summary))
        .route("/api/v1/health/live", web::get().to(handlers::liveness_check))
        .service(
            web::scope("/api/v1/companies")
                .wrap(from_fn(metrics::track_requests))
                .route("/comparison", web::post().to(handlers::get_comparison))
                .route("/selections", web::get().to(handlers::get_selections))
                .route("/leaderboard", web::get().to(handlers::get_leaderboard))
                .route("/{company_id}/rank", web::get().to(handlers::get_company_rank)),
        );
}
