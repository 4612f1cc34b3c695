/// Health check handlers
use std::collections::HashMap;
use std::time::Instant;

use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Serialize;
use sqlx::PgPool;

use crate::config::SERVICE_NAME;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Healthy,
    Unhealthy,
}

#[derive(Serialize)]
pub struct ComponentCheck {
    status: ComponentStatus,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    latency_ms: Option<u64>,
}

#[derive(Serialize)]
pub struct ReadinessResponse {
    ready: bool,
    status: ComponentStatus,
    checks: HashMap<String, ComponentCheck>,
    timestamp: String,
}

async fn check_postgres(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

pub async fn health_summary(pool: web::Data<PgPool>) -> HttpResponse {
    match check_postgres(pool.get_ref()).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": SERVICE_NAME,
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("PostgreSQL connection failed: {}", e),
            "service": SERVICE_NAME
        })),
    }
}

pub async fn readiness_summary(pool: web::Data<PgPool>) -> HttpResponse {
    let start = Instant::now();
    let pg_result = check_postgres(pool.get_ref()).await;
    let latency_ms = Some(start.elapsed().as_millis() as u64);

    let (ready, postgres_check) = match pg_result {
        Ok(_) => (
            true,
            ComponentCheck {
                status: ComponentStatus::Healthy,
                message: format!(
                    "PostgreSQL connection successful ({} open, {} idle)",
                    pool.size(),
                    pool.num_idle()
                ),
                latency_ms,
            },
        ),
        Err(e) => (
            false,
            ComponentCheck {
                status: ComponentStatus::Unhealthy,
                message: format!("PostgreSQL connection failed: {}", e),
                latency_ms,
            },
        ),
    };

    let mut checks = HashMap::new();
    checks.insert("postgresql".to_string(), postgres_check);

    let response = ReadinessResponse {
        ready,
        status: if ready {
            ComponentStatus::Healthy
        } else {
            ComponentStatus::Unhealthy
        },
        checks,
        timestamp: Utc::now().to_rfc3339(),
    };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

pub async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"alive": true}))
}
