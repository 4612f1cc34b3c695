//! Prometheus metrics for company-ranking-service.
//!
//! Request counters and latency histograms per route pattern, plus the
//! `/metrics` handler that renders the default registry.

use std::time::{Duration, Instant};

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use actix_web::HttpResponse;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec,
    TextEncoder,
};

lazy_static::lazy_static! {
    static ref REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "company_ranking_requests_total",
        "HTTP requests handled, by route pattern and status code",
        &["endpoint", "status"]
    ).expect("Prometheus metrics registration should succeed at startup");

    static ref REQUEST_DURATION: HistogramVec = register_histogram_vec!(
        "company_ranking_request_duration_seconds",
        "HTTP request latency by route pattern",
        &["endpoint"],
        vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]
    ).expect("Prometheus metrics registration should succeed at startup");
}

pub fn observe_request(endpoint: &str, status: u16, elapsed: Duration) {
    REQUESTS_TOTAL
        .with_label_values(&[endpoint, &status.to_string()])
        .inc();
    REQUEST_DURATION
        .with_label_values(&[endpoint])
        .observe(elapsed.as_secs_f64());
}

/// Middleware (`middleware::from_fn`) recording every request under its route pattern
pub async fn track_requests(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let endpoint = req
        .match_pattern()
        .unwrap_or_else(|| "unmatched".to_string());
    let started = Instant::now();

    let res = next.call(req).await?;
    observe_request(&endpoint, res.status().as_u16(), started.elapsed());

    Ok(res)
}

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}
