/// Company Ranking Service - HTTP Server
///
/// Serves company comparison, rank window and leaderboard endpoints over
/// a shared PostgreSQL pool.
use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use company_ranking_service::config::SERVICE_NAME;
use company_ranking_service::{db, routes, Config};
use db_pool::create_pool;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into());
    let registry = tracing_subscriber::registry().with(filter);

    if std::env::var("LOG_FORMAT").as_deref() == Ok("json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn build_cors(allowed_origins: &str) -> Cors {
    let mut cors = Cors::default();
    for origin in allowed_origins.split(',') {
        let origin = origin.trim();
        if origin == "*" {
            cors = cors.allow_any_origin();
        } else if !origin.is_empty() {
            cors = cors.allowed_origin(origin);
        }
    }
    cors.allow_any_method().allow_any_header().max_age(3600)
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // A missing .env is normal outside local development
    let _ = dotenvy::dotenv();

    init_tracing();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {:#}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting {} v{}", SERVICE_NAME, env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    config.database.log_config();
    let db_pool = match create_pool(config.database.clone()).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database pool creation failed: {:#}", e);
            eprintln!("ERROR: Failed to create database pool: {}", e);
            std::process::exit(1);
        }
    };

    if config.app.run_migrations {
        db::run_migrations(&db_pool).await.map_err(|e| {
            io::Error::new(io::ErrorKind::Other, format!("Database migration failed: {e}"))
        })?;
    }

    let http_bind_address = config.http_bind_address();
    tracing::info!("Starting HTTP server at {}", http_bind_address);

    let db_pool_http = db_pool.clone();
    let allowed_origins = config.cors.allowed_origins.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(db_pool_http.clone()))
            .wrap(build_cors(&allowed_origins))
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(routes::configure)
    })
    .bind(&http_bind_address)?
    .workers(config.app.workers)
    .run();

    // actix-web stops on SIGINT/SIGTERM and drains in-flight requests
    let result = server.await;
    if let Err(e) = &result {
        tracing::error!("HTTP server error: {}", e);
    }

    db_pool.close().await;
    tracing::info!("{} shut down", SERVICE_NAME);

    result
}
