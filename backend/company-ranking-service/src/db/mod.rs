/// Database access layer
///
/// - Schema migrations bundled from `migrations/`
/// - `CompanyRepository`: read-only queries over companies and categories
pub mod company_repo;

pub use company_repo::CompanyRepository;

use sqlx::PgPool;
use tracing::info;

/// Apply the bundled schema migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations completed successfully");
    Ok(())
}
