/// Company repository - read-only queries backing comparison, rank window
/// and leaderboard endpoints.
///
/// Ranks are always computed with `ROW_NUMBER() OVER (ORDER BY <column> DESC, id ASC)`
/// across the full `companies` table, so every rank this repository returns is
/// global. The column comes from [`SortField::column`], never from caller text.
use sqlx::PgPool;

use crate::domain::{Page, SortField, SortOrder};
use crate::models::{CompanySummary, RankedCompany, RankedCompanyWithCategories};

const COMPANY_COLUMNS: &str = "c.id, c.name, c.description, c.brand_image, \
     c.actual_investment, c.virtual_investment, c.revenue, \
     c.total_employees, c.selected_count, c.compared_count, \
     c.created_at, c.updated_at";

/// Category names of the row aliased `alias`, as TEXT[] (empty when none)
fn categories_subquery(alias: &str) -> String {
    format!(
        "ARRAY(SELECT cat.name FROM company_categories cc \
         JOIN categories cat ON cat.id = cc.category_id \
         WHERE cc.company_id = {alias}.id ORDER BY cat.name) AS categories"
    )
}

/// CTE named `ranked` holding every company with its rank for `field`
fn ranked_cte(field: SortField) -> String {
    format!(
        "WITH ranked AS ( \
             SELECT {columns}, \
                    ROW_NUMBER() OVER (ORDER BY c.{column} DESC, c.id ASC) AS rank \
             FROM companies c \
         )",
        columns = COMPANY_COLUMNS,
        column = field.column()
    )
}

#[derive(Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Companies listed in `ids`, ordered by `field` in `order` (ties by id)
    pub async fn find_for_comparison(
        &self,
        ids: &[i64],
        field: SortField,
        order: SortOrder,
    ) -> Result<Vec<CompanySummary>, sqlx::Error> {
        let sql = format!(
            "SELECT c.id, c.name, c.description, c.actual_investment, c.revenue, \
                    c.total_employees, {categories} \
             FROM companies c \
             WHERE c.id = ANY($1) \
             ORDER BY c.{column} {direction}, c.id ASC",
            categories = categories_subquery("c"),
            column = field.column(),
            direction = order.as_sql(),
        );

        sqlx::query_as::<_, CompanySummary>(&sql)
            .bind(ids)
            .fetch_all(&self.pool)
            .await
    }

    /// Every company with its rank for `field`, best first
    pub async fn ranked_population(
        &self,
        field: SortField,
    ) -> Result<Vec<RankedCompany>, sqlx::Error> {
        let sql = format!("{} SELECT * FROM ranked ORDER BY rank ASC", ranked_cte(field));

        sqlx::query_as::<_, RankedCompany>(&sql)
            .fetch_all(&self.pool)
            .await
    }

    /// Total number of companies
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM companies")
            .fetch_one(&self.pool)
            .await
    }

    /// Ranks `page.first_rank()..=page.last_rank()`, displayed in `order`
    pub async fn leaderboard_page(
        &self,
        field: SortField,
        order: SortOrder,
        page: Page,
    ) -> Result<Vec<RankedCompany>, sqlx::Error> {
        let sql = format!(
            "{cte} \
             SELECT * FROM ranked \
             WHERE rank BETWEEN $1 AND $2 \
             ORDER BY rank {direction}",
            cte = ranked_cte(field),
            direction = order.as_sql(),
        );

        sqlx::query_as::<_, RankedCompany>(&sql)
            .bind(page.first_rank())
            .bind(page.last_rank())
            .fetch_all(&self.pool)
            .await
    }

    /// Same slice as [`Self::leaderboard_page`] with category labels attached
    pub async fn selections_page(
        &self,
        field: SortField,
        order: SortOrder,
        page: Page,
    ) -> Result<Vec<RankedCompanyWithCategories>, sqlx::Error> {
        let sql = format!(
            "{cte} \
             SELECT r.*, {categories} \
             FROM ranked r \
             WHERE r.rank BETWEEN $1 AND $2 \
             ORDER BY r.rank {direction}",
            cte = ranked_cte(field),
            categories = categories_subquery("r"),
            direction = order.as_sql(),
        );

        sqlx::query_as::<_, RankedCompanyWithCategories>(&sql)
            .bind(page.first_rank())
            .bind(page.last_rank())
            .fetch_all(&self.pool)
            .await
    }
}
