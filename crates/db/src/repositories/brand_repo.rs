//! Repository for the `brands` table.

use carcatalog_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::brand::{Brand, CreateBrand, UpdateBrand};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for brands.
pub struct BrandRepo;

impl BrandRepo {
    /// Insert a new brand, returning the created row.
    ///
    /// A duplicate name fails with the `uq_brands_name` unique violation.
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        input: &CreateBrand,
    ) -> Result<Brand, sqlx::Error> {
        let query = format!("INSERT INTO brands (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Brand>(&query)
            .bind(&input.name)
            .fetch_one(executor)
            .await
    }

    /// Find a brand by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Brand>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM brands WHERE id = $1");
        sqlx::query_as::<_, Brand>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a brand by exact name.
    pub async fn find_by_name<'e, E: PgExecutor<'e>>(
        executor: E,
        name: &str,
    ) -> Result<Option<Brand>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM brands WHERE name = $1");
        sqlx::query_as::<_, Brand>(&query)
            .bind(name)
            .fetch_optional(executor)
            .await
    }

    pub async fn exists_by_name(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM brands WHERE name = $1)")
            .bind(name)
            .fetch_one(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM brands WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List all brands ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Brand>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM brands ORDER BY name");
        sqlx::query_as::<_, Brand>(&query).fetch_all(pool).await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM brands")
            .fetch_one(pool)
            .await
    }

    /// Replace a brand's name.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBrand,
    ) -> Result<Option<Brand>, sqlx::Error> {
        let query = format!("UPDATE brands SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Brand>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a brand together with its models and their cars.
    ///
    /// All three deletes run in one transaction. Returns `true` if the
    /// brand row was removed.
    pub async fn delete_cascade(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let cars = sqlx::query(
            "DELETE FROM cars WHERE model_id IN (SELECT id FROM car_models WHERE brand_id = $1)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let models = sqlx::query("DELETE FROM car_models WHERE brand_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM brands WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        tracing::debug!(
            brand_id = id,
            models = models.rows_affected(),
            cars = cars.rows_affected(),
            "Brand deleted with dependents",
        );
        Ok(true)
    }
}
