//! Default catalog data inserted on first start.

use crate::DbPool;

/// Brands created when the catalog is empty.
pub const DEFAULT_BRANDS: &[&str] = &[
    "Toyota",
    "Chevrolet",
    "Volkswagen",
    "Ford",
    "Honda",
    "Fiat",
    "Hyundai",
    "BMW",
    "Mercedes-Benz",
    "Audi",
];

/// `(brand, model)` pairs created alongside [`DEFAULT_BRANDS`].
pub const DEFAULT_MODELS: &[(&str, &str)] = &[
    ("Toyota", "Corolla"),
    ("Toyota", "Camry"),
    ("Chevrolet", "Onix"),
    ("Chevrolet", "Cruze"),
    ("Volkswagen", "Golf"),
    ("Volkswagen", "Jetta"),
    ("Ford", "Focus"),
    ("Ford", "Fiesta"),
    ("Honda", "Civic"),
    ("Honda", "Accord"),
];

/// Insert the default brands and models if no brand exists yet.
///
/// Returns `true` when data was inserted. Runs in one transaction so a
/// partially seeded catalog is never visible.
pub async fn seed_if_empty(pool: &DbPool) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM brands")
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        tx.rollback().await?;
        return Ok(false);
    }

    for name in DEFAULT_BRANDS {
        sqlx::query("INSERT INTO brands (name) VALUES ($1)")
            .bind(name)
            .execute(&mut *tx)
            .await?;
    }

    for (brand, model) in DEFAULT_MODELS {
        sqlx::query(
            "INSERT INTO car_models (brand_id, name)
             SELECT id, $2 FROM brands WHERE name = $1",
        )
        .bind(brand)
        .bind(model)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!(
        brands = DEFAULT_BRANDS.len(),
        models = DEFAULT_MODELS.len(),
        "Seeded default catalog",
    );
    Ok(true)
}
