//! Car operations.
//!
//! A car references its model either by `modeloId` or by the pair
//! `nomeModelo` + `nomeMarca`. Name references are resolved find-or-create
//! inside the same transaction as the car write, so a failed insert leaves
//! no orphan brand or model behind.

use carcatalog_core::error::CoreError;
use carcatalog_core::fuel::FuelType;
use carcatalog_core::types::{now_unix, DbId, UnixSeconds};
use carcatalog_core::validation::normalize_name;
use carcatalog_db::models::brand::CreateBrand;
use carcatalog_db::models::car::{
    CarDetails, CarValues, CreateCar, FormattedCar, FormattedCarList, UpdateCar,
};
use carcatalog_db::repositories::{BrandRepo, CarModelRepo, CarRepo};
use carcatalog_db::DbPool;
use sqlx::PgConnection;
use validator::Validate;

use crate::error::AppResult;

const ENTITY: &str = "Car";

pub async fn list(pool: &DbPool) -> AppResult<Vec<CarDetails>> {
    Ok(CarRepo::list(pool).await?)
}

pub async fn get(pool: &DbPool, id: DbId) -> AppResult<CarDetails> {
    let car = CarRepo::find_details_by_id(pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
    Ok(car)
}

pub async fn exists(pool: &DbPool, id: DbId) -> AppResult<bool> {
    Ok(CarRepo::exists(pool, id).await?)
}

pub async fn list_by_model(pool: &DbPool, model_id: DbId) -> AppResult<Vec<CarDetails>> {
    Ok(CarRepo::list_by_model(pool, model_id).await?)
}

pub async fn list_by_brand(pool: &DbPool, brand_id: DbId) -> AppResult<Vec<CarDetails>> {
    Ok(CarRepo::list_by_brand(pool, brand_id).await?)
}

pub async fn list_by_year(pool: &DbPool, year: i32) -> AppResult<Vec<CarDetails>> {
    Ok(CarRepo::list_by_year(pool, year).await?)
}

/// Fuel is matched case-insensitively; unknown fuels are a validation error.
pub async fn list_by_fuel(pool: &DbPool, fuel: &str) -> AppResult<Vec<CarDetails>> {
    let fuel = parse_fuel(fuel)?;
    Ok(CarRepo::list_by_fuel(pool, fuel.as_str()).await?)
}

pub async fn list_by_color(pool: &DbPool, color: &str) -> AppResult<Vec<CarDetails>> {
    Ok(CarRepo::list_by_color(pool, color.trim()).await?)
}

/// Cars priced within `[min, max]`.
pub async fn list_by_price_range(pool: &DbPool, min: f64, max: f64) -> AppResult<Vec<CarDetails>> {
    if !(min.is_finite() && max.is_finite()) || min < 0.0 || min > max {
        return Err(CoreError::Validation(format!(
            "Invalid price range: min {min}, max {max}"
        ))
        .into());
    }
    Ok(CarRepo::list_by_price_range(pool, min, max).await?)
}

/// Every car in the legacy `{ "cars": [...] }` shape.
pub async fn list_formatted(pool: &DbPool) -> AppResult<FormattedCarList> {
    let cars = CarRepo::list(pool)
        .await?
        .into_iter()
        .map(FormattedCar::from)
        .collect();
    Ok(FormattedCarList { cars })
}

/// Create a car. `timestampCadastro` defaults to now.
pub async fn create(pool: &DbPool, input: CreateCar) -> AppResult<CarDetails> {
    input.validate()?;
    let registered_at = input.registered_at.unwrap_or_else(now_unix);

    let mut tx = pool.begin().await?;
    let model_id = resolve_model(&mut *tx, &input).await?;
    let values = column_values(&input, model_id, registered_at)?;
    let id = CarRepo::create(&mut *tx, &values).await?;
    tx.commit().await?;

    tracing::info!(car_id = id, model_id, "Car created");
    get(pool, id).await
}

/// Replace every mutable field of a car and re-resolve its model.
///
/// The stored registration time is kept unless a new one is sent.
pub async fn update(pool: &DbPool, id: DbId, input: UpdateCar) -> AppResult<CarDetails> {
    input.validate()?;
    let existing = get(pool, id).await?;
    let registered_at = input.registered_at.unwrap_or(existing.registered_at);

    let mut tx = pool.begin().await?;
    let model_id = resolve_model(&mut *tx, &input).await?;
    let values = column_values(&input, model_id, registered_at)?;
    if !CarRepo::update(&mut *tx, id, &values).await? {
        return Err(CoreError::NotFound { entity: ENTITY, id }.into());
    }
    tx.commit().await?;

    tracing::info!(car_id = id, model_id, "Car updated");
    get(pool, id).await
}

pub async fn delete(pool: &DbPool, id: DbId) -> AppResult<()> {
    if !CarRepo::delete(pool, id).await? {
        return Err(CoreError::NotFound { entity: ENTITY, id }.into());
    }
    tracing::info!(car_id = id, "Car deleted");
    Ok(())
}

/// Resolve the model a car points at.
///
/// `modeloId` wins when present. Otherwise both names are required: the
/// brand and model are reused when they exist and created when they don't.
/// A model name already registered under another brand is a conflict.
async fn resolve_model(conn: &mut PgConnection, input: &CreateCar) -> AppResult<DbId> {
    if let Some(model_id) = input.model_id {
        let model = CarModelRepo::find_by_id(&mut *conn, model_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Model",
                id: model_id,
            })?;
        return Ok(model.id);
    }

    let (model_name, brand_name) = match (&input.model_name, &input.brand_name) {
        (Some(model), Some(brand)) => (
            normalize_name(model).map_err(CoreError::Validation)?,
            normalize_name(brand).map_err(CoreError::Validation)?,
        ),
        _ => {
            return Err(CoreError::Validation(
                "Either modeloId or both nomeModelo and nomeMarca are required".into(),
            )
            .into())
        }
    };

    let brand = match BrandRepo::find_by_name(&mut *conn, &brand_name).await? {
        Some(brand) => brand,
        None => {
            let brand = BrandRepo::create(&mut *conn, &CreateBrand { name: brand_name }).await?;
            tracing::info!(brand_id = brand.id, name = %brand.name, "Brand created implicitly");
            brand
        }
    };

    match CarModelRepo::find_by_name(&mut *conn, &model_name).await? {
        Some(model) if model.brand_id == brand.id => Ok(model.id),
        Some(_) => Err(CoreError::Conflict(format!(
            "Model '{model_name}' belongs to a brand other than '{}'",
            brand.name
        ))
        .into()),
        None => {
            let model = CarModelRepo::create_named(&mut *conn, brand.id, &model_name).await?;
            tracing::info!(model_id = model.id, brand_id = brand.id, "Model created implicitly");
            Ok(model.id)
        }
    }
}

fn column_values(
    input: &CreateCar,
    model_id: DbId,
    registered_at: UnixSeconds,
) -> AppResult<CarValues> {
    Ok(CarValues {
        model_id,
        registered_at,
        year: input.year,
        fuel: parse_fuel(&input.fuel)?.as_str().to_string(),
        doors: input.doors,
        color: input.color.trim().to_string(),
        price: input.price,
    })
}

fn parse_fuel(raw: &str) -> AppResult<FuelType> {
    raw.parse::<FuelType>()
        .map_err(|e| CoreError::Validation(e.to_string()).into())
}
