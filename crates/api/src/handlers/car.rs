//! Handlers for the `/api/carros` resource and the legacy `/cars.json` listing.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use carcatalog_core::types::DbId;
use carcatalog_db::models::car::{CarDetails, CreateCar, FormattedCarList, UpdateCar};

use crate::error::AppResult;
use crate::query::PriceRangeQuery;
use crate::services::car as service;
use crate::state::AppState;

/// POST /api/carros
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCar>,
) -> AppResult<(StatusCode, Json<CarDetails>)> {
    let car = service::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(car)))
}

/// GET /api/carros
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CarDetails>>> {
    Ok(Json(service::list(&state.pool).await?))
}

/// GET /api/carros/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CarDetails>> {
    Ok(Json(service::get(&state.pool, id).await?))
}

/// GET /api/carros/existe/{id}
pub async fn exists(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Json<bool>> {
    Ok(Json(service::exists(&state.pool, id).await?))
}

/// GET /api/carros/modelo/{modelo_id}
pub async fn list_by_model(
    State(state): State<AppState>,
    Path(model_id): Path<DbId>,
) -> AppResult<Json<Vec<CarDetails>>> {
    Ok(Json(service::list_by_model(&state.pool, model_id).await?))
}

/// GET /api/carros/marca/{marca_id}
pub async fn list_by_brand(
    State(state): State<AppState>,
    Path(brand_id): Path<DbId>,
) -> AppResult<Json<Vec<CarDetails>>> {
    Ok(Json(service::list_by_brand(&state.pool, brand_id).await?))
}

/// GET /api/carros/ano/{ano}
pub async fn list_by_year(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> AppResult<Json<Vec<CarDetails>>> {
    Ok(Json(service::list_by_year(&state.pool, year).await?))
}

/// GET /api/carros/combustivel/{combustivel}
pub async fn list_by_fuel(
    State(state): State<AppState>,
    Path(fuel): Path<String>,
) -> AppResult<Json<Vec<CarDetails>>> {
    Ok(Json(service::list_by_fuel(&state.pool, &fuel).await?))
}

/// GET /api/carros/cor/{cor}
pub async fn list_by_color(
    State(state): State<AppState>,
    Path(color): Path<String>,
) -> AppResult<Json<Vec<CarDetails>>> {
    Ok(Json(service::list_by_color(&state.pool, &color).await?))
}

/// GET /api/carros/preco?min=&max=
pub async fn list_by_price_range(
    State(state): State<AppState>,
    Query(range): Query<PriceRangeQuery>,
) -> AppResult<Json<Vec<CarDetails>>> {
    let cars = service::list_by_price_range(&state.pool, range.min, range.max).await?;
    Ok(Json(cars))
}

/// GET /api/carros/formatado and GET /cars.json
pub async fn list_formatted(State(state): State<AppState>) -> AppResult<Json<FormattedCarList>> {
    Ok(Json(service::list_formatted(&state.pool).await?))
}

/// PUT /api/carros/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCar>,
) -> AppResult<Json<CarDetails>> {
    Ok(Json(service::update(&state.pool, id, input).await?))
}

/// DELETE /api/carros/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    service::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
