//! Handlers for the `/api/modelos` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use carcatalog_core::types::DbId;
use carcatalog_db::models::car_model::{CarModelDetails, CreateCarModel, UpdateCarModel};

use crate::error::AppResult;
use crate::query::NameQuery;
use crate::services::car_model as service;
use crate::state::AppState;

/// POST /api/modelos
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCarModel>,
) -> AppResult<(StatusCode, Json<CarModelDetails>)> {
    let model = service::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(model)))
}

/// GET /api/modelos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CarModelDetails>>> {
    Ok(Json(service::list(&state.pool).await?))
}

/// GET /api/modelos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CarModelDetails>> {
    Ok(Json(service::get(&state.pool, id).await?))
}

/// GET /api/modelos/marca/{marca_id}
pub async fn list_by_brand(
    State(state): State<AppState>,
    Path(brand_id): Path<DbId>,
) -> AppResult<Json<Vec<CarModelDetails>>> {
    Ok(Json(service::list_by_brand(&state.pool, brand_id).await?))
}

/// GET /api/modelos/buscar?nome=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<NameQuery>,
) -> AppResult<Json<Vec<CarModelDetails>>> {
    Ok(Json(service::search(&state.pool, &params.nome).await?))
}

/// PUT /api/modelos/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCarModel>,
) -> AppResult<Json<CarModelDetails>> {
    Ok(Json(service::update(&state.pool, id, input).await?))
}

/// DELETE /api/modelos/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    service::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
