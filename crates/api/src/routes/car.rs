//! Route definitions for the `/carros` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::car;
use crate::state::AppState;

/// Routes mounted at `/carros`.
///
/// ```text
/// GET    /                            -> list
/// POST   /                            -> create
/// GET    /formatado                   -> list_formatted
/// GET    /preco?min=&max=             -> list_by_price_range
/// GET    /existe/{id}                 -> exists
/// GET    /modelo/{modelo_id}          -> list_by_model
/// GET    /marca/{marca_id}            -> list_by_brand
/// GET    /ano/{ano}                   -> list_by_year
/// GET    /combustivel/{combustivel}   -> list_by_fuel
/// GET    /cor/{cor}                   -> list_by_color
/// GET    /{id}                        -> get_by_id
/// PUT    /{id}                        -> update
/// DELETE /{id}                        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(car::list).post(car::create))
        .route("/formatado", get(car::list_formatted))
        .route("/preco", get(car::list_by_price_range))
        .route("/existe/{id}", get(car::exists))
        .route("/modelo/{modelo_id}", get(car::list_by_model))
        .route("/marca/{marca_id}", get(car::list_by_brand))
        .route("/ano/{ano}", get(car::list_by_year))
        .route("/combustivel/{combustivel}", get(car::list_by_fuel))
        .route("/cor/{cor}", get(car::list_by_color))
        .route(
            "/{id}",
            get(car::get_by_id).put(car::update).delete(car::delete),
        )
}
