pub mod brand;
pub mod car;
pub mod car_model;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /carros                          list, create
/// /carros/{id}                     get, update, delete
/// /carros/modelo/{modelo_id}       cars of a model
/// /carros/marca/{marca_id}         cars of a brand
/// /carros/ano/{ano}                cars of a year
/// /carros/combustivel/{fuel}       cars by fuel
/// /carros/cor/{cor}                cars by color
/// /carros/preco?min=&max=          cars by price range
/// /carros/formatado                legacy listing
/// /carros/existe/{id}              existence probe
///
/// /marcas                          list, create
/// /marcas/buscar?nome=             find by name
/// /marcas/{id}                     get, update, delete (cascade)
///
/// /modelos                         list, create
/// /modelos/buscar?nome=            substring search
/// /modelos/marca/{marca_id}        models of a brand
/// /modelos/{id}                    get, update, delete (cascade)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/carros", car::router())
        .nest("/marcas", brand::router())
        .nest("/modelos", car_model::router())
}

/// Root-level legacy listing, served outside `/api`.
pub fn legacy_routes() -> Router<AppState> {
    Router::new().route("/cars.json", get(handlers::car::list_formatted))
}
