#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use carcatalog_client::api::CatalogApi;
use carcatalog_client::config::ClientConfig;
use carcatalog_client::wire::{BackendCar, Brand};

// ---------------------------------------------------------------------------
// In-process backend stub
// ---------------------------------------------------------------------------

/// Minimal in-memory stand-in for the catalog backend.
#[derive(Default)]
pub struct Stub {
    pub cars: Mutex<Vec<BackendCar>>,
    pub brands: Mutex<Vec<Brand>>,
    /// Number of `GET /api/marcas` requests served.
    pub brand_list_hits: AtomicUsize,
    next_id: AtomicI64,
}

impl Stub {
    pub fn with_cars(cars: Vec<BackendCar>) -> Arc<Self> {
        let next = cars.iter().map(|c| c.id).max().unwrap_or(999) + 1;
        Arc::new(Self {
            cars: Mutex::new(cars),
            next_id: AtomicI64::new(next),
            ..Self::default()
        })
    }

    pub fn car_ids(&self) -> Vec<i64> {
        self.cars.lock().unwrap().iter().map(|c| c.id).collect()
    }
}

pub fn backend_car(id: i64, model: &str, brand: &str) -> BackendCar {
    BackendCar {
        id,
        model_id: 7,
        model_name: model.to_string(),
        brand_id: 1,
        brand_name: brand.to_string(),
        year: 2020,
        fuel: "FLEX".to_string(),
        doors: 4,
        color: "PRETO".to_string(),
        price: 120_000.0,
        registered_at: 1_696_539_488,
        created_at: None,
        updated_at: None,
    }
}

fn not_found(what: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("{what} not found"), "code": "NOT_FOUND" })),
    )
        .into_response()
}

fn car_from_body(id: i64, body: &Value) -> BackendCar {
    BackendCar {
        id,
        model_id: body["modeloId"].as_i64().unwrap_or(7),
        model_name: body["nomeModelo"].as_str().unwrap_or_default().to_string(),
        brand_id: 1,
        brand_name: body["nomeMarca"].as_str().unwrap_or_default().to_string(),
        year: body["ano"].as_i64().unwrap_or_default() as i32,
        fuel: body["combustivel"].as_str().unwrap_or_default().to_string(),
        doors: body["numPortas"].as_i64().unwrap_or_default() as i32,
        color: body["cor"].as_str().unwrap_or_default().to_string(),
        price: body["valor"].as_f64().unwrap_or_default(),
        registered_at: 1_696_539_488,
        created_at: None,
        updated_at: None,
    }
}

async fn list_cars(State(stub): State<Arc<Stub>>) -> Json<Vec<BackendCar>> {
    Json(stub.cars.lock().unwrap().clone())
}

async fn get_car(State(stub): State<Arc<Stub>>, Path(id): Path<i64>) -> Response {
    let car = stub.cars.lock().unwrap().iter().find(|c| c.id == id).cloned();
    match car {
        Some(car) => Json(car).into_response(),
        None => not_found("Car"),
    }
}

async fn create_car(State(stub): State<Arc<Stub>>, Json(body): Json<Value>) -> Response {
    let id = stub.next_id.fetch_add(1, Ordering::SeqCst);
    let car = car_from_body(id, &body);
    stub.cars.lock().unwrap().push(car.clone());
    (StatusCode::CREATED, Json(car)).into_response()
}

async fn update_car(
    State(stub): State<Arc<Stub>>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let mut cars = stub.cars.lock().unwrap();
    let Some(index) = cars.iter().position(|c| c.id == id) else {
        return not_found("Car");
    };
    let mut updated = car_from_body(id, &body);
    // Like the backend, a model id takes precedence over the names.
    if let Some(model_id) = body["modeloId"].as_i64() {
        if let Some(owner) = cars.iter().find(|c| c.model_id == model_id) {
            updated.model_name = owner.model_name.clone();
            updated.brand_name = owner.brand_name.clone();
        }
    }
    cars[index] = updated.clone();
    Json(updated).into_response()
}

async fn delete_car(State(stub): State<Arc<Stub>>, Path(id): Path<i64>) -> Response {
    let mut cars = stub.cars.lock().unwrap();
    let before = cars.len();
    cars.retain(|c| c.id != id);
    if cars.len() == before {
        return not_found("Car");
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn list_brands(State(stub): State<Arc<Stub>>) -> Json<Vec<Brand>> {
    stub.brand_list_hits.fetch_add(1, Ordering::SeqCst);
    Json(stub.brands.lock().unwrap().clone())
}

async fn create_brand(State(stub): State<Arc<Stub>>, Json(body): Json<Value>) -> Response {
    let mut brands = stub.brands.lock().unwrap();
    let name = body["nomeMarca"].as_str().unwrap_or_default().to_string();
    if brands.iter().any(|b| b.name == name) {
        let message = format!("Brand '{name}' already exists");
        return (
            StatusCode::CONFLICT,
            Json(json!({ "error": message, "code": "CONFLICT" })),
        )
            .into_response();
    }
    let brand = Brand {
        id: brands.len() as i64 + 1,
        name,
        created_at: None,
        updated_at: None,
    };
    brands.push(brand.clone());
    (StatusCode::CREATED, Json(brand)).into_response()
}

async fn find_brand(
    State(stub): State<Arc<Stub>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let name = params.get("nome").cloned().unwrap_or_default();
    let brand = stub
        .brands
        .lock()
        .unwrap()
        .iter()
        .find(|b| b.name == name)
        .cloned();
    match brand {
        Some(brand) => Json(brand).into_response(),
        None => not_found("Brand"),
    }
}

pub fn stub_router(stub: Arc<Stub>) -> Router {
    Router::new()
        .route("/api/carros", get(list_cars).post(create_car))
        .route(
            "/api/carros/{id}",
            get(get_car).put(update_car).delete(delete_car),
        )
        .route("/api/marcas", get(list_brands).post(create_brand))
        .route("/api/marcas/buscar", get(find_brand))
        .with_state(stub)
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Base URL of a port nothing listens on.
pub async fn dead_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn client(base_url: &str) -> CatalogApi {
    CatalogApi::new(&ClientConfig::for_backend(base_url))
}
