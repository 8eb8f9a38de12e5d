//! REST client for the catalog backend.
//!
//! One method per endpoint. Brand and model listings are served from a
//! [`TtlCache`]; every write through this client clears both caches, since
//! creating a car by name can create brands and models implicitly.

use std::sync::Arc;

use carcatalog_core::types::DbId;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cache::{Clock, SystemClock, TtlCache};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::retry::RetryPolicy;
use crate::wire::{
    BackendCar, Brand, BrandPayload, CarPayload, LegacyCar, LegacyCarList, Model, ModelPayload,
};

/// Cache key for model listings: all models, or the models of one brand.
type ModelScope = Option<DbId>;

/// HTTP client for the catalog backend.
pub struct CatalogApi {
    client: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
    brands: TtlCache<(), Vec<Brand>>,
    models: TtlCache<ModelScope, Vec<Model>>,
}

impl CatalogApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Build a client whose caches read time from `clock`.
    pub fn with_clock(config: &ClientConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.backend_url.trim_end_matches('/').to_string(),
            retry: RetryPolicy::with_max_retries(config.max_retries),
            brands: TtlCache::new(config.cache_ttl, Arc::clone(&clock)),
            models: TtlCache::new(config.cache_ttl, clock),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Drop cached brand and model listings.
    pub fn clear_cache(&self) {
        self.brands.clear();
        self.models.clear();
    }

    // ---- cars ----

    /// GET /api/carros
    pub async fn list_cars(&self) -> Result<Vec<BackendCar>, ClientError> {
        self.get_json("/api/carros").await
    }

    /// GET /api/carros/{id}
    pub async fn get_car(&self, id: DbId) -> Result<BackendCar, ClientError> {
        self.get_json(&format!("/api/carros/{id}")).await
    }

    /// GET /api/carros/modelo/{model_id}
    pub async fn cars_by_model(&self, model_id: DbId) -> Result<Vec<BackendCar>, ClientError> {
        self.get_json(&format!("/api/carros/modelo/{model_id}")).await
    }

    /// GET /api/carros/marca/{brand_id}
    pub async fn cars_by_brand(&self, brand_id: DbId) -> Result<Vec<BackendCar>, ClientError> {
        self.get_json(&format!("/api/carros/marca/{brand_id}")).await
    }

    /// GET /cars.json
    pub async fn legacy_cars(&self) -> Result<Vec<LegacyCar>, ClientError> {
        let list: LegacyCarList = self.get_json("/cars.json").await?;
        Ok(list.cars)
    }

    /// Best-effort existence probe: any failure, including a network
    /// error, reads as "does not exist".
    pub async fn car_exists(&self, id: DbId) -> bool {
        match self.get_car(id).await {
            Ok(_) => true,
            Err(err) => {
                tracing::debug!(car_id = id, error = %err, "Car existence check failed");
                false
            }
        }
    }

    /// POST /api/carros
    pub async fn create_car(&self, payload: &CarPayload) -> Result<BackendCar, ClientError> {
        let car = self.send_json(reqwest::Method::POST, "/api/carros", payload).await?;
        self.clear_cache();
        Ok(car)
    }

    /// PUT /api/carros/{id}
    pub async fn update_car(
        &self,
        id: DbId,
        payload: &CarPayload,
    ) -> Result<BackendCar, ClientError> {
        let path = format!("/api/carros/{id}");
        let car = self.send_json(reqwest::Method::PUT, &path, payload).await?;
        self.clear_cache();
        Ok(car)
    }

    /// DELETE /api/carros/{id}
    pub async fn delete_car(&self, id: DbId) -> Result<(), ClientError> {
        self.delete(&format!("/api/carros/{id}")).await
    }

    // ---- brands ----

    /// GET /api/marcas, cached.
    pub async fn list_brands(&self) -> Result<Vec<Brand>, ClientError> {
        if let Some(brands) = self.brands.get(&()) {
            return Ok(brands);
        }
        let brands: Vec<Brand> = self.get_json("/api/marcas").await?;
        self.brands.insert((), brands.clone());
        Ok(brands)
    }

    /// GET /api/marcas/{id}
    pub async fn get_brand(&self, id: DbId) -> Result<Brand, ClientError> {
        self.get_json(&format!("/api/marcas/{id}")).await
    }

    /// GET /api/marcas/buscar?nome=
    pub async fn find_brand(&self, name: &str) -> Result<Brand, ClientError> {
        let url = &format!("{}/api/marcas/buscar", self.base_url);
        self.retry
            .run("find_brand", move || async move {
                let response = self.client.get(url).query(&[("nome", name)]).send().await?;
                Self::parse_response(response).await
            })
            .await
    }

    /// POST /api/marcas
    pub async fn create_brand(&self, name: &str) -> Result<Brand, ClientError> {
        let payload = BrandPayload {
            name: name.to_string(),
        };
        let brand = self.send_json(reqwest::Method::POST, "/api/marcas", &payload).await?;
        self.clear_cache();
        Ok(brand)
    }

    /// PUT /api/marcas/{id}
    pub async fn update_brand(&self, id: DbId, name: &str) -> Result<Brand, ClientError> {
        let payload = BrandPayload {
            name: name.to_string(),
        };
        let path = format!("/api/marcas/{id}");
        let brand = self.send_json(reqwest::Method::PUT, &path, &payload).await?;
        self.clear_cache();
        Ok(brand)
    }

    /// DELETE /api/marcas/{id}. Also removes the brand's models and cars.
    pub async fn delete_brand(&self, id: DbId) -> Result<(), ClientError> {
        self.delete(&format!("/api/marcas/{id}")).await
    }

    // ---- models ----

    /// GET /api/modelos, cached.
    pub async fn list_models(&self) -> Result<Vec<Model>, ClientError> {
        self.cached_models(None, "/api/modelos".to_string()).await
    }

    /// GET /api/modelos/marca/{brand_id}, cached per brand.
    pub async fn models_by_brand(&self, brand_id: DbId) -> Result<Vec<Model>, ClientError> {
        self.cached_models(Some(brand_id), format!("/api/modelos/marca/{brand_id}"))
            .await
    }

    /// GET /api/modelos/{id}
    pub async fn get_model(&self, id: DbId) -> Result<Model, ClientError> {
        self.get_json(&format!("/api/modelos/{id}")).await
    }

    /// GET /api/modelos/buscar?nome=
    pub async fn search_models(&self, fragment: &str) -> Result<Vec<Model>, ClientError> {
        let url = &format!("{}/api/modelos/buscar", self.base_url);
        self.retry
            .run("search_models", move || async move {
                let response = self
                    .client
                    .get(url)
                    .query(&[("nome", fragment)])
                    .send()
                    .await?;
                Self::parse_response(response).await
            })
            .await
    }

    /// POST /api/modelos
    pub async fn create_model(&self, payload: &ModelPayload) -> Result<Model, ClientError> {
        let model = self.send_json(reqwest::Method::POST, "/api/modelos", payload).await?;
        self.clear_cache();
        Ok(model)
    }

    /// PUT /api/modelos/{id}
    pub async fn update_model(
        &self,
        id: DbId,
        payload: &ModelPayload,
    ) -> Result<Model, ClientError> {
        let path = format!("/api/modelos/{id}");
        let model = self.send_json(reqwest::Method::PUT, &path, payload).await?;
        self.clear_cache();
        Ok(model)
    }

    /// DELETE /api/modelos/{id}. Also removes the model's cars.
    pub async fn delete_model(&self, id: DbId) -> Result<(), ClientError> {
        self.delete(&format!("/api/modelos/{id}")).await
    }

    // ---- private helpers ----

    async fn cached_models(
        &self,
        scope: ModelScope,
        path: String,
    ) -> Result<Vec<Model>, ClientError> {
        if let Some(models) = self.models.get(&scope) {
            return Ok(models);
        }
        let models: Vec<Model> = self.get_json(&path).await?;
        self.models.insert(scope, models.clone());
        Ok(models)
    }

    /// GET `path` and decode the JSON body, retrying per [`RetryPolicy`].
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = &format!("{}{path}", self.base_url);
        self.retry
            .run(path, move || async move {
                let response = self.client.get(url).send().await?;
                Self::parse_response(response).await
            })
            .await
    }

    /// Send a JSON body with a non-idempotent or replacing method. Never retried.
    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self
            .client
            .request(method, format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(format!("{}{path}", self.base_url))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        self.clear_cache();
        Ok(())
    }

    /// Return the response unchanged on a 2xx status, or a
    /// [`ClientError::Api`] carrying the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Decode a successful JSON response body into the expected type.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
