//! HTTP-level tests for `/api/modelos`.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_brand, create_car, create_model, delete, get, post_json, put_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_model_embeds_brand_name(pool: PgPool) {
    let brand_id = create_brand(&pool, "Toyota").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/modelos",
        serde_json::json!({"marcaId": brand_id, "nome": "Corolla", "valorFipe": 145000.5}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["nome"], "Corolla");
    assert_eq!(json["marcaId"], brand_id);
    assert_eq!(json["nomeMarca"], "Toyota");
    assert_eq!(json["valorFipe"], 145000.5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_model_with_missing_brand_returns_404_and_writes_nothing(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/modelos",
        serde_json::json!({"marcaId": 999999, "nome": "Ghost", "valorFipe": 1.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Brand with id 999999 not found");

    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/api/modelos").await).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_model_name_returns_409(pool: PgPool) {
    let toyota = create_brand(&pool, "Toyota").await;
    let honda = create_brand(&pool, "Honda").await;
    create_model(&pool, toyota, "Civic").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/modelos",
        serde_json::json!({"marcaId": honda, "nome": "Civic", "valorFipe": 1.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_positive_reference_price_returns_400(pool: PgPool) {
    let brand_id = create_brand(&pool, "Fiat").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/modelos",
        serde_json::json!({"marcaId": brand_id, "nome": "Uno", "valorFipe": 0.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_models_by_brand(pool: PgPool) {
    let fiat = create_brand(&pool, "Fiat").await;
    let ford = create_brand(&pool, "Ford").await;
    create_model(&pool, fiat, "Uno").await;
    create_model(&pool, fiat, "Palio").await;
    create_model(&pool, ford, "Ka").await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/modelos/marca/{fiat}")).await).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["nome"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Palio", "Uno"]);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/modelos/marca/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_models_by_fragment(pool: PgPool) {
    let brand = create_brand(&pool, "Toyota").await;
    create_model(&pool, brand, "Corolla").await;
    create_model(&pool, brand, "Corolla Cross").await;
    create_model(&pool, brand, "Hilux").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/modelos/buscar?nome=corol").await).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_model_moves_it_to_another_brand(pool: PgPool) {
    let fiat = create_brand(&pool, "Fiat").await;
    let ford = create_brand(&pool, "Ford").await;
    let id = create_model(&pool, fiat, "Ka").await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/modelos/{id}"),
        serde_json::json!({"marcaId": ford, "nome": "Ka", "valorFipe": 50000.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["nomeMarca"], "Ford");
    assert_eq!(json["valorFipe"], 50000.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_model_with_missing_brand_returns_404(pool: PgPool) {
    let fiat = create_brand(&pool, "Fiat").await;
    let id = create_model(&pool, fiat, "Uno").await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/modelos/{id}"),
        serde_json::json!({"marcaId": 999999, "nome": "Uno", "valorFipe": 1.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_model_removes_its_cars(pool: PgPool) {
    let brand = create_brand(&pool, "Honda").await;
    let model = create_model(&pool, brand, "Civic").await;
    let car = create_car(&pool, model).await;

    let app = common::build_test_app(pool.clone());
    assert_eq!(
        delete(app, &format!("/api/modelos/{model}")).await.status(),
        StatusCode::NO_CONTENT
    );

    let app = common::build_test_app(pool.clone());
    assert_eq!(
        get(app, &format!("/api/carros/{car}")).await.status(),
        StatusCode::NOT_FOUND
    );
    let app = common::build_test_app(pool);
    assert_eq!(
        get(app, &format!("/api/marcas/{brand}")).await.status(),
        StatusCode::OK
    );
}
