//! End-to-end advert CRUD against a real Postgres database.
//!
//! Every test gets a fresh database with the crate migrations applied. They
//! need `DATABASE_URL` to point at a server that allows creating databases, so
//! they only run with `cargo test -- --ignored`.

mod common;

use axum::http::StatusCode;
use chrono::NaiveDateTime;
use common::{build_test_app, delete, expect_json, get, patch_json, post_json};
use serde_json::{json, Value};
use sqlx::PgPool;

async fn create_advert(pool: &PgPool, body: Value) -> i64 {
    let response = post_json(build_test_app(pool.clone()), "/advert/", body).await;
    let json = expect_json(response, StatusCode::OK).await;
    assert_eq!(json["status"], "success");
    json["id"].as_i64().expect("id should be numeric")
}

async fn count_adverts(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM app_advert")
        .fetch_one(pool)
        .await
        .unwrap()
}

fn sample() -> Value {
    json!({ "title": "T1", "description": "D1", "owner": "O1" })
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn create_then_fetch(pool: PgPool) {
    let id = create_advert(&pool, sample()).await;

    let response = get(build_test_app(pool), &format!("/advert/{id}")).await;
    let json = expect_json(response, StatusCode::OK).await;

    assert_eq!(json["id"], id);
    assert_eq!(json["title"], "T1");
    assert_eq!(json["description"], "D1");
    assert_eq!(json["owner"], "O1");

    let creation_time = json["creation_time"].as_str().unwrap();
    assert!(
        NaiveDateTime::parse_from_str(creation_time, "%Y-%m-%dT%H:%M:%S%.f").is_ok(),
        "creation_time should be ISO-8601, got {creation_time}"
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn duplicate_title_conflicts(pool: PgPool) {
    create_advert(&pool, sample()).await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/advert/",
        json!({ "title": "T1", "description": "other", "owner": "other" }),
    )
    .await;
    let json = expect_json(response, StatusCode::CONFLICT).await;

    assert_eq!(json["status"], "error");
    assert_eq!(json["description"], "advert already exists");
    assert_eq!(count_adverts(&pool).await, 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn fetching_unknown_id_is_not_found(pool: PgPool) {
    let response = get(build_test_app(pool), "/advert/999999").await;
    let json = expect_json(response, StatusCode::NOT_FOUND).await;

    assert_eq!(
        json,
        json!({ "status": "error", "description": "advert not found" })
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn partial_update_only_touches_supplied_fields(pool: PgPool) {
    let id = create_advert(&pool, sample()).await;
    let uri = format!("/advert/{id}");

    let before = expect_json(get(build_test_app(pool.clone()), &uri).await, StatusCode::OK).await;

    for _ in 0..2 {
        let response = patch_json(
            build_test_app(pool.clone()),
            &uri,
            json!({ "description": "D2", "owner": null }),
        )
        .await;
        let json = expect_json(response, StatusCode::OK).await;
        assert_eq!(json, json!({ "status": "success", "id": id }));

        let after = expect_json(get(build_test_app(pool.clone()), &uri).await, StatusCode::OK).await;
        let mut expected = before.clone();
        expected["description"] = json!("D2");
        assert_eq!(after, expected);
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn updating_unknown_id_is_not_found(pool: PgPool) {
    let response = patch_json(build_test_app(pool), "/advert/999999", json!({ "title": "T9" })).await;

    expect_json(response, StatusCode::NOT_FOUND).await;
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn renaming_onto_existing_title_conflicts(pool: PgPool) {
    create_advert(&pool, sample()).await;
    let id = create_advert(
        &pool,
        json!({ "title": "T2", "description": "D2", "owner": "O2" }),
    )
    .await;

    let response = patch_json(
        build_test_app(pool.clone()),
        &format!("/advert/{id}"),
        json!({ "title": "T1" }),
    )
    .await;
    expect_json(response, StatusCode::CONFLICT).await;

    let json = expect_json(
        get(build_test_app(pool), &format!("/advert/{id}")).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(json["title"], "T2");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn deleted_advert_is_gone(pool: PgPool) {
    let id = create_advert(&pool, sample()).await;
    let uri = format!("/advert/{id}");

    let response = delete(build_test_app(pool.clone()), &uri).await;
    let json = expect_json(response, StatusCode::OK).await;
    assert_eq!(json, json!({ "status": "success", "id": id }));

    expect_json(get(build_test_app(pool.clone()), &uri).await, StatusCode::NOT_FOUND).await;
    expect_json(delete(build_test_app(pool), &uri).await, StatusCode::NOT_FOUND).await;
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn invalid_create_persists_nothing(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/advert/",
        json!({ "title": "T1", "description": "D1" }),
    )
    .await;
    expect_json(response, StatusCode::BAD_REQUEST).await;

    assert_eq!(count_adverts(&pool).await, 0);
}
