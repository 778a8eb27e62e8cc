//! HTTP-level integration tests for ad delivery: selection, impression
//! charging, and the click endpoint.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, campaign_payload, get, post_json, seed_advertiser, seed_campaign, seed_client,
    set_day,
};
use sqlx::PgPool;
use uuid::Uuid;

#[sqlx::test(migrations = "../../db/migrations")]
async fn select_ad_returns_winner_projection(pool: PgPool) {
    let client_id = seed_client(&pool, "dima", 25, "MALE", "Moscow").await;
    let advertiser_id = seed_advertiser(&pool, "Acme").await;
    let campaign_id = seed_campaign(&pool, &advertiser_id, campaign_payload(1, 10)).await;
    set_day(&pool, 1).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/ads?client_id={client_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["ad_id"], campaign_id);
    assert_eq!(json["advertiser_id"], advertiser_id);
    assert_eq!(json["ad_title"], "Spring sale");
    assert_eq!(json["ad_text"], "Half off everything");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn repeat_selection_charges_impression_once(pool: PgPool) {
    let client_id = seed_client(&pool, "dima", 25, "MALE", "Moscow").await;
    let advertiser_id = seed_advertiser(&pool, "Acme").await;
    let campaign_id = seed_campaign(&pool, &advertiser_id, campaign_payload(1, 10)).await;
    set_day(&pool, 1).await;

    for _ in 0..3 {
        let app = common::build_test_app(pool.clone());
        let response = get(app, &format!("/api/v1/ads?client_id={client_id}")).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/stats/campaigns/{campaign_id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["impressions_count"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn select_ad_without_clock_returns_404(pool: PgPool) {
    let client_id = seed_client(&pool, "dima", 25, "MALE", "Moscow").await;
    let advertiser_id = seed_advertiser(&pool, "Acme").await;
    seed_campaign(&pool, &advertiser_id, campaign_payload(1, 10)).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/ads?client_id={client_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn select_ad_with_no_eligible_campaigns_returns_404(pool: PgPool) {
    let client_id = seed_client(&pool, "dima", 25, "MALE", "Moscow").await;
    let advertiser_id = seed_advertiser(&pool, "Acme").await;
    // Active on days 5..=10 only.
    seed_campaign(&pool, &advertiser_id, campaign_payload(5, 10)).await;
    set_day(&pool, 1).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/ads?client_id={client_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn select_ad_for_unknown_client_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/ads?client_id={}", Uuid::new_v4())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn click_after_impression_is_recorded_once(pool: PgPool) {
    let client_id = seed_client(&pool, "dima", 25, "MALE", "Moscow").await;
    let advertiser_id = seed_advertiser(&pool, "Acme").await;
    let campaign_id = seed_campaign(&pool, &advertiser_id, campaign_payload(1, 10)).await;
    set_day(&pool, 1).await;

    // Serve once to establish the impression.
    let app = common::build_test_app(pool.clone());
    get(app, &format!("/api/v1/ads?client_id={client_id}")).await;

    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            &format!("/api/v1/ads/{campaign_id}/click"),
            serde_json::json!({ "client_id": client_id }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/stats/campaigns/{campaign_id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["clicks_count"], 1);
    assert_eq!(json["conversion"], 100.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn click_without_impression_is_silently_ignored(pool: PgPool) {
    let client_id = seed_client(&pool, "dima", 25, "MALE", "Moscow").await;
    let advertiser_id = seed_advertiser(&pool, "Acme").await;
    let campaign_id = seed_campaign(&pool, &advertiser_id, campaign_payload(1, 10)).await;
    set_day(&pool, 1).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/ads/{campaign_id}/click"),
        serde_json::json!({ "client_id": client_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/stats/campaigns/{campaign_id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["clicks_count"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn click_on_unknown_campaign_is_a_no_op(pool: PgPool) {
    let client_id = seed_client(&pool, "dima", 25, "MALE", "Moscow").await;
    set_day(&pool, 1).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/ads/{}/click", Uuid::new_v4()),
        serde_json::json!({ "client_id": client_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn click_by_unknown_client_returns_404(pool: PgPool) {
    let advertiser_id = seed_advertiser(&pool, "Acme").await;
    let campaign_id = seed_campaign(&pool, &advertiser_id, campaign_payload(1, 10)).await;
    set_day(&pool, 1).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/ads/{campaign_id}/click"),
        serde_json::json!({ "client_id": Uuid::new_v4() }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn targeted_campaign_skips_mismatched_client(pool: PgPool) {
    let client_id = seed_client(&pool, "dima", 25, "MALE", "Moscow").await;
    let advertiser_id = seed_advertiser(&pool, "Acme").await;

    let mut payload = campaign_payload(1, 10);
    payload["targeting"] = serde_json::json!({ "gender": "FEMALE" });
    seed_campaign(&pool, &advertiser_id, payload).await;
    set_day(&pool, 1).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/ads?client_id={client_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn ml_score_for_unknown_pair_returns_404(pool: PgPool) {
    let client_id = seed_client(&pool, "dima", 25, "MALE", "Moscow").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/ml-scores",
        serde_json::json!({
            "client_id": client_id,
            "advertiser_id": Uuid::new_v4(),
            "score": 1.0,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn relevance_score_steers_selection(pool: PgPool) {
    let client_id = seed_client(&pool, "dima", 25, "MALE", "Moscow").await;
    let plain = seed_advertiser(&pool, "Plain").await;
    let relevant = seed_advertiser(&pool, "Relevant").await;

    seed_campaign(&pool, &plain, campaign_payload(1, 10)).await;
    let favored = seed_campaign(&pool, &relevant, campaign_payload(1, 10)).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/ml-scores",
        serde_json::json!({
            "client_id": client_id,
            "advertiser_id": relevant,
            "score": 5.0,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    set_day(&pool, 1).await;
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/ads?client_id={client_id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["ad_id"], favored);
}
