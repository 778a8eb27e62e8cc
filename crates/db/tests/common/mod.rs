//! Shared fixtures for the db integration tests.
#![allow(dead_code)]

use adserve_core::types::Gender;
use adserve_db::models::advertiser::{Advertiser, UpsertAdvertiser};
use adserve_db::models::campaign::{Campaign, CreateCampaign};
use adserve_db::models::client::{Client, UpsertClient};
use adserve_db::repositories::{AdvertiserRepo, CampaignRepo, ClientRepo};
use sqlx::PgPool;
use uuid::Uuid;

pub fn new_client(login: &str, age: i32, gender: Gender, location: &str) -> UpsertClient {
    UpsertClient {
        client_id: Uuid::new_v4(),
        login: login.to_string(),
        age,
        location: location.to_string(),
        gender,
    }
}

pub fn new_advertiser(name: &str) -> UpsertAdvertiser {
    UpsertAdvertiser {
        advertiser_id: Uuid::new_v4(),
        name: name.to_string(),
    }
}

/// A plausible untargeted campaign active on days `start..=end`.
pub fn new_campaign(start: i32, end: i32) -> CreateCampaign {
    CreateCampaign {
        impressions_limit: 100,
        clicks_limit: 50,
        cost_per_impression: 0.01,
        cost_per_click: 0.1,
        ad_title: "Spring sale".to_string(),
        ad_text: "Half off everything".to_string(),
        start_date: start,
        end_date: end,
        targeting: None,
        files: None,
    }
}

pub async fn seed_client(pool: &PgPool, input: UpsertClient) -> Client {
    ClientRepo::upsert_many(pool, &[input])
        .await
        .unwrap()
        .remove(0)
}

pub async fn seed_advertiser(pool: &PgPool, name: &str) -> Advertiser {
    AdvertiserRepo::upsert_many(pool, &[new_advertiser(name)])
        .await
        .unwrap()
        .remove(0)
}

pub async fn seed_campaign(
    pool: &PgPool,
    advertiser_id: Uuid,
    input: &CreateCampaign,
) -> Campaign {
    CampaignRepo::create(pool, advertiser_id, input).await.unwrap()
}
