//! End-to-end API tests over the in-memory store

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use domain_party::PartyPort;
use infra_store::InMemoryStore;
use interface_api::{config::ApiConfig, create_router, seed::seed_demo_parties, AppState};
use test_utils::fixtures;

struct TestApi {
    server: TestServer,
    customer_id: String,
    agent_id: String,
}

async fn test_api() -> TestApi {
    let store = Arc::new(InMemoryStore::new());
    seed_demo_parties(store.as_ref()).await.unwrap();

    let customer_id = store
        .find_by_email("customer@mercury.com")
        .await
        .unwrap()
        .unwrap()
        .id
        .as_uuid()
        .to_string();
    let agent_id = store
        .find_by_email("agent@mercury.com")
        .await
        .unwrap()
        .unwrap()
        .id
        .as_uuid()
        .to_string();

    let state = AppState::with_clock(
        store,
        ApiConfig::default(),
        Arc::new(fixtures::fixed_clock()),
    );
    TestApi {
        server: TestServer::new(create_router(state)).unwrap(),
        customer_id,
        agent_id,
    }
}

async fn generate_quote(api: &TestApi) -> Value {
    let response = api
        .server
        .post("/api/quotes/generate")
        .json(&json!({
            "customer_id": api.customer_id,
            "make": "Toyota",
            "model": "Corolla",
            "year": 2010,
            "vin": "5YJ3E1EA7KF317000",
            "driver_age": 24
        }))
        .await;
    response.assert_status_ok();
    response.json::<Value>()
}

#[tokio::test]
async fn health_endpoint_answers() {
    let api = test_api().await;
    let response = api.server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn quote_generation_rates_the_risk() {
    let api = test_api().await;
    let quote = generate_quote(&api).await;

    assert_eq!(quote["status"], "GENERATED");
    assert_eq!(quote["premium_amount"], "4050.00");
    assert_eq!(quote["coverage_details"], "Standard auto coverage");
    assert!(quote["quote_number"]
        .as_str()
        .unwrap()
        .starts_with("MER-QUO-"));
}

#[tokio::test]
async fn quote_lookup_for_an_unknown_id_is_404() {
    let api = test_api().await;
    let response = api
        .server
        .get("/api/quotes/00000000-0000-0000-0000-000000000000")
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn conversion_binds_a_policy_and_closes_the_quote() {
    let api = test_api().await;
    let quote = generate_quote(&api).await;
    let quote_id = quote["id"].as_str().unwrap();

    let response = api
        .server
        .post(&format!("/api/quotes/convert-to-policy/{quote_id}"))
        .json(&json!({ "agent_id": api.agent_id }))
        .await;
    response.assert_status_ok();
    let policy_id = response.json::<Value>()["policy_id"]
        .as_str()
        .unwrap()
        .to_string();

    let policy = api
        .server
        .get(&format!("/api/policies/{policy_id}"))
        .await
        .json::<Value>();
    assert_eq!(policy["quote_id"], quote["id"]);
    assert_eq!(policy["status"], "ACTIVE");
    assert_eq!(policy["start_date"], "2024-06-01");
    assert_eq!(policy["end_date"], "2025-06-01");
    assert_eq!(policy["premium_amount"], quote["premium_amount"]);
    assert!(policy["policy_number"]
        .as_str()
        .unwrap()
        .starts_with("MER-POL-"));

    let reloaded = api
        .server
        .get(&format!("/api/quotes/{quote_id}"))
        .await
        .json::<Value>();
    assert_eq!(reloaded["status"], "CONVERTED");

    // a quote backs at most one policy
    let second = api
        .server
        .post(&format!("/api/quotes/convert-to-policy/{quote_id}"))
        .json(&json!({ "agent_id": api.agent_id }))
        .await;
    second.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn policy_creation_rejects_an_inverted_period() {
    let api = test_api().await;
    let quote = generate_quote(&api).await;

    let response = api
        .server
        .post("/api/policies/create")
        .json(&json!({
            "quote_id": quote["id"],
            "agent_id": api.agent_id,
            "start_date": "2025-06-01",
            "end_date": "2024-06-01"
        }))
        .await;
    response.assert_status(StatusCode::CONFLICT);

    // nothing was bound for the agent
    let policies = api
        .server
        .get(&format!("/api/policies/agent/{}", api.agent_id))
        .await
        .json::<Value>();
    assert_eq!(policies.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn claims_accumulate_documents_in_order() {
    let api = test_api().await;
    let quote = generate_quote(&api).await;
    let quote_id = quote["id"].as_str().unwrap();

    let policy_id = api
        .server
        .post(&format!("/api/quotes/convert-to-policy/{quote_id}"))
        .json(&json!({ "agent_id": api.agent_id }))
        .await
        .json::<Value>()["policy_id"]
        .as_str()
        .unwrap()
        .to_string();

    let claim = api
        .server
        .post("/api/claims/file")
        .json(&json!({
            "policy_id": policy_id,
            "customer_id": api.customer_id,
            "description": "Rear-ended at a stop light"
        }))
        .await
        .json::<Value>();
    assert_eq!(claim["status"], "NEW");
    let claim_id = claim["id"].as_str().unwrap();

    api.server
        .post(&format!("/api/claims/upload-document/{claim_id}"))
        .json(&json!({ "path": "/a" }))
        .await
        .assert_status_ok();
    let updated = api
        .server
        .post(&format!("/api/claims/upload-document/{claim_id}"))
        .json(&json!({ "path": "/b" }))
        .await
        .json::<Value>();
    assert_eq!(updated["document_paths"], json!(["/a", "/b"]));

    // the policy now refuses deletion
    let response = api
        .server
        .delete(&format!("/api/policies/{policy_id}"))
        .await;
    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn relation_listings_return_empty_not_404() {
    let api = test_api().await;

    let quotes = api
        .server
        .get(&format!("/api/quotes/customer/{}", api.customer_id))
        .await
        .json::<Value>();
    assert_eq!(quotes.as_array().unwrap().len(), 0);

    let response = api
        .server
        .get("/api/quotes/customer/00000000-0000-0000-0000-000000000000")
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}
