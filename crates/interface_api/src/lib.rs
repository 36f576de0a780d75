//! HTTP API Layer
//!
//! This crate provides the REST API for the Mercury policy administration
//! system using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: request handlers per lifecycle domain
//! - **DTOs**: request/response shapes with one explicit projection
//!   function per domain entity
//! - **Error handling**: domain errors map onto consistent HTTP statuses
//!   (not-found 404, invariant violations 409, validation 422)
//!
//! The acting user is always an explicit request field; nothing in the
//! engine reads an ambient authentication context. Role gating belongs to
//! an upstream gateway and is absent here.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod seed;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use core_kernel::{Clock, PolicyNumberSequence, SystemClock};
use domain_claims::ClaimService;
use domain_party::PartyPort;
use domain_policy::PolicyService;
use domain_quote::QuoteService;
use infra_store::InMemoryStore;

use crate::config::ApiConfig;
use crate::handlers::{claim, health, party, policy, quote};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub quotes: Arc<QuoteService>,
    pub policies: Arc<PolicyService>,
    pub claims: Arc<ClaimService>,
    pub parties: Arc<dyn PartyPort>,
    pub config: ApiConfig,
}

impl AppState {
    /// Wires the lifecycle services over the given store
    pub fn new(store: Arc<InMemoryStore>, config: ApiConfig) -> Self {
        Self::with_clock(store, config, Arc::new(SystemClock))
    }

    /// Wires the services with an explicit clock, for deterministic tests
    pub fn with_clock(
        store: Arc<InMemoryStore>,
        config: ApiConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let numbers = Arc::new(PolicyNumberSequence::new());

        let quotes = Arc::new(QuoteService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            clock.clone(),
        ));
        let policies = Arc::new(PolicyService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            numbers,
            clock.clone(),
        ));
        let claims = Arc::new(ClaimService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            clock,
        ));

        Self {
            quotes,
            policies,
            claims,
            parties: store,
            config,
        }
    }
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    let quote_routes = Router::new()
        .route("/generate", post(quote::generate))
        .route("/save", post(quote::save))
        .route("/:id", get(quote::get))
        .route("/customer/:customer_id", get(quote::by_customer))
        .route("/convert-to-policy/:quote_id", post(quote::convert_to_policy));

    let policy_routes = Router::new()
        .route("/create", post(policy::create))
        .route("/:id", get(policy::get))
        .route("/:id", put(policy::update))
        .route("/:id", delete(policy::delete))
        .route("/customer/:customer_id", get(policy::by_customer))
        .route("/agent/:agent_id", get(policy::by_agent));

    let claim_routes = Router::new()
        .route("/file", post(claim::file))
        .route("/:id", get(claim::get))
        .route("/policy/:policy_id", get(claim::by_policy))
        .route("/upload-document/:claim_id", post(claim::upload_document));

    let party_routes = Router::new()
        .route("/", get(party::list))
        .route("/:id", get(party::get));

    let api_routes = Router::new()
        .nest("/quotes", quote_routes)
        .nest("/policies", policy_routes)
        .nest("/claims", claim_routes)
        .nest("/parties", party_routes);

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
