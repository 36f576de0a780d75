//! Quote handlers

use axum::{
    extract::{Path, State},
    Json,
};

use core_kernel::{Money, PartyId, QuoteId};
use domain_quote::Vin;

use crate::dto::policy::ConvertedPolicyResponse;
use crate::dto::quote::{
    ConvertQuoteRequest, GenerateQuoteRequest, QuoteResponse, SaveQuoteRequest,
};
use crate::{error::ApiError, AppState};

/// Generates an engine-rated quote
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateQuoteRequest>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let quote = state
        .quotes
        .generate(
            request.customer_id,
            &request.make,
            &request.model,
            request.year,
            Vin::new(&request.vin),
            request.driver_age,
        )
        .await?;
    Ok(Json(QuoteResponse::from_domain(&quote)))
}

/// Persists an agent-entered quote
pub async fn save(
    State(state): State<AppState>,
    Json(request): Json<SaveQuoteRequest>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let quote = state
        .quotes
        .save(
            request.customer_id,
            request.vehicle_id,
            &request.coverage_details,
            Money::new(request.premium_amount),
        )
        .await?;
    Ok(Json(QuoteResponse::from_domain(&quote)))
}

/// Gets a quote by id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<QuoteId>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let quote = state.quotes.get_by_id(id).await?;
    Ok(Json(QuoteResponse::from_domain(&quote)))
}

/// Lists a customer's quotes
pub async fn by_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<PartyId>,
) -> Result<Json<Vec<QuoteResponse>>, ApiError> {
    let quotes = state.quotes.get_by_customer(customer_id).await?;
    Ok(Json(quotes.iter().map(QuoteResponse::from_domain).collect()))
}

/// Converts a quote into a one-year policy bound by the given agent
pub async fn convert_to_policy(
    State(state): State<AppState>,
    Path(quote_id): Path<QuoteId>,
    Json(request): Json<ConvertQuoteRequest>,
) -> Result<Json<ConvertedPolicyResponse>, ApiError> {
    let policy_id = state
        .policies
        .convert_from_quote(quote_id, request.agent_id)
        .await?;
    Ok(Json(ConvertedPolicyResponse { policy_id }))
}
