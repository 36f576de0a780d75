//! Policy handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::{PartyId, PolicyId};

use crate::dto::policy::{CreatePolicyRequest, PolicyResponse, UpdatePolicyRequest};
use crate::{error::ApiError, AppState};

/// Creates a policy from a quote over an explicit coverage period
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreatePolicyRequest>,
) -> Result<Json<PolicyResponse>, ApiError> {
    let policy = state
        .policies
        .create(
            request.quote_id,
            request.agent_id,
            request.start_date,
            request.end_date,
        )
        .await?;
    Ok(Json(PolicyResponse::from_domain(&policy)))
}

/// Gets a policy by id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<PolicyId>,
) -> Result<Json<PolicyResponse>, ApiError> {
    let policy = state.policies.get_by_id(id).await?;
    Ok(Json(PolicyResponse::from_domain(&policy)))
}

/// Lists a customer's policies
pub async fn by_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<PartyId>,
) -> Result<Json<Vec<PolicyResponse>>, ApiError> {
    let policies = state.policies.get_by_customer(customer_id).await?;
    Ok(Json(
        policies.iter().map(PolicyResponse::from_domain).collect(),
    ))
}

/// Lists an agent's policies
pub async fn by_agent(
    State(state): State<AppState>,
    Path(agent_id): Path<PartyId>,
) -> Result<Json<Vec<PolicyResponse>>, ApiError> {
    let policies = state.policies.get_by_agent(agent_id).await?;
    Ok(Json(
        policies.iter().map(PolicyResponse::from_domain).collect(),
    ))
}

/// Updates a policy's coverage period
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<PolicyId>,
    Json(request): Json<UpdatePolicyRequest>,
) -> Result<Json<PolicyResponse>, ApiError> {
    let policy = state
        .policies
        .update(id, request.start_date, request.end_date)
        .await?;
    Ok(Json(PolicyResponse::from_domain(&policy)))
}

/// Deletes a policy
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<PolicyId>,
) -> Result<StatusCode, ApiError> {
    state.policies.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
