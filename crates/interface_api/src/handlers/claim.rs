//! Claim handlers

use axum::{
    extract::{Path, State},
    Json,
};

use core_kernel::{ClaimId, PolicyId};

use crate::dto::claim::{ClaimResponse, FileClaimRequest, UploadDocumentRequest};
use crate::{error::ApiError, AppState};

/// Files a claim against a policy
pub async fn file(
    State(state): State<AppState>,
    Json(request): Json<FileClaimRequest>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let claim = state
        .claims
        .file(request.policy_id, request.customer_id, &request.description)
        .await?;
    Ok(Json(ClaimResponse::from_domain(&claim)))
}

/// Gets a claim by id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let claim = state.claims.get_by_id(id).await?;
    Ok(Json(ClaimResponse::from_domain(&claim)))
}

/// Lists the claims filed against a policy
pub async fn by_policy(
    State(state): State<AppState>,
    Path(policy_id): Path<PolicyId>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let claims = state.claims.get_by_policy(policy_id).await?;
    Ok(Json(claims.iter().map(ClaimResponse::from_domain).collect()))
}

/// Attaches a document reference to a claim
pub async fn upload_document(
    State(state): State<AppState>,
    Path(claim_id): Path<ClaimId>,
    Json(request): Json<UploadDocumentRequest>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let claim = state.claims.upload_document(claim_id, &request.path).await?;
    Ok(Json(ClaimResponse::from_domain(&claim)))
}
