//! Party handlers

use axum::{
    extract::{Path, State},
    Json,
};

use core_kernel::PartyId;
use domain_party::PartyPort;

use crate::dto::party::PartyResponse;
use crate::{error::ApiError, AppState};

/// Lists every party in the directory
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PartyResponse>>, ApiError> {
    let parties = state.parties.list_parties().await?;
    Ok(Json(parties.iter().map(PartyResponse::from_domain).collect()))
}

/// Gets a party by id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<PartyId>,
) -> Result<Json<PartyResponse>, ApiError> {
    let party = state.parties.get_party(id).await?;
    Ok(Json(PartyResponse::from_domain(&party)))
}
