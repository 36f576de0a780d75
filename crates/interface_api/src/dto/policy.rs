//! Policy DTOs

use chrono::NaiveDate;
use core_kernel::{PartyId, PolicyId, QuoteId, VehicleId};
use domain_policy::{Policy, PolicyStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreatePolicyRequest {
    pub quote_id: QuoteId,
    pub agent_id: PartyId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePolicyRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct PolicyResponse {
    pub id: PolicyId,
    pub policy_number: String,
    pub quote_id: QuoteId,
    pub vehicle_id: VehicleId,
    pub customer_id: PartyId,
    pub agent_id: PartyId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub premium_amount: Decimal,
    pub status: PolicyStatus,
}

impl PolicyResponse {
    /// Projects a policy onto its response shape
    pub fn from_domain(policy: &Policy) -> Self {
        Self {
            id: policy.id,
            policy_number: policy.policy_number.to_string(),
            quote_id: policy.quote_id,
            vehicle_id: policy.vehicle_id,
            customer_id: policy.customer_id,
            agent_id: policy.agent_id,
            start_date: policy.start_date,
            end_date: policy.end_date,
            premium_amount: policy.premium.amount(),
            status: policy.status,
        }
    }
}

/// Returned by the quote conversion endpoint
#[derive(Debug, Serialize)]
pub struct ConvertedPolicyResponse {
    pub policy_id: PolicyId,
}
