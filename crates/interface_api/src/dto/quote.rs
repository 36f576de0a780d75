//! Quote DTOs

use chrono::{DateTime, Utc};
use core_kernel::{PartyId, QuoteId, VehicleId};
use domain_quote::{Quote, QuoteStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct GenerateQuoteRequest {
    pub customer_id: PartyId,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: String,
    pub driver_age: i32,
}

#[derive(Debug, Deserialize)]
pub struct SaveQuoteRequest {
    pub customer_id: PartyId,
    pub vehicle_id: VehicleId,
    pub coverage_details: String,
    pub premium_amount: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct ConvertQuoteRequest {
    /// The agent binding the policy, always passed explicitly
    pub agent_id: PartyId,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub id: QuoteId,
    pub quote_number: String,
    pub vehicle_id: VehicleId,
    pub customer_id: PartyId,
    pub premium_amount: Decimal,
    pub coverage_details: String,
    pub status: QuoteStatus,
    pub created_at: DateTime<Utc>,
}

impl QuoteResponse {
    /// Projects a quote onto its response shape
    pub fn from_domain(quote: &Quote) -> Self {
        Self {
            id: quote.id,
            quote_number: quote.quote_number.to_string(),
            vehicle_id: quote.vehicle_id,
            customer_id: quote.customer_id,
            premium_amount: quote.premium.amount(),
            coverage_details: quote.coverage_details.clone(),
            status: quote.status,
            created_at: quote.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Money;
    use rust_decimal_macros::dec;

    #[test]
    fn projection_is_field_faithful() {
        let quote = Quote::generated(
            VehicleId::new(),
            PartyId::new(),
            Money::new(dec!(4050.00)),
            Utc::now(),
        );

        let response = QuoteResponse::from_domain(&quote);

        assert_eq!(response.id, quote.id);
        assert_eq!(response.quote_number, quote.quote_number.to_string());
        assert_eq!(response.premium_amount, dec!(4050.00));
        assert_eq!(response.status, QuoteStatus::Generated);
    }
}
