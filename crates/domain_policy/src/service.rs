//! Policy lifecycle service

use chrono::{Months, NaiveDate};
use std::sync::Arc;

use core_kernel::{Clock, PartyId, PolicyId, PolicyNumberSequence, PortError, QuoteId};
use domain_party::PartyPort;
use domain_quote::{Quote, QuoteRepository};

use crate::error::PolicyError;
use crate::policy::Policy;
use crate::ports::{ClaimsGuard, PolicyRepository};

/// Application service for the policy lifecycle
///
/// Policies can be created two independent ways: `create` binds a quote
/// over an explicit coverage period and leaves the quote untouched, while
/// `convert_from_quote` binds a one-year policy starting today and flips
/// the quote to its terminal Converted status in the same operation.
pub struct PolicyService {
    policies: Arc<dyn PolicyRepository>,
    quotes: Arc<dyn QuoteRepository>,
    parties: Arc<dyn PartyPort>,
    claims_guard: Arc<dyn ClaimsGuard>,
    numbers: Arc<PolicyNumberSequence>,
    clock: Arc<dyn Clock>,
}

impl PolicyService {
    /// Creates the service over its collaborating ports
    pub fn new(
        policies: Arc<dyn PolicyRepository>,
        quotes: Arc<dyn QuoteRepository>,
        parties: Arc<dyn PartyPort>,
        claims_guard: Arc<dyn ClaimsGuard>,
        numbers: Arc<PolicyNumberSequence>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            policies,
            quotes,
            parties,
            claims_guard,
            numbers,
            clock,
        }
    }

    /// Creates an active policy from a quote over an explicit period
    ///
    /// Vehicle, customer, and premium are copied from the quote. The quote's
    /// status is not consulted and not changed here; conversion is a
    /// separate operation.
    pub async fn create(
        &self,
        quote_id: QuoteId,
        agent_id: PartyId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Policy, PolicyError> {
        let quote = self.resolve_quote(quote_id).await?;
        self.resolve_agent(agent_id).await?;

        let policy = self.bind(&quote, agent_id, start_date, end_date)?;
        self.policies.save_policy(&policy).await?;

        tracing::info!(
            policy_id = %policy.id,
            policy_number = %policy.policy_number,
            quote_id = %quote_id,
            "created policy"
        );
        Ok(policy)
    }

    /// Retrieves a policy by id
    pub async fn get_by_id(&self, id: PolicyId) -> Result<Policy, PolicyError> {
        self.policies
            .get_policy(id)
            .await
            .map_err(|e| not_found_as(e, PolicyError::PolicyNotFound(id)))
    }

    /// Returns every policy held by the customer
    pub async fn get_by_customer(&self, customer_id: PartyId) -> Result<Vec<Policy>, PolicyError> {
        self.parties
            .get_party(customer_id)
            .await
            .map_err(|e| not_found_as(e, PolicyError::CustomerNotFound(customer_id)))?;
        Ok(self.policies.find_by_customer(customer_id).await?)
    }

    /// Returns every policy bound by the agent
    pub async fn get_by_agent(&self, agent_id: PartyId) -> Result<Vec<Policy>, PolicyError> {
        self.resolve_agent(agent_id).await?;
        Ok(self.policies.find_by_agent(agent_id).await?)
    }

    /// Replaces a policy's coverage period
    ///
    /// Premium, status, and every reference field stay untouched.
    pub async fn update(
        &self,
        id: PolicyId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Policy, PolicyError> {
        let mut policy = self.get_by_id(id).await?;
        policy.update_period(start_date, end_date)?;
        self.policies.save_policy(&policy).await?;

        tracing::info!(policy_id = %id, %start_date, %end_date, "updated policy period");
        Ok(policy)
    }

    /// Hard-deletes a policy
    ///
    /// Refuses when claims still reference the policy, so claim records
    /// never dangle.
    pub async fn delete(&self, id: PolicyId) -> Result<(), PolicyError> {
        if self.claims_guard.has_claims(id).await? {
            return Err(PolicyError::ClaimsAttached(id));
        }
        self.policies
            .delete_policy(id)
            .await
            .map_err(|e| not_found_as(e, PolicyError::PolicyNotFound(id)))?;

        tracing::info!(policy_id = %id, "deleted policy");
        Ok(())
    }

    /// Converts a quote into a one-year policy starting today
    ///
    /// The policy insert and the quote's Converted flip must land together.
    /// The flip is a compare-and-set; if it loses a race to a concurrent
    /// conversion, the freshly inserted policy is removed again before the
    /// error surfaces, keeping at most one policy per quote.
    pub async fn convert_from_quote(
        &self,
        quote_id: QuoteId,
        agent_id: PartyId,
    ) -> Result<PolicyId, PolicyError> {
        let quote = self.resolve_quote(quote_id).await?;
        if quote.is_converted() {
            return Err(PolicyError::QuoteAlreadyConverted(quote_id));
        }
        self.resolve_agent(agent_id).await?;

        let start_date = self.clock.today();
        let end_date = one_year_after(start_date);
        let policy = self.bind(&quote, agent_id, start_date, end_date)?;
        self.policies.save_policy(&policy).await?;

        if let Err(flip) = self.quotes.mark_converted(quote_id).await {
            if let Err(cleanup) = self.policies.delete_policy(policy.id).await {
                tracing::warn!(policy_id = %policy.id, error = %cleanup, "rollback delete failed");
            }
            return Err(match flip {
                PortError::Conflict { .. } => PolicyError::QuoteAlreadyConverted(quote_id),
                PortError::NotFound { .. } => PolicyError::QuoteNotFound(quote_id),
                other => PolicyError::Storage(other),
            });
        }

        tracing::info!(
            policy_id = %policy.id,
            policy_number = %policy.policy_number,
            quote_id = %quote_id,
            agent_id = %agent_id,
            "converted quote to policy"
        );
        Ok(policy.id)
    }

    fn bind(
        &self,
        quote: &Quote,
        agent_id: PartyId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Policy, PolicyError> {
        Policy::new(
            self.numbers.next(self.clock.now()),
            quote.id,
            quote.vehicle_id,
            quote.customer_id,
            agent_id,
            start_date,
            end_date,
            quote.premium,
        )
    }

    async fn resolve_quote(&self, quote_id: QuoteId) -> Result<Quote, PolicyError> {
        self.quotes
            .get_quote(quote_id)
            .await
            .map_err(|e| not_found_as(e, PolicyError::QuoteNotFound(quote_id)))
    }

    async fn resolve_agent(&self, agent_id: PartyId) -> Result<(), PolicyError> {
        self.parties
            .get_party(agent_id)
            .await
            .map(|_| ())
            .map_err(|e| not_found_as(e, PolicyError::AgentNotFound(agent_id)))
    }
}

/// Maps a port-level NotFound onto the domain's specific variant
fn not_found_as(error: PortError, not_found: PolicyError) -> PolicyError {
    if error.is_not_found() {
        not_found
    } else {
        PolicyError::Storage(error)
    }
}

/// Adds one calendar year, clamping month-end the way renewals expect
fn one_year_after(date: NaiveDate) -> NaiveDate {
    // None only past the representable year range
    date.checked_add_months(Months::new(12)).unwrap_or(date)
}
