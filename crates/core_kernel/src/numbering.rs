//! Human-readable reference numbers for quotes, policies, and claims
//!
//! Every externally visible entity carries a reference number in one of
//! three disjoint namespaces: `MER-QUO-`, `MER-POL-`, and `MER-CLM-`.
//! Quote and claim numbers embed a random UUID token; policy numbers are
//! issued by a strictly monotonic time-derived sequence, so two policies
//! minted within the same clock tick can never share a number.
//!
//! Reference numbers are immutable once assigned; the newtypes here have
//! no mutating operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};
use thiserror::Error;
use uuid::Uuid;

/// Namespace prefix for quote numbers
pub const QUOTE_NUMBER_PREFIX: &str = "MER-QUO-";
/// Namespace prefix for policy numbers
pub const POLICY_NUMBER_PREFIX: &str = "MER-POL-";
/// Namespace prefix for claim numbers
pub const CLAIM_NUMBER_PREFIX: &str = "MER-CLM-";

/// Errors raised when parsing reference numbers
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NumberingError {
    #[error("Reference number {value} does not carry the {prefix} prefix")]
    WrongNamespace { prefix: &'static str, value: String },

    #[error("Reference number {0} has a malformed token")]
    MalformedToken(String),
}

macro_rules! define_random_number {
    ($name:ident, $prefix:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Mints a fresh reference number with a random token
            pub fn generate() -> Self {
                Self(format!("{}{}", $prefix, Uuid::new_v4()))
            }

            /// Returns the full reference number, prefix included
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = NumberingError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let token = s.strip_prefix($prefix).ok_or_else(|| {
                    NumberingError::WrongNamespace {
                        prefix: $prefix,
                        value: s.to_string(),
                    }
                })?;
                Uuid::parse_str(token)
                    .map_err(|_| NumberingError::MalformedToken(s.to_string()))?;
                Ok(Self(s.to_string()))
            }
        }
    };
}

define_random_number!(QuoteNumber, QUOTE_NUMBER_PREFIX);
define_random_number!(ClaimNumber, CLAIM_NUMBER_PREFIX);

/// A policy reference number issued by [`PolicyNumberSequence`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyNumber(String);

impl PolicyNumber {
    fn from_sequence_value(value: i64) -> Self {
        Self(format!("{POLICY_NUMBER_PREFIX}{value}"))
    }

    /// Returns the full reference number, prefix included
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PolicyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PolicyNumber {
    type Err = NumberingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s
            .strip_prefix(POLICY_NUMBER_PREFIX)
            .ok_or_else(|| NumberingError::WrongNamespace {
                prefix: POLICY_NUMBER_PREFIX,
                value: s.to_string(),
            })?;
        token
            .parse::<i64>()
            .map_err(|_| NumberingError::MalformedToken(s.to_string()))?;
        Ok(Self(s.to_string()))
    }
}

/// Issues strictly monotonic, time-derived policy numbers
///
/// The sequence value tracks the wall clock in milliseconds but never
/// repeats or moves backwards: each issued value is
/// `max(now_millis, previous + 1)`. One instance is shared per process.
#[derive(Debug, Default)]
pub struct PolicyNumberSequence {
    last: AtomicI64,
}

impl PolicyNumberSequence {
    /// Creates a sequence starting from the epoch
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next policy number for the given instant
    pub fn next(&self, now: DateTime<Utc>) -> PolicyNumber {
        let millis = now.timestamp_millis();
        let mut prev = self.last.load(Ordering::Acquire);
        loop {
            let candidate = millis.max(prev + 1);
            match self
                .last
                .compare_exchange_weak(prev, candidate, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return PolicyNumber::from_sequence_value(candidate),
                Err(actual) => prev = actual,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn quote_number_carries_namespace_prefix() {
        let number = QuoteNumber::generate();
        assert!(number.as_str().starts_with("MER-QUO-"));
    }

    #[test]
    fn claim_number_parse_round_trips() {
        let number = ClaimNumber::generate();
        let parsed: ClaimNumber = number.as_str().parse().unwrap();
        assert_eq!(number, parsed);
    }

    #[test]
    fn parse_rejects_foreign_namespace() {
        let err = "MER-POL-1700000000000".parse::<QuoteNumber>().unwrap_err();
        assert!(matches!(err, NumberingError::WrongNamespace { .. }));
    }

    #[test]
    fn parse_rejects_malformed_token() {
        let err = "MER-CLM-not-a-uuid".parse::<ClaimNumber>().unwrap_err();
        assert!(matches!(err, NumberingError::MalformedToken(_)));
    }

    #[test]
    fn policy_sequence_is_unique_within_one_tick() {
        let seq = PolicyNumberSequence::new();
        let instant = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

        let first = seq.next(instant);
        let second = seq.next(instant);
        assert_ne!(first, second);
    }

    #[test]
    fn policy_sequence_tracks_the_clock() {
        let seq = PolicyNumberSequence::new();
        let earlier = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 5).unwrap();

        seq.next(earlier);
        let number = seq.next(later);
        assert_eq!(
            number.as_str(),
            format!("MER-POL-{}", later.timestamp_millis())
        );
    }
}
