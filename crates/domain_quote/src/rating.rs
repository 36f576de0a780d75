//! Rating engine
//!
//! Premiums are a deterministic function of driver age and vehicle age.
//! The formula is intentionally simple; the engine's contract is to apply
//! it consistently, not to be actuarially sophisticated. Surcharges are
//! each computed from the base premium, not compounded on each other.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

use core_kernel::{Clock, Money, Rate};

/// Annual base premium before surcharges
const BASE_PREMIUM: Decimal = dec!(3000.00);

/// Drivers younger than this attract the young-driver surcharge
const YOUNG_DRIVER_AGE: i32 = 25;

/// Young-driver surcharge, percent of base
const YOUNG_DRIVER_SURCHARGE: Decimal = dec!(20);

/// Vehicles older than this many model years attract the aged-vehicle surcharge
const AGED_VEHICLE_YEARS: i32 = 10;

/// Aged-vehicle surcharge, percent of base
const AGED_VEHICLE_SURCHARGE: Decimal = dec!(15);

/// Computes the annual premium for the given risk facts
///
/// Pure and deterministic: identical inputs always produce identical
/// output. Implausible ages or vehicle years are accepted as-is;
/// plausibility checks belong to the caller.
pub fn premium_for(driver_age: i32, vehicle_year: i32, current_year: i32) -> Money {
    let base = Money::new(BASE_PREMIUM);
    let mut premium = base;

    if driver_age < YOUNG_DRIVER_AGE {
        premium = premium + Rate::from_percentage(YOUNG_DRIVER_SURCHARGE).apply(&base);
    }
    if current_year - vehicle_year > AGED_VEHICLE_YEARS {
        premium = premium + Rate::from_percentage(AGED_VEHICLE_SURCHARGE).apply(&base);
    }

    premium
}

/// Service wrapper that samples the calendar year from an injected clock
pub struct RatingEngine {
    clock: Arc<dyn Clock>,
}

impl RatingEngine {
    /// Creates a rating engine over the given clock
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Rates a risk against the current calendar year
    pub fn rate(&self, driver_age: i32, vehicle_year: i32) -> Money {
        premium_for(driver_age, vehicle_year, self.clock.current_year())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn rating_is_deterministic(
            driver_age in -10i32..120i32,
            vehicle_year in 1900i32..2100i32,
            current_year in 1990i32..2100i32
        ) {
            prop_assert_eq!(
                premium_for(driver_age, vehicle_year, current_year),
                premium_for(driver_age, vehicle_year, current_year)
            );
        }

        #[test]
        fn premium_never_falls_below_base(
            driver_age in -10i32..120i32,
            vehicle_year in 1900i32..2100i32,
            current_year in 1990i32..2100i32
        ) {
            let premium = premium_for(driver_age, vehicle_year, current_year);
            prop_assert!(premium >= Money::new(dec!(3000.00)));
        }
    }
}
