//! Common test fixtures

use chrono::NaiveDate;
use core_kernel::FixedClock;
use domain_party::{Party, Role};

/// A demo customer
pub fn customer() -> Party {
    Party::new("Demo", "Customer", "customer@mercury.com", Role::Customer)
}

/// A demo agent
pub fn agent() -> Party {
    Party::new("Default", "Agent", "agent@mercury.com", Role::Agent)
}

/// The instant most tests pin their clock to
pub fn fixed_clock() -> FixedClock {
    FixedClock::at_midnight(2024, 6, 1)
}

/// A valid one-year coverage period
pub fn period() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
    )
}
