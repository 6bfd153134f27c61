//! Subscription tiers.

use chrono::TimeDelta;
use prompt_studio_error::{CreditError, CreditErrorKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Subscription tier. Decides the credit allowance and how often it refills.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    /// 200 credits every week
    #[default]
    Free,
    /// 1,500 credits every month
    Pro,
    /// 4,000 credits every month
    Creator,
    /// 10,000 credits every month
    Business,
}

impl Plan {
    /// Credits granted at every reset.
    pub fn allowance(self) -> u32 {
        match self {
            Plan::Free => 200,
            Plan::Pro => 1_500,
            Plan::Creator => 4_000,
            Plan::Business => 10_000,
        }
    }

    /// Time between resets.
    pub fn reset_period(self) -> TimeDelta {
        match self {
            Plan::Free => TimeDelta::days(7),
            Plan::Pro | Plan::Creator | Plan::Business => TimeDelta::days(30),
        }
    }

    /// Every tier except [`Plan::Free`].
    pub fn is_premium(self) -> bool {
        self != Plan::Free
    }

    /// Parse a lowercase plan name.
    ///
    /// # Errors
    ///
    /// Returns [`CreditErrorKind::InvalidPlan`] for anything else.
    #[track_caller]
    pub fn parse(name: &str) -> Result<Self, CreditError> {
        Plan::from_str(name)
            .map_err(|_| CreditError::new(CreditErrorKind::InvalidPlan(name.to_string())))
    }
}
