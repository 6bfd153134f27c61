//! Credit balance with periodic refills.

use crate::Plan;
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use prompt_studio_error::{CreditError, CreditErrorKind, StorageError, StorageErrorKind};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Credit balance for one user.
///
/// The balance refills to the plan allowance whenever the reset time has
/// passed. Every charge checks for a due refill first.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use prompt_studio_credits::{CreditLedger, Plan};
///
/// let now = Utc::now();
/// let mut ledger = CreditLedger::new(Plan::Free, now);
/// assert_eq!(ledger.use_credits(10, now).unwrap(), 190);
/// assert!(ledger.use_credits(500, now).is_err());
/// assert_eq!(*ledger.balance(), 190);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditLedger {
    /// Current subscription tier
    plan: Plan,
    /// Credits left until the next reset
    balance: u32,
    /// When the balance next refills
    reset_at: DateTime<Utc>,
}

impl CreditLedger {
    /// Fresh ledger holding the plan's full allowance.
    pub fn new(plan: Plan, now: DateTime<Utc>) -> Self {
        Self {
            plan,
            balance: plan.allowance(),
            reset_at: now + plan.reset_period(),
        }
    }

    /// Refill the balance if the reset time has passed.
    ///
    /// Returns true when a refill happened.
    pub fn check_reset(&mut self, now: DateTime<Utc>) -> bool {
        if now < self.reset_at {
            return false;
        }
        self.balance = self.plan.allowance();
        self.reset_at = now + self.plan.reset_period();
        debug!(plan = %self.plan, balance = self.balance, reset_at = %self.reset_at, "Credits reset");
        true
    }

    /// Deduct credits, returning the remaining balance.
    ///
    /// # Errors
    ///
    /// Returns [`CreditErrorKind::Insufficient`] without touching the
    /// balance when it does not cover `amount`.
    #[instrument(skip(self, now), fields(plan = %self.plan))]
    pub fn use_credits(&mut self, amount: u32, now: DateTime<Utc>) -> Result<u32, CreditError> {
        self.check_reset(now);
        if self.balance < amount {
            warn!(balance = self.balance, "Insufficient credits");
            return Err(CreditError::new(CreditErrorKind::Insufficient {
                requested: amount,
                available: self.balance,
            }));
        }
        self.balance -= amount;
        debug!(balance = self.balance, "Credits used");
        Ok(self.balance)
    }

    /// Switch tier, refill, and restart the reset period.
    pub fn set_plan(&mut self, plan: Plan, now: DateTime<Utc>) {
        info!(from = %self.plan, to = %plan, "Changing plan");
        *self = Self::new(plan, now);
    }

    /// Read a ledger file, or start a free ledger if there is none.
    pub fn load_or_new(path: impl AsRef<Path>, now: DateTime<Utc>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
                StorageError::new(StorageErrorKind::Corrupt(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::new(Plan::default(), now)),
            Err(e) => Err(StorageError::new(StorageErrorKind::Io(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )))),
        }
    }

    /// Write the ledger as pretty JSON, creating parent directories.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), StorageError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::new(StorageErrorKind::Io(format!(
                    "Failed to create {}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| StorageError::new(StorageErrorKind::Serialize(e.to_string())))?;
        std::fs::write(path, json).map_err(|e| {
            StorageError::new(StorageErrorKind::Io(format!(
                "Failed to write {}: {}",
                path.display(),
                e
            )))
        })
    }
}
