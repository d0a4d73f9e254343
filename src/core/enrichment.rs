use crate::domain::model::{Account, AccountStatus, InternalDetails};
use crate::utils::error::{OnboardingError, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

pub const DEFAULT_BRANCH_CODE: &str = "001";
pub const DEFAULT_ACCOUNT_NUMBER_PREFIX: &str = "AC";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentSettings {
    pub branch_code: String,
    pub account_number_prefix: String,
    pub first_sequence: u64,
}

impl Default for EnrichmentSettings {
    fn default() -> Self {
        Self {
            branch_code: DEFAULT_BRANCH_CODE.to_string(),
            account_number_prefix: DEFAULT_ACCOUNT_NUMBER_PREFIX.to_string(),
            first_sequence: 1,
        }
    }
}

/// Fills the bank-side details of an account. Each call consumes one
/// sequence number; the sequence never wraps.
#[derive(Debug)]
pub struct Enricher {
    settings: EnrichmentSettings,
    // None once u64::MAX has been issued
    next_sequence: Mutex<Option<u64>>,
    enriched: AtomicU64,
}

impl Enricher {
    pub fn new(settings: EnrichmentSettings) -> Self {
        let next_sequence = Mutex::new(Some(settings.first_sequence));
        Self {
            settings,
            next_sequence,
            enriched: AtomicU64::new(0),
        }
    }

    pub fn settings(&self) -> &EnrichmentSettings {
        &self.settings
    }

    /// Number of accounts enriched so far.
    pub fn enriched_count(&self) -> u64 {
        self.enriched.load(Ordering::SeqCst)
    }

    fn take_sequence(&self) -> Result<u64> {
        let mut next = self.next_sequence.lock().map_err(|_| {
            OnboardingError::ConfigValidationError {
                field: "enrichment".to_string(),
                message: "sequence lock poisoned".to_string(),
            }
        })?;

        let sequence = (*next).ok_or_else(|| OnboardingError::ConfigValidationError {
            field: "enrichment.first_sequence".to_string(),
            message: "account number sequence exhausted".to_string(),
        })?;
        *next = sequence.checked_add(1);
        Ok(sequence)
    }

    /// Leaves the account untouched when no sequence number is left.
    pub fn fill_internal_details(&self, account: &mut Account) -> Result<()> {
        let sequence = self.take_sequence()?;
        let account_number = format!(
            "{}{}{:08}",
            self.settings.account_number_prefix, self.settings.branch_code, sequence
        );

        tracing::debug!(
            "Filling internal details for {}: account number {}",
            account.holder_name,
            account_number
        );

        account.internal = Some(InternalDetails {
            account_number,
            branch_code: self.settings.branch_code.clone(),
            opened_at: Utc::now(),
        });
        account.status = AccountStatus::Enriched;
        self.enriched.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl Default for Enricher {
    fn default() -> Self {
        Self::new(EnrichmentSettings::default())
    }
}
