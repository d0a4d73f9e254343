use crate::core::{Account, AccountRepository};
use crate::utils::error::{OnboardingError, Result};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Keeps created accounts in memory, keyed by account number.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: Mutex<HashMap<String, Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Account>>> {
        self.accounts
            .lock()
            .map_err(|_| OnboardingError::repository("account store lock poisoned"))
    }

    pub fn get(&self, account_number: &str) -> Option<Account> {
        self.lock().ok()?.get(account_number).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().map(|accounts| accounts.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all stored accounts, ordered by account number.
    pub fn accounts(&self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self
            .lock()
            .map(|accounts| accounts.values().cloned().collect())
            .unwrap_or_default();
        accounts.sort_by(|a, b| a.account_number().cmp(&b.account_number()));
        accounts
    }
}

impl AccountRepository for InMemoryAccountRepository {
    fn create(&self, account: &Account) -> Result<()> {
        let account_number = account.account_number().ok_or_else(|| {
            OnboardingError::repository(format!(
                "account for {} has no internal details",
                account.holder_name
            ))
        })?;

        let mut accounts = self.lock()?;
        if accounts.contains_key(account_number) {
            return Err(OnboardingError::repository(format!(
                "account {} already exists",
                account_number
            )));
        }

        tracing::debug!("Storing account {}", account_number);
        accounts.insert(account_number.to_string(), account.clone());
        Ok(())
    }
}
