use crate::core::enrichment::{Enricher, EnrichmentSettings};
use crate::core::{Account, AccountRepository, NotificationService};
use crate::utils::error::Result;

/// Orchestrates onboarding: enrich, persist, notify. Persistence and
/// delivery are owned by the injected collaborators.
pub struct AccountService<R: AccountRepository, N: NotificationService> {
    repository: R,
    notifications: N,
    enricher: Enricher,
}

impl<R: AccountRepository, N: NotificationService> AccountService<R, N> {
    pub fn new(repository: R, notifications: N) -> Self {
        Self::with_enrichment(repository, notifications, EnrichmentSettings::default())
    }

    pub fn with_enrichment(repository: R, notifications: N, settings: EnrichmentSettings) -> Self {
        Self {
            repository,
            notifications,
            enricher: Enricher::new(settings),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn notifications(&self) -> &N {
        &self.notifications
    }

    pub fn accounts_enriched(&self) -> u64 {
        self.enricher.enriched_count()
    }

    pub fn open_account(&self, account: &mut Account) -> Result<()> {
        if let Err(e) = self.fill_internal_details(account) {
            tracing::error!("Failed to enrich account for {}: {}", account.holder_name, e);
            return Err(e);
        }

        if let Err(e) = self.repository.create(account) {
            tracing::error!("Failed to persist account for {}: {}", account.holder_name, e);
            return Err(e);
        }

        if let Err(e) = self.notifications.send_welcome(account) {
            tracing::error!(
                "Account {} persisted but welcome was not sent: {}",
                account.account_number().unwrap_or("<unassigned>"),
                e
            );
            return Err(e);
        }

        tracing::info!(
            "Opened account {} for {}",
            account.account_number().unwrap_or("<unassigned>"),
            account.holder_name
        );
        Ok(())
    }

    fn fill_internal_details(&self, account: &mut Account) -> Result<()> {
        self.enricher.fill_internal_details(account)
    }
}
