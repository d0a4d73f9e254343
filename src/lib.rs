pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::OnboardingConfig;

pub use adapters::{InMemoryAccountRepository, LogNotifier, OutboxNotifier};
pub use crate::core::enrichment::EnrichmentSettings;
pub use crate::core::onboarding::AccountService;
pub use crate::core::{Account, AccountKind, AccountRepository, AccountStatus, NotificationService};
pub use utils::error::{OnboardingError, Result};
