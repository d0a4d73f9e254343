pub mod enrichment;
pub mod onboarding;

pub use crate::domain::model::{Account, AccountKind, AccountStatus, InternalDetails, WelcomeMessage};
pub use crate::domain::ports::{AccountRepository, NotificationService};
#[cfg(test)]
pub use crate::domain::ports::{MockAccountRepository, MockNotificationService};
pub use crate::utils::error::Result;
