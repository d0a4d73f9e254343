use crate::utils::error::{OnboardingError, Result};
use crate::utils::validation::{validate_email, validate_non_empty_string, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    #[default]
    Checking,
    Savings,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    #[default]
    Draft,
    Enriched,
}

/// Details assigned by the bank during onboarding, never by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalDetails {
    pub account_number: String,
    pub branch_code: String,
    pub opened_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub holder_name: String,
    pub email: String,
    pub kind: AccountKind,
    pub status: AccountStatus,
    pub internal: Option<InternalDetails>,
}

impl Account {
    pub fn new(holder_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            holder_name: holder_name.into(),
            email: email.into(),
            kind: AccountKind::default(),
            status: AccountStatus::Draft,
            internal: None,
        }
    }

    pub fn with_kind(mut self, kind: AccountKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn is_enriched(&self) -> bool {
        self.internal.is_some()
    }

    pub fn account_number(&self) -> Option<&str> {
        self.internal.as_ref().map(|d| d.account_number.as_str())
    }
}

impl Validate for Account {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("holder_name", &self.holder_name)
            .and_then(|_| validate_email("email", &self.email))
            .map_err(OnboardingError::into_validation)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeMessage {
    pub recipient: String,
    pub account_number: String,
    pub body: String,
}
