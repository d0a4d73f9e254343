use crate::core::{Account, NotificationService, WelcomeMessage};
use crate::utils::error::{OnboardingError, Result};
use std::sync::Mutex;

pub const DEFAULT_WELCOME_TEMPLATE: &str =
    "Welcome {holder_name}, your account {account_number} is ready.";

/// Renders the welcome message for an enriched account.
///
/// Supported placeholders are `{holder_name}` and `{account_number}`.
pub fn render_welcome(template: &str, account: &Account) -> Result<WelcomeMessage> {
    let account_number = account.account_number().ok_or_else(|| {
        OnboardingError::notification(format!(
            "cannot welcome {} before an account number is assigned",
            account.holder_name
        ))
    })?;

    let body = template
        .replace("{holder_name}", &account.holder_name)
        .replace("{account_number}", account_number);

    Ok(WelcomeMessage {
        recipient: account.email.clone(),
        account_number: account_number.to_string(),
        body,
    })
}

/// Emits the welcome message as a log event.
#[derive(Debug, Clone)]
pub struct LogNotifier {
    template: String,
}

impl LogNotifier {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl Default for LogNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_WELCOME_TEMPLATE)
    }
}

impl NotificationService for LogNotifier {
    fn send_welcome(&self, account: &Account) -> Result<()> {
        let message = render_welcome(&self.template, account)?;
        tracing::info!(
            recipient = %message.recipient,
            account_number = %message.account_number,
            "✉️ {}",
            message.body
        );
        Ok(())
    }
}

/// Collects welcome messages in memory instead of delivering them.
#[derive(Debug)]
pub struct OutboxNotifier {
    template: String,
    outbox: Mutex<Vec<WelcomeMessage>>,
}

impl OutboxNotifier {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            outbox: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<WelcomeMessage> {
        self.outbox
            .lock()
            .map(|outbox| outbox.clone())
            .unwrap_or_default()
    }
}

impl Default for OutboxNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_WELCOME_TEMPLATE)
    }
}

impl NotificationService for OutboxNotifier {
    fn send_welcome(&self, account: &Account) -> Result<()> {
        let message = render_welcome(&self.template, account)?;
        let mut outbox = self
            .outbox
            .lock()
            .map_err(|_| OnboardingError::notification("outbox lock poisoned"))?;
        tracing::debug!("Queued welcome for {}", message.recipient);
        outbox.push(message);
        Ok(())
    }
}
