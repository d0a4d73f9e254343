use crate::domain::model::Account;
use crate::utils::error::Result;
use std::sync::Arc;

/// Persists accounts. Implementations decide what "durable" means.
#[cfg_attr(test, mockall::automock)]
pub trait AccountRepository: Send + Sync {
    fn create(&self, account: &Account) -> Result<()>;
}

/// Delivers the welcome communication for a freshly persisted account.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationService: Send + Sync {
    fn send_welcome(&self, account: &Account) -> Result<()>;
}

impl<T: AccountRepository + ?Sized> AccountRepository for &T {
    fn create(&self, account: &Account) -> Result<()> {
        (**self).create(account)
    }
}

impl<T: AccountRepository + ?Sized> AccountRepository for Box<T> {
    fn create(&self, account: &Account) -> Result<()> {
        (**self).create(account)
    }
}

impl<T: AccountRepository + ?Sized> AccountRepository for Arc<T> {
    fn create(&self, account: &Account) -> Result<()> {
        (**self).create(account)
    }
}

impl<T: NotificationService + ?Sized> NotificationService for &T {
    fn send_welcome(&self, account: &Account) -> Result<()> {
        (**self).send_welcome(account)
    }
}

impl<T: NotificationService + ?Sized> NotificationService for Box<T> {
    fn send_welcome(&self, account: &Account) -> Result<()> {
        (**self).send_welcome(account)
    }
}

impl<T: NotificationService + ?Sized> NotificationService for Arc<T> {
    fn send_welcome(&self, account: &Account) -> Result<()> {
        (**self).send_welcome(account)
    }
}
