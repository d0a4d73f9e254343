use crate::domain::model::{Account, AccountKind};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "account-onboarding")]
#[command(about = "Open a bank account: enrich, persist, send a welcome message")]
pub struct CliConfig {
    #[arg(long)]
    pub holder_name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long, value_enum, default_value_t = AccountKind::Checking)]
    pub kind: AccountKind,

    #[arg(long, help = "Path to a TOML file with enrichment and notification settings")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Collect the welcome message and print it as JSON")]
    pub outbox: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn to_account(&self) -> Account {
        Account::new(self.holder_name.trim(), self.email.trim()).with_kind(self.kind)
    }
}
