use account_onboarding::utils::error::ErrorSeverity;
use account_onboarding::utils::{logger, validation::Validate};
use account_onboarding::{
    AccountService, CliConfig, InMemoryAccountRepository, LogNotifier, NotificationService,
    OnboardingConfig, OnboardingError, OutboxNotifier,
};
use anyhow::Context;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting account-onboarding");
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match load_config(&cli) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    let mut account = cli.to_account();
    if let Err(e) = account.validate() {
        exit_with(&e);
    }

    let repository = InMemoryAccountRepository::new();

    if cli.outbox {
        let outbox = OutboxNotifier::new(settings.welcome_template());
        let service =
            AccountService::with_enrichment(&repository, &outbox, settings.enrichment_settings());
        open(&service, &mut account);

        let sent = serde_json::to_string_pretty(&outbox.sent())
            .context("failed to encode welcome messages")?;
        println!("{}", sent);
    } else {
        let notifier = LogNotifier::new(settings.welcome_template());
        let service =
            AccountService::with_enrichment(&repository, notifier, settings.enrichment_settings());
        open(&service, &mut account);
    }

    let stored = serde_json::to_string_pretty(&repository.accounts())
        .context("failed to encode stored accounts")?;
    tracing::debug!("Stored accounts: {}", stored);

    Ok(())
}

fn load_config(cli: &CliConfig) -> account_onboarding::Result<OnboardingConfig> {
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            OnboardingConfig::from_file(path)?
        }
        None => OnboardingConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn open<N: NotificationService>(
    service: &AccountService<&InMemoryAccountRepository, N>,
    account: &mut account_onboarding::Account,
) {
    match service.open_account(account) {
        Ok(()) => {
            let number = account.account_number().unwrap_or_default();
            tracing::info!("✅ Account {} opened", number);
            println!("✅ Account {} opened for {}", number, account.holder_name);
        }
        Err(e) => {
            tracing::error!(
                "❌ Onboarding failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            if e.severity() == ErrorSeverity::Low {
                eprintln!("⚠️ {}", e.user_friendly_message());
                eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            } else {
                exit_with(&e);
            }
        }
    }
}

fn exit_with(e: &OnboardingError) -> ! {
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
