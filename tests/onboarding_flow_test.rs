use account_onboarding::{
    Account, AccountRepository, AccountService, AccountStatus, NotificationService,
    OnboardingError, Result,
};
use mockall::{mock, Sequence};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Create { account: Account, enriched: bool },
    SendWelcome { account: Account },
}

type CallLog = Arc<Mutex<Vec<Call>>>;

struct RecordingRepository {
    log: CallLog,
    fail: bool,
}

impl AccountRepository for RecordingRepository {
    fn create(&self, account: &Account) -> Result<()> {
        self.log.lock().unwrap().push(Call::Create {
            account: account.clone(),
            enriched: account.is_enriched(),
        });
        if self.fail {
            return Err(OnboardingError::repository("create rejected"));
        }
        Ok(())
    }
}

struct RecordingNotifier {
    log: CallLog,
}

impl NotificationService for RecordingNotifier {
    fn send_welcome(&self, account: &Account) -> Result<()> {
        self.log.lock().unwrap().push(Call::SendWelcome {
            account: account.clone(),
        });
        Ok(())
    }
}

fn recording_service(fail_create: bool) -> (AccountService<RecordingRepository, RecordingNotifier>, CallLog) {
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));
    let service = AccountService::new(
        RecordingRepository {
            log: log.clone(),
            fail: fail_create,
        },
        RecordingNotifier { log: log.clone() },
    );
    (service, log)
}

#[test]
fn test_call_log_is_enrich_create_welcome() {
    let (service, log) = recording_service(false);
    let mut account = Account::new("Ada Lovelace", "ada@example.com");

    service.open_account(&mut account).unwrap();

    let calls = log.lock().unwrap().clone();
    assert_eq!(
        calls,
        vec![
            Call::Create {
                account: account.clone(),
                enriched: true,
            },
            Call::SendWelcome {
                account: account.clone(),
            },
        ]
    );
    assert_eq!(account.status, AccountStatus::Enriched);
    assert_eq!(service.accounts_enriched(), 1);
}

#[test]
fn test_failed_create_never_sends_welcome() {
    let (service, log) = recording_service(true);
    let mut account = Account::new("Ada Lovelace", "ada@example.com");

    let err = service.open_account(&mut account).unwrap_err();

    assert!(matches!(err, OnboardingError::RepositoryError { .. }));
    let calls = log.lock().unwrap().clone();
    assert_eq!(calls.len(), 1);
    assert!(matches!(calls[0], Call::Create { enriched: true, .. }));
    assert!(!calls.iter().any(|c| matches!(c, Call::SendWelcome { .. })));
}

#[test]
fn test_each_open_enriches_exactly_once() {
    let (service, log) = recording_service(false);
    let mut first = Account::new("Ada", "ada@example.com");
    let mut second = Account::new("Grace", "grace@example.com");

    service.open_account(&mut first).unwrap();
    service.open_account(&mut second).unwrap();

    assert_eq!(first.account_number(), Some("AC00100000001"));
    assert_eq!(second.account_number(), Some("AC00100000002"));
    assert_eq!(service.accounts_enriched(), 2);
    assert_eq!(log.lock().unwrap().len(), 4);
}

/// Step name, account number and enrichment flag; timestamps differ between runs.
fn call_sequence(log: &CallLog) -> Vec<(&'static str, Option<String>, bool)> {
    log.lock()
        .unwrap()
        .iter()
        .map(|call| match call {
            Call::Create { account, enriched } => (
                "create",
                account.account_number().map(str::to_string),
                *enriched,
            ),
            Call::SendWelcome { account } => (
                "send_welcome",
                account.account_number().map(str::to_string),
                account.is_enriched(),
            ),
        })
        .collect()
}

#[test]
fn test_wrapped_collaborators_keep_call_sequence() {
    let (direct, direct_log) = recording_service(false);
    let mut account = Account::new("Ada", "ada@example.com");
    direct.open_account(&mut account).unwrap();

    let wrapped_log: CallLog = Arc::new(Mutex::new(Vec::new()));
    let repository: Box<dyn AccountRepository> = Box::new(RecordingRepository {
        log: wrapped_log.clone(),
        fail: false,
    });
    let notifier: Arc<dyn NotificationService> = Arc::new(RecordingNotifier {
        log: wrapped_log.clone(),
    });
    let wrapped = AccountService::new(repository, notifier);
    let mut account = Account::new("Ada", "ada@example.com");
    wrapped.open_account(&mut account).unwrap();

    let expected = vec![
        ("create", Some("AC00100000001".to_string()), true),
        ("send_welcome", Some("AC00100000001".to_string()), true),
    ];
    assert_eq!(call_sequence(&direct_log), expected);
    assert_eq!(call_sequence(&wrapped_log), expected);
}

#[test]
fn test_wrapped_repository_failure_skips_welcome() {
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));
    let repository = Arc::new(RecordingRepository {
        log: log.clone(),
        fail: true,
    });
    let notifier = RecordingNotifier { log: log.clone() };
    let service = AccountService::new(repository, &notifier);

    let mut account = Account::new("Ada", "ada@example.com");
    assert!(service.open_account(&mut account).is_err());
    assert_eq!(
        call_sequence(&log),
        vec![("create", Some("AC00100000001".to_string()), true)]
    );
}

mock! {
    Repo {}
    impl AccountRepository for Repo {
        fn create(&self, account: &Account) -> Result<()>;
    }
}

mock! {
    Notifier {}
    impl NotificationService for Notifier {
        fn send_welcome(&self, account: &Account) -> Result<()>;
    }
}

#[test]
fn test_sequenced_mocks_see_same_enriched_account() {
    let mut seq = Sequence::new();
    let mut repo = MockRepo::new();
    let mut notifier = MockNotifier::new();

    repo.expect_create()
        .withf(|account| account.holder_name == "Ada" && account.is_enriched())
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    notifier
        .expect_send_welcome()
        .withf(|account| account.holder_name == "Ada" && account.account_number() == Some("AC00100000001"))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));

    let service = AccountService::new(repo, notifier);
    let mut account = Account::new("Ada", "ada@example.com");
    service.open_account(&mut account).unwrap();
}

#[test]
fn test_mocked_create_failure_propagates_unchanged() {
    let mut repo = MockRepo::new();
    let mut notifier = MockNotifier::new();

    repo.expect_create()
        .times(1)
        .returning(|_| Err(OnboardingError::repository("constraint violation")));
    notifier.expect_send_welcome().times(0);

    let service = AccountService::new(repo, notifier);
    let mut account = Account::new("Ada", "ada@example.com");

    let err = service.open_account(&mut account).unwrap_err();
    assert_eq!(err.to_string(), "Repository error: constraint violation");
}
