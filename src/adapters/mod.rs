// Adapters layer: in-process implementations of the domain ports.

pub mod memory;
pub mod notify;

pub use memory::InMemoryAccountRepository;
pub use notify::{render_welcome, LogNotifier, OutboxNotifier, DEFAULT_WELCOME_TEMPLATE};
