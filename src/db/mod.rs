pub mod memory;
pub mod postgres;

pub use memory::MemoryAccountStore;
pub use postgres::{create_pool, run_migrations, PgAccountStore};

use crate::{
    error::AppResult,
    models::{NewLoginAttempt, NewRegistration},
};

/// Write-only storage for account form submissions
///
/// Each call performs exactly one insert. There is no duplicate detection and
/// nothing is read back.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait AccountStore: Send + Sync {
    /// Persists a registration and returns its generated `user_id`
    async fn register_user(&self, registration: NewRegistration) -> AppResult<i32>;

    /// Persists a login attempt and returns its generated `login_id`
    async fn record_login(&self, attempt: NewLoginAttempt) -> AppResult<i32>;
}
