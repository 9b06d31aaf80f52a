use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::AppResult,
    models::{LoginAttempt, NewLoginAttempt, NewRegistration, UserRegistration},
};

use super::AccountStore;

/// In-process account storage, mirroring the two database tables
#[derive(Clone, Default)]
pub struct MemoryAccountStore {
    inner: Arc<RwLock<MemoryTables>>,
}

#[derive(Default)]
struct MemoryTables {
    registrations: Vec<UserRegistration>,
    logins: Vec<LoginAttempt>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn registrations(&self) -> Vec<UserRegistration> {
        self.inner.read().await.registrations.clone()
    }

    pub async fn logins(&self) -> Vec<LoginAttempt> {
        self.inner.read().await.logins.clone()
    }
}

#[async_trait::async_trait]
impl AccountStore for MemoryAccountStore {
    async fn register_user(&self, registration: NewRegistration) -> AppResult<i32> {
        let mut tables = self.inner.write().await;
        let user_id = tables.registrations.len() as i32 + 1;
        tables.registrations.push(UserRegistration {
            user_id,
            user_name: registration.name,
            user_email: registration.email,
            user_password: registration.password,
        });
        Ok(user_id)
    }

    async fn record_login(&self, attempt: NewLoginAttempt) -> AppResult<i32> {
        let mut tables = self.inner.write().await;
        let login_id = tables.logins.len() as i32 + 1;
        tables.logins.push(LoginAttempt {
            login_id,
            login_name: attempt.name,
            login_password: attempt.password,
        });
        Ok(login_id)
    }
}
