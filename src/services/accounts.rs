use crate::{
    db::AccountStore,
    error::AppResult,
    models::{NewLoginAttempt, NewRegistration},
};

/// Stores a registration form submission
pub async fn register_user(store: &dyn AccountStore, registration: NewRegistration) -> AppResult<i32> {
    let user_name = registration.name.clone();
    let user_id = store.register_user(registration).await?;
    tracing::info!(user_id, user_name = %user_name, "User registered");
    Ok(user_id)
}

/// Stores a login form submission without checking it
pub async fn record_login(store: &dyn AccountStore, attempt: NewLoginAttempt) -> AppResult<i32> {
    let login_name = attempt.name.clone();
    let login_id = store.record_login(attempt).await?;
    tracing::info!(login_id, login_name = %login_name, "Login attempt recorded");
    Ok(login_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MockAccountStore;
    use crate::error::AppError;

    #[tokio::test]
    async fn test_register_user_inserts_once() {
        let mut store = MockAccountStore::new();
        store
            .expect_register_user()
            .withf(|r| r.name == "ada" && r.email == "ada@example.com" && r.password == "pw")
            .times(1)
            .returning(|_| Ok(42));
        store.expect_record_login().never();

        let registration = NewRegistration {
            name: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "pw".to_string(),
        };
        assert_eq!(register_user(&store, registration).await.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_record_login_inserts_once() {
        let mut store = MockAccountStore::new();
        store
            .expect_record_login()
            .withf(|a| a.name == "grace" && a.password == "pw")
            .times(1)
            .returning(|_| Ok(7));
        store.expect_register_user().never();

        let attempt = NewLoginAttempt {
            name: "grace".to_string(),
            password: "pw".to_string(),
        };
        assert_eq!(record_login(&store, attempt).await.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let mut store = MockAccountStore::new();
        store
            .expect_record_login()
            .times(1)
            .returning(|_| Err(AppError::Database(sqlx::Error::PoolTimedOut)));

        let attempt = NewLoginAttempt {
            name: "grace".to_string(),
            password: "pw".to_string(),
        };
        let err = record_login(&store, attempt).await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }
}
