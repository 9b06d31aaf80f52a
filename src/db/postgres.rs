use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    error::AppResult,
    models::{NewLoginAttempt, NewRegistration},
};

use super::AccountStore;

/// Creates a PostgreSQL connection pool
pub async fn create_pool(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Applies the schema in `migrations/`
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

/// Account storage backed by the `user_registration` and `user_login` tables
#[derive(Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl AccountStore for PgAccountStore {
    async fn register_user(&self, registration: NewRegistration) -> AppResult<i32> {
        let user_id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO user_registration (user_name, user_email, user_password) \
             VALUES ($1, $2, $3) RETURNING user_id",
        )
        .bind(&registration.name)
        .bind(&registration.email)
        .bind(&registration.password)
        .fetch_one(&self.pool)
        .await?;

        Ok(user_id)
    }

    async fn record_login(&self, attempt: NewLoginAttempt) -> AppResult<i32> {
        let login_id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO user_login (login_name, login_password) VALUES ($1, $2) RETURNING login_id",
        )
        .bind(&attempt.name)
        .bind(&attempt.password)
        .fetch_one(&self.pool)
        .await?;

        Ok(login_id)
    }
}
