use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::errors::DirectoryError;
use crate::auth::models::User;
use crate::auth::models::UserId;
use crate::auth::models::Username;
use crate::auth::ports::UserDirectory;

pub struct PostgresUserDirectory {
    pool: PgPool,
}

impl PostgresUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    email: String,
    enabled: bool,
    created_at: DateTime<Utc>,
    last_login_at: Option<DateTime<Utc>>,
}

impl UserRow {
    fn into_user(self) -> Result<User, DirectoryError> {
        let raw_username = self.username.clone();
        let username = Username::new(self.username).map_err(|e| DirectoryError::CorruptRecord {
            username: raw_username,
            reason: e.to_string(),
        })?;
        Ok(User {
            id: UserId(self.id),
            username,
            email: self.email,
            enabled: self.enabled,
            created_at: self.created_at,
            last_login_at: self.last_login_at,
        })
    }
}

fn map_sqlx_error(e: sqlx::Error) -> DirectoryError {
    match e {
        sqlx::Error::PoolTimedOut => DirectoryError::Timeout(e.to_string()),
        _ => DirectoryError::Unavailable(e.to_string()),
    }
}

#[async_trait]
impl UserDirectory for PostgresUserDirectory {
    async fn find_by_name(
        &self,
        name: &str,
        include_disabled: bool,
    ) -> Result<Option<User>, DirectoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, enabled, created_at, last_login_at
            FROM users
            WHERE username = $1 AND (enabled OR $2)
            "#,
        )
        .bind(name)
        .bind(include_disabled)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(UserRow::into_user).transpose()
    }

    async fn update_login_time(&self, name: &str) -> Result<(), DirectoryError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET last_login_at = $1
            WHERE username = $2
            "#,
        )
        .bind(Utc::now())
        .bind(name)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        // Best-effort by contract: a missing user is not an error here
        if result.rows_affected() == 0 {
            tracing::debug!(username = %name, "Login time update matched no user");
        }

        Ok(())
    }
}
