use async_trait::async_trait;
use sqlx::SqlitePool;

use business::domain::auth::model::Session;
use business::domain::auth::repository::SessionRepository;
use business::domain::errors::RepositoryError;

use super::entity::SessionEntity;

/// Keeps the single signed-in session in row `id = 1`.
pub struct SessionRepositorySqlite {
    pool: SqlitePool,
}

impl SessionRepositorySqlite {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for SessionRepositorySqlite {
    async fn load(&self) -> Result<Option<Session>, RepositoryError> {
        let entity = sqlx::query_as::<_, SessionEntity>(
            "SELECT token, user_id, name, email, phone, role, created_at FROM sessions WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        entity.map(|e| e.into_domain()).transpose()
    }

    async fn save(&self, session: &Session) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO sessions (id, token, user_id, name, email, phone, role, created_at)
            VALUES (1, $1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                token = EXCLUDED.token,
                user_id = EXCLUDED.user_id,
                name = EXCLUDED.name,
                email = EXCLUDED.email,
                phone = EXCLUDED.phone,
                role = EXCLUDED.role,
                created_at = EXCLUDED.created_at"#,
        )
        .bind(session.token.as_str())
        .bind(session.user.id.as_str())
        .bind(&session.user.name)
        .bind(&session.user.email)
        .bind(&session.user.phone)
        .bind(session.user.role.to_string())
        .bind(session.created_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM sessions")
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
