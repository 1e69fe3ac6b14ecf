use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::auth::model::{AuthToken, Role, Session, User};
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct SessionEntity {
    pub token: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl SessionEntity {
    pub fn into_domain(self) -> Result<Session, RepositoryError> {
        let role = self
            .role
            .parse::<Role>()
            .map_err(|_| RepositoryError::Corrupted)?;

        Ok(Session::from_repository(
            AuthToken::new(self.token),
            User {
                id: UserId::new(self.user_id),
                name: self.name,
                email: self.email,
                phone: self.phone,
                role,
            },
            self.created_at,
        ))
    }
}
