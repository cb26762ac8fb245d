use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{AuthError, AuthResult};
use crate::models::{NewUser, User};

/// Repository trait for User persistence
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user; the store assigns id and timestamps.
    /// Fails with `DuplicateEmail` when the e-mail is already taken.
    async fn create(&self, user: NewUser) -> AuthResult<User>;

    /// Get a user by ID
    async fn get_by_id(&self, id: i64) -> AuthResult<Option<User>>;

    /// Get a user by e-mail (case-insensitive)
    async fn get_by_email(&self, email: &str) -> AuthResult<Option<User>>;

    /// Check whether an e-mail is already taken
    async fn email_exists(&self, email: &str) -> AuthResult<bool>;
}

#[derive(Debug, Default)]
struct Inner {
    users: HashMap<i64, User>,
    next_id: i64,
}

/// In-memory implementation of UserRepository
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> AuthResult<User> {
        let mut inner = self.inner.write().await;

        let email_taken = inner
            .users
            .values()
            .any(|u| u.email.to_lowercase() == user.email.to_lowercase());

        if email_taken {
            return Err(AuthError::DuplicateEmail(user.email));
        }

        inner.next_id += 1;
        let now = Utc::now();
        let user = User {
            id: inner.next_id,
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: now,
            updated_at: now,
        };

        inner.users.insert(user.id, user.clone());

        tracing::info!(user_id = user.id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn get_by_id(&self, id: i64) -> AuthResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> AuthResult<Option<User>> {
        let inner = self.inner.read().await;
        let user = inner
            .users
            .values()
            .find(|u| u.email.to_lowercase() == email.to_lowercase())
            .cloned();
        Ok(user)
    }

    async fn email_exists(&self, email: &str) -> AuthResult<bool> {
        let inner = self.inner.read().await;
        let exists = inner
            .users
            .values()
            .any(|u| u.email.to_lowercase() == email.to_lowercase());
        Ok(exists)
    }
}
