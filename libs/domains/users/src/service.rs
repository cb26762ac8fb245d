use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use std::sync::Arc;

use crate::error::{AuthError, AuthResult};
use crate::models::{NewUser, RegisterRequest, User};
use crate::repository::UserRepository;

/// Service layer for registration and credential verification
pub struct AuthService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> AuthService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Register a new user with a hashed password. The plaintext password
    /// is never stored.
    pub async fn register(&self, input: RegisterRequest) -> AuthResult<User> {
        if self.repository.email_exists(&input.email).await? {
            return Err(AuthError::DuplicateEmail(input.email));
        }

        let password_hash = self
            .hash_password(&input.password)
            .map_err(|e| AuthError::Registration(e.to_string()))?;

        let user = self
            .repository
            .create(NewUser {
                name: input.name,
                email: input.email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = user.id, email = %user.email, "User registered successfully");
        Ok(user)
    }

    /// Verify credentials for login. An unknown e-mail and a wrong password
    /// produce the same error, so callers cannot probe which addresses are
    /// registered.
    pub async fn verify_credentials(&self, email: &str, password: &str) -> AuthResult<User> {
        let user = self
            .repository
            .get_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.verify_password(password, &user.password_hash)? {
            tracing::warn!(email = %email, "Login failed: invalid credentials");
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Get a user by id; absence is data, the caller decides the status.
    pub async fn get_user(&self, id: i64) -> AuthResult<Option<User>> {
        self.repository.get_by_id(id).await
    }

    fn hash_password(&self, password: &str) -> AuthResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::Internal(format!("password hashing error: {}", e)))
    }

    fn verify_password(&self, password: &str, hash: &str) -> AuthResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AuthError::Internal(format!("stored password hash is invalid: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl<R: UserRepository> Clone for AuthService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
