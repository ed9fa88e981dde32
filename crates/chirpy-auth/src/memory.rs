//! In-memory [`AuthStore`] for tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use chirpy_models::{NewRefreshToken, RefreshToken, User, UserWithPassword};

use crate::error::{AuthError, StoreError};
use crate::password::hash_password_with_cost;
use crate::refresh;
use crate::store::{AuthStore, StoreResult};

/// bcrypt cost used for seeded users.
pub const TEST_HASH_COST: u32 = 4;

#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, UserWithPassword>>,
    refresh_tokens: RwLock<HashMap<String, RefreshToken>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user whose password is hashed at [`TEST_HASH_COST`].
    pub async fn insert_user(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            email: email.to_string(),
            is_chirpy_red: false,
        };
        let hashed_password = hash_password_with_cost(password, TEST_HASH_COST)?;

        self.users.write().await.insert(
            email.to_string(),
            UserWithPassword {
                user: user.clone(),
                hashed_password,
            },
        );
        Ok(user)
    }

    /// Adds a user with an arbitrary stored hash.
    pub async fn insert_user_with_hash(&self, email: &str, hashed_password: &str) -> User {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            email: email.to_string(),
            is_chirpy_red: false,
        };
        self.users.write().await.insert(
            email.to_string(),
            UserWithPassword {
                user: user.clone(),
                hashed_password: hashed_password.to_string(),
            },
        );
        user
    }

    pub async fn refresh_token(&self, token: &str) -> Option<RefreshToken> {
        self.refresh_tokens.read().await.get(token).cloned()
    }

    pub async fn refresh_token_count(&self) -> usize {
        self.refresh_tokens.read().await.len()
    }

    /// Moves a stored token's expiry, e.g. into the past.
    pub async fn set_refresh_expiry(&self, token: &str, expires_at: DateTime<Utc>) -> bool {
        match self.refresh_tokens.write().await.get_mut(token) {
            Some(record) => {
                record.expires_at = expires_at;
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl AuthStore for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<UserWithPassword>> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn insert_refresh_token(&self, new_token: NewRefreshToken) -> StoreResult<RefreshToken> {
        let mut tokens = self.refresh_tokens.write().await;
        if tokens.contains_key(&new_token.token) {
            return Err(StoreError::Conflict("refresh token already exists".to_string()));
        }

        let record = RefreshToken {
            token: new_token.token,
            created_at: new_token.created_at,
            updated_at: new_token.created_at,
            user_id: new_token.user_id,
            expires_at: new_token.expires_at,
            revoked_at: None,
        };
        tokens.insert(record.token.clone(), record.clone());
        Ok(record)
    }

    async fn find_refresh_token(&self, token: &str) -> StoreResult<Option<RefreshToken>> {
        Ok(self.refresh_tokens.read().await.get(token).cloned())
    }

    async fn revoke_refresh_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> StoreResult<Option<RefreshToken>> {
        let mut tokens = self.refresh_tokens.write().await;
        let Some(record) = tokens.remove(token) else {
            return Ok(None);
        };

        let revoked = refresh::revoke(record, now);
        tokens.insert(revoked.token.clone(), revoked.clone());
        Ok(Some(revoked))
    }
}
