//! Credential storage.
//!
//! [`UserStore`] is the storage seam; [`InMemoryUserStore`] is the only
//! backend shipped. [`CredentialStore`] layers hashing and the registration
//! and login rules on top of whichever store it is given.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::info;

use super::AuthError;
use super::password::PasswordHasher;
use crate::models::auth::User;

/// Username → user storage.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Exact, case-sensitive lookup.
    async fn find(&self, username: &str) -> Option<User>;

    /// Insert a new user. Must fail with [`AuthError::UsernameTaken`] if the
    /// username is present, atomically with respect to other inserts.
    async fn insert(&self, user: User) -> Result<(), AuthError>;

    async fn count(&self) -> usize;
}

/// Process-lifetime user store.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: DashMap<String, User>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find(&self, username: &str) -> Option<User> {
        self.users.get(username).map(|u| u.value().clone())
    }

    async fn insert(&self, user: User) -> Result<(), AuthError> {
        match self.users.entry(user.username.clone()) {
            Entry::Occupied(_) => Err(AuthError::UsernameTaken),
            Entry::Vacant(slot) => {
                slot.insert(user);
                Ok(())
            }
        }
    }

    async fn count(&self) -> usize {
        self.users.len()
    }
}

/// Registration and credential checks over a [`UserStore`].
#[derive(Clone)]
pub struct CredentialStore {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
}

impl CredentialStore {
    pub fn new(users: Arc<dyn UserStore>, hasher: PasswordHasher) -> Self {
        Self { users, hasher }
    }

    /// In-memory store with the given hasher.
    pub fn in_memory(hasher: PasswordHasher) -> Self {
        Self::new(Arc::new(InMemoryUserStore::new()), hasher)
    }

    /// Register a new user, hashing the password before it is stored.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::ValidationError(
                "Username and password are required".into(),
            ));
        }

        // Skip the hash for the common duplicate case; insert re-checks.
        if self.users.find(username).await.is_some() {
            return Err(AuthError::UsernameTaken);
        }

        let password_hash = self.hasher.hash_blocking(password).await?;
        self.users
            .insert(User {
                username: username.to_string(),
                password_hash,
            })
            .await?;

        info!(username, "user registered");
        Ok(())
    }

    pub async fn find(&self, username: &str) -> Option<User> {
        self.users.find(username).await
    }

    /// Check a username/password pair. Unknown users and wrong passwords
    /// produce the same [`AuthError::CredentialError`].
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let Some(user) = self.users.find(username).await else {
            return Err(AuthError::CredentialError);
        };
        if !self
            .hasher
            .verify_blocking(password, &user.password_hash)
            .await?
        {
            return Err(AuthError::CredentialError);
        }
        Ok(user)
    }

    pub async fn user_count(&self) -> usize {
        self.users.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> CredentialStore {
        CredentialStore::in_memory(PasswordHasher::new(4).unwrap())
    }

    #[tokio::test]
    async fn second_registration_of_same_name_fails() {
        let store = credentials();
        store.register("alice", "pw").await.unwrap();
        assert!(matches!(
            store.register("alice", "other").await,
            Err(AuthError::UsernameTaken)
        ));
        assert_eq!(store.user_count().await, 1);
    }

    #[tokio::test]
    async fn usernames_are_case_sensitive() {
        let store = credentials();
        store.register("alice", "pw").await.unwrap();
        store.register("Alice", "pw").await.unwrap();
        assert_eq!(store.user_count().await, 2);
        assert!(store.find("ALICE").await.is_none());
    }

    #[tokio::test]
    async fn stored_password_is_hashed() {
        let store = credentials();
        store.register("alice", "plaintext").await.unwrap();
        let user = store.find("alice").await.unwrap();
        assert_ne!(user.password_hash, "plaintext");
        assert!(user.password_hash.starts_with("$2"));
    }

    #[tokio::test]
    async fn empty_fields_are_rejected() {
        let store = credentials();
        assert!(matches!(
            store.register("", "pw").await,
            Err(AuthError::ValidationError(_))
        ));
        assert!(matches!(
            store.register("alice", "").await,
            Err(AuthError::ValidationError(_))
        ));
        assert_eq!(store.user_count().await, 0);
    }

    #[tokio::test]
    async fn authenticate_requires_existing_user_and_matching_password() {
        let store = credentials();
        store.register("alice", "right").await.unwrap();

        assert_eq!(
            store.authenticate("alice", "right").await.unwrap().username,
            "alice"
        );
        assert!(matches!(
            store.authenticate("alice", "wrong").await,
            Err(AuthError::CredentialError)
        ));
        assert!(matches!(
            store.authenticate("bob", "right").await,
            Err(AuthError::CredentialError)
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_registrations_admit_exactly_one() {
        let store = credentials();
        let mut handles = Vec::new();
        for i in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.register("racer", &format!("pw{i}")).await
            }));
        }

        let mut ok = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(()) => ok += 1,
                Err(AuthError::UsernameTaken) => {}
                Err(e) => panic!("unexpected error: {e}"),
            }
        }
        assert_eq!(ok, 1);
        assert_eq!(store.user_count().await, 1);
    }

    #[tokio::test]
    async fn in_memory_insert_rejects_duplicates() {
        let users = InMemoryUserStore::new();
        let user = User {
            username: "alice".into(),
            password_hash: "h".into(),
        };
        users.insert(user.clone()).await.unwrap();
        assert!(matches!(
            users.insert(user).await,
            Err(AuthError::UsernameTaken)
        ));
    }
}
