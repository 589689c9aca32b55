//! Password hashing via bcrypt.
//!
//! The salt is generated per call and embedded in the hash string, so
//! verification needs nothing but the stored hash. bcrypt compares digests in
//! constant time.

use super::AuthError;

/// Default bcrypt cost factor.
pub const DEFAULT_BCRYPT_COST: u32 = 8;

/// Lowest and highest cost accepted by bcrypt.
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// bcrypt hasher with a fixed work factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl PasswordHasher {
    /// Create a hasher with the given cost, rejecting values bcrypt refuses.
    pub fn new(cost: u32) -> Result<Self, AuthError> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
            return Err(AuthError::ValidationError(format!(
                "bcrypt cost must be between {MIN_BCRYPT_COST} and {MAX_BCRYPT_COST}, got {cost}"
            )));
        }
        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password with a fresh salt.
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| AuthError::Internal(format!("bcrypt hash: {e}")))
    }

    /// Verify a password against a bcrypt hash.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        bcrypt::verify(password, hash)
            .map_err(|e| AuthError::Internal(format!("bcrypt verify: {e}")))
    }

    /// [`hash`](Self::hash) on the blocking pool.
    pub async fn hash_blocking(&self, password: &str) -> Result<String, AuthError> {
        let hasher = *self;
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::Internal(format!("hash task: {e}")))?
    }

    /// [`verify`](Self::verify) on the blocking pool.
    pub async fn verify_blocking(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let hasher = *self;
        let password = password.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| AuthError::Internal(format!("verify task: {e}")))?
    }
}
