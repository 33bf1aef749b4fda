//! Account domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::DomainError;

/// Unique identifier for an Account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Creates a new random AccountId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an AccountId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AccountId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A user's monetary balance record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,
    /// Owning user, unique across accounts
    pub username: String,
    /// Current balance in smallest currency unit, never negative
    pub balance: i64,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new account.
    ///
    /// # Validation
    /// - Username cannot be empty
    /// - Balance cannot be negative
    pub fn new(username: String, balance: i64) -> Result<Self, DomainError> {
        if username.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Username cannot be empty".into(),
            ));
        }
        if balance < 0 {
            return Err(DomainError::NegativeBalance);
        }

        Ok(Self {
            id: AccountId::new(),
            username,
            balance,
            created_at: Utc::now(),
        })
    }

    /// Creates an account with all fields specified (for database reconstruction).
    pub fn from_parts(
        id: AccountId,
        username: String,
        balance: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            balance,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_creation() {
        let account = Account::new("alice".to_string(), 500).unwrap();
        assert_eq!(account.username, "alice");
        assert_eq!(account.balance, 500);
    }

    #[test]
    fn test_empty_username_fails() {
        let result = Account::new("   ".to_string(), 0);
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[test]
    fn test_negative_balance_fails() {
        let result = Account::new("alice".to_string(), -1);
        assert!(matches!(result, Err(DomainError::NegativeBalance)));
    }
}
