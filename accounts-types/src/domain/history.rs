//! Account history domain model.
//!
//! History rows are append-only: each one records a balance-affecting
//! operation and is never updated or deleted afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::account::AccountId;

/// Unique identifier for a history record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct HistoryId(Uuid);

impl HistoryId {
    /// Creates a new random HistoryId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a HistoryId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for HistoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for HistoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of balance-affecting operation a history row records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    Spend,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Spend => write!(f, "SPEND"),
        }
    }
}

/// An immutable log entry of a balance-affecting operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountHistory {
    /// Unique identifier
    pub id: HistoryId,
    /// The account the operation applied to
    pub account_id: AccountId,
    /// Operation kind
    pub operation: Operation,
    /// Recorded amount in smallest currency unit
    pub amount: i64,
    /// When the record was written
    pub created_at: DateTime<Utc>,
}

impl AccountHistory {
    /// Creates a SPEND record for the given account.
    pub fn spend(account_id: AccountId, amount: i64) -> Self {
        Self {
            id: HistoryId::new(),
            account_id,
            operation: Operation::Spend,
            amount,
            created_at: Utc::now(),
        }
    }

    /// Creates a record with all fields specified (for database reconstruction).
    pub fn from_parts(
        id: HistoryId,
        account_id: AccountId,
        operation: Operation,
        amount: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            account_id,
            operation,
            amount,
            created_at,
        }
    }
}
