//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Account, AccountHistory, AccountId, HistoryId, Operation};

// ─────────────────────────────────────────────────────────────────────────────
// Account DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create or update an account.
///
/// Create and update share one shape and one persistence path: when `id` is
/// absent a fresh one is generated, when present the matching row is
/// overwritten.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccountRequest {
    /// Account identifier; omit to create a new account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<AccountId>,
    /// Owning user
    #[schema(example = "alice")]
    pub username: String,
    /// Balance in smallest currency unit
    #[schema(example = 10000)]
    pub balance: i64,
}

/// Account in response form.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccountResponse {
    /// Unique account identifier
    pub id: AccountId,
    /// Owning user
    #[schema(example = "alice")]
    pub username: String,
    /// Current balance in smallest currency unit
    #[schema(example = 10000)]
    pub balance: i64,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            username: account.username,
            balance: account.balance,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Debt settlement DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to settle a debt against an account balance.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DebtRequest {
    /// Requested debt amount in smallest currency unit
    #[schema(example = 500)]
    pub debt: i64,
}

/// Portion of a requested debt left unpaid after settlement.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DebtResponse {
    /// Remaining unpaid debt; 0 when fully covered
    #[schema(example = 0)]
    pub debt: i64,
}

// ─────────────────────────────────────────────────────────────────────────────
// History DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// History record in response form.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoryResponse {
    /// Unique record identifier
    pub id: HistoryId,
    /// The account the operation applied to
    pub account_id: AccountId,
    /// Operation kind
    pub operation: Operation,
    /// Recorded amount in smallest currency unit
    #[schema(example = 70)]
    pub amount: i64,
    /// When the record was written (RFC 3339)
    #[schema(value_type = String, example = "2024-01-01T00:00:00Z")]
    pub created_at: String,
}

impl From<AccountHistory> for HistoryResponse {
    fn from(record: AccountHistory) -> Self {
        Self {
            id: record.id,
            account_id: record.account_id,
            operation: record.operation,
            amount: record.amount,
            created_at: record.created_at.to_rfc3339(),
        }
    }
}
