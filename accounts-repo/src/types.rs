//! Database row structs and their domain conversions.
//!
//! SQLite stores UUIDs and timestamps as TEXT; these structs are the mapping
//! layer between persistence rows and domain types.

use sqlx::FromRow;

use accounts_types::{Account, AccountHistory, AccountId, HistoryId, Operation, RepoError};

/// Account row from database.
#[derive(FromRow)]
pub struct DbAccount {
    pub id: String,
    pub username: String,
    pub balance: i64,
    pub created_at: String,
}

/// History row from database.
#[derive(FromRow)]
pub struct DbHistory {
    pub id: String,
    pub account_id: String,
    pub operation: String,
    pub amount: i64,
    pub created_at: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Parsing helpers
// ─────────────────────────────────────────────────────────────────────────────

pub fn parse_uuid(s: &str) -> Result<uuid::Uuid, RepoError> {
    uuid::Uuid::parse_str(s).map_err(|e| RepoError::IoFailure(e.to_string()))
}

pub fn parse_datetime(s: &str) -> Result<chrono::DateTime<chrono::Utc>, RepoError> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&chrono::Utc))
        .map_err(|e| RepoError::IoFailure(e.to_string()))
}

pub fn parse_operation(s: &str) -> Result<Operation, RepoError> {
    match s {
        "SPEND" => Ok(Operation::Spend),
        _ => Err(RepoError::IoFailure(format!("Unknown operation: {}", s))),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Domain conversion
// ─────────────────────────────────────────────────────────────────────────────

impl DbAccount {
    /// Convert database row to domain Account.
    pub fn into_domain(self) -> Result<Account, RepoError> {
        let id = AccountId::from_uuid(parse_uuid(&self.id)?);
        let created_at = parse_datetime(&self.created_at)?;

        Ok(Account::from_parts(
            id,
            self.username,
            self.balance,
            created_at,
        ))
    }
}

impl DbHistory {
    /// Convert database row to domain AccountHistory.
    pub fn into_domain(self) -> Result<AccountHistory, RepoError> {
        let id = HistoryId::from_uuid(parse_uuid(&self.id)?);
        let account_id = AccountId::from_uuid(parse_uuid(&self.account_id)?);
        let operation = parse_operation(&self.operation)?;
        let created_at = parse_datetime(&self.created_at)?;

        Ok(AccountHistory::from_parts(
            id,
            account_id,
            operation,
            self.amount,
            created_at,
        ))
    }
}
