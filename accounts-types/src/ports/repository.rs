//! Repository port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (SQLite, InMemory) will implement this trait.

use crate::domain::{Account, AccountHistory, AccountId, SettlementOutcome};
use crate::error::RepoError;

/// The main repository port for account operations.
///
/// Account and history storage sit behind one port: the settlement operation
/// mutates the balance and writes its history row together, so splitting the
/// stores would leave no caller for a standalone history save.
///
/// `settle_debt` MUST be atomic. Implementations should use a database
/// transaction around the balance read, balance update, and history insert.
#[async_trait::async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    // ─────────────────────────────────────────────────────────────────────────
    // Account Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Lists all accounts.
    async fn list_accounts(&self) -> Result<Vec<Account>, RepoError>;

    /// Gets an account by ID.
    async fn get_account(&self, id: AccountId) -> Result<Option<Account>, RepoError>;

    /// Gets an account by its owning username.
    async fn get_account_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, RepoError>;

    /// Inserts or overwrites an account (keyed by id).
    async fn save_account(&self, account: Account) -> Result<Account, RepoError>;

    /// Deletes an account by ID. Deleting an absent id is a no-op.
    async fn delete_account(&self, id: AccountId) -> Result<(), RepoError>;

    // ─────────────────────────────────────────────────────────────────────────
    // Settlement & History
    // ─────────────────────────────────────────────────────────────────────────

    /// Settles a debt against the balance of the account owned by `username`.
    ///
    /// Persists the new balance unconditionally and a SPEND history row iff
    /// the computed difference is non-zero. Fails with [`RepoError::NotFound`]
    /// when no account exists for the username.
    async fn settle_debt(
        &self,
        username: &str,
        debt: i64,
    ) -> Result<SettlementOutcome, RepoError>;

    /// Lists history rows for an account, newest first.
    async fn list_history_for_account(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<AccountHistory>, RepoError>;
}
