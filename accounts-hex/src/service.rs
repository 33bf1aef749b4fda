//! Account Application Service
//!
//! Orchestrates domain operations through the repository port.
//! Contains NO infrastructure logic - pure business orchestration.

use accounts_types::{
    Account, AccountId, AccountRepository, AccountRequest, AccountResponse, AppError, DebtRequest,
    DebtResponse, HistoryResponse, RepoError,
};

/// Application service for account operations.
///
/// Generic over `R: AccountRepository` - the adapter is injected at compile
/// time. This enables:
/// - Swapping repositories without code changes
/// - Testing with an in-memory repo
/// - Compile-time checks for port implementation
pub struct AccountService<R: AccountRepository> {
    repo: R,
}

impl<R: AccountRepository> AccountService<R> {
    /// Creates a new account service with the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Account Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Lists all accounts.
    pub async fn list_accounts(&self) -> Result<Vec<AccountResponse>, AppError> {
        let accounts = self.repo.list_accounts().await?;
        Ok(accounts.into_iter().map(AccountResponse::from).collect())
    }

    /// Gets an account by ID.
    pub async fn get_account(&self, id: AccountId) -> Result<AccountResponse, AppError> {
        self.repo
            .get_account(id)
            .await
            .map_err(Into::into)
            .and_then(|opt| {
                opt.map(AccountResponse::from)
                    .ok_or_else(|| AppError::NotFound(format!("Account with ID {} not found", id)))
            })
    }

    /// Creates a new account.
    pub async fn create_account(&self, req: AccountRequest) -> Result<AccountResponse, AppError> {
        self.save(req).await
    }

    /// Updates an existing account.
    ///
    /// The request is expected to carry the target id; without one a fresh
    /// account is created, since creates and updates take the same
    /// persistence path.
    pub async fn update_account(&self, req: AccountRequest) -> Result<AccountResponse, AppError> {
        self.save(req).await
    }

    /// Deletes an account by ID. Deleting an absent id succeeds.
    pub async fn delete_account(&self, id: AccountId) -> Result<(), AppError> {
        self.repo.delete_account(id).await.map_err(Into::into)
    }

    async fn save(&self, req: AccountRequest) -> Result<AccountResponse, AppError> {
        let mut account = Account::new(req.username, req.balance)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        if let Some(id) = req.id {
            account.id = id;
        }

        let saved = self.repo.save_account(account).await?;
        Ok(AccountResponse::from(saved))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Debt Settlement
    // ─────────────────────────────────────────────────────────────────────────

    /// Settles a debt against the balance of the account owned by `username`.
    ///
    /// Returns the portion of the debt left unpaid; 0 when fully covered.
    pub async fn pay_debt(
        &self,
        req: DebtRequest,
        username: &str,
    ) -> Result<DebtResponse, AppError> {
        if req.debt < 0 {
            return Err(AppError::BadRequest("Debt cannot be negative".into()));
        }

        match self.repo.settle_debt(username, req.debt).await {
            Ok(outcome) => Ok(DebtResponse {
                debt: outcome.remaining_debt,
            }),
            Err(RepoError::NotFound) => Err(AppError::NotFound(format!(
                "Account with username {} not found",
                username
            ))),
            Err(e) => Err(e.into()),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // History
    // ─────────────────────────────────────────────────────────────────────────

    /// Lists history rows for an account, newest first.
    pub async fn list_history(&self, id: AccountId) -> Result<Vec<HistoryResponse>, AppError> {
        // Verify account exists first
        let _ = self.get_account(id).await?;

        let records = self.repo.list_history_for_account(id).await?;
        Ok(records.into_iter().map(HistoryResponse::from).collect())
    }
}
