//! SQLite repository adapter.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

use accounts_types::{
    Account, AccountHistory, AccountId, AccountRepository, RepoError, SettlementOutcome, settle,
};

use crate::types::{DbAccount, DbHistory};

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent()
                    && !parent.as_os_str().is_empty()
                {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // An in-memory SQLite database lives and dies with its connection,
        // so pin a single long-lived one instead of a rotating pool.
        let pool = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePool::connect_with(options).await?
        };

        // Run migration from migration file
        let ddl = include_str!("../migrations/0001_create_tables.sql");
        sqlx::query(ddl).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Classifies an sqlx error into the narrow repository error kinds.
///
/// Constraint rejections keep the driver's message verbatim so the client
/// sees the store's own reason.
fn map_db_err(e: sqlx::Error) -> RepoError {
    match e {
        sqlx::Error::Database(db) => match db.kind() {
            sqlx::error::ErrorKind::UniqueViolation
            | sqlx::error::ErrorKind::ForeignKeyViolation => {
                RepoError::Conflict(db.message().to_string())
            }
            sqlx::error::ErrorKind::CheckViolation | sqlx::error::ErrorKind::NotNullViolation => {
                RepoError::Validation(db.message().to_string())
            }
            _ => RepoError::IoFailure(db.message().to_string()),
        },
        other => RepoError::IoFailure(other.to_string()),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl AccountRepository for SqliteRepo {
    async fn list_accounts(&self) -> Result<Vec<Account>, RepoError> {
        let rows: Vec<DbAccount> = sqlx::query_as(
            r#"SELECT id, username, balance, created_at FROM accounts ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?;

        rows.into_iter().map(DbAccount::into_domain).collect()
    }

    async fn get_account(&self, id: AccountId) -> Result<Option<Account>, RepoError> {
        let id_str = id.to_string();

        let row: Option<DbAccount> = sqlx::query_as(
            r#"SELECT id, username, balance, created_at FROM accounts WHERE id = ?"#,
        )
        .bind(&id_str)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)?;

        row.map(DbAccount::into_domain).transpose()
    }

    async fn get_account_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, RepoError> {
        let row: Option<DbAccount> = sqlx::query_as(
            r#"SELECT id, username, balance, created_at FROM accounts WHERE username = ?"#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)?;

        row.map(DbAccount::into_domain).transpose()
    }

    async fn save_account(&self, account: Account) -> Result<Account, RepoError> {
        let id_str = account.id.to_string();
        let created_at_str = account.created_at.to_rfc3339();

        // Create and update share this path: an unknown id inserts, a known
        // one overwrites.
        sqlx::query(
            r#"INSERT INTO accounts (id, username, balance, created_at) VALUES (?, ?, ?, ?)
               ON CONFLICT(id) DO UPDATE SET username = excluded.username, balance = excluded.balance"#,
        )
        .bind(&id_str)
        .bind(&account.username)
        .bind(account.balance)
        .bind(&created_at_str)
        .execute(&self.pool)
        .await
        .map_err(map_db_err)?;

        Ok(account)
    }

    async fn delete_account(&self, id: AccountId) -> Result<(), RepoError> {
        let id_str = id.to_string();

        // Deleting an absent id affects zero rows, which is fine.
        sqlx::query(r#"DELETE FROM accounts WHERE id = ?"#)
            .bind(&id_str)
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn settle_debt(
        &self,
        username: &str,
        debt: i64,
    ) -> Result<SettlementOutcome, RepoError> {
        let mut db_tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::IoFailure(e.to_string()))?;

        let row: Option<DbAccount> = sqlx::query_as(
            r#"SELECT id, username, balance, created_at FROM accounts WHERE username = ?"#,
        )
        .bind(username)
        .fetch_optional(&mut *db_tx)
        .await
        .map_err(map_db_err)?;

        let mut account = row.ok_or(RepoError::NotFound)?.into_domain()?;

        let settlement = settle(account.balance, debt);
        tracing::debug!(
            username,
            debt,
            balance = account.balance,
            new_balance = settlement.new_balance,
            remaining = settlement.remaining_debt,
            "settling debt"
        );
        account.balance = settlement.new_balance;

        let account_id_str = account.id.to_string();

        sqlx::query(r#"UPDATE accounts SET balance = ? WHERE id = ?"#)
            .bind(settlement.new_balance)
            .bind(&account_id_str)
            .execute(&mut *db_tx)
            .await
            .map_err(map_db_err)?;

        // A SPEND row is written only for a non-zero difference.
        let history = if settlement.difference != 0 {
            let record = AccountHistory::spend(account.id, settlement.difference);

            sqlx::query(
                r#"INSERT INTO account_history (id, account_id, operation, amount, created_at)
                   VALUES (?, ?, ?, ?, ?)"#,
            )
            .bind(record.id.to_string())
            .bind(&account_id_str)
            .bind(record.operation.to_string())
            .bind(record.amount)
            .bind(record.created_at.to_rfc3339())
            .execute(&mut *db_tx)
            .await
            .map_err(map_db_err)?;

            Some(record)
        } else {
            None
        };

        db_tx
            .commit()
            .await
            .map_err(|e| RepoError::IoFailure(e.to_string()))?;

        Ok(SettlementOutcome {
            account,
            remaining_debt: settlement.remaining_debt,
            history,
        })
    }

    async fn list_history_for_account(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<AccountHistory>, RepoError> {
        let account_id_str = account_id.to_string();

        let rows: Vec<DbHistory> = sqlx::query_as(
            r#"SELECT id, account_id, operation, amount, created_at FROM account_history
               WHERE account_id = ? ORDER BY created_at DESC"#,
        )
        .bind(&account_id_str)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?;

        rows.into_iter().map(DbHistory::into_domain).collect()
    }
}
