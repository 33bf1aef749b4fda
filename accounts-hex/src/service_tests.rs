//! AccountService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use accounts_types::{
        Account, AccountHistory, AccountId, AccountRepository, AccountRequest, AppError,
        DebtRequest, Operation, RepoError, SettlementOutcome, settle,
    };

    use crate::AccountService;

    /// Simple in-memory repository for testing the service layer.
    pub struct MockRepo {
        accounts: Mutex<HashMap<AccountId, Account>>,
        history: Mutex<Vec<AccountHistory>>,
    }

    impl MockRepo {
        pub fn new() -> Self {
            Self {
                accounts: Mutex::new(HashMap::new()),
                history: Mutex::new(Vec::new()),
            }
        }

        pub fn history_rows(&self) -> Vec<AccountHistory> {
            self.history.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AccountRepository for MockRepo {
        async fn list_accounts(&self) -> Result<Vec<Account>, RepoError> {
            Ok(self.accounts.lock().unwrap().values().cloned().collect())
        }

        async fn get_account(&self, id: AccountId) -> Result<Option<Account>, RepoError> {
            Ok(self.accounts.lock().unwrap().get(&id).cloned())
        }

        async fn get_account_by_username(
            &self,
            username: &str,
        ) -> Result<Option<Account>, RepoError> {
            Ok(self
                .accounts
                .lock()
                .unwrap()
                .values()
                .find(|a| a.username == username)
                .cloned())
        }

        async fn save_account(&self, account: Account) -> Result<Account, RepoError> {
            let mut accounts = self.accounts.lock().unwrap();
            let taken = accounts
                .values()
                .any(|a| a.username == account.username && a.id != account.id);
            if taken {
                return Err(RepoError::Conflict(format!(
                    "UNIQUE constraint failed: accounts.username ({})",
                    account.username
                )));
            }
            accounts.insert(account.id, account.clone());
            Ok(account)
        }

        async fn delete_account(&self, id: AccountId) -> Result<(), RepoError> {
            self.accounts.lock().unwrap().remove(&id);
            Ok(())
        }

        async fn settle_debt(
            &self,
            username: &str,
            debt: i64,
        ) -> Result<SettlementOutcome, RepoError> {
            let mut accounts = self.accounts.lock().unwrap();
            let account = accounts
                .values_mut()
                .find(|a| a.username == username)
                .ok_or(RepoError::NotFound)?;

            let settlement = settle(account.balance, debt);
            account.balance = settlement.new_balance;

            let history = if settlement.difference != 0 {
                let record = AccountHistory::spend(account.id, settlement.difference);
                self.history.lock().unwrap().push(record.clone());
                Some(record)
            } else {
                None
            };

            Ok(SettlementOutcome {
                account: account.clone(),
                remaining_debt: settlement.remaining_debt,
                history,
            })
        }

        async fn list_history_for_account(
            &self,
            account_id: AccountId,
        ) -> Result<Vec<AccountHistory>, RepoError> {
            Ok(self
                .history
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.account_id == account_id)
                .cloned()
                .collect())
        }
    }

    fn request(username: &str, balance: i64) -> AccountRequest {
        AccountRequest {
            id: None,
            username: username.to_string(),
            balance,
        }
    }

    #[tokio::test]
    async fn test_create_account_success() {
        let service = AccountService::new(MockRepo::new());

        let account = service.create_account(request("alice", 500)).await.unwrap();

        assert_eq!(account.username, "alice");
        assert_eq!(account.balance, 500);
    }

    #[tokio::test]
    async fn test_create_account_empty_username_fails() {
        let service = AccountService::new(MockRepo::new());

        let result = service.create_account(request("   ", 0)).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_create_account_negative_balance_fails() {
        let service = AccountService::new(MockRepo::new());

        let result = service.create_account(request("alice", -5)).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_update_account_overwrites_fields() {
        let service = AccountService::new(MockRepo::new());

        let created = service.create_account(request("alice", 500)).await.unwrap();

        let updated = service
            .update_account(AccountRequest {
                id: Some(created.id),
                username: "alice".to_string(),
                balance: 900,
            })
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.balance, 900);
        assert_eq!(service.list_accounts().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_conflict_becomes_bad_request() {
        let service = AccountService::new(MockRepo::new());

        service.create_account(request("alice", 100)).await.unwrap();
        let result = service.create_account(request("alice", 200)).await;

        // The store's message is forwarded verbatim.
        assert!(
            matches!(result, Err(AppError::BadRequest(msg)) if msg.contains("UNIQUE constraint"))
        );
    }

    #[tokio::test]
    async fn test_get_account_not_found_names_id() {
        let service = AccountService::new(MockRepo::new());

        let id = AccountId::new();
        let result = service.get_account(id).await;

        match result {
            Err(AppError::NotFound(msg)) => assert!(msg.contains(&id.to_string())),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_absent_account_succeeds() {
        let service = AccountService::new(MockRepo::new());

        service.delete_account(AccountId::new()).await.unwrap();
    }

    #[tokio::test]
    async fn test_pay_debt_fully_covered() {
        let service = AccountService::new(MockRepo::new());

        let account = service.create_account(request("alice", 100)).await.unwrap();

        let response = service
            .pay_debt(DebtRequest { debt: 30 }, "alice")
            .await
            .unwrap();

        assert_eq!(response.debt, 0);
        assert_eq!(service.get_account(account.id).await.unwrap().balance, 70);

        let history = service.repo().history_rows();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].amount, 70);
        assert_eq!(history[0].operation, Operation::Spend);
    }

    #[tokio::test]
    async fn test_pay_debt_exceeds_balance() {
        let service = AccountService::new(MockRepo::new());

        let account = service.create_account(request("bob", 30)).await.unwrap();

        let response = service
            .pay_debt(DebtRequest { debt: 100 }, "bob")
            .await
            .unwrap();

        assert_eq!(response.debt, 70);
        assert_eq!(service.get_account(account.id).await.unwrap().balance, 0);

        let history = service.repo().history_rows();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].amount, 70);
    }

    #[tokio::test]
    async fn test_pay_debt_equal_balance_writes_no_history() {
        let service = AccountService::new(MockRepo::new());

        let account = service.create_account(request("carol", 50)).await.unwrap();

        let response = service
            .pay_debt(DebtRequest { debt: 50 }, "carol")
            .await
            .unwrap();

        assert_eq!(response.debt, 0);
        assert_eq!(service.get_account(account.id).await.unwrap().balance, 0);
        assert!(service.repo().history_rows().is_empty());
    }

    #[tokio::test]
    async fn test_pay_zero_debt_leaves_balance_unchanged() {
        let service = AccountService::new(MockRepo::new());

        let account = service.create_account(request("dave", 250)).await.unwrap();

        let response = service
            .pay_debt(DebtRequest { debt: 0 }, "dave")
            .await
            .unwrap();

        assert_eq!(response.debt, 0);
        assert_eq!(service.get_account(account.id).await.unwrap().balance, 250);

        // The difference for a zero debt is the whole balance, so a SPEND row
        // is still recorded with that amount.
        let history = service.repo().history_rows();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].amount, 250);
    }

    #[tokio::test]
    async fn test_pay_negative_debt_fails() {
        let service = AccountService::new(MockRepo::new());

        service.create_account(request("erin", 100)).await.unwrap();

        let result = service.pay_debt(DebtRequest { debt: -1 }, "erin").await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_pay_debt_unknown_username_names_it() {
        let service = AccountService::new(MockRepo::new());

        let result = service.pay_debt(DebtRequest { debt: 10 }, "nobody").await;

        match result {
            Err(AppError::NotFound(msg)) => assert!(msg.contains("nobody")),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_history_requires_existing_account() {
        let service = AccountService::new(MockRepo::new());

        let result = service.list_history(AccountId::new()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_history_returns_settlement_rows() {
        let service = AccountService::new(MockRepo::new());

        let account = service.create_account(request("fred", 100)).await.unwrap();
        service
            .pay_debt(DebtRequest { debt: 30 }, "fred")
            .await
            .unwrap();

        let history = service.list_history(account.id).await.unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].amount, 70);
        assert_eq!(history[0].account_id, account.id);
    }
}
