//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use accounts_types::domain::{AccountId, HistoryId, Operation};
use accounts_types::dto::{
    AccountRequest, AccountResponse, DebtRequest, DebtResponse, HistoryResponse,
};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// List all accounts
#[utoipa::path(
    get,
    path = "/api/accounts",
    tag = "accounts",
    responses(
        (status = 200, description = "List of accounts", body = Vec<AccountResponse>)
    )
)]
async fn list_accounts() {}

/// Get account by ID
#[utoipa::path(
    get,
    path = "/api/accounts/{id}",
    tag = "accounts",
    params(
        ("id" = String, Path, description = "Account ID (UUID)")
    ),
    responses(
        (status = 200, description = "The account", body = AccountResponse),
        (status = 404, description = "No account with the given ID")
    )
)]
async fn get_account() {}

/// Create a new account
#[utoipa::path(
    post,
    path = "/api/accounts",
    tag = "accounts",
    request_body = AccountRequest,
    responses(
        (status = 201, description = "Account created", body = AccountResponse),
        (status = 400, description = "Validation failed or username already taken")
    )
)]
async fn create_account() {}

/// Update an existing account
#[utoipa::path(
    put,
    path = "/api/accounts",
    tag = "accounts",
    request_body = AccountRequest,
    responses(
        (status = 200, description = "Account updated", body = AccountResponse),
        (status = 400, description = "Validation failed or username already taken")
    )
)]
async fn update_account() {}

/// Delete an account
#[utoipa::path(
    delete,
    path = "/api/accounts/{id}",
    tag = "accounts",
    params(
        ("id" = String, Path, description = "Account ID (UUID)")
    ),
    responses(
        (status = 204, description = "Account deleted (or was already absent)")
    )
)]
async fn delete_account() {}

/// List history rows for an account
#[utoipa::path(
    get,
    path = "/api/accounts/{id}/history",
    tag = "history",
    params(
        ("id" = String, Path, description = "Account ID (UUID)")
    ),
    responses(
        (status = 200, description = "History rows, newest first", body = Vec<HistoryResponse>),
        (status = 404, description = "No account with the given ID")
    )
)]
async fn list_history() {}

/// Settle a debt against a user's balance
#[utoipa::path(
    post,
    path = "/api/users/{username}/pay",
    tag = "settlement",
    params(
        ("username" = String, Path, description = "Owning username")
    ),
    request_body = DebtRequest,
    responses(
        (status = 200, description = "Remaining unpaid debt", body = DebtResponse),
        (status = 400, description = "Negative debt amount"),
        (status = 404, description = "No account for the given username")
    )
)]
async fn pay_debt() {}

/// OpenAPI documentation for the Accounts API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Account Service API",
        version = "1.0.0",
        description = "Account CRUD plus debt settlement against account balances.",
        license(name = "MIT"),
    ),
    paths(
        health,
        list_accounts,
        get_account,
        create_account,
        update_account,
        delete_account,
        list_history,
        pay_debt,
    ),
    components(
        schemas(
            AccountRequest,
            AccountResponse,
            DebtRequest,
            DebtResponse,
            HistoryResponse,
            Operation,
            AccountId,
            HistoryId,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "accounts", description = "Account management operations"),
        (name = "settlement", description = "Debt settlement against balances"),
        (name = "history", description = "Balance-affecting operation log"),
    )
)]
pub struct ApiDoc;
