//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use accounts_types::{AccountId, AccountRepository, AccountRequest, AppError, DebtRequest};

use crate::AccountService;

/// Application state shared across handlers.
pub struct AppState<R: AccountRepository> {
    pub service: AccountService<R>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// List all accounts.
#[tracing::instrument(skip(state))]
pub async fn list_accounts<R: AccountRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<impl IntoResponse, ApiError> {
    let accounts = state.service.list_accounts().await?;
    Ok(Json(accounts))
}

/// Get account by ID.
#[tracing::instrument(skip(state), fields(account_id = %id))]
pub async fn get_account<R: AccountRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let account_id: AccountId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid account ID".into()))?;

    let account = state.service.get_account(account_id).await?;
    Ok(Json(account))
}

/// Create a new account.
#[tracing::instrument(skip(state), fields(username = %req.username))]
pub async fn create_account<R: AccountRepository>(
    State(state): State<Arc<AppState<R>>>,
    Json(req): Json<AccountRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let account = state.service.create_account(req).await?;
    Ok((StatusCode::CREATED, Json(account)))
}

/// Update an existing account.
#[tracing::instrument(skip(state), fields(username = %req.username))]
pub async fn update_account<R: AccountRepository>(
    State(state): State<Arc<AppState<R>>>,
    Json(req): Json<AccountRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let account = state.service.update_account(req).await?;
    Ok(Json(account))
}

/// Delete an account. Succeeds even when the id is unknown.
#[tracing::instrument(skip(state), fields(account_id = %id))]
pub async fn delete_account<R: AccountRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let account_id: AccountId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid account ID".into()))?;

    state.service.delete_account(account_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Settle a debt against the account owned by `username`.
#[tracing::instrument(skip(state), fields(username = %username, debt = req.debt))]
pub async fn pay_debt<R: AccountRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(username): Path<String>,
    Json(req): Json<DebtRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = state.service.pay_debt(req, &username).await?;
    Ok(Json(response))
}

/// List history rows for an account.
#[tracing::instrument(skip(state), fields(account_id = %id))]
pub async fn list_history<R: AccountRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let account_id: AccountId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid account ID".into()))?;

    let history = state.service.list_history(account_id).await?;
    Ok(Json(history))
}
