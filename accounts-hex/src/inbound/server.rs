//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use accounts_types::AccountRepository;

use super::handlers::{self, AppState};
use crate::AccountService;
use crate::openapi::ApiDoc;

/// HTTP Server for the Accounts API.
pub struct HttpServer<R: AccountRepository> {
    state: Arc<AppState<R>>,
}

impl<R: AccountRepository> HttpServer<R> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: AccountService<R>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route(
                "/api/accounts",
                get(handlers::list_accounts::<R>)
                    .post(handlers::create_account::<R>)
                    .put(handlers::update_account::<R>),
            )
            .route(
                "/api/accounts/{id}",
                get(handlers::get_account::<R>).delete(handlers::delete_account::<R>),
            )
            .route("/api/accounts/{id}/history", get(handlers::list_history::<R>))
            .route("/api/users/{username}/pay", post(handlers::pay_debt::<R>))
            .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
