//! # Accounts Hex
//!
//! Application service layer and HTTP adapter for the account service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (orchestrates domain operations)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI documentation served by the inbound adapter
//!
//! The service is generic over `R: AccountRepository`, allowing
//! different repository implementations to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::AccountService;
