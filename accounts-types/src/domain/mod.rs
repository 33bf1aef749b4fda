//! Domain models for the account service.

pub mod account;
pub mod history;
pub mod settlement;

pub use account::{Account, AccountId};
pub use history::{AccountHistory, HistoryId, Operation};
pub use settlement::{Settlement, SettlementOutcome, settle};
