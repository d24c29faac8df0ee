//! Gateway Traits
//!
//! Async seams between the order-entry state machines and the backend.
//! The UI implements them over HTTP; tests use in-memory fakes.
//! Futures are `?Send`: everything runs on the browser's single thread.

use async_trait::async_trait;

use crate::domain::{MenuItem, TransactionId};
use crate::error::DomainResult;
use crate::order::CreateTransactionPayload;

/// Lookup of menu items matching a search term
#[async_trait(?Send)]
pub trait MenuSearchGateway {
    async fn search_menu_items(&self, term: &str) -> DomainResult<Vec<MenuItem>>;
}

/// Creation of a transaction from an assembled payload
#[async_trait(?Send)]
pub trait TransactionGateway {
    async fn create_transaction(&self, payload: &CreateTransactionPayload) -> DomainResult<TransactionId>;
}
