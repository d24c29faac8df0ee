//! Transaction endpoints

use async_trait::async_trait;
use pos_core::domain::{CreatedTransaction, TransactionId, TransactionListResponse, TransactionRecord};
use pos_core::gateway::TransactionGateway;
use pos_core::order::CreateTransactionPayload;
use pos_core::DomainResult;

use super::RestClient;

impl RestClient {
    pub async fn list_transactions(&self) -> DomainResult<Vec<TransactionRecord>> {
        let response: TransactionListResponse = self.get("/transactions").await?;
        Ok(response.into_records())
    }

    pub async fn post_transaction(&self, payload: &CreateTransactionPayload) -> DomainResult<TransactionId> {
        let created: CreatedTransaction = self.post("/transactions", payload).await?;
        Ok(created.into_id())
    }
}

#[async_trait(?Send)]
impl TransactionGateway for RestClient {
    async fn create_transaction(&self, payload: &CreateTransactionPayload) -> DomainResult<TransactionId> {
        self.post_transaction(payload).await
    }
}
