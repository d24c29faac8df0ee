//! Order Draft & Submission
//!
//! Everything the cashier enters for one transaction, and the assembly of
//! the `POST /transactions` payload from it.
//!
//! Two backend contract quirks live here and nowhere else:
//! - customer name and note travel on the first line item only
//! - the status is inferred from whether a payment method was picked

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::Cart;
use crate::domain::{MenuId, TransactionId, TransactionStatus};
use crate::error::ApiError;
use crate::gateway::TransactionGateway;
use crate::money::Money;
use crate::notice::Notice;

const SUBMIT_FAILED: &str = "Gagal membuat transaksi. Coba lagi.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Qris,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::Cash, PaymentMethod::Qris];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Tunai",
            PaymentMethod::Qris => "QRIS",
        }
    }

    /// Wire value, also used as the `<option>` value
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Qris => "qris",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.as_str() == value)
    }
}

/// Client-side rejection of a submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("Keranjang masih kosong. Tambahkan menu terlebih dahulu.")]
    EmptyCart,
    #[error("Transaksi sedang diproses.")]
    AlreadySubmitting,
}

/// One entry of `transactionItems`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionItemPayload {
    pub menu_id: MenuId,
    pub quantity: u32,
    pub price_at_transaction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_note: Option<String>,
}

/// Body of `POST /transactions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionPayload {
    pub transaction_items: Vec<TransactionItemPayload>,
    pub total_amount: Money,
    pub payment_method: Option<PaymentMethod>,
    pub status: TransactionStatus,
}

/// `"completed"` when a payment method was picked, `"pending"` otherwise
pub fn derive_status(payment_method: Option<PaymentMethod>) -> TransactionStatus {
    match payment_method {
        Some(_) => TransactionStatus::Completed,
        None => TransactionStatus::Pending,
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Turn a draft into the wire payload; an empty cart is rejected
pub fn build_transaction_payload(draft: &OrderDraft) -> Result<CreateTransactionPayload, OrderError> {
    if draft.cart.is_empty() {
        return Err(OrderError::EmptyCart);
    }

    let mut customer_name = non_blank(&draft.customer_name);
    let mut customer_note = non_blank(&draft.customer_note);

    let transaction_items = draft
        .cart
        .lines()
        .iter()
        .map(|line| TransactionItemPayload {
            menu_id: line.menu_item.id.clone(),
            quantity: line.quantity,
            price_at_transaction: line.menu_item.price.to_fixed2(),
            // `take` leaves None behind, so only the first line carries them
            customer_name: customer_name.take(),
            customer_note: customer_note.take(),
        })
        .collect();

    Ok(CreateTransactionPayload {
        transaction_items,
        total_amount: draft.cart.total(),
        payment_method: draft.payment_method,
        status: derive_status(draft.payment_method),
    })
}

/// Data entered for one pending transaction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDraft {
    pub customer_name: String,
    pub customer_note: String,
    pub cart: Cart,
    pub payment_method: Option<PaymentMethod>,
    submitting: bool,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Start a submission: validates, assembles the payload and marks the
    /// draft as in flight. Exactly one network call should follow.
    pub fn begin_submit(&mut self) -> Result<CreateTransactionPayload, OrderError> {
        if self.submitting {
            return Err(OrderError::AlreadySubmitting);
        }
        let payload = build_transaction_payload(self)?;
        self.submitting = true;
        Ok(payload)
    }

    /// Finish a submission. Success clears the draft; failure leaves it as
    /// entered so the cashier can retry.
    pub fn finish_submit(&mut self, result: Result<TransactionId, ApiError>) -> Notice {
        self.submitting = false;
        match result {
            Ok(id) => {
                info!("transaction {} created", id);
                self.clear();
                Notice::success(format!("Transaksi berhasil dibuat! ID: {}", id))
            }
            Err(err) => {
                warn!("transaction submission failed: {}", err);
                Notice::error(err.user_message(SUBMIT_FAILED))
            }
        }
    }

    /// Reset name, note, cart and payment method
    pub fn clear(&mut self) {
        self.customer_name.clear();
        self.customer_note.clear();
        self.cart.clear();
        self.payment_method = None;
    }
}

/// Run one full submission against `gateway`
pub async fn submit_order<G: TransactionGateway + ?Sized>(
    draft: &mut OrderDraft,
    gateway: &G,
) -> Result<Notice, OrderError> {
    let payload = draft.begin_submit()?;
    let result = gateway.create_transaction(&payload).await;
    Ok(draft.finish_submit(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MenuItem;
    use crate::notice::NoticeKind;
    use async_trait::async_trait;
    use std::cell::RefCell;

    struct FakeBackend {
        outcome: Result<TransactionId, ApiError>,
        received: RefCell<Vec<CreateTransactionPayload>>,
    }

    impl FakeBackend {
        fn accepting(id: &str) -> Self {
            Self { outcome: Ok(TransactionId::new(id)), received: RefCell::new(Vec::new()) }
        }

        fn failing(err: ApiError) -> Self {
            Self { outcome: Err(err), received: RefCell::new(Vec::new()) }
        }
    }

    #[async_trait(?Send)]
    impl TransactionGateway for FakeBackend {
        async fn create_transaction(&self, payload: &CreateTransactionPayload) -> Result<TransactionId, ApiError> {
            self.received.borrow_mut().push(payload.clone());
            self.outcome.clone()
        }
    }

    fn filled_draft() -> OrderDraft {
        let mut draft = OrderDraft::new();
        draft.customer_name = "  Budi ".to_string();
        draft.customer_note = "Pedas".to_string();
        draft.cart.add_item(MenuItem::new("m-1", "Nasi Goreng", 20000));
        draft.cart.add_item(MenuItem::new("m-1", "Nasi Goreng", 20000));
        draft.cart.add_item(MenuItem::new("m-2", "Es Teh", 5000));
        draft.payment_method = Some(PaymentMethod::Qris);
        draft
    }

    #[test]
    fn test_customer_info_on_first_item_only() {
        let payload = build_transaction_payload(&filled_draft()).unwrap();
        let items = &payload.transaction_items;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].customer_name.as_deref(), Some("Budi"));
        assert_eq!(items[0].customer_note.as_deref(), Some("Pedas"));
        assert_eq!(items[1].customer_name, None);
        assert_eq!(items[1].customer_note, None);
        assert_eq!(items[0].price_at_transaction, "20000.00");
        assert_eq!(items[0].quantity, 2);
        assert_eq!(payload.total_amount, Money::from(45000));
    }

    #[test]
    fn test_wire_format() {
        let payload = build_transaction_payload(&filled_draft()).unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["status"], "completed");
        assert_eq!(json["paymentMethod"], "qris");
        assert_eq!(json["totalAmount"], "45000.00");
        assert_eq!(json["transactionItems"][0]["menuId"], "m-1");
        assert_eq!(json["transactionItems"][0]["customerName"], "Budi");
        assert!(json["transactionItems"][1].get("customerName").is_none());
    }

    #[test]
    fn test_status_pending_without_payment() {
        let mut draft = filled_draft();
        draft.payment_method = None;
        draft.customer_name = "   ".to_string();
        let payload = build_transaction_payload(&draft).unwrap();
        assert_eq!(payload.status, TransactionStatus::Pending);
        assert_eq!(payload.payment_method, None);
        assert_eq!(payload.transaction_items[0].customer_name, None);
        assert_eq!(serde_json::to_value(&payload).unwrap()["paymentMethod"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn test_empty_cart_never_calls_backend() {
        let backend = FakeBackend::accepting("t-1");
        let mut draft = OrderDraft::new();
        draft.customer_name = "Budi".to_string();

        let outcome = submit_order(&mut draft, &backend).await;
        assert_eq!(outcome, Err(OrderError::EmptyCart));
        assert!(backend.received.borrow().is_empty());
        assert!(!draft.is_submitting());
    }

    #[tokio::test]
    async fn test_success_clears_draft() {
        let backend = FakeBackend::accepting("trx-789");
        let mut draft = filled_draft();

        let notice = submit_order(&mut draft, &backend).await.unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert!(notice.message.contains("trx-789"));
        assert_eq!(backend.received.borrow().len(), 1);

        assert!(draft.customer_name.is_empty());
        assert!(draft.customer_note.is_empty());
        assert!(draft.cart.is_empty());
        assert_eq!(draft.payment_method, None);
        assert!(!draft.is_submitting());
    }

    #[tokio::test]
    async fn test_failure_keeps_draft() {
        let backend = FakeBackend::failing(ApiError::from_status(422, r#"{"message":"Menu tidak tersedia"}"#));
        let mut draft = filled_draft();
        let before = draft.clone();

        let notice = submit_order(&mut draft, &backend).await.unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "Menu tidak tersedia");
        assert_eq!(draft, before);
    }

    #[tokio::test]
    async fn test_failure_without_message_uses_fallback() {
        let backend = FakeBackend::failing(ApiError::Network("connection refused".to_string()));
        let mut draft = filled_draft();
        let notice = submit_order(&mut draft, &backend).await.unwrap();
        assert_eq!(notice.message, SUBMIT_FAILED);
    }

    #[test]
    fn test_payment_method_values() {
        assert_eq!(PaymentMethod::parse("cash"), Some(PaymentMethod::Cash));
        assert_eq!(PaymentMethod::parse(""), None);
        for method in PaymentMethod::ALL {
            assert_eq!(serde_json::to_value(method).unwrap(), method.as_str());
        }
    }

    #[test]
    fn test_concurrent_submission_rejected() {
        let mut draft = filled_draft();
        assert!(draft.begin_submit().is_ok());
        assert_eq!(draft.begin_submit(), Err(OrderError::AlreadySubmitting));

        draft.finish_submit(Err(ApiError::Network("timeout".to_string())));
        assert!(draft.begin_submit().is_ok());
    }
}
