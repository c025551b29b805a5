//! Receipt Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the cached
//! receipt list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Receipt;

/// Cached copy of the user's receipts
#[derive(Clone, Debug, Default, Store)]
pub struct ReceiptState {
    /// Everything the user owns or is a member of, in backend order
    pub receipts: Vec<Receipt>,
    /// A fetch is in flight
    pub is_loading: bool,
}

/// Type alias for the store
pub type ReceiptStore = Store<ReceiptState>;

/// Get the receipt store from context
pub fn use_receipt_store() -> ReceiptStore {
    expect_context::<ReceiptStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the cached receipts
pub fn store_set_receipts(store: &ReceiptStore, receipts: Vec<Receipt>) {
    *store.receipts().write() = receipts;
}

pub fn store_clear(store: &ReceiptStore) {
    store.receipts().write().clear();
}

pub fn store_set_loading(store: &ReceiptStore, loading: bool) {
    *store.is_loading().write() = loading;
}

/// Look up a cached receipt by ID
pub fn store_find_receipt(store: &ReceiptStore, receipt_id: u32) -> Option<Receipt> {
    store.receipts().with(|receipts| receipts.iter().find(|receipt| receipt.id == receipt_id).cloned())
}
