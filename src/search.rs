//! Receipt Search
//!
//! Case-insensitive substring filter over the fields a user is likely to
//! remember: establishment, receipt code, transaction number, total and item
//! names.

use crate::models::Receipt;

/// Number of matches shown in the header dropdown
pub const DROPDOWN_LIMIT: usize = 5;

/// Normalized search term, or None when the query is blank
fn search_term(query: &str) -> Option<String> {
    let term = query.trim().to_lowercase();
    if term.is_empty() { None } else { Some(term) }
}

/// Check a single receipt against an already-normalized term
pub fn receipt_matches(receipt: &Receipt, term: &str) -> bool {
    receipt.establishment_name.to_lowercase().contains(term)
        || receipt.receipt_code.to_lowercase().contains(term)
        || receipt
            .transaction_number
            .as_deref()
            .map_or(false, |number| number.to_lowercase().contains(term))
        || receipt.transaction_total.to_string().contains(term)
        || receipt.items.iter().any(|item| item.item_name.to_lowercase().contains(term))
}

/// Filter receipts by free-text query, preserving input order.
/// A blank query returns every receipt.
pub fn filter_receipts(receipts: &[Receipt], query: &str) -> Vec<Receipt> {
    match search_term(query) {
        None => receipts.to_vec(),
        Some(term) => receipts
            .iter()
            .filter(|receipt| receipt_matches(receipt, &term))
            .cloned()
            .collect(),
    }
}
