//! User Actions
//!
//! Claim/unclaim and edit workflows. Each action validates locally first;
//! nothing is sent when the selection is empty, the token is missing or the
//! input does not parse. Callers refresh receipts on success.

use std::collections::BTreeSet;

use crate::api::SplitApi;
use crate::error::ActionError;
use crate::models::{ItemUpdate, Receipt, ReceiptUpdate};

pub type ActionResult<T> = Result<T, ActionError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimAction {
    Claim,
    Unclaim,
}

impl ClaimAction {
    pub fn verb(self) -> &'static str {
        match self {
            ClaimAction::Claim => "claim",
            ClaimAction::Unclaim => "unclaim",
        }
    }

    /// Toast text after a successful request
    pub fn success_message(self, count: usize) -> String {
        let noun = if count == 1 { "item" } else { "items" };
        match self {
            ClaimAction::Claim => format!("Claimed {} {}", count, noun),
            ClaimAction::Unclaim => format!("Unclaimed {} {}", count, noun),
        }
    }
}

/// Item ids ticked in a receipt's detail view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection(BTreeSet<u32>);

impl Selection {
    pub fn toggle(&mut self, item_id: u32) {
        if !self.0.remove(&item_id) {
            self.0.insert(item_id);
        }
    }

    pub fn contains(&self, item_id: u32) -> bool {
        self.0.contains(&item_id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn ids(&self) -> Vec<u32> {
        self.0.iter().copied().collect()
    }
}

/// Token if present and non-blank
fn require_token(token: Option<&str>) -> ActionResult<&str> {
    token.filter(|t| !t.trim().is_empty()).ok_or(ActionError::NotAuthenticated)
}

/// Claim or unclaim the selected items. Returns how many were sent.
pub async fn submit_claim<A: SplitApi + ?Sized>(
    api: &A,
    token: Option<&str>,
    action: ClaimAction,
    selection: &Selection,
) -> ActionResult<usize> {
    if selection.is_empty() {
        log::warn!("{} rejected: empty selection", action.verb());
        return Err(ActionError::EmptySelection);
    }
    let token = require_token(token)?;
    let ids = selection.ids();
    match action {
        ClaimAction::Claim => api.claim_items(token, &ids).await?,
        ClaimAction::Unclaim => api.unclaim_items(token, &ids).await?,
    }
    log::info!("{} succeeded for {} item(s)", action.verb(), ids.len());
    Ok(ids.len())
}

/// Parse a user-entered amount: "$1,234.50", "3.5", "0".
/// Rejects negatives, NaN and infinities.
pub fn parse_amount(input: &str) -> Option<f64> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    let value: f64 = cleaned.parse().ok()?;
    if value.is_finite() && value >= 0.0 { Some(value) } else { None }
}

fn amount_field(label: &str, input: &str) -> ActionResult<f64> {
    parse_amount(input).ok_or_else(|| ActionError::InvalidInput(format!("{} must be a non-negative amount", label)))
}

/// Raw text from the receipt edit form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReceiptForm {
    pub establishment_name: String,
    pub transaction_number: String,
    pub transaction_date_time: String,
    pub tax: String,
    pub tip: String,
    pub total: String,
}

impl ReceiptForm {
    /// Form prefilled with the receipt's current values
    pub fn from_receipt(receipt: &Receipt) -> Self {
        Self {
            establishment_name: receipt.establishment_name.clone(),
            transaction_number: receipt.transaction_number.clone().unwrap_or_default(),
            transaction_date_time: receipt.transaction_date_time.clone(),
            tax: format!("{:.2}", receipt.transaction_tax),
            tip: format!("{:.2}", receipt.transaction_tip),
            total: format!("{:.2}", receipt.transaction_total),
        }
    }

    pub fn validate(&self) -> ActionResult<ReceiptUpdate> {
        let establishment_name = self.establishment_name.trim();
        if establishment_name.is_empty() {
            return Err(ActionError::InvalidInput("Establishment name is required".to_string()));
        }
        let transaction_number = Some(self.transaction_number.trim())
            .filter(|n| !n.is_empty())
            .map(str::to_string);
        Ok(ReceiptUpdate {
            establishment_name: establishment_name.to_string(),
            transaction_number,
            transaction_date_time: self.transaction_date_time.trim().to_string(),
            transaction_tax: amount_field("Tax", &self.tax)?,
            transaction_tip: amount_field("Tip", &self.tip)?,
            transaction_total: amount_field("Total", &self.total)?,
        })
    }
}

/// Raw text from the item edit form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub name: String,
    pub price: String,
}

impl ItemForm {
    pub fn validate(&self) -> ActionResult<ItemUpdate> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ActionError::InvalidInput("Item name is required".to_string()));
        }
        Ok(ItemUpdate {
            item_name: name.to_string(),
            item_price: amount_field("Price", &self.price)?,
        })
    }
}

pub async fn save_receipt<A: SplitApi + ?Sized>(
    api: &A,
    token: Option<&str>,
    receipt_id: u32,
    form: &ReceiptForm,
) -> ActionResult<()> {
    let update = form.validate()?;
    let token = require_token(token)?;
    api.update_receipt(token, receipt_id, &update).await?;
    log::info!("receipt {} updated", receipt_id);
    Ok(())
}

pub async fn save_item<A: SplitApi + ?Sized>(
    api: &A,
    token: Option<&str>,
    item_id: u32,
    form: &ItemForm,
) -> ActionResult<()> {
    let update = form.validate()?;
    let token = require_token(token)?;
    api.update_item(token, item_id, &update).await?;
    log::info!("item {} updated", item_id);
    Ok(())
}

pub async fn remove_item<A: SplitApi + ?Sized>(api: &A, token: Option<&str>, item_id: u32) -> ActionResult<()> {
    let token = require_token(token)?;
    api.delete_item(token, item_id).await?;
    log::info!("item {} deleted", item_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RegisterRequest;
    use crate::error::{ApiError, ApiResult};
    use crate::models::Session;
    use async_trait::async_trait;
    use std::cell::RefCell;

    /// Records every call; fails them all when `fail` is set
    #[derive(Default)]
    struct RecordingApi {
        calls: RefCell<Vec<String>>,
        fail: bool,
    }

    impl RecordingApi {
        fn failing() -> Self {
            Self { fail: true, ..Default::default() }
        }

        fn record(&self, call: String) -> ApiResult<()> {
            self.calls.borrow_mut().push(call);
            if self.fail {
                Err(ApiError::from_status(500, "boom".into()))
            } else {
                Ok(())
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl SplitApi for RecordingApi {
        async fn login(&self, _email: &str, _password: &str) -> ApiResult<Session> {
            unimplemented!()
        }

        async fn register(&self, _request: &RegisterRequest<'_>) -> ApiResult<Session> {
            unimplemented!()
        }

        async fn user_receipts(&self, _token: &str) -> ApiResult<Vec<Receipt>> {
            self.record("receipts".into())?;
            Ok(vec![])
        }

        async fn claim_items(&self, token: &str, item_ids: &[u32]) -> ApiResult<()> {
            self.record(format!("claim {} {:?}", token, item_ids))
        }

        async fn unclaim_items(&self, token: &str, item_ids: &[u32]) -> ApiResult<()> {
            self.record(format!("unclaim {} {:?}", token, item_ids))
        }

        async fn update_receipt(&self, _token: &str, receipt_id: u32, update: &ReceiptUpdate) -> ApiResult<()> {
            self.record(format!("update receipt {} {}", receipt_id, update.establishment_name))
        }

        async fn update_item(&self, _token: &str, item_id: u32, update: &ItemUpdate) -> ApiResult<()> {
            self.record(format!("update item {} {} {}", item_id, update.item_name, update.item_price))
        }

        async fn delete_item(&self, _token: &str, item_id: u32) -> ApiResult<()> {
            self.record(format!("delete item {}", item_id))
        }
    }

    fn selection(ids: &[u32]) -> Selection {
        let mut selection = Selection::default();
        for id in ids {
            selection.toggle(*id);
        }
        selection
    }

    #[test]
    fn test_selection_toggle() {
        let mut s = selection(&[3, 1, 2]);
        assert_eq!(s.ids(), vec![1, 2, 3]);
        s.toggle(2);
        assert!(!s.contains(2));
        assert_eq!(s.len(), 2);
        s.clear();
        assert!(s.is_empty());
    }

    #[tokio::test]
    async fn test_empty_selection_never_calls_backend() {
        let api = RecordingApi::default();
        for action in [ClaimAction::Claim, ClaimAction::Unclaim] {
            let err = submit_claim(&api, Some("tok"), action, &Selection::default()).await.unwrap_err();
            assert!(matches!(err, ActionError::EmptySelection));
            assert!(err.is_local());
        }
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_token_never_calls_backend() {
        let api = RecordingApi::default();
        let err = submit_claim(&api, None, ClaimAction::Claim, &selection(&[1])).await.unwrap_err();
        assert!(matches!(err, ActionError::NotAuthenticated));
        let err = submit_claim(&api, Some("  "), ClaimAction::Unclaim, &selection(&[1])).await.unwrap_err();
        assert!(matches!(err, ActionError::NotAuthenticated));
        let err = remove_item(&api, None, 4).await.unwrap_err();
        assert!(matches!(err, ActionError::NotAuthenticated));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_claim_and_unclaim_send_sorted_ids() {
        let api = RecordingApi::default();
        let sent = submit_claim(&api, Some("tok"), ClaimAction::Claim, &selection(&[9, 4])).await.unwrap();
        assert_eq!(sent, 2);
        submit_claim(&api, Some("tok"), ClaimAction::Unclaim, &selection(&[7])).await.unwrap();
        assert_eq!(api.calls(), vec!["claim tok [4, 9]", "unclaim tok [7]"]);
    }

    #[tokio::test]
    async fn test_backend_failure_is_not_local() {
        let api = RecordingApi::failing();
        let err = submit_claim(&api, Some("tok"), ClaimAction::Claim, &selection(&[1])).await.unwrap_err();
        assert!(matches!(err, ActionError::Api(_)));
        assert!(!err.is_local());
        assert_eq!(api.calls().len(), 1);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("3.5"), Some(3.5));
        assert_eq!(parse_amount(" $1,234.50 "), Some(1234.5));
        assert_eq!(parse_amount("0"), Some(0.0));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("$"), None);
        assert_eq!(parse_amount("-2"), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[tokio::test]
    async fn test_invalid_item_form_is_rejected_locally() {
        let api = RecordingApi::default();
        let form = ItemForm { name: "Soda".into(), price: "two dollars".into() };
        let err = save_item(&api, Some("tok"), 1, &form).await.unwrap_err();
        assert!(matches!(err, ActionError::InvalidInput(_)));
        let blank = ItemForm { name: " ".into(), price: "2".into() };
        assert!(save_item(&api, Some("tok"), 1, &blank).await.is_err());
        assert!(api.calls().is_empty());

        let good = ItemForm { name: " Soda ".into(), price: "$2.50".into() };
        save_item(&api, Some("tok"), 1, &good).await.unwrap();
        assert_eq!(api.calls(), vec!["update item 1 Soda 2.5"]);
    }

    #[tokio::test]
    async fn test_receipt_form() {
        let api = RecordingApi::default();
        let form = ReceiptForm {
            establishment_name: "Subway".into(),
            transaction_number: "  ".into(),
            transaction_date_time: "2025-02-03".into(),
            tax: "1.00".into(),
            tip: "0".into(),
            total: "12.98".into(),
        };
        let update = form.validate().unwrap();
        assert_eq!(update.transaction_number, None);
        assert_eq!(update.transaction_total, 12.98);
        save_receipt(&api, Some("tok"), 5, &form).await.unwrap();
        assert_eq!(api.calls(), vec!["update receipt 5 Subway"]);

        let bad = ReceiptForm { total: "-1".into(), ..form };
        assert!(matches!(bad.validate(), Err(ActionError::InvalidInput(_))));
    }

    #[test]
    fn test_receipt_form_prefill() {
        let receipt = Receipt {
            id: 5,
            receipt_code: "abc".into(),
            transaction_number: None,
            establishment_name: "Subway".into(),
            transaction_date_time: "2025-02-03T12:00:00".into(),
            transaction_tax: 1.0,
            transaction_tip: 0.5,
            transaction_total: 12.98,
            is_owner: true,
            items: Vec::new(),
        };
        let form = ReceiptForm::from_receipt(&receipt);
        assert_eq!(form.transaction_number, "");
        assert_eq!(form.tax, "1.00");
        assert_eq!(form.tip, "0.50");
        assert_eq!(form.total, "12.98");

        // unchanged prefill validates back to the same values
        let update = form.validate().unwrap();
        assert_eq!(update.establishment_name, "Subway");
        assert_eq!(update.transaction_total, 12.98);
    }

    #[test]
    fn test_success_message() {
        assert_eq!(ClaimAction::Claim.success_message(1), "Claimed 1 item");
        assert_eq!(ClaimAction::Unclaim.success_message(3), "Unclaimed 3 items");
    }
}
