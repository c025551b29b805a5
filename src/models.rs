//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Claimant id the backend uses for an item nobody has claimed yet
pub const UNCLAIMED: i64 = -1;

/// Receipt data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub id: u32,
    pub receipt_code: String,
    #[serde(default)]
    pub transaction_number: Option<String>,
    pub establishment_name: String,
    #[serde(default)]
    pub transaction_date_time: String,
    #[serde(default)]
    pub transaction_tax: f64,
    #[serde(default)]
    pub transaction_tip: f64,
    pub transaction_total: f64,
    /// true when the signed-in user paid this receipt and is owed money
    #[serde(default)]
    pub is_owner: bool,
    #[serde(default)]
    pub items: Vec<ReceiptItem>,
}

impl Receipt {
    /// Total minus tax and tip
    pub fn subtotal(&self) -> f64 {
        self.transaction_total - self.transaction_tax - self.transaction_tip
    }

    pub fn available_items(&self) -> impl Iterator<Item = &ReceiptItem> {
        self.items.iter().filter(|item| !item.is_claimed())
    }

    pub fn claimed_items(&self) -> impl Iterator<Item = &ReceiptItem> {
        self.items.iter().filter(|item| item.is_claimed())
    }
}

/// Receipt line item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItem {
    pub id: u32,
    pub item_name: String,
    pub item_price: f64,
    pub receipt_id: u32,
    #[serde(default = "unclaimed")]
    pub paid_customer_id: i64,
    #[serde(default)]
    pub paid_customer_name: Option<String>,
}

fn unclaimed() -> i64 {
    UNCLAIMED
}

impl ReceiptItem {
    pub fn is_claimed(&self) -> bool {
        self.paid_customer_id != UNCLAIMED
    }

    pub fn claim_status(&self) -> ClaimStatus {
        if self.is_claimed() {
            ClaimStatus::Claimed {
                customer_id: self.paid_customer_id,
                name: self.paid_customer_name.clone(),
            }
        } else {
            ClaimStatus::Available
        }
    }
}

/// Display state of a line item, derived from its claimant id
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimStatus {
    Available,
    Claimed {
        customer_id: i64,
        name: Option<String>,
    },
}

impl ClaimStatus {
    pub fn label(&self) -> String {
        match self {
            ClaimStatus::Available => "Available".to_string(),
            ClaimStatus::Claimed { name: Some(name), .. } if !name.trim().is_empty() => {
                format!("Claimed by {}", name)
            }
            ClaimStatus::Claimed { customer_id, .. } => {
                format!("Claimed by customer #{}", customer_id)
            }
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ClaimStatus::Available => "item-status available",
            ClaimStatus::Claimed { .. } => "item-status claimed",
        }
    }
}

/// Split receipts into (owned, member) lists, keeping input order
pub fn partition_by_ownership(receipts: &[Receipt]) -> (Vec<Receipt>, Vec<Receipt>) {
    receipts.iter().cloned().partition(|receipt| receipt.is_owner)
}

/// Signed-in user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_name: String,
    pub email: String,
}

/// Token plus profile, the unit persisted across page loads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

/// Login / register response body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileToken {
    pub user_name: String,
    pub email: String,
    pub token: String,
}

impl From<UserProfileToken> for Session {
    fn from(value: UserProfileToken) -> Self {
        Session {
            token: value.token,
            user: UserProfile {
                user_name: value.user_name,
                email: value.email,
            },
        }
    }
}

/// Editable receipt fields sent on update
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptUpdate {
    pub establishment_name: String,
    pub transaction_number: Option<String>,
    pub transaction_date_time: String,
    pub transaction_tax: f64,
    pub transaction_tip: f64,
    pub transaction_total: f64,
}

impl From<&Receipt> for ReceiptUpdate {
    fn from(receipt: &Receipt) -> Self {
        ReceiptUpdate {
            establishment_name: receipt.establishment_name.clone(),
            transaction_number: receipt.transaction_number.clone(),
            transaction_date_time: receipt.transaction_date_time.clone(),
            transaction_tax: receipt.transaction_tax,
            transaction_tip: receipt.transaction_tip,
            transaction_total: receipt.transaction_total,
        }
    }
}

/// Editable item fields sent on update
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemUpdate {
    pub item_name: String,
    pub item_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, paid_customer_id: i64, name: Option<&str>) -> ReceiptItem {
        ReceiptItem {
            id,
            item_name: format!("Item {}", id),
            item_price: 1.0,
            receipt_id: 1,
            paid_customer_id,
            paid_customer_name: name.map(str::to_string),
        }
    }

    #[test]
    fn test_unclaimed_item_is_available() {
        let item = make_item(1, UNCLAIMED, None);
        assert!(!item.is_claimed());
        assert_eq!(item.claim_status(), ClaimStatus::Available);
        assert_eq!(item.claim_status().label(), "Available");
    }

    #[test]
    fn test_any_other_claimant_is_claimed() {
        for id in [0, 1, 42] {
            let item = make_item(1, id, None);
            assert!(item.is_claimed());
            assert_eq!(item.claim_status().label(), format!("Claimed by customer #{}", id));
        }
        let named = make_item(2, 7, Some("Jorome"));
        assert_eq!(named.claim_status().label(), "Claimed by Jorome");
        let blank = make_item(3, 7, Some("  "));
        assert_eq!(blank.claim_status().label(), "Claimed by customer #7");
    }

    #[test]
    fn test_decode_receipt_defaults() {
        let json = r#"{
            "id": 1,
            "receiptCode": "123receipt123",
            "establishmentName": "Subway",
            "transactionDateTime": "2/3/2025",
            "transactionTotal": 12.98,
            "items": [
                { "id": 1, "itemName": "Cookies", "itemPrice": 2.99, "receiptId": 1 },
                { "id": 2, "itemName": "Sandwich", "itemPrice": 9.99, "receiptId": 1,
                  "paidCustomerId": 3, "paidCustomerName": "Sam" }
            ]
        }"#;
        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.transaction_number, None);
        assert_eq!(receipt.transaction_tax, 0.0);
        assert!(!receipt.is_owner);
        assert_eq!(receipt.items[0].paid_customer_id, UNCLAIMED);
        assert_eq!(receipt.items[1].paid_customer_name.as_deref(), Some("Sam"));
        assert_eq!(receipt.available_items().count(), 1);
        assert_eq!(receipt.claimed_items().count(), 1);
    }

    #[test]
    fn test_subtotal() {
        let receipt = Receipt {
            id: 1,
            receipt_code: "A".into(),
            transaction_number: None,
            establishment_name: "Cafe".into(),
            transaction_date_time: String::new(),
            transaction_tax: 1.5,
            transaction_tip: 2.0,
            transaction_total: 23.5,
            is_owner: true,
            items: vec![],
        };
        assert!((receipt.subtotal() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_partition_keeps_order() {
        let mk = |id: u32, owner: bool| Receipt {
            id,
            receipt_code: id.to_string(),
            transaction_number: None,
            establishment_name: String::new(),
            transaction_date_time: String::new(),
            transaction_tax: 0.0,
            transaction_tip: 0.0,
            transaction_total: 0.0,
            is_owner: owner,
            items: vec![],
        };
        let receipts = vec![mk(1, true), mk(2, false), mk(3, true), mk(4, false)];
        let (owned, member) = partition_by_ownership(&receipts);
        assert_eq!(owned.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(member.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn test_login_response_into_session() {
        let json = r#"{"userName":"jo","email":"jo@example.com","token":"abc"}"#;
        let profile: UserProfileToken = serde_json::from_str(json).unwrap();
        let session = Session::from(profile);
        assert_eq!(session.token, "abc");
        assert_eq!(session.user.user_name, "jo");
    }

    #[test]
    fn test_item_update_wire_names() {
        let body = serde_json::to_value(ItemUpdate { item_name: "Soda".into(), item_price: 2.5 }).unwrap();
        assert_eq!(body["itemName"], "Soda");
        assert_eq!(body["itemPrice"], 2.5);
    }
}
