//! Receipt Endpoints

use super::{send, send_json, HttpApi};
use crate::error::ApiResult;
use crate::models::{Receipt, ReceiptUpdate};

impl HttpApi {
    pub(super) async fn fetch_user_receipts(&self, token: &str) -> ApiResult<Vec<Receipt>> {
        // backend answers `null` for a user with no receipts
        let receipts: Option<Vec<Receipt>> = send_json(self.get("Receipt/user", token)).await?;
        Ok(receipts.unwrap_or_default())
    }

    pub(super) async fn put_receipt(&self, token: &str, receipt_id: u32, update: &ReceiptUpdate) -> ApiResult<()> {
        send(self.put(&format!("Receipt/{}", receipt_id), token).json(update)).await?;
        Ok(())
    }
}
