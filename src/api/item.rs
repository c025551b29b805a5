//! Receipt Item Endpoints

use serde::Serialize;

use super::{send, HttpApi};
use crate::error::ApiResult;
use crate::models::ItemUpdate;

#[derive(Clone, Copy, Debug)]
pub(super) enum ClaimEndpoint {
    Claim,
    Unclaim,
}

impl ClaimEndpoint {
    fn path(self) -> &'static str {
        match self {
            ClaimEndpoint::Claim => "ReceiptItem/claim",
            ClaimEndpoint::Unclaim => "ReceiptItem/unclaim",
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClaimBody<'a> {
    item_ids: &'a [u32],
}

impl HttpApi {
    pub(super) async fn set_claim(&self, token: &str, endpoint: ClaimEndpoint, item_ids: &[u32]) -> ApiResult<()> {
        log::debug!("{:?} items {:?}", endpoint, item_ids);
        send(self.post(endpoint.path()).bearer_auth(token).json(&ClaimBody { item_ids })).await?;
        Ok(())
    }

    pub(super) async fn put_item(&self, token: &str, item_id: u32, update: &ItemUpdate) -> ApiResult<()> {
        send(self.put(&format!("ReceiptItem/{}", item_id), token).json(update)).await?;
        Ok(())
    }

    pub(super) async fn remove_item(&self, token: &str, item_id: u32) -> ApiResult<()> {
        send(self.delete(&format!("ReceiptItem/{}", item_id), token)).await?;
        Ok(())
    }
}
