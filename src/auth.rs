//! Authentication Context
//!
//! Holds the signed-in session and keeps it in `localStorage` so a reload
//! does not log the user out.

use leptos::prelude::*;

use crate::api::{RegisterRequest, SplitApi};
use crate::error::ApiResult;
use crate::models::{Session, UserProfile};

/// Session state provided via context
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Option<Session>>,
    storage_key: StoredValue<String>,
}

impl AuthContext {
    /// Restore any persisted session
    pub fn new(storage_key: String) -> Self {
        let restored = load_session(&storage_key);
        if let Some(session) = &restored {
            log::info!("restored session for {}", session.user.user_name);
        }
        Self {
            session: RwSignal::new(restored),
            storage_key: StoredValue::new(storage_key),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.session.with(|session| session.as_ref().map(|s| s.token.clone()))
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.session.with(|session| session.as_ref().map(|s| s.user.clone()))
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|session| session.is_some())
    }

    fn set_session(&self, session: Option<Session>) {
        self.storage_key.with_value(|key| save_session(key, session.as_ref()));
        self.session.set(session);
    }

    pub async fn login<A: SplitApi + ?Sized>(&self, api: &A, email: &str, password: &str) -> ApiResult<()> {
        let session = api.login(email, password).await?;
        log::info!("logged in as {}", session.user.user_name);
        self.set_session(Some(session));
        Ok(())
    }

    pub async fn register<A: SplitApi + ?Sized>(&self, api: &A, request: &RegisterRequest<'_>) -> ApiResult<()> {
        let session = api.register(request).await?;
        log::info!("registered {}", session.user.user_name);
        self.set_session(Some(session));
        Ok(())
    }

    pub fn logout(&self) {
        log::info!("logged out");
        self.set_session(None);
    }
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn decode_session(raw: &str) -> Option<Session> {
    match serde_json::from_str::<Session>(raw) {
        Ok(session) if !session.token.trim().is_empty() => Some(session),
        Ok(_) => None,
        Err(e) => {
            log::warn!("discarding stored session: {}", e);
            None
        }
    }
}

fn load_session(key: &str) -> Option<Session> {
    let raw = local_storage()?.get_item(key).ok()??;
    decode_session(&raw)
}

fn save_session(key: &str, session: Option<&Session>) {
    let Some(storage) = local_storage() else {
        log::warn!("localStorage unavailable, session not persisted");
        return;
    };
    let result = match session.map(serde_json::to_string) {
        Some(Ok(json)) => storage.set_item(key, &json),
        Some(Err(e)) => {
            log::error!("failed to encode session: {}", e);
            return;
        }
        None => storage.remove_item(key),
    };
    if result.is_err() {
        log::warn!("failed to write session to localStorage");
    }
}
