//! Split Frontend App
//!
//! Root component: provides contexts, keeps the receipt cache in sync with
//! the signed-in user, and switches between the auth page and the shell.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{self, SplitApi};
use crate::auth::AuthContext;
use crate::components::{AuthPage, Header, HomeView, ReceiptList, SideBar};
use crate::config::AppConfig;
use crate::context::{ContentContext, SearchContext, Section};
use crate::store::{store_clear, store_set_loading, store_set_receipts, ReceiptState, ReceiptStore};
use crate::toast::{ToastContext, ToastHost};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();

    // State
    let store: ReceiptStore = Store::new(ReceiptState::default());
    let auth = AuthContext::new(config.session_storage_key.clone());
    let search = SearchContext::new(signal(String::new()), signal(0u32), store);
    let content = ContentContext::new(signal(Section::Home), signal::<Option<u32>>(None));
    let toasts = ToastContext::new(config.toast_duration_ms);

    // Provide context to all children
    provide_context(store);
    provide_context(auth);
    provide_context(search);
    provide_context(content);
    provide_context(toasts);

    // Receipts belong to a token; drop them as soon as it changes
    let last_token = StoredValue::new(None::<String>);

    // Load receipts when the session or refresh trigger changes
    Effect::new(move |_| {
        let trigger = search.refresh_trigger.get();
        let token = auth.token();

        if last_token.get_value() != token {
            last_token.set_value(token.clone());
            store_clear(&store);
        }

        let Some(token) = token else {
            store_set_loading(&store, false);
            return;
        };

        log::info!("loading receipts, trigger={}", trigger);
        store_set_loading(&store, true);
        spawn_local(async move {
            let result = api::client().user_receipts(&token).await;

            // a newer session or refresh owns the store now
            let latest_token = last_token.try_get_value().flatten();
            let latest_trigger = search.refresh_trigger.try_get_untracked().unwrap_or(trigger);
            if !is_current_load(latest_token.as_deref(), latest_trigger, &token, trigger) {
                log::debug!("dropping stale receipts, trigger={}", trigger);
                return;
            }

            match result {
                Ok(receipts) => {
                    log::info!("loaded {} receipts", receipts.len());
                    store_set_receipts(&store, receipts);
                }
                Err(e) => {
                    log::error!("failed to load receipts: {}", e);
                    toasts.error(e.user_message());
                }
            }
            store_set_loading(&store, false);
        });
    });

    view! {
        <div class="app-layout">
            <Show
                when=move || auth.is_authenticated()
                fallback=|| view! { <AuthPage /> }
            >
                <Header />
                <div class="app-body">
                    <SideBar />
                    <main class="main-content">
                        {move || match content.current.get() {
                            Section::Home => view! { <HomeView /> }.into_any(),
                            Section::Receipts => view! { <ReceiptList /> }.into_any(),
                        }}
                    </main>
                </div>
            </Show>
            <ToastHost />
        </div>
    }
}

/// A finished fetch may only touch the store if it was issued for the
/// current token and the latest refresh trigger.
fn is_current_load(latest_token: Option<&str>, latest_trigger: u32, token: &str, trigger: u32) -> bool {
    latest_token == Some(token) && latest_trigger == trigger
}
