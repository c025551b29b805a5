//! Item List Component
//!
//! Available and claimed items of one receipt, with the claim/unclaim
//! buttons acting on the ticked items.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{submit_claim, ClaimAction, Selection};
use crate::api;
use crate::auth::use_auth;
use crate::components::button::{button_class, ButtonSize, ButtonVariant};
use crate::components::item_row::ItemRow;
use crate::context::use_search;
use crate::models::{Receipt, ReceiptItem};
use crate::toast::use_toasts;

#[component]
pub fn ItemList(receipt: Receipt, selection: RwSignal<Selection>) -> impl IntoView {
    let auth = use_auth();
    let search = use_search();
    let toasts = use_toasts();
    // which request is in flight, if any
    let (pending, set_pending) = signal::<Option<ClaimAction>>(None);

    let is_owner = receipt.is_owner;
    let available: Vec<ReceiptItem> = receipt.available_items().cloned().collect();
    let claimed: Vec<ReceiptItem> = receipt.claimed_items().cloned().collect();
    let total_items = receipt.items.len();

    let run = move |action: ClaimAction| {
        let token = auth.token();
        let current = selection.get();
        set_pending.set(Some(action));
        spawn_local(async move {
            match submit_claim(&api::client(), token.as_deref(), action, &current).await {
                Ok(count) => {
                    selection.update(|s| s.clear());
                    toasts.success(action.success_message(count));
                    search.refresh();
                }
                Err(e) => toasts.action_failed(&e),
            }
            let _ = set_pending.try_set(None);
        });
    };

    let rows = move |items: Vec<ReceiptItem>| {
        items
            .into_iter()
            .map(|item| view! { <ItemRow item=item selection=selection is_owner=is_owner /> })
            .collect_view()
    };

    view! {
        <div class="item-list">
            <h4>{format!("Items ({})", total_items)}</h4>
            {if total_items == 0 {
                view! { <p class="empty">"No items found"</p> }.into_any()
            } else {
                view! {
                    <div class="item-group available">
                        <h5>{format!("Available ({})", available.len())}</h5>
                        {rows(available)}
                    </div>
                    <div class="item-group claimed">
                        <h5>{format!("Claimed ({})", claimed.len())}</h5>
                        {rows(claimed)}
                    </div>
                    <div class="claim-actions">
                        <span class="selection-count">
                            {move || format!("{} selected", selection.with(|s| s.len()))}
                        </span>
                        <button
                            class=button_class(ButtonVariant::Primary, ButtonSize::Default, "claim-btn")
                            disabled=move || pending.get().is_some()
                            on:click=move |_| run(ClaimAction::Claim)
                        >
                            {move || if pending.get() == Some(ClaimAction::Claim) { "Claiming..." } else { "Claim selected" }}
                        </button>
                        <button
                            class=button_class(ButtonVariant::Default, ButtonSize::Default, "unclaim-btn")
                            disabled=move || pending.get().is_some()
                            on:click=move |_| run(ClaimAction::Unclaim)
                        >
                            {move || if pending.get() == Some(ClaimAction::Unclaim) { "Unclaiming..." } else { "Unclaim selected" }}
                        </button>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
