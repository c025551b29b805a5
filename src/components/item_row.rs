//! Item Row Component
//!
//! One line item: selection checkbox, name, price and claim status. Owners
//! can edit or delete the item inline.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{remove_item, save_item, ItemForm, Selection};
use crate::api;
use crate::auth::use_auth;
use crate::components::button::{button_class, ButtonSize, ButtonVariant};
use crate::components::delete_confirm_button::DeleteConfirmButton;
use crate::context::use_search;
use crate::format::format_currency;
use crate::models::ReceiptItem;
use crate::toast::use_toasts;

#[component]
pub fn ItemRow(item: ReceiptItem, selection: RwSignal<Selection>, is_owner: bool) -> impl IntoView {
    let auth = use_auth();
    let search = use_search();
    let toasts = use_toasts();

    let item_id = item.id;
    let status = item.claim_status();
    let (editing, set_editing) = signal(false);
    let (name, set_name) = signal(item.item_name.clone());
    let (price, set_price) = signal(format!("{:.2}", item.item_price));
    let (pending, set_pending) = signal(false);

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let token = auth.token();
        let form = ItemForm { name: name.get(), price: price.get() };
        set_pending.set(true);
        spawn_local(async move {
            match save_item(&api::client(), token.as_deref(), item_id, &form).await {
                Ok(()) => {
                    toasts.success("Item updated");
                    let _ = set_editing.try_set(false);
                    search.refresh();
                }
                Err(e) => toasts.action_failed(&e),
            }
            let _ = set_pending.try_set(false);
        });
    };

    let on_delete = move |_: ()| {
        let token = auth.token();
        set_pending.set(true);
        spawn_local(async move {
            match remove_item(&api::client(), token.as_deref(), item_id).await {
                Ok(()) => {
                    selection.update(|s| {
                        if s.contains(item_id) {
                            s.toggle(item_id);
                        }
                    });
                    toasts.success("Item deleted");
                    search.refresh();
                }
                Err(e) => toasts.action_failed(&e),
            }
            let _ = set_pending.try_set(false);
        });
    };

    let item_name = item.item_name.clone();
    let item_price = item.item_price;

    view! {
        <div class="item" class:selected=move || selection.with(|s| s.contains(item_id))>
            {move || if editing.get() {
                view! {
                    <form class="item-edit-form" on:submit=on_save>
                        <input
                            type="text"
                            class="item-name-input"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                        <input
                            type="text"
                            class="item-price-input"
                            inputmode="decimal"
                            prop:value=move || price.get()
                            on:input=move |ev| set_price.set(event_target_value(&ev))
                        />
                        <button
                            type="submit"
                            class=button_class(ButtonVariant::Primary, ButtonSize::Small, "")
                            disabled=move || pending.get()
                        >
                            "Save"
                        </button>
                        <button
                            type="button"
                            class=button_class(ButtonVariant::Ghost, ButtonSize::Small, "")
                            on:click=move |_| set_editing.set(false)
                        >
                            "Cancel"
                        </button>
                    </form>
                }.into_any()
            } else {
                view! {
                    <label class="item-main">
                        <input
                            type="checkbox"
                            class="item-checkbox"
                            prop:checked=move || selection.with(|s| s.contains(item_id))
                            on:change=move |_| selection.update(|s| s.toggle(item_id))
                        />
                        <span class="item-name">{item_name.clone()}</span>
                        <span class="item-price">{format_currency(item_price)}</span>
                    </label>
                }.into_any()
            }}
            <span class=status.css_class()>{status.label()}</span>
            <Show when=move || is_owner && !editing.get()>
                <span class="item-owner-actions">
                    <button
                        class=button_class(ButtonVariant::Ghost, ButtonSize::Small, "item-edit-btn")
                        title="Edit item"
                        on:click=move |_| set_editing.set(true)
                    >
                        "✎"
                    </button>
                    <DeleteConfirmButton
                        extra_class="item-delete-btn"
                        disabled=pending
                        on_confirm=on_delete
                    />
                </span>
            </Show>
        </div>
    }
}
