//! Receipt Editor Component
//!
//! Inline form for the owner to correct receipt details. The form state is
//! owned by the card so a refresh mid-edit keeps what was typed.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{save_receipt, ReceiptForm};
use crate::api;
use crate::auth::use_auth;
use crate::components::button::{button_class, ButtonSize, ButtonVariant};
use crate::context::use_search;
use crate::toast::use_toasts;

#[component]
pub fn ReceiptEditor(
    receipt_id: u32,
    form: RwSignal<ReceiptForm>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let search = use_search();
    let toasts = use_toasts();
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let token = auth.token();
        let current = form.get();
        set_pending.set(true);
        spawn_local(async move {
            match save_receipt(&api::client(), token.as_deref(), receipt_id, &current).await {
                Ok(()) => {
                    toasts.success("Receipt updated");
                    search.refresh();
                    on_close.run(());
                }
                Err(e) => toasts.action_failed(&e),
            }
            let _ = set_pending.try_set(false);
        });
    };

    // one labelled input bound to a single form field
    let field = move |label: &'static str, get: fn(&ReceiptForm) -> String, set: fn(&mut ReceiptForm, String)| {
        view! {
            <label class="editor-field">
                <span>{label}</span>
                <input
                    type="text"
                    prop:value=move || form.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| set(f, value));
                    }
                />
            </label>
        }
    };

    view! {
        <form class="receipt-editor" on:submit=on_submit>
            {field("Establishment", |f| f.establishment_name.clone(), |f, v| f.establishment_name = v)}
            {field("Transaction #", |f| f.transaction_number.clone(), |f, v| f.transaction_number = v)}
            {field("Date", |f| f.transaction_date_time.clone(), |f, v| f.transaction_date_time = v)}
            {field("Tax", |f| f.tax.clone(), |f, v| f.tax = v)}
            {field("Tip", |f| f.tip.clone(), |f, v| f.tip = v)}
            {field("Total", |f| f.total.clone(), |f, v| f.total = v)}
            <div class="editor-actions">
                <button
                    type="submit"
                    class=button_class(ButtonVariant::Primary, ButtonSize::Small, "")
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Saving..." } else { "Save" }}
                </button>
                <button
                    type="button"
                    class=button_class(ButtonVariant::Ghost, ButtonSize::Small, "")
                    on:click=move |_| on_close.run(())
                >
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
