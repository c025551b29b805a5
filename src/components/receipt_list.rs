//! Receipt List
//!
//! Filtered receipts split into the ones the user owns (to be paid back)
//! and the ones they are a member of (to pay for).

use leptos::prelude::*;

use crate::components::receipt_card::ReceiptCard;
use crate::context::use_search;
use crate::models::{partition_by_ownership, Receipt};

#[component]
pub fn ReceiptList() -> impl IntoView {
    let search = use_search();

    let sections = Memo::new(move |_| partition_by_ownership(&search.results.get()));
    let owned = Signal::derive(move || sections.get().0);
    let member = Signal::derive(move || sections.get().1);

    view! {
        <section class="receipt-list">
            <Show when=move || search.has_query()>
                <p class="search-summary">
                    {move || format!("{} result(s) for \"{}\"", search.results.with(|r| r.len()), search.query.get().trim())}
                </p>
            </Show>
            <Show when=move || search.is_loading()>
                <p class="loading">"Refreshing..."</p>
            </Show>
            <ReceiptSection title="Receipts you own" receipts=owned />
            <ReceiptSection title="Receipts you're part of" receipts=member />
        </section>
    }
}

#[component]
fn ReceiptSection(title: &'static str, receipts: Signal<Vec<Receipt>>) -> impl IntoView {
    view! {
        <div class="receipt-section">
            <h2>{title}</h2>
            <Show
                when=move || receipts.with(|r| !r.is_empty())
                fallback=|| view! { <p class="empty">"No receipts"</p> }
            >
                <div class="receipt-grid">
                    <For
                        each=move || receipts.get()
                        key=|receipt| receipt.id
                        children=move |receipt| view! { <ReceiptCard receipt_id=receipt.id /> }
                    />
                </div>
            </Show>
        </div>
    }
}
