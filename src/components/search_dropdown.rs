//! Search Dropdown Component
//!
//! Quick results under the header search box.

use leptos::prelude::*;

use crate::context::{use_content, use_search};
use crate::format::{format_currency, format_date};
use crate::search::DROPDOWN_LIMIT;

#[component]
pub fn SearchDropdown(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let search = use_search();
    let content = use_content();

    let matches = move || search.results.get().into_iter().take(DROPDOWN_LIMIT).collect::<Vec<_>>();

    view! {
        <Show when=move || open.get() && search.has_query()>
            <div class="search-dropdown">
                {move || {
                    let shown = matches();
                    let total = search.results.with(|results| results.len());
                    if shown.is_empty() {
                        view! { <div class="search-empty">"No receipts match your search"</div> }.into_any()
                    } else {
                        view! {
                            <ul class="search-results">
                                {shown.into_iter().map(|receipt| {
                                    let id = receipt.id;
                                    view! {
                                        <li>
                                            <button
                                                type="button"
                                                class="search-result"
                                                on:mousedown=move |ev| {
                                                    // mousedown fires before the input loses focus
                                                    ev.prevent_default();
                                                    content.open_receipt(id);
                                                    set_open.set(false);
                                                }
                                            >
                                                <span class="result-name">{receipt.establishment_name.clone()}</span>
                                                <span class="result-date">{format_date(&receipt.transaction_date_time)}</span>
                                                <span class="result-total">{format_currency(receipt.transaction_total)}</span>
                                                <span class="result-code">"#"{receipt.receipt_code.clone()}</span>
                                            </button>
                                        </li>
                                    }
                                }).collect_view()}
                            </ul>
                            <Show when=move || { total > DROPDOWN_LIMIT }>
                                <div class="search-more">{format!("{} more in Receipts", total.saturating_sub(DROPDOWN_LIMIT))}</div>
                            </Show>
                        }.into_any()
                    }
                }}
            </div>
        </Show>
    }
}
