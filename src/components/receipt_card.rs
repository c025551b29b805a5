//! Receipt Card Component
//!
//! Compact card that expands in place into the full receipt: items with
//! claim controls, owner editing and the money summary.

use leptos::prelude::*;

use crate::actions::{ReceiptForm, Selection};
use crate::components::button::{button_class, ButtonSize, ButtonVariant};
use crate::components::item_list::ItemList;
use crate::components::receipt_editor::ReceiptEditor;
use crate::context::use_content;
use crate::format::{format_currency, format_date, item_count};
use crate::models::Receipt;
use crate::store::{store_find_receipt, use_receipt_store};

#[component]
pub fn ReceiptCard(receipt_id: u32) -> impl IntoView {
    let store = use_receipt_store();
    let content = use_content();

    let receipt = Memo::new(move |_| store_find_receipt(&store, receipt_id));
    // lives outside the rendered branch so a refresh keeps ticks and unsaved edits
    let selection = RwSignal::new(Selection::default());
    let (editing, set_editing) = signal(false);
    let form = RwSignal::new(ReceiptForm::default());

    view! {
        {move || {
            let receipt = receipt.get()?;
            let card = if content.is_expanded(receipt_id) {
                view! {
                    <ExpandedReceipt
                        receipt=receipt
                        selection=selection
                        form=form
                        editing=editing
                        set_editing=set_editing
                    />
                }
                .into_any()
            } else {
                view! {
                    <div class="receipt-card compact" on:click=move |_| content.toggle_receipt(receipt_id)>
                        <div class="card-top">
                            <div class="card-title">
                                <h3>{receipt.establishment_name.clone()}</h3>
                                <p class="card-date">{format_date(&receipt.transaction_date_time)}</p>
                            </div>
                            <div class="card-amount">
                                <div class="card-total">{format_currency(receipt.transaction_total)}</div>
                                <div class="card-code">"#"{receipt.receipt_code.clone()}</div>
                            </div>
                        </div>
                        <div class="card-bottom">
                            <span>{item_count(receipt.items.len())}</span>
                            <span class="card-hint">"Click to expand"</span>
                        </div>
                    </div>
                }
                .into_any()
            };
            Some(card)
        }}
    }
}

#[component]
fn ExpandedReceipt(
    receipt: Receipt,
    selection: RwSignal<Selection>,
    form: RwSignal<ReceiptForm>,
    editing: ReadSignal<bool>,
    set_editing: WriteSignal<bool>,
) -> impl IntoView {
    let content = use_content();
    let receipt_id = receipt.id;
    let is_owner = receipt.is_owner;

    let start_edit = {
        let current = receipt.clone();
        Callback::new(move |_: ()| {
            form.set(ReceiptForm::from_receipt(&current));
            set_editing.set(true);
        })
    };

    view! {
        <div class="receipt-card expanded">
            <div class="expanded-header">
                <div>
                    <h3>{receipt.establishment_name.clone()}</h3>
                    <p class="card-date">{format_date(&receipt.transaction_date_time)}</p>
                    {receipt.transaction_number.clone().map(|number| view! {
                        <p class="card-transaction">"Transaction: "{number}</p>
                    })}
                </div>
                <div class="expanded-actions">
                    <div class="card-code">"#"{receipt.receipt_code.clone()}</div>
                    <Show when=move || is_owner && !editing.get()>
                        <button
                            class=button_class(ButtonVariant::Ghost, ButtonSize::Small, "edit-receipt-btn")
                            on:click=move |_| start_edit.run(())
                        >
                            "Edit"
                        </button>
                    </Show>
                    <button
                        class=button_class(ButtonVariant::Ghost, ButtonSize::Small, "collapse-btn")
                        on:click=move |_| content.toggle_receipt(receipt_id)
                    >
                        "Collapse"
                    </button>
                </div>
            </div>

            <Show when=move || editing.get()>
                <ReceiptEditor receipt_id=receipt_id form=form on_close=move |_| set_editing.set(false) />
            </Show>

            <ItemList receipt=receipt.clone() selection=selection />

            <ReceiptSummary receipt=receipt />
        </div>
    }
}

#[component]
fn ReceiptSummary(receipt: Receipt) -> impl IntoView {
    let tax = receipt.transaction_tax;
    let tip = receipt.transaction_tip;

    view! {
        <div class="receipt-summary">
            <h4>"Summary"</h4>
            <div class="summary-row">
                <span>"Subtotal:"</span>
                <span>{format_currency(receipt.subtotal())}</span>
            </div>
            {(tax > 0.0).then(|| view! {
                <div class="summary-row">
                    <span>"Tax:"</span>
                    <span>{format_currency(tax)}</span>
                </div>
            })}
            {(tip > 0.0).then(|| view! {
                <div class="summary-row">
                    <span>"Tip:"</span>
                    <span>{format_currency(tip)}</span>
                </div>
            })}
            <div class="summary-row total">
                <span>"Total:"</span>
                <span>{format_currency(receipt.transaction_total)}</span>
            </div>
        </div>
    }
}
