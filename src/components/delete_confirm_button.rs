//! Delete Confirm Button Component
//!
//! Two-step delete for receipt items: nothing reaches the backend until the
//! owner confirms.

use leptos::prelude::*;

use crate::components::button::{button_class, ButtonSize, ButtonVariant};

/// Item delete control shown on owned receipts
///
/// The first click swaps the × for a "Delete?" prompt. Confirming hands off
/// to `on_confirm`, which issues the delete; the confirm stays disabled while
/// the row has a request running.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] extra_class: String,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);

    view! {
        <Show
            when=move || asking.get()
            fallback=move || {
                let extra_class = extra_class.clone();
                view! {
                    <button
                        class=button_class(ButtonVariant::Ghost, ButtonSize::Icon, &extra_class)
                        title="Delete item"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_asking.set(true);
                        }
                    >
                        "×"
                    </button>
                }
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class=button_class(ButtonVariant::Danger, ButtonSize::Icon, "")
                    title="Confirm delete"
                    disabled=move || disabled.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class=button_class(ButtonVariant::Ghost, ButtonSize::Icon, "")
                    title="Keep item"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
