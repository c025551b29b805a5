//! Home View
//!
//! Greeting and a summary of what is still open.

use leptos::prelude::*;

use crate::auth::use_auth;
use crate::components::button::{button_class, ButtonSize, ButtonVariant};
use crate::context::{use_content, use_search, Section};
use crate::models::partition_by_ownership;

#[component]
pub fn HomeView() -> impl IntoView {
    let auth = use_auth();
    let search = use_search();
    let content = use_content();

    let counts = Memo::new(move |_| {
        let receipts = search.all_receipts();
        let (owned, member) = partition_by_ownership(&receipts);
        let available: usize = receipts.iter().map(|r| r.available_items().count()).sum();
        (owned.len(), member.len(), available)
    });

    view! {
        <section class="home-view">
            <h1>{move || format!("Welcome back, {}", auth.user().map(|u| u.user_name).unwrap_or_default())}</h1>
            <Show
                when=move || !search.is_loading()
                fallback=|| view! { <p class="loading">"Loading receipts..."</p> }
            >
                <div class="home-stats">
                    <div class="stat">
                        <span class="stat-value">{move || counts.get().0}</span>
                        <span class="stat-label">"Receipts you own"</span>
                    </div>
                    <div class="stat">
                        <span class="stat-value">{move || counts.get().1}</span>
                        <span class="stat-label">"Receipts you're part of"</span>
                    </div>
                    <div class="stat">
                        <span class="stat-value">{move || counts.get().2}</span>
                        <span class="stat-label">"Items still available"</span>
                    </div>
                </div>
            </Show>
            <button
                class=button_class(ButtonVariant::Primary, ButtonSize::Default, "")
                on:click=move |_| content.show(Section::Receipts)
            >
                "View receipts"
            </button>
        </section>
    }
}
