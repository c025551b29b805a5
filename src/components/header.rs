//! Header Component
//!
//! Logo, global receipt search and the login/logout button.

use leptos::prelude::*;

use crate::auth::use_auth;
use crate::components::button::{button_class, ButtonSize, ButtonVariant};
use crate::components::search_dropdown::SearchDropdown;
use crate::context::{use_content, use_search, Section};
use crate::toast::use_toasts;

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let search = use_search();
    let toasts = use_toasts();
    let content = use_content();
    let (show_dropdown, set_show_dropdown) = signal(false);
    // narrow screens hide the search form until toggled
    let (full_width_search, set_full_width_search) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_show_dropdown.set(false);
        content.show(Section::Receipts);
    };

    let on_clear = move |_| {
        search.clear();
        set_show_dropdown.set(false);
    };

    let user_label = move || {
        auth.user()
            .map(|user| format!("Logout ({})", user.user_name))
            .unwrap_or_else(|| "Login".to_string())
    };

    view! {
        <header class="app-header">
            <div class=move || if full_width_search.get() { "header-logo hidden" } else { "header-logo" }>
                <a href="/" on:click=move |ev| {
                    ev.prevent_default();
                    content.show(Section::Home);
                }>
                    <span class="logo-text">"Split"</span>
                </a>
            </div>

            <form
                class=move || if full_width_search.get() { "header-search full-width" } else { "header-search" }
                on:submit=on_submit
            >
                <Show when=move || full_width_search.get()>
                    <button
                        type="button"
                        class=button_class(ButtonVariant::Ghost, ButtonSize::Icon, "")
                        on:click=move |_| set_full_width_search.set(false)
                    >
                        "«"
                    </button>
                </Show>
                <div class="search-box">
                    <input
                        type="text"
                        placeholder="Search by establishment, receipt code, item name, or total..."
                        autocomplete="off"
                        prop:value=move || search.query.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_show_dropdown.set(!value.trim().is_empty());
                            search.set_query(value);
                        }
                        on:focus=move |_| set_show_dropdown.set(search.has_query())
                    />
                    <Show when=move || !search.query.get().is_empty()>
                        <button type="button" class="search-clear" title="Clear search" on:click=on_clear>
                            "×"
                        </button>
                    </Show>
                    <button type="submit" class=button_class(ButtonVariant::Default, ButtonSize::Default, "search-submit") title="Search receipts">
                        "Search"
                    </button>
                    <SearchDropdown open=show_dropdown set_open=set_show_dropdown />
                </div>
            </form>

            <div class=move || if full_width_search.get() { "header-actions hidden" } else { "header-actions" }>
                <button
                    class=button_class(ButtonVariant::Ghost, ButtonSize::Icon, "search-toggle")
                    title="Search"
                    on:click=move |_| set_full_width_search.set(true)
                >
                    "🔍"
                </button>
                <button
                    class=button_class(ButtonVariant::Ghost, ButtonSize::Default, "auth-btn")
                    title=user_label
                    on:click=move |_| {
                        search.clear();
                        auth.logout();
                        toasts.info("Signed out");
                    }
                >
                    {user_label}
                </button>
            </div>
        </header>
    }
}
