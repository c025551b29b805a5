//! Sidebar Component
//!
//! Section navigation. Narrow screens get the compact icon column.

use leptos::prelude::*;

use crate::components::button::{button_class, ButtonSize, ButtonVariant};
use crate::context::{use_content, Section};

fn icon(section: Section) -> &'static str {
    match section {
        Section::Home => "🏠",
        Section::Receipts => "🧾",
    }
}

#[component]
pub fn SideBar() -> impl IntoView {
    let content = use_content();

    let item_class = move |section: Section, extra: &'static str| {
        let extra = if content.current.get() == section { format!("{} active", extra) } else { extra.to_string() };
        button_class(ButtonVariant::Ghost, ButtonSize::Default, &extra)
    };

    view! {
        <aside class="sidebar-small">
            {Section::ALL.into_iter().map(|section| view! {
                <button
                    class=move || item_class(section, "sidebar-item small")
                    on:click=move |_| content.show(section)
                >
                    <span class="sidebar-icon">{icon(section)}</span>
                    <span class="sidebar-label">{section.label()}</span>
                </button>
            }).collect_view()}
        </aside>
        <aside class="sidebar-large">
            {Section::ALL.into_iter().map(|section| view! {
                <button
                    class=move || item_class(section, "sidebar-item large")
                    on:click=move |_| content.show(section)
                >
                    <span class="sidebar-icon">{icon(section)}</span>
                    <span class="sidebar-label">{section.label()}</span>
                </button>
            }).collect_view()}
        </aside>
    }
}
