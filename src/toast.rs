//! Toast Notifications
//!
//! Transient messages stacked in a corner, removed after a delay or on click.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::error::ActionError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            ToastLevel::Info => "toast info",
            ToastLevel::Success => "toast success",
            ToastLevel::Warning => "toast warning",
            ToastLevel::Error => "toast error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub message: String,
}

/// Toast queue provided via context
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
    duration_ms: u32,
}

impl ToastContext {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
            duration_ms,
        }
    }

    pub fn push(&self, level: ToastLevel, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        let message = message.into();
        log::debug!("toast {:?}: {}", level, message);
        self.toasts.update(|toasts| toasts.push(Toast { id, level, message }));

        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(ctx.duration_ms).await;
            ctx.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u32) {
        self.toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(ToastLevel::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message);
    }

    /// Local rejections become warnings, backend failures errors
    pub fn action_failed(&self, err: &ActionError) {
        if err.is_local() {
            self.warning(err.user_message());
        } else {
            log::error!("action failed: {}", err);
            self.error(err.user_message());
        }
    }
}

pub fn use_toasts() -> ToastContext {
    expect_context::<ToastContext>()
}

/// Renders the toast stack
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_toasts();

    view! {
        <div class="toast-stack">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.level.class() on:click=move |_| ctx.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
