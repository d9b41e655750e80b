//! Toaster Component
//!
//! Renders the notification queue in a fixed corner.

use leptos::prelude::*;

use crate::notify::{use_notifier, ToastKind};

#[component]
pub fn Toaster() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || notifier.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast success",
                        ToastKind::Error => "toast error",
                    };
                    view! {
                        <div class=class on:click=move |_| notifier.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
