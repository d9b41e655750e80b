//! Stat Card Component

use leptos::prelude::*;

/// Counter tile on the admin dashboard
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<usize>,
    #[prop(optional, into)] accent: String,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-label">{label}</div>
            <div class=format!("stat-value {}", accent)>{move || value.get()}</div>
        </div>
    }
}
