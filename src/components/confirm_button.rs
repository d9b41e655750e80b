//! Confirm Button Component
//!
//! Two-click guard for destructive actions such as cancelling a booking.

use leptos::prelude::*;

/// Button that asks before running `on_confirm`
///
/// # Arguments
/// * `label` - Text of the idle button
/// * `prompt` - Question shown while waiting for the answer
/// * `button_class` - CSS class for the idle button
/// * `on_confirm` - Runs once the user answers "Yes"
/// * `test_id` - `data-testid` of the idle button
#[component]
pub fn ConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] prompt: String,
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(optional, into)] test_id: String,
) -> impl IntoView {
    let asking = RwSignal::new(false);
    let answer = move |confirmed: bool| {
        asking.set(false);
        if confirmed {
            on_confirm.run(());
        }
    };

    view! {
        <Show
            when=move || asking.get()
            fallback=move || view! {
                <button
                    class=button_class.clone()
                    data-testid=test_id.clone()
                    on:click=move |_| asking.set(true)
                >
                    {label.clone()}
                </button>
            }
        >
            <div class="confirm-inline" role="alertdialog">
                <span class="confirm-text">{prompt.clone()}</span>
                <button class="btn destructive small" on:click=move |_| answer(true)>"Yes"</button>
                <button class="btn ghost small" on:click=move |_| answer(false)>"No"</button>
            </div>
        </Show>
    }
}
