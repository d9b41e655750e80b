//! Status Select Component
//!
//! Admin control for moving a booking between statuses. The shown value
//! follows the server; a failed change is rolled back with `revert`.

use leptos::prelude::*;

use crate::models::BookingStatus;

/// A status change requested from the select
#[derive(Clone)]
pub struct StatusChange {
    pub booking_id: String,
    pub status: BookingStatus,
    previous: BookingStatus,
    shown: RwSignal<BookingStatus>,
}

impl StatusChange {
    /// Put the select back to the status it showed before
    pub fn revert(&self) {
        self.shown.set(self.previous);
    }
}

#[component]
pub fn StatusSelect(
    booking_id: String,
    status: BookingStatus,
    #[prop(into)] on_change: Callback<StatusChange>,
) -> impl IntoView {
    let shown = RwSignal::new(status);
    let test_id = format!("status-select-{}", booking_id);

    let handle_change = move |ev: web_sys::Event| {
        let previous = shown.get_untracked();
        let Ok(next) = event_target_value(&ev).parse::<BookingStatus>() else {
            shown.set(previous);
            return;
        };
        if next == previous {
            return;
        }
        on_change.run(StatusChange {
            booking_id: booking_id.clone(),
            status: next,
            previous,
            shown,
        });
    };

    view! {
        <select
            class="status-select"
            data-testid=test_id
            prop:value=move || shown.get().as_str()
            on:change=handle_change
        >
            {BookingStatus::ALL.iter().map(|s| view! {
                <option value=s.as_str()>{s.label()}</option>
            }).collect_view()}
        </select>
    }
}
