//! Booking Card Component
//!
//! Customer-facing booking tile. Upcoming bookings carry a cancel action;
//! past ones are shown muted.

use leptos::prelude::*;

use crate::components::ConfirmButton;
use crate::models::Booking;

#[component]
pub fn BookingCard(
    booking: Booking,
    #[prop(optional, into)] on_cancel: Option<Callback<String>>,
) -> impl IntoView {
    let past = on_cancel.is_none();
    let id = booking.id.clone();
    let badge = if past { "status-badge".to_string() } else { booking.status.badge_class().to_string() };
    let status_text = if past { "Completed" } else { booking.status.as_str() };

    view! {
        <div class=if past { "booking-card past" } else { "booking-card" } data-testid=format!("booking-card-{}", id)>
            <h3 class="booking-service">{booking.service_name.clone()}</h3>
            <span class=badge>{status_text}</span>
            <div class="booking-meta">
                <div class="booking-date">{booking.booking_date.clone()}</div>
                <div class="booking-time">{booking.booking_time.clone()}</div>
                {(!past).then(|| view! { <div class="booking-address">{booking.address.clone()}</div> })}
            </div>
            {on_cancel.map(|cb| {
                let id = id.clone();
                view! {
                    <ConfirmButton
                        label="Cancel Booking"
                        prompt="Cancel this booking?"
                        button_class="btn destructive"
                        test_id=format!("cancel-booking-btn-{}", id)
                        on_confirm=Callback::new(move |_| cb.run(id.clone()))
                    />
                }
            })}
        </div>
    }
}
