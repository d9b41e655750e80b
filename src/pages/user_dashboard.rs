//! User Dashboard Page
//!
//! The signed-in customer's bookings, split into upcoming and past.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::BookingApi;
use crate::components::BookingCard;
use crate::context::use_app_context;
use crate::dashboard::{self, BookingList, CANCEL_FAILED, CANCEL_OK, LOAD_FAILED};
use crate::notify::use_notifier;
use crate::route::Route;
use crate::session::use_session;

#[component]
pub fn UserDashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let notifier = use_notifier();
    let list = RwSignal::new(BookingList::default());

    // Fetch once on activation; later fetches follow a cancel
    Effect::new(move |_| {
        spawn_local(async move {
            let result = session.gateway().user_bookings().await;
            let mut failed = None;
            list.update(|l| failed = l.apply(result).err());
            if let Some(e) = failed {
                notifier.error(e.user_message(LOAD_FAILED));
            }
        });
    });

    let on_cancel = Callback::new(move |booking_id: String| {
        spawn_local(async move {
            match dashboard::cancel_booking(&session.gateway(), &booking_id).await {
                Ok(refetched) => {
                    notifier.success(CANCEL_OK);
                    let mut failed = None;
                    list.update(|l| failed = l.apply(refetched).err());
                    if let Some(e) = failed {
                        notifier.error(e.user_message(LOAD_FAILED));
                    }
                }
                Err(e) => notifier.error(e.user_message(CANCEL_FAILED)),
            }
        });
    });

    let on_logout = move |_| {
        session.sign_out();
        notifier.success("Logged out successfully");
        ctx.navigate(Route::Landing);
    };

    let partitions = Memo::new(move |_| {
        let today = dashboard::today();
        list.with(|l| dashboard::partition_by_date(l.bookings(), today))
    });
    let upcoming = move || partitions.with(|(upcoming, _)| upcoming.clone());
    let past = move || partitions.with(|(_, past)| past.clone());
    let greeting = move || {
        session
            .user()
            .map(|u| format!("Welcome back, {}!", u.name))
            .unwrap_or_default()
    };

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <div>
                    <h1>"My Dashboard"</h1>
                    <p class="muted">{greeting}</p>
                </div>
                <div class="header-actions">
                    <button class="btn primary" data-testid="new-booking-btn" on:click=move |_| ctx.navigate(Route::Book)>
                        "+ New Booking"
                    </button>
                    <button class="btn ghost" data-testid="logout-btn" on:click=on_logout>"Logout"</button>
                </div>
            </header>

            <Show
                when=move || list.with(|l| l.is_loaded())
                fallback=|| view! { <div class="loading">"Loading..."</div> }
            >
                <section data-testid="upcoming-bookings-section">
                    <h2>"Upcoming Bookings"</h2>
                    <Show
                        when=move || partitions.with(|(upcoming, _)| !upcoming.is_empty())
                        fallback=move || view! {
                            <div class="empty-state">
                                <p class="muted">"You don't have any upcoming bookings"</p>
                                <button class="btn primary" data-testid="book-first-service-btn" on:click=move |_| ctx.navigate(Route::Book)>
                                    "Book Your First Service"
                                </button>
                            </div>
                        }
                    >
                        <div class="booking-grid">
                            <For
                                each=upcoming
                                key=|booking| booking.id.clone()
                                children=move |booking| view! { <BookingCard booking=booking on_cancel=on_cancel /> }
                            />
                        </div>
                    </Show>
                </section>

                <Show when=move || partitions.with(|(_, past)| !past.is_empty())>
                    <section data-testid="past-bookings-section">
                        <h2>"Past Bookings"</h2>
                        <div class="booking-grid">
                            <For
                                each=past
                                key=|booking| booking.id.clone()
                                children=move |booking| view! { <BookingCard booking=booking /> }
                            />
                        </div>
                    </section>
                </Show>
            </Show>
        </div>
    }
}
