//! Admin Dashboard Page
//!
//! Every booking in the system with counters and per-row status control.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::BookingApi;
use crate::components::{StatCard, StatusChange, StatusSelect};
use crate::context::use_app_context;
use crate::dashboard::{self, BookingList, BookingStats, LOAD_FAILED, STATUS_FAILED, STATUS_OK};
use crate::models::Booking;
use crate::notify::use_notifier;
use crate::route::Route;
use crate::session::use_session;

#[component]
fn BookingRow(booking: Booking, on_change: Callback<StatusChange>) -> impl IntoView {
    let phone = booking.phone.clone();
    let notes = booking.notes.clone();
    view! {
        <tr data-testid=format!("booking-row-{}", booking.id)>
            <td class="cell-strong">{booking.service_name.clone()}</td>
            <td>
                <div>{booking.booking_date.clone()}</div>
                <div class="muted">{booking.booking_time.clone()}</div>
            </td>
            <td>
                <div class="cell-strong">{booking.user_name.clone()}</div>
                <div class="muted">{booking.user_email.clone()}</div>
                <div class="muted">{phone}</div>
            </td>
            <td class="cell-clip">{booking.address.clone()}</td>
            <td>
                <StatusSelect booking_id=booking.id.clone() status=booking.status on_change=on_change />
            </td>
            <td class="muted cell-clip">{notes.unwrap_or_else(|| "-".into())}</td>
        </tr>
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let notifier = use_notifier();
    let list = RwSignal::new(BookingList::default());

    Effect::new(move |_| {
        spawn_local(async move {
            let result = session.gateway().all_bookings().await;
            let mut failed = None;
            list.update(|l| failed = l.apply(result).err());
            if let Some(e) = failed {
                notifier.error(e.user_message(LOAD_FAILED));
            }
        });
    });

    let on_status_change = Callback::new(move |change: StatusChange| {
        spawn_local(async move {
            match dashboard::change_status(&session.gateway(), &change.booking_id, change.status).await {
                Ok(refetched) => {
                    notifier.success(STATUS_OK);
                    let mut failed = None;
                    list.update(|l| failed = l.apply(refetched).err());
                    if let Some(e) = failed {
                        // the server holds the new status even though the table is stale
                        notifier.error(e.user_message(LOAD_FAILED));
                    }
                }
                // only a rejected change puts the select back
                Err(e) => {
                    change.revert();
                    notifier.error(e.user_message(STATUS_FAILED));
                }
            }
        });
    });

    let on_logout = move |_| {
        session.sign_out();
        notifier.success("Logged out successfully");
        ctx.navigate(Route::Landing);
    };

    let stats = Memo::new(move |_| list.with(|l| BookingStats::from_bookings(l.bookings())));

    view! {
        <div class="dashboard admin">
            <header class="dashboard-header">
                <div>
                    <h1>"Admin Dashboard"</h1>
                    <p class="muted">"Manage all bookings and services"</p>
                </div>
                <button class="btn ghost" data-testid="admin-logout-btn" on:click=on_logout>"Logout"</button>
            </header>

            <div class="stat-grid">
                <StatCard label="Total Bookings" value=Signal::derive(move || stats.get().total) />
                <StatCard label="Pending" value=Signal::derive(move || stats.get().pending) accent="pending" />
                <StatCard label="Confirmed" value=Signal::derive(move || stats.get().confirmed) accent="confirmed" />
                <StatCard label="Completed" value=Signal::derive(move || stats.get().completed) accent="completed" />
            </div>

            <section class="table-card" data-testid="admin-bookings-table">
                <h2>"All Bookings"</h2>
                <Show
                    when=move || list.with(|l| l.is_loaded())
                    fallback=|| view! { <div class="loading">"Loading..."</div> }
                >
                    <Show
                        when=move || list.with(|l| !l.bookings().is_empty())
                        fallback=|| view! { <p class="muted empty-state">"No bookings yet"</p> }
                    >
                        <table class="bookings-table">
                            <thead>
                                <tr>
                                    <th>"Service"</th>
                                    <th>"Date & Time"</th>
                                    <th>"Customer"</th>
                                    <th>"Address"</th>
                                    <th>"Status"</th>
                                    <th>"Notes"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || list.with(|l| l.bookings().to_vec())
                                    key=|booking| (booking.id.clone(), booking.status)
                                    children=move |booking| view! { <BookingRow booking=booking on_change=on_status_change /> }
                                />
                            </tbody>
                        </table>
                    </Show>
                </Show>
            </section>
        </div>
    }
}
