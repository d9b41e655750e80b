//! Dashboard Logic
//!
//! Upcoming/past split for the customer view, status counters for the admin
//! view, and the mutate-then-refetch step both views use after a change.

use std::future::Future;

use chrono::NaiveDate;

use crate::api::BookingApi;
use crate::error::ApiResult;
use crate::models::{Booking, BookingStatus};

pub const LOAD_FAILED: &str = "Failed to load bookings";
pub const CANCEL_FAILED: &str = "Failed to cancel booking";
pub const CANCEL_OK: &str = "Booking cancelled successfully";
pub const STATUS_FAILED: &str = "Failed to update status";
pub const STATUS_OK: &str = "Status updated successfully";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar date of a booking, if it parses
pub fn booking_day(booking: &Booking) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(booking.booking_date.trim(), DATE_FORMAT).ok()
}

/// Whether the booking falls on `today` or later. Time of day is not considered.
pub fn is_upcoming(booking: &Booking, today: NaiveDate) -> bool {
    booking_day(booking).map_or(true, |day| day >= today)
}

/// Split into (upcoming, past), each in server order
pub fn partition_by_date(bookings: &[Booking], today: NaiveDate) -> (Vec<Booking>, Vec<Booking>) {
    bookings.iter().cloned().partition(|b| is_upcoming(b, today))
}

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Counters shown on the admin dashboard
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BookingStats {
    pub total: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub completed: usize,
}

impl BookingStats {
    pub fn from_bookings(bookings: &[Booking]) -> Self {
        let count = |status: BookingStatus| bookings.iter().filter(|b| b.status == status).count();
        Self {
            total: bookings.len(),
            pending: count(BookingStatus::Pending),
            confirmed: count(BookingStatus::Confirmed),
            completed: count(BookingStatus::Completed),
        }
    }
}

/// Run `mutation`; only if it succeeds, run `refetch`.
///
/// The outer error belongs to the mutation. `Ok` means the server applied
/// the change, and carries the refetch result on its own so a failed fetch
/// is not mistaken for a failed change.
pub async fn mutate_then_refetch<M, R, T>(mutation: M, refetch: R) -> ApiResult<ApiResult<Vec<T>>>
where
    M: Future<Output = ApiResult<()>>,
    R: Future<Output = ApiResult<Vec<T>>>,
{
    mutation.await?;
    Ok(refetch.await)
}

pub async fn cancel_booking<A: BookingApi + ?Sized>(
    api: &A,
    booking_id: &str,
) -> ApiResult<ApiResult<Vec<Booking>>> {
    log::info!("cancelling booking {}", booking_id);
    mutate_then_refetch(api.cancel_booking(booking_id), api.user_bookings()).await
}

pub async fn change_status<A: BookingApi + ?Sized>(
    api: &A,
    booking_id: &str,
    status: BookingStatus,
) -> ApiResult<ApiResult<Vec<Booking>>> {
    log::info!("setting booking {} to {}", booking_id, status);
    mutate_then_refetch(api.update_status(booking_id, status), api.all_bookings()).await
}

/// Locally displayed bookings; replaced only by a successful fetch
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingList {
    bookings: Vec<Booking>,
    loaded: bool,
}

impl BookingList {
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Take the result of a fetch. On error the previous list stays and the error is returned.
    pub fn apply(&mut self, result: ApiResult<Vec<Booking>>) -> ApiResult<()> {
        self.loaded = true;
        self.bookings = result?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{booking, FakeApi};
    use crate::error::ApiError;
    use crate::models::Role;

    fn status_of(list: &BookingList, booking_id: &str) -> Option<BookingStatus> {
        list.bookings().iter().find(|b| b.id == booking_id).map(|b| b.status)
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_partition_by_calendar_date() {
        let bookings = vec![
            booking("a", "2025-05-31", BookingStatus::Completed),
            booking("b", "2025-06-01", BookingStatus::Pending),
            booking("c", "2025-06-02", BookingStatus::Confirmed),
            booking("d", "2024-12-25", BookingStatus::Completed),
        ];

        let (upcoming, past) = partition_by_date(&bookings, day("2025-06-01"));

        let ids = |list: &[Booking]| list.iter().map(|b| b.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&upcoming), vec!["b", "c"]);
        assert_eq!(ids(&past), vec!["a", "d"]);
    }

    #[test]
    fn test_partition_is_total() {
        let bookings = vec![
            booking("a", "2025-06-01", BookingStatus::Pending),
            booking("b", "not a date", BookingStatus::Pending),
            booking("c", "", BookingStatus::Pending),
            booking("d", "1999-01-01", BookingStatus::Pending),
        ];
        let (upcoming, past) = partition_by_date(&bookings, day("2025-06-01"));
        assert_eq!(upcoming.len() + past.len(), bookings.len());
        for b in &bookings {
            let in_upcoming = upcoming.iter().any(|u| u.id == b.id);
            let in_past = past.iter().any(|p| p.id == b.id);
            assert!(in_upcoming ^ in_past, "{} must be in exactly one group", b.id);
        }
        // unparseable dates stay cancellable
        assert!(upcoming.iter().any(|u| u.id == "b"));
    }

    #[test]
    fn test_stats() {
        let bookings = vec![
            booking("a", "2025-06-01", BookingStatus::Pending),
            booking("b", "2025-06-01", BookingStatus::Pending),
            booking("c", "2025-06-01", BookingStatus::Confirmed),
            booking("d", "2025-06-01", BookingStatus::Completed),
            booking("e", "2025-06-01", BookingStatus::Cancelled),
        ];
        assert_eq!(
            BookingStats::from_bookings(&bookings),
            BookingStats { total: 5, pending: 2, confirmed: 1, completed: 1 }
        );
        assert_eq!(BookingStats::from_bookings(&[]), BookingStats::default());
    }

    #[tokio::test]
    async fn test_admin_status_change_refetches() {
        let api = FakeApi::new(Role::Admin).with_bookings(vec![
            booking("b1", "2025-06-01", BookingStatus::Pending),
            booking("b3", "2025-06-02", BookingStatus::Pending),
        ]);
        let mut list = BookingList::default();
        list.apply(api.all_bookings().await).unwrap();

        let refetched = change_status(&api, "b1", BookingStatus::Confirmed).await.unwrap();
        list.apply(refetched).unwrap();

        assert_eq!(status_of(&list, "b1"), Some(BookingStatus::Confirmed));
        assert_eq!(status_of(&list, "b3"), Some(BookingStatus::Pending));
        assert_eq!(api.call_count("all_bookings"), 2);
    }

    #[tokio::test]
    async fn test_failed_status_change_keeps_displayed_status() {
        let api = FakeApi::new(Role::Admin)
            .with_bookings(vec![booking("b1", "2025-06-01", BookingStatus::Pending)]);
        let mut list = BookingList::default();
        list.apply(api.all_bookings().await).unwrap();

        api.fail_with(500, None);
        let err = change_status(&api, "b1", BookingStatus::Confirmed).await.unwrap_err();

        assert_eq!(err.user_message(STATUS_FAILED), STATUS_FAILED);
        assert_eq!(status_of(&list, "b1"), Some(BookingStatus::Pending));
        // no refetch after a failed mutation
        assert_eq!(api.call_count("all_bookings"), 1);
    }

    #[tokio::test]
    async fn test_status_change_survives_failed_refetch() {
        let api = FakeApi::new(Role::Admin)
            .with_bookings(vec![booking("b1", "2025-06-01", BookingStatus::Pending)]);
        let mut list = BookingList::default();
        list.apply(api.all_bookings().await).unwrap();

        api.fail_call("all_bookings", ApiError::Network("offline".into()));
        let refetched = change_status(&api, "b1", BookingStatus::Confirmed)
            .await
            .expect("the change itself went through");

        assert_eq!(api.bookings.borrow()[0].status, BookingStatus::Confirmed);
        let err = list.apply(refetched).unwrap_err();
        assert_eq!(err.user_message(LOAD_FAILED), LOAD_FAILED);
        // stale until the next successful fetch
        assert_eq!(status_of(&list, "b1"), Some(BookingStatus::Pending));
    }

    #[tokio::test]
    async fn test_refetch_is_skipped_when_mutation_fails() {
        let refetched = std::cell::Cell::new(false);
        let result = mutate_then_refetch(
            async { Err(ApiError::Http { status: 404, detail: None }) },
            async {
                refetched.set(true);
                Ok(Vec::<Booking>::new())
            },
        )
        .await;

        assert!(matches!(result, Err(ApiError::Http { status: 404, .. })));
        assert!(!refetched.get());
    }

    #[tokio::test]
    async fn test_cancel_removes_booking_after_refetch() {
        let api = FakeApi::new(Role::User).with_bookings(vec![
            booking("b2", "2030-01-01", BookingStatus::Pending),
            booking("b4", "2030-01-02", BookingStatus::Pending),
        ]);
        let mut list = BookingList::default();
        list.apply(api.user_bookings().await).unwrap();

        list.apply(cancel_booking(&api, "b2").await.unwrap()).unwrap();

        assert_eq!(status_of(&list, "b2"), None);
        assert_eq!(list.bookings().len(), 1);
    }

    #[tokio::test]
    async fn test_cancel_survives_failed_refetch() {
        let api = FakeApi::new(Role::User)
            .with_bookings(vec![booking("b2", "2030-01-01", BookingStatus::Pending)]);

        api.fail_call("user_bookings", ApiError::Network("offline".into()));
        let refetched = cancel_booking(&api, "b2").await.unwrap();

        assert!(refetched.is_err());
        assert!(api.bookings.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_failed_cancel_leaves_list() {
        let api = FakeApi::new(Role::User)
            .with_bookings(vec![booking("b2", "2030-01-01", BookingStatus::Pending)]);
        let mut list = BookingList::default();
        list.apply(api.user_bookings().await).unwrap();

        let err = cancel_booking(&api, "missing").await.unwrap_err();

        assert!(matches!(err, ApiError::Http { status: 404, .. }));
        assert_eq!(list.bookings().len(), 1);
        assert_eq!(api.call_count("user_bookings"), 1);
    }
}
