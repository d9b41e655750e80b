//! Booking Endpoints
//!
//! All of these need a bearer token.

use super::{encode_component, Gateway, Verb};
use crate::error::ApiResult;
use crate::models::{Booking, BookingDraft, BookingStatus};

const BOOKINGS_PATH: &str = "/bookings";
const USER_BOOKINGS_PATH: &str = "/bookings/user";
const ALL_BOOKINGS_PATH: &str = "/bookings/all";

// ========================
// Paths
// ========================

fn booking_path(booking_id: &str) -> String {
    format!("{}/{}", BOOKINGS_PATH, encode_component(booking_id))
}

fn status_path(booking_id: &str, status: BookingStatus) -> String {
    format!("{}/status?status={}", booking_path(booking_id), status.as_str())
}

// ========================
// Requests
// ========================

impl Gateway {
    pub(super) async fn fetch_user_bookings(&self) -> ApiResult<Vec<Booking>> {
        self.get_json(USER_BOOKINGS_PATH).await
    }

    pub(super) async fn fetch_all_bookings(&self) -> ApiResult<Vec<Booking>> {
        self.get_json(ALL_BOOKINGS_PATH).await
    }

    pub(super) async fn post_booking(&self, draft: &BookingDraft) -> ApiResult<Booking> {
        self.post_json(BOOKINGS_PATH, draft).await
    }

    pub(super) async fn patch_status(&self, booking_id: &str, status: BookingStatus) -> ApiResult<()> {
        self.send_empty(Verb::Patch, &status_path(booking_id, status)).await
    }

    pub(super) async fn delete_booking(&self, booking_id: &str) -> ApiResult<()> {
        self.send_empty(Verb::Delete, &booking_path(booking_id)).await
    }
}
