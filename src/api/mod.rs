//! Booking API Gateway
//!
//! Frontend bindings to the REST API, organized by domain. Views talk to the
//! [`BookingApi`] trait; [`Gateway`] is the HTTP implementation.

mod auth;
mod bookings;
mod services;
#[cfg(test)]
pub mod fake;

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};
use crate::models::{
    AuthResponse, Booking, BookingDraft, BookingStatus, LoginRequest, RegisterRequest, Service, User,
};

/// Unreserved URL characters stay as they are
const URL_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Remote operations the views depend on
///
/// Single-threaded WASM, so futures are not `Send`.
#[async_trait(?Send)]
pub trait BookingApi {
    async fn list_services(&self) -> ApiResult<Vec<Service>>;
    async fn login(&self, request: &LoginRequest) -> ApiResult<AuthResponse>;
    async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse>;
    /// Identity behind the current token
    async fn current_user(&self) -> ApiResult<User>;
    async fn user_bookings(&self) -> ApiResult<Vec<Booking>>;
    /// Every booking (admin only, enforced by the server)
    async fn all_bookings(&self) -> ApiResult<Vec<Booking>>;
    async fn create_booking(&self, draft: &BookingDraft) -> ApiResult<Booking>;
    async fn update_status(&self, booking_id: &str, status: BookingStatus) -> ApiResult<()>;
    async fn cancel_booking(&self, booking_id: &str) -> ApiResult<()>;
}

#[derive(Clone, Copy, Debug)]
enum Verb {
    Get,
    Post,
    Patch,
    Delete,
}

/// HTTP gateway; carries the bearer token when there is one
#[derive(Clone, Debug, PartialEq)]
pub struct Gateway {
    base_url: String,
    token: Option<String>,
}

impl Gateway {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self { base_url: base_url.into(), token }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, verb: Verb, path: &str) -> RequestBuilder {
        let url = self.url(path);
        log::debug!("{:?} {}", verb, url);
        let builder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Patch => Request::patch(&url),
            Verb::Delete => Request::delete(&url),
        };
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.request(Verb::Get, path).send().await?;
        read_json(path, response).await
    }

    async fn post_json<B: serde::Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let response = self.request(Verb::Post, path).json(body)?.send().await?;
        read_json(path, response).await
    }

    async fn send_empty(&self, verb: Verb, path: &str) -> ApiResult<()> {
        let response = self.request(verb, path).send().await?;
        check_status(path, response).await
    }
}

/// Percent-encode one path segment or query value
pub(crate) fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URL_COMPONENT).to_string()
}

async fn check_status(path: &str, response: Response) -> ApiResult<()> {
    if response.ok() {
        Ok(())
    } else {
        Err(failure(path, response).await)
    }
}

async fn read_json<T: DeserializeOwned>(path: &str, response: Response) -> ApiResult<T> {
    if !response.ok() {
        return Err(failure(path, response).await);
    }
    response.json::<T>().await.map_err(|e| {
        log::warn!("{} returned an unreadable body: {}", path, e);
        ApiError::Decode(e.to_string())
    })
}

async fn failure(path: &str, response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_response(status, &body);
    log::warn!("{} failed: {}", path, err);
    err
}

#[async_trait(?Send)]
impl BookingApi for Gateway {
    async fn list_services(&self) -> ApiResult<Vec<Service>> {
        self.fetch_services().await
    }

    async fn login(&self, request: &LoginRequest) -> ApiResult<AuthResponse> {
        self.post_login(request).await
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse> {
        self.post_register(request).await
    }

    async fn current_user(&self) -> ApiResult<User> {
        self.fetch_me().await
    }

    async fn user_bookings(&self) -> ApiResult<Vec<Booking>> {
        self.fetch_user_bookings().await
    }

    async fn all_bookings(&self) -> ApiResult<Vec<Booking>> {
        self.fetch_all_bookings().await
    }

    async fn create_booking(&self, draft: &BookingDraft) -> ApiResult<Booking> {
        self.post_booking(draft).await
    }

    async fn update_status(&self, booking_id: &str, status: BookingStatus) -> ApiResult<()> {
        self.patch_status(booking_id, status).await
    }

    async fn cancel_booking(&self, booking_id: &str) -> ApiResult<()> {
        self.delete_booking(booking_id).await
    }
}
