//! In-memory API used by tests

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::BookingApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    AuthResponse, Booking, BookingDraft, BookingStatus, LoginRequest, RegisterRequest, Role, Service, User,
};

pub struct FakeApi {
    pub services: Vec<Service>,
    pub bookings: RefCell<Vec<Booking>>,
    pub user: User,
    /// Pending failure: the named call (or any call when `None`) returns this error
    pub fail_next: RefCell<Option<(Option<String>, ApiError)>>,
    pub calls: RefCell<Vec<String>>,
    next_id: Cell<u32>,
}

pub fn user(role: Role) -> User {
    User {
        id: "u1".into(),
        name: "Jane".into(),
        email: "jane@example.com".into(),
        role,
    }
}

pub fn deep_cleaning() -> Service {
    Service {
        id: "service-2".into(),
        name: "Deep Cleaning".into(),
        description: "Thorough cleaning including baseboards.".into(),
        price: 179.99,
        duration_minutes: 240,
        image_url: "https://images.example/deep.jpg".into(),
    }
}

pub fn booking(id: &str, date: &str, status: BookingStatus) -> Booking {
    Booking {
        id: id.into(),
        user_id: "u1".into(),
        user_email: "jane@example.com".into(),
        user_name: "Jane".into(),
        service_id: "service-1".into(),
        service_name: "Basic House Cleaning".into(),
        booking_date: date.into(),
        booking_time: "09:00".into(),
        address: "1 Elm St".into(),
        phone: "555-0199".into(),
        notes: None,
        status,
        created_at: None,
    }
}

impl FakeApi {
    pub fn new(role: Role) -> Self {
        Self {
            services: vec![deep_cleaning()],
            bookings: RefCell::new(Vec::new()),
            user: user(role),
            fail_next: RefCell::new(None),
            calls: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
        }
    }

    pub fn with_bookings(self, bookings: Vec<Booking>) -> Self {
        *self.bookings.borrow_mut() = bookings;
        self
    }

    /// Next call fails with an HTTP error
    pub fn fail_with(&self, status: u16, detail: Option<&str>) {
        self.fail_next_with(ApiError::Http { status, detail: detail.map(str::to_string) });
    }

    /// Next call fails with `error`
    pub fn fail_next_with(&self, error: ApiError) {
        *self.fail_next.borrow_mut() = Some((None, error));
    }

    /// Next call to `name` fails with `error`; other calls go through
    pub fn fail_call(&self, name: &str, error: ApiError) {
        *self.fail_next.borrow_mut() = Some((Some(name.to_string()), error));
    }

    pub fn call_count(&self, name: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.as_str() == name).count()
    }

    fn record(&self, name: &str) -> ApiResult<()> {
        self.calls.borrow_mut().push(name.to_string());
        let mut pending = self.fail_next.borrow_mut();
        let hits = match pending.as_ref() {
            Some((Some(target), _)) => target == name,
            Some((None, _)) => true,
            None => false,
        };
        match pending.take() {
            Some((_, error)) if hits => Err(error),
            other => {
                *pending = other;
                Ok(())
            }
        }
    }

    fn auth(&self) -> AuthResponse {
        AuthResponse {
            access_token: "token-123".into(),
            token_type: Some("bearer".into()),
            user: self.user.clone(),
        }
    }
}

#[async_trait(?Send)]
impl BookingApi for FakeApi {
    async fn list_services(&self) -> ApiResult<Vec<Service>> {
        self.record("list_services")?;
        Ok(self.services.clone())
    }

    async fn login(&self, _request: &LoginRequest) -> ApiResult<AuthResponse> {
        self.record("login")?;
        Ok(self.auth())
    }

    async fn register(&self, _request: &RegisterRequest) -> ApiResult<AuthResponse> {
        self.record("register")?;
        Ok(self.auth())
    }

    async fn current_user(&self) -> ApiResult<User> {
        self.record("current_user")?;
        Ok(self.user.clone())
    }

    async fn user_bookings(&self) -> ApiResult<Vec<Booking>> {
        self.record("user_bookings")?;
        let bookings = self.bookings.borrow();
        Ok(bookings.iter().filter(|b| b.user_id == self.user.id).cloned().collect())
    }

    async fn all_bookings(&self) -> ApiResult<Vec<Booking>> {
        self.record("all_bookings")?;
        if !self.user.is_admin() {
            return Err(ApiError::Http { status: 403, detail: Some("Not authorized".into()) });
        }
        Ok(self.bookings.borrow().clone())
    }

    async fn create_booking(&self, draft: &BookingDraft) -> ApiResult<Booking> {
        self.record("create_booking")?;
        let id = format!("new-{}", self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        let booking = Booking {
            id,
            user_id: self.user.id.clone(),
            user_email: self.user.email.clone(),
            user_name: self.user.name.clone(),
            service_id: draft.service_id.clone(),
            service_name: draft.service_name.clone(),
            booking_date: draft.booking_date.clone(),
            booking_time: draft.booking_time.clone(),
            address: draft.address.clone(),
            phone: draft.phone.clone(),
            notes: draft.notes.clone(),
            status: BookingStatus::Pending,
            created_at: None,
        };
        self.bookings.borrow_mut().push(booking.clone());
        Ok(booking)
    }

    async fn update_status(&self, booking_id: &str, status: BookingStatus) -> ApiResult<()> {
        self.record("update_status")?;
        let mut bookings = self.bookings.borrow_mut();
        match bookings.iter_mut().find(|b| b.id == booking_id) {
            Some(booking) => {
                booking.status = status;
                Ok(())
            }
            None => Err(ApiError::Http { status: 404, detail: Some("Booking not found".into()) }),
        }
    }

    async fn cancel_booking(&self, booking_id: &str) -> ApiResult<()> {
        self.record("cancel_booking")?;
        let mut bookings = self.bookings.borrow_mut();
        let before = bookings.len();
        bookings.retain(|b| b.id != booking_id);
        if bookings.len() == before {
            return Err(ApiError::Http { status: 404, detail: Some("Booking not found".into()) });
        }
        Ok(())
    }
}
