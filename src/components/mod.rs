//! UI Components
//!
//! Reusable Leptos components.

mod booking_card;
mod confirm_button;
mod service_card;
mod stat_card;
mod status_select;
mod step_progress;
mod toaster;

pub use booking_card::BookingCard;
pub use confirm_button::ConfirmButton;
pub use service_card::ServiceCard;
pub use stat_card::StatCard;
pub use status_select::{StatusChange, StatusSelect};
pub use step_progress::StepProgress;
pub use toaster::Toaster;
