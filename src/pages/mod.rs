//! Page-level views, one per route.

mod admin_dashboard;
mod auth_forms;
mod booking_flow;
mod landing;
mod user_dashboard;

pub use admin_dashboard::AdminDashboardPage;
pub use auth_forms::{LoginPage, RegisterPage};
pub use booking_flow::BookingFlowPage;
pub use landing::LandingPage;
pub use user_dashboard::UserDashboardPage;
