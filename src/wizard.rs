//! Booking Wizard
//!
//! Four linear steps: select service, pick date and time, enter details,
//! confirm. Forward moves are validated; backward moves always succeed.

use thiserror::Error;

use crate::api::BookingApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{Booking, BookingDraft, Service};

pub const SUBMIT_FALLBACK: &str = "Booking failed. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardStep {
    SelectService,
    DateTime,
    Details,
    Confirm,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::SelectService,
        WizardStep::DateTime,
        WizardStep::Details,
        WizardStep::Confirm,
    ];

    pub fn index(self) -> usize {
        match self {
            WizardStep::SelectService => 0,
            WizardStep::DateTime => 1,
            WizardStep::Details => 2,
            WizardStep::Confirm => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::SelectService => "Select Service",
            WizardStep::DateTime => "Date & Time",
            WizardStep::Details => "Details",
            WizardStep::Confirm => "Confirm",
        }
    }

    fn next(self) -> Option<WizardStep> {
        WizardStep::ALL.get(self.index() + 1).copied()
    }

    fn prev(self) -> Option<WizardStep> {
        self.index().checked_sub(1).map(|i| WizardStep::ALL[i])
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("Please select a service")]
    NoService,
    #[error("Please select date and time")]
    MissingDateTime,
    #[error("Please fill in all required fields")]
    MissingDetails,
    #[error("Already at the last step")]
    AtLastStep,
}

impl From<WizardError> for ApiError {
    fn from(e: WizardError) -> Self {
        ApiError::Validation(e.to_string())
    }
}

/// Where the back button leads
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackTarget {
    Step(WizardStep),
    ExitToDashboard,
}

/// Editable fields of the draft, used by the input bindings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Date,
    Time,
    Address,
    Phone,
    Notes,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookingWizard {
    step: WizardStep,
    draft: BookingDraft,
    /// Price snapshot of the chosen service, for the confirm summary
    service_price: Option<f64>,
}

impl Default for BookingWizard {
    fn default() -> Self {
        Self::new()
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl BookingWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::SelectService,
            draft: BookingDraft::default(),
            service_price: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn service_price(&self) -> Option<f64> {
        self.service_price
    }

    /// Width of the progress bar, 25..=100
    pub fn progress_percent(&self) -> u32 {
        ((self.step.index() + 1) * 100 / WizardStep::ALL.len()) as u32
    }

    /// Pick a service and move on to date and time
    pub fn select_service(&mut self, service: &Service) {
        if self.step != WizardStep::SelectService {
            return;
        }
        self.draft.service_id = service.id.clone();
        self.draft.service_name = service.name.clone();
        self.service_price = Some(service.price);
        self.step = WizardStep::DateTime;
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Date => self.draft.booking_date = value,
            DraftField::Time => self.draft.booking_time = value,
            DraftField::Address => self.draft.address = value,
            DraftField::Phone => self.draft.phone = value,
            DraftField::Notes => {
                self.draft.notes = if is_blank(&value) { None } else { Some(value) };
            }
        }
    }

    pub fn field(&self, field: DraftField) -> String {
        match field {
            DraftField::Date => self.draft.booking_date.clone(),
            DraftField::Time => self.draft.booking_time.clone(),
            DraftField::Address => self.draft.address.clone(),
            DraftField::Phone => self.draft.phone.clone(),
            DraftField::Notes => self.draft.notes.clone().unwrap_or_default(),
        }
    }

    /// Check the fields the current step owns
    fn validate_step(&self, step: WizardStep) -> Result<(), WizardError> {
        match step {
            WizardStep::SelectService if is_blank(&self.draft.service_id) => Err(WizardError::NoService),
            WizardStep::DateTime if is_blank(&self.draft.booking_date) || is_blank(&self.draft.booking_time) => {
                Err(WizardError::MissingDateTime)
            }
            WizardStep::Details if is_blank(&self.draft.address) || is_blank(&self.draft.phone) => {
                Err(WizardError::MissingDetails)
            }
            _ => Ok(()),
        }
    }

    /// Move forward one step; on error the state is unchanged
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        let next = self.step.next().ok_or(WizardError::AtLastStep)?;
        self.validate_step(self.step)?;
        self.step = next;
        Ok(next)
    }

    pub fn back(&mut self) -> BackTarget {
        match self.step.prev() {
            Some(prev) => {
                self.step = prev;
                BackTarget::Step(prev)
            }
            None => BackTarget::ExitToDashboard,
        }
    }

    /// The draft ready to send, or the first missing piece
    pub fn submission(&self) -> Result<BookingDraft, WizardError> {
        for step in [WizardStep::SelectService, WizardStep::DateTime, WizardStep::Details] {
            self.validate_step(step)?;
        }
        Ok(self.draft.clone())
    }

    /// Send the draft. On success the wizard starts over; on failure it stays on Confirm.
    pub async fn submit<A: BookingApi + ?Sized>(&mut self, api: &A) -> ApiResult<Booking> {
        let draft = self.submission()?;
        let booking = api.create_booking(&draft).await?;
        log::info!("booking {} created for {}", booking.id, booking.booking_date);
        self.reset();
        Ok(booking)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
