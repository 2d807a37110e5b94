use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shortest bookable duration, in hours.
pub const MIN_DURATION_HOURS: f64 = 1.0;
/// Bookings are scheduled on half-hour slots.
pub const SLOT_STEP_HOURS: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// A partially-filled booking form. Date and time stay optional until the
/// customer (or admin) has picked them, and the rate resolver prices nothing
/// before both are present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDraft {
    pub ground_id: u32,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub duration_hours: f64,
}

impl BookingDraft {
    pub fn new(ground_id: u32) -> Self {
        BookingDraft {
            ground_id,
            date: None,
            time: None,
            duration_hours: MIN_DURATION_HOURS,
        }
    }
}

/// The suggested price and the stored price are deliberately separate fields.
/// Editing a booking recomputes the suggestion, but only an explicit action
/// copies it over the price that was persisted at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BookingPricing {
    pub suggested: Option<f64>,
    pub stored: f64,
}

impl BookingPricing {
    /// Pricing for a freshly created booking: the suggestion becomes the
    /// stored price, or zero when no rate was configured (the admin is then
    /// expected to set the price manually).
    pub fn from_suggestion(suggested: Option<f64>) -> Self {
        BookingPricing {
            suggested,
            stored: suggested.unwrap_or(0.0),
        }
    }

    /// Copy the current suggestion into the stored price. Returns false when
    /// there is no suggestion to accept.
    pub fn accept_suggestion(&mut self) -> bool {
        match self.suggested {
            Some(price) => {
                self.stored = price;
                true
            }
            None => false,
        }
    }
}

/// A persisted booking. Lighting and price are snapshots taken when the
/// booking was created, never recomputed behind the caller's back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: u32,
    pub ground_id: u32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_hours: f64,
    pub with_lights: bool,
    pub pricing: BookingPricing,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotError {
    /// Start time not on a half-hour boundary.
    OffSlotTime { minute: u32 },
    /// Duration below the minimum or not a half-hour multiple.
    BadDuration { hours: f64 },
}

impl fmt::Display for SlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotError::OffSlotTime { minute } => {
                write!(f, "booking time minute must be 00 or 30, got {:02}", minute)
            }
            SlotError::BadDuration { hours } => {
                write!(
                    f,
                    "booking duration must be a half-hour multiple of at least {} hours, got {}",
                    MIN_DURATION_HOURS, hours
                )
            }
        }
    }
}

impl std::error::Error for SlotError {}

/// Booking start times sit on half-hour slots.
pub fn validate_slot(time: NaiveTime) -> Result<(), SlotError> {
    let minute = time.minute();
    if minute == 0 || minute == 30 {
        Ok(())
    } else {
        Err(SlotError::OffSlotTime { minute })
    }
}

/// Durations are positive half-hour multiples, at least one hour.
pub fn validate_duration(hours: f64) -> Result<(), SlotError> {
    let half_steps = hours * 2.0;
    let on_grid = (half_steps - half_steps.round()).abs() < 1e-9;

    if hours >= MIN_DURATION_HOURS && on_grid {
        Ok(())
    } else {
        Err(SlotError::BadDuration { hours })
    }
}

/// Round an arbitrary duration input to the nearest half-hour step and clamp
/// it to the minimum, the way the edit form sanitizes manual entry.
pub fn snap_duration(hours: f64) -> f64 {
    let snapped = (hours * 2.0).round() / 2.0;
    snapped.max(MIN_DURATION_HOURS)
}
