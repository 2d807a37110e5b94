//! Lighting determination and price suggestion for ground bookings.
//!
//! Pure functions over the booking form state, so the creation flow and the
//! edit flow can never disagree about what a slot should cost.

use crate::booking::{BookingDraft, Ground};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

/// What the resolver hands back to the booking workflow. `None` fields mean
/// "not decidable yet": the form is incomplete or the ground has no rate
/// configured, and submission must be blocked or priced manually.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateQuote {
    pub with_lights: Option<bool>,
    pub suggested_price: Option<f64>,
}

/// Decide whether floodlights are required for a booking slot.
///
/// Returns `None` until both date and time are picked. Only the month and the
/// hour matter: March through September counts as summer with daylight from
/// 05:00 up to (excluding) 18:00; the rest of the year daylight runs from
/// 06:00 up to (excluding) 17:00. The half-hour slot granularity never moves
/// the boundary, so 17:30 in winter already needs lights.
pub fn resolve_lighting(date: Option<NaiveDate>, time: Option<NaiveTime>) -> Option<bool> {
    let date = date?;
    let time = time?;

    let month = date.month();
    let hour = time.hour();

    let daylight = if (3..=9).contains(&month) {
        (5..18).contains(&hour)
    } else {
        (6..17).contains(&hour)
    };

    Some(!daylight)
}

/// Price a booking against the ground's rate schedule.
///
/// Returns `None` when the applicable rate is unconfigured; the caller must
/// surface "rate not specified" and require a manual price instead of
/// silently charging zero.
pub fn resolve_price(ground: &Ground, lights_required: bool, duration_hours: f64) -> Option<f64> {
    ground
        .rate(lights_required)
        .map(|rate| rate * duration_hours)
}

/// The combined computation both the creation and edit flows run: lighting
/// first, then price. Tolerates any missing input without panicking.
pub fn quote(ground: Option<&Ground>, draft: &BookingDraft) -> RateQuote {
    let with_lights = resolve_lighting(draft.date, draft.time);

    let suggested_price = match (ground, with_lights) {
        (Some(ground), Some(lights)) => resolve_price(ground, lights, draft.duration_hours),
        _ => None,
    };

    RateQuote {
        with_lights,
        suggested_price,
    }
}
