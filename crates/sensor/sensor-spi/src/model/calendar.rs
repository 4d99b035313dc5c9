//! Calendar context of a sample timestamp.

use serde::{Deserialize, Serialize};

/// Night starts at this hour of day.
const NIGHT_START_HOUR: f64 = 22.0;
/// Night ends at this hour of day.
const NIGHT_END_HOUR: f64 = 6.0;

/// Categorical context derived from a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalendarContext {
    /// Monday through Friday
    pub is_weekday: bool,
    /// `hour + minute / 60`, in `[0, 24)`
    pub hour_fraction: f64,
}

impl CalendarContext {
    pub fn new(is_weekday: bool, hour_fraction: f64) -> Self {
        Self {
            is_weekday,
            hour_fraction,
        }
    }

    /// Whether the sample falls in `[22:00, 06:00)`.
    pub fn is_night(&self) -> bool {
        self.hour_fraction < NIGHT_END_HOUR || self.hour_fraction >= NIGHT_START_HOUR
    }

    /// Whether the hour fraction lies in the half-open band `[start, end)`.
    pub fn within(&self, start: f64, end: f64) -> bool {
        self.hour_fraction >= start && self.hour_fraction < end
    }
}
