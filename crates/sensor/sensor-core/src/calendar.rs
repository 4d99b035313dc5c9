//! Calendar classification of sample timestamps.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use sensor_spi::CalendarContext;

/// Map a timestamp to its weekday flag and fractional hour of day.
pub fn classify(timestamp: NaiveDateTime) -> CalendarContext {
    let is_weekday = !matches!(timestamp.weekday(), Weekday::Sat | Weekday::Sun);
    let hour_fraction = timestamp.hour() as f64 + timestamp.minute() as f64 / 60.0;
    CalendarContext::new(is_weekday, hour_fraction)
}
