//! Fixed-cadence timestamp generation.

use chrono::{Duration, Local, NaiveDateTime, Timelike};
use sensor_spi::{GenerationConfig, Result, SensorError};

/// Local wall clock truncated to whole seconds.
pub fn default_end() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// End instant for a config: `end_at` when pinned, otherwise now.
pub fn resolve_end(config: &GenerationConfig) -> NaiveDateTime {
    config.end_at.unwrap_or_else(default_end)
}

/// `count` timestamps spaced `cadence_minutes` apart, the last one at `end`.
pub fn timeline(end: NaiveDateTime, count: usize, cadence_minutes: u32) -> Result<Vec<NaiveDateTime>> {
    if count == 0 {
        return Ok(Vec::new());
    }

    let span_minutes = (count as i64 - 1)
        .checked_mul(cadence_minutes as i64)
        .ok_or_else(|| SensorError::invalid("interval_count", "time span overflows"))?;
    let start = Duration::try_minutes(span_minutes)
        .and_then(|span| end.checked_sub_signed(span))
        .ok_or_else(|| {
            SensorError::invalid("interval_count", "series would start before the supported date range")
        })?;

    let step = Duration::minutes(cadence_minutes as i64);
    let mut stamps = Vec::with_capacity(count);
    let mut current = start;
    for _ in 0..count {
        stamps.push(current);
        current += step;
    }
    Ok(stamps)
}
