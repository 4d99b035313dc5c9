//! Window selection
//!
//! Both windows end at the most recent sample. The context window seeds the
//! oracle; the display window is echoed back as observed history.

use forecast_spi::{Result, Window};
use sensor_spi::Series;

/// Split `series` into `(context_window, display_window)`.
///
/// Either length being zero or longer than the series is a configuration
/// error; nothing is clamped.
pub fn select(
    series: &Series,
    context_length: usize,
    display_length: usize,
) -> Result<(Window<'_>, Window<'_>)> {
    let context = Window::trailing(series, context_length, "context_length")?;
    let display = Window::trailing(series, display_length, "display_length")?;
    Ok((context, display))
}
