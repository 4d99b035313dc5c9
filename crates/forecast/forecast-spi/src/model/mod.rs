//! Model module containing forecast data types

mod forecast_plan;
mod forecast_request;
mod forecast_response;
mod forecast_result;
mod quantile_set;
mod window;

pub use forecast_plan::{ForecastPlan, MAX_PREDICTION_LENGTH};
pub use forecast_request::ForecastRequest;
pub use forecast_response::ForecastResponse;
pub use forecast_result::ForecastResult;
pub use quantile_set::{same_quantile, QuantileSet, QUANTILE_TOLERANCE};
pub use window::Window;
