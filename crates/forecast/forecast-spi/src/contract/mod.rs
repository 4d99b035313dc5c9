//! Contract module containing trait definitions for forecast oracles

mod quantile_model;
mod quantile_oracle;

pub use quantile_model::QuantileModel;
pub use quantile_oracle::QuantileOracle;
