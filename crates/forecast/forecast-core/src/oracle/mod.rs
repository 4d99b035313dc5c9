//! Built-in quantile oracles
//!
//! Any [`QuantileOracle`] can back the assembler. This module ships the
//! quantile-map adapter and a seasonal-naive model so the service runs
//! without an external model server.

mod indexed;
mod persistence;
mod quantile_map;

use std::sync::Arc;

use forecast_spi::QuantileOracle;

pub use indexed::QuantileIndexedOracle;
pub use persistence::{NaivePersistenceModel, DEFAULT_SEASON};
pub use quantile_map::QuantileMap;

/// Seasonal-naive model behind the `{0.1, 0.5, 0.9}` map.
pub fn default_oracle() -> Arc<dyn QuantileOracle> {
    Arc::new(QuantileIndexedOracle {
        model: NaivePersistenceModel::default(),
        map: QuantileMap::three_point(),
    })
}
