use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_millis, decimal_to_f64};
use crate::error::{ChartError, ChartResult};

/// One historical sample of the chart's record sequence.
///
/// Study values are produced outside this crate and attached under
/// `"<study>.<field>"` keys (for example `"ma.ma5"` or `"vol.num"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub timestamp_millis: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    #[serde(default)]
    fields: IndexMap<String, f64>,
}

impl Record {
    /// Builds a validated record from raw floating values.
    ///
    /// Invariants:
    /// - all prices and the volume are finite
    /// - `low <= high`, volume is not negative
    pub fn new(
        timestamp_millis: i64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> ChartResult<Self> {
        if !open.is_finite()
            || !high.is_finite()
            || !low.is_finite()
            || !close.is_finite()
            || !volume.is_finite()
        {
            return Err(ChartError::InvalidData(
                "record prices and volume must be finite".to_owned(),
            ));
        }
        if low > high {
            return Err(ChartError::InvalidData(
                "record low must be <= high".to_owned(),
            ));
        }
        if volume < 0.0 {
            return Err(ChartError::InvalidData(
                "record volume must be >= 0".to_owned(),
            ));
        }

        Ok(Self {
            timestamp_millis,
            open,
            high,
            low,
            close,
            volume,
            fields: IndexMap::new(),
        })
    }

    /// Converts strongly-typed temporal/decimal input into a validated record.
    pub fn from_decimal_time(
        time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: Decimal,
    ) -> ChartResult<Self> {
        Self::new(
            datetime_to_unix_millis(time),
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
            decimal_to_f64(volume, "volume")?,
        )
    }

    /// Attaches one precomputed study value.
    pub fn with_field(mut self, key: impl Into<String>, value: f64) -> ChartResult<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(ChartError::InvalidData(
                "study field key must not be empty".to_owned(),
            ));
        }
        if !value.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "study field `{key}` must be finite"
            )));
        }
        self.fields.insert(key, value);
        Ok(self)
    }

    #[must_use]
    pub fn field(&self, key: &str) -> Option<f64> {
        self.fields.get(key).copied()
    }
}
