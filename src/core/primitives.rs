use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

/// Date pattern used by the cross-hair time tag.
pub const CROSSHAIR_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> i64 {
    time.timestamp_millis()
}

/// Formats a unix-millisecond timestamp in UTC with [`CROSSHAIR_DATE_FORMAT`].
///
/// Timestamps outside chrono's representable range fall back to the raw number.
#[must_use]
pub fn format_timestamp_millis(timestamp_millis: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(timestamp_millis) {
        Some(time) => time.format(CROSSHAIR_DATE_FORMAT).to_string(),
        None => timestamp_millis.to_string(),
    }
}

/// Formats `value` with a fixed number of decimals.
#[must_use]
pub fn format_fixed(value: f64, precision: u8) -> String {
    format!("{value:.prec$}", prec = usize::from(precision))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{datetime_to_unix_millis, format_fixed, format_timestamp_millis};

    #[test]
    fn timestamp_formats_as_utc_minutes() {
        let time = Utc.with_ymd_and_hms(2019, 3, 7, 9, 45, 30).single().expect("time");
        let millis = datetime_to_unix_millis(time);
        assert_eq!(format_timestamp_millis(millis), "2019-03-07 09:45");
    }

    #[test]
    fn fixed_format_honours_precision() {
        assert_eq!(format_fixed(12.346, 2), "12.35");
        assert_eq!(format_fixed(1530.6, 0), "1531");
    }
}
