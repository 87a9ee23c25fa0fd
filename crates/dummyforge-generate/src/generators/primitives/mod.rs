use chrono::{DateTime, Utc};
use dummyforge_core::{DateRange, IntRange};
use rand::{Rng, RngCore};

const SAMPLE_STRING_LEN: usize = 10;
const SAMPLE_STRING_FIRST: u8 = b'!';
const SAMPLE_STRING_LAST: u8 = b'}';

const PRODUCT_CODE_LEN: usize = 8;
const PRODUCT_CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Ten printable ASCII characters from `!` through `}`.
pub fn sample_string(rng: &mut dyn RngCore) -> String {
    (0..SAMPLE_STRING_LEN)
        .map(|_| char::from(rng.random_range(SAMPLE_STRING_FIRST..=SAMPLE_STRING_LAST)))
        .collect()
}

pub fn int_in_range(range: IntRange, rng: &mut dyn RngCore) -> i64 {
    if range.min >= range.max {
        return range.min;
    }
    rng.random_range(range.min..=range.max)
}

/// Uniform instant between the range bounds at millisecond resolution.
pub fn instant_between(range: DateRange, rng: &mut dyn RngCore) -> DateTime<Utc> {
    let start = range.start.timestamp_millis();
    let end = range.end.timestamp_millis();
    if start >= end {
        return range.start;
    }
    let millis = rng.random_range(start..=end);
    DateTime::from_timestamp_millis(millis).unwrap_or(range.start)
}

/// Value in `[0, 100]` with at most two decimal places.
pub fn percentage(rng: &mut dyn RngCore) -> f64 {
    let hundredths = rng.random_range(0..=10_000_u32);
    f64::from(hundredths) / 100.0
}

pub fn product_code(rng: &mut dyn RngCore) -> String {
    (0..PRODUCT_CODE_LEN)
        .map(|_| {
            let idx = rng.random_range(0..PRODUCT_CODE_CHARSET.len());
            char::from(PRODUCT_CODE_CHARSET[idx])
        })
        .collect()
}
