use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Current time in milliseconds since the Unix epoch
///
/// This is the unit of the `iat` and `exp` claims. A clock set before the
/// epoch reads as 0.
pub fn now_millis() -> i64 {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| Duration::from_millis(0));
    i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
}
