use crate::model::TimeSample;
use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};

/// Trait defining the time source for casting, so derivations stay pure and
/// testable against a fixed clock.
pub trait Clock: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation used by the binary.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

const BEIJING_OFFSET_SECS: i32 = 8 * 3600;

/// Converts a UTC instant to fixed UTC+8. Computed from UTC by offset, never
/// from the host timezone, so deployments behave identically everywhere.
pub fn beijing_time(utc: DateTime<Utc>) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(BEIJING_OFFSET_SECS).expect("UTC+8 is a valid offset");
    utc.with_timezone(&offset)
}

/// Snapshots the clock into a `TimeSample`, remapping hour 0 to 24.
pub fn sample(clock: &dyn Clock) -> TimeSample {
    let now = beijing_time(clock.now_utc());
    let hour = if now.hour() == 0 { 24 } else { now.hour() };
    TimeSample {
        year: now.year(),
        month: now.month(),
        day: now.day(),
        hour,
        minute: now.minute(),
    }
}
