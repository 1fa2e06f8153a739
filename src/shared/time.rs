use chrono::{DateTime, Datelike, Utc};

/// One UTC calendar day in nanoseconds.
pub const DAY_NS: i64 = 86_400_000_000_000;

const NS_PER_SEC: i64 = 1_000_000_000;

/// UTC calendar day of a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ymd {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// UTC calendar day of an epoch-nanosecond timestamp; `None` only for
/// timestamps outside chrono's representable range.
pub fn ymd_utc_from_ns(ns: i64) -> Option<Ymd> {
    let secs = ns.div_euclid(NS_PER_SEC);
    let dt: DateTime<Utc> = DateTime::from_timestamp(secs, 0)?;
    Some(Ymd {
        year: dt.year(),
        month: dt.month(),
        day: dt.day(),
    })
}

/// Floor an epoch-nanosecond timestamp to UTC midnight of its day.
pub fn floor_day_ns(ns: i64) -> i64 {
    ns.div_euclid(DAY_NS) * DAY_NS
}
