use time::OffsetDateTime;

/// Current UTC time, truncated to whole microseconds so the value survives a
/// round trip through any supported database unchanged.
#[must_use]
pub fn timestamp_now() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    let micros = now.microsecond();
    now.replace_microsecond(micros).unwrap_or(now)
}
