use chrono::{DateTime, SecondsFormat, Utc};

/// Returns the current wall-clock time in UTC.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Canonical text form of a timestamp used inside hashed content.
///
/// RFC 3339 with nanosecond precision so two transactions created in the
/// same second still hash differently.
pub fn canonical(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}
