use uuid::Uuid;

/// Storage format for date-only columns.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Storage format for time-of-day columns.
pub const TIME_FORMAT: &str = "%H:%M";

/// Prefixed short id, e.g. `stay-1f8a0c2b9d4e`.
pub fn short_id(prefix: &str) -> String {
    let hex = Uuid::new_v4().to_string().replace('-', "");
    format!("{}-{}", prefix, &hex[..12])
}
