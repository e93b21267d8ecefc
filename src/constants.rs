/// Hour of day used for derived check-in schedule entries.
pub const DEFAULT_CHECK_IN_HOUR: u32 = 14;

/// Hour of day used for derived pickup schedule entries when neither an
/// explicit pickup time nor an arrival timestamp is available.
pub const DEFAULT_PICKUP_HOUR: u32 = 9;

/// Days on either side of the client's event date used for the stay window
/// when a guest has no explicit dates and no arrival/departure timestamps.
pub const STAY_WINDOW_FALLBACK_DAYS: i64 = 1;
