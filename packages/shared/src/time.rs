//! Time helpers (JST).

use chrono::{DateTime, FixedOffset, Utc};

/// JST offset from UTC in seconds
pub const JST_OFFSET_SECONDS: i32 = 9 * 3600;

/// Get the JST (UTC+9) fixed offset
pub fn jst_offset() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECONDS).expect("UTC+9 is a valid offset")
}

/// Get the current time in JST
pub fn now_jst() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&jst_offset())
}
