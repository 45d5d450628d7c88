//! Record timestamps as the viewer's calendar sees them.

use chrono::{DateTime, FixedOffset};

/// Shift `timestamp` to the browser's UTC offset at that instant.
#[cfg(target_arch = "wasm32")]
pub fn to_local(timestamp: &DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    let millis = wasm_bindgen::JsValue::from_f64(timestamp.timestamp_millis() as f64);
    // Minutes behind UTC: UTC+7 reports -420.
    let minutes = js_sys::Date::new(&millis).get_timezone_offset();
    if !minutes.is_finite() {
        return *timestamp;
    }
    FixedOffset::east_opt((-minutes * 60.0) as i32)
        .map(|offset| timestamp.with_timezone(&offset))
        .unwrap_or(*timestamp)
}

/// Without a browser there is no viewer zone; keep the offset the backend sent.
#[cfg(not(target_arch = "wasm32"))]
pub fn to_local(timestamp: &DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    *timestamp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_keeps_sender_offset() {
        let ts = DateTime::parse_from_rfc3339("2024-03-01T03:00:00+07:00").unwrap();
        let local = to_local(&ts);
        assert_eq!(local, ts);
        assert_eq!(local.offset().local_minus_utc(), 7 * 3600);
    }
}
