/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a fresh string id for a resource row.
///
/// All IDs are TEXT on the wire and in the store; clients may also supply
/// their own (tag attachment is keyed by client id).
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
