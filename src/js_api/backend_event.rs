use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Host-assigned identifier of a listener registration.
pub type EventId = u32;

/// Record the host delivers to a listener.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Event<T> {
    /// Event name.
    pub event: String,
    /// The label of the window that emitted this event.
    pub window_label: String,
    /// Identifier of the listener registration this delivery was made to.
    /// Used to unlisten.
    pub id: EventId,
    /// Event payload.
    pub payload: T,
}

/// Whether `name` is acceptable to the host as an event name.
///
/// Names are non-empty and made of ASCII alphanumeric characters, `-`, `/`, `:`
/// and `_`. The bridge forwards names unchecked; this is for hosts and
/// callers that want to fail early.
pub fn is_valid_event_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '/' | ':' | '_'))
}
