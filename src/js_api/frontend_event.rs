use serde::Serialize;
use ts_rs::TS;

use super::backend_event::EventId;
use crate::js_rs_interop::CallbackId;

/// Arguments of the `emit` operation.
///
/// Absent label and payload are left out of the record entirely, so the host
/// sees them as undefined: a missing label broadcasts to every window.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmitArgs<'a, P> {
    pub event: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_label: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<P>,
}

/// Arguments of the `listen` operation.
///
/// Unlike `emit`, a missing label is sent as an explicit null ("no filter").
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ListenArgs {
    pub event: String,
    pub window_label: Option<String>,
    /// Token of the callback the host should deliver to.
    pub handler: CallbackId,
}

/// Arguments of the `unlisten` operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UnlistenArgs {
    pub event: String,
    pub event_id: EventId,
}
