//! # Event Plugin JS API
//!
//! Records exchanged with the host's event plugin.
//!
//! The API is split into two parts:
//! - `backend_event`: What the host delivers to a registered listener ([backend_event::Event]).
//! - `frontend_event`: Arguments of the requests the web view sends to the host.
//!
//! ## Web view calling into the host:
//!
//! - The bridge serializes [frontend_event::EmitArgs], [frontend_event::ListenArgs] or
//!   [frontend_event::UnlistenArgs] and hands them to [crate::js_rs_interop::Invoke].
//!
//! ## Host calling into the web view:
//!
//! - The host calls the callback registered through [crate::js_rs_interop::TransformCallback]
//!   with a JSON [backend_event::Event].
//!   - The bridge decodes it and calls the listener's handler.
//!

pub mod backend_event;
pub mod frontend_event;
