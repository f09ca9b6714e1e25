//! # Window Event Bridge
//!
//! Client side of a desktop host's event plugin, as seen from the embedded
//! web view: [EventBridge::emit] sends an event to the host,
//! [EventBridge::listen] and [EventBridge::once] subscribe to events the host
//! delivers.
//!
//! The transport is not part of this crate. The bridge is built over the two
//! primitives in [js_rs_interop], which the host (or a test double) provides.

pub mod bridge;
pub mod config;
pub mod error;
pub mod js_api;
pub mod js_rs_interop;
pub mod logging;

pub use bridge::{EventBridge, UnlistenFn};
pub use config::BridgeConfig;
pub use error::{InvocationError, InvocationResult};
pub use js_api::backend_event::{Event, EventId, is_valid_event_name};
pub use js_rs_interop::{CallbackId, Invoke, RawCallback, TransformCallback};
