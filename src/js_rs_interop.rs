//! Primitives the host runtime provides to the web view.
//!
//! The bridge never talks to the transport directly. It is handed an
//! [Invoke] for request/response calls and a [TransformCallback] for turning
//! closures into tokens the host can call back, both behind `Arc<dyn ..>` so
//! a real host and a test double are interchangeable.

use async_trait::async_trait;

use crate::error::InvocationResult;

/// Numeric handle standing in for a callback on the host side.
pub type CallbackId = u32;

/// Callback as the host calls it: one JSON value per delivery.
pub type RawCallback = Box<dyn Fn(serde_json::Value) + Send + Sync>;

/// Invocation Channel
///
/// Web view -> host, request/response.
#[async_trait]
pub trait Invoke: Send + Sync {
    /// Invoke the remote operation `command` with `args` and wait for its result.
    async fn invoke(
        &self,
        command: &str,
        args: serde_json::Value,
    ) -> InvocationResult<serde_json::Value>;
}

/// Callback Transform
///
/// Registers a local callback and returns the token the host uses to call it.
pub trait TransformCallback: Send + Sync {
    fn transform(&self, callback: RawCallback) -> CallbackId;
}
