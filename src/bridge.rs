use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use tokio::runtime::{Handle, TryCurrentError};
use tracing::{debug, trace, warn};

use crate::{
    config::{BridgeConfig, EventCommand},
    error::{InvocationError, InvocationResult},
    js_api::{
        backend_event::{Event, EventId},
        frontend_event::{EmitArgs, ListenArgs, UnlistenArgs},
    },
    js_rs_interop::{Invoke, RawCallback, TransformCallback},
};

/// Event Bridge
///
/// Emits events toward the host and subscribes to events coming from it.
/// Holds no listener state: registrations and their ids live in the host.
#[derive(Clone)]
pub struct EventBridge {
    invoker: Arc<dyn Invoke>,
    callbacks: Arc<dyn TransformCallback>,
    config: BridgeConfig,
    /// Runtime the detached cleanup of one-off listeners runs on.
    runtime: Handle,
}

impl std::fmt::Debug for EventBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBridge")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl EventBridge {
    /// Create a bridge over the host's primitives.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime. Use [EventBridge::try_new] or
    /// [EventBridge::with_runtime] when that can happen.
    pub fn new(invoker: Arc<dyn Invoke>, callbacks: Arc<dyn TransformCallback>) -> Self {
        Self::with_runtime(invoker, callbacks, Handle::current())
    }

    /// Like [EventBridge::new], but fails instead of panicking outside a Tokio runtime.
    pub fn try_new(
        invoker: Arc<dyn Invoke>,
        callbacks: Arc<dyn TransformCallback>,
    ) -> Result<Self, TryCurrentError> {
        Ok(Self::with_runtime(invoker, callbacks, Handle::try_current()?))
    }

    pub fn with_runtime(
        invoker: Arc<dyn Invoke>,
        callbacks: Arc<dyn TransformCallback>,
        runtime: Handle,
    ) -> Self {
        Self {
            invoker,
            callbacks,
            config: BridgeConfig::default(),
            runtime,
        }
    }

    pub fn with_config(mut self, config: BridgeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Emit an event to the host.
    ///
    /// `window_label` names the one window to deliver to; `None` broadcasts to
    /// all windows. The event name is not checked locally.
    pub async fn emit<P: Serialize>(
        &self,
        event: &str,
        window_label: Option<&str>,
        payload: Option<P>,
    ) -> InvocationResult<()> {
        let command = self.config.command(EventCommand::Emit);
        debug!(event, ?window_label, "Emitting event");

        let args = EmitArgs {
            event,
            window_label,
            payload,
        };
        call(self.invoker.as_ref(), &command, &args).await?;

        Ok(())
    }

    /// Listen to an event from the host.
    ///
    /// `window_label` of `None` receives the event from any window. The handler
    /// runs once per delivery until the returned [UnlistenFn] is called.
    /// Deliveries that do not decode as `Event<T>` are dropped.
    pub async fn listen<T, F>(
        &self,
        event: &str,
        window_label: Option<&str>,
        handler: F,
    ) -> InvocationResult<UnlistenFn>
    where
        T: DeserializeOwned + 'static,
        F: Fn(Event<T>) + Send + Sync + 'static,
    {
        let command = self.config.command(EventCommand::Listen);

        let token = self.callbacks.transform(decoding_callback(event, handler));
        trace!(event, token, "Registered listener callback");

        let args = ListenArgs {
            event: event.to_string(),
            window_label: window_label.map(str::to_string),
            handler: token,
        };
        let response = call(self.invoker.as_ref(), &command, &args).await?;
        let event_id: EventId = serde_json::from_value(response)
            .map_err(|source| InvocationError::Response { command, source })?;

        debug!(event, ?window_label, event_id, "Listening");

        Ok(UnlistenFn {
            invoker: Arc::clone(&self.invoker),
            command: self.config.command(EventCommand::Unlisten),
            event: event.to_string(),
            event_id,
        })
    }

    /// Listen to a one-off event from the host.
    ///
    /// After the handler runs, an unlisten for that delivery's id is sent in
    /// the background and its failure ignored. Deliveries that reach the
    /// handler before the host processes the unlisten are still handled.
    pub async fn once<T, F>(
        &self,
        event: &str,
        window_label: Option<&str>,
        handler: F,
    ) -> InvocationResult<UnlistenFn>
    where
        T: DeserializeOwned + 'static,
        F: Fn(Event<T>) + Send + Sync + 'static,
    {
        let invoker = Arc::clone(&self.invoker);
        let command = self.config.command(EventCommand::Unlisten);
        let runtime = self.runtime.clone();
        let name = event.to_string();

        self.listen(event, window_label, move |delivered: Event<T>| {
            let event_id = delivered.id;
            handler(delivered);

            let invoker = Arc::clone(&invoker);
            let command = command.clone();
            let name = name.clone();
            runtime.spawn(async move {
                if let Err(e) = unlisten(invoker.as_ref(), &command, name, event_id).await {
                    debug!(?e, event_id, "Ignoring failed one-off unlisten");
                }
            });
        })
        .await
    }
}

/// Unlisten Function
///
/// Removes the listener registration it was returned for. Calling it again
/// sends the request again; the host decides what a second removal means.
#[derive(Clone)]
pub struct UnlistenFn {
    invoker: Arc<dyn Invoke>,
    command: String,
    event: String,
    event_id: EventId,
}

impl std::fmt::Debug for UnlistenFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnlistenFn")
            .field("event", &self.event)
            .field("event_id", &self.event_id)
            .finish_non_exhaustive()
    }
}

impl UnlistenFn {
    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    pub async fn call(&self) -> InvocationResult<()> {
        unlisten(
            self.invoker.as_ref(),
            &self.command,
            self.event.clone(),
            self.event_id,
        )
        .await
    }
}

/// Unregister the listener `event_id` of `event`.
async fn unlisten(
    invoker: &dyn Invoke,
    command: &str,
    event: String,
    event_id: EventId,
) -> InvocationResult<()> {
    debug!(%event, event_id, "Unlistening");
    call(invoker, command, &UnlistenArgs { event, event_id }).await?;
    Ok(())
}

async fn call<A: Serialize>(
    invoker: &dyn Invoke,
    command: &str,
    args: &A,
) -> InvocationResult<serde_json::Value> {
    let args = serde_json::to_value(args).map_err(|source| InvocationError::Arguments {
        command: command.to_string(),
        source,
    })?;

    trace!(command, %args, "Invoking host");
    let result = invoker.invoke(command, args).await;
    if let Err(e) = &result {
        debug!(command, %e, "Host invocation failed");
    }
    result
}

/// Wrap `handler` into the raw form the host calls, decoding each delivery.
fn decoding_callback<T, F>(event: &str, handler: F) -> RawCallback
where
    T: DeserializeOwned + 'static,
    F: Fn(Event<T>) + Send + Sync + 'static,
{
    let event = event.to_string();
    Box::new(move |raw| match serde_json::from_value::<Event<T>>(raw) {
        Ok(delivered) => handler(delivered),
        Err(e) => warn!(%e, %event, "Dropping undecodable event delivery"),
    })
}
