#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicU32, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::Notify;
use window_event_bridge::{
    CallbackId, EventBridge, EventId, InvocationError, InvocationResult, Invoke, RawCallback,
    TransformCallback, is_valid_event_name,
};

/// A request the host received.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub command: String,
    pub args: Value,
}

/// Listener registration as the host keeps it.
#[derive(Debug, Clone)]
struct Registration {
    event: String,
    handler: CallbackId,
}

/// In-process stand-in for the host's event plugin.
///
/// Records every invocation, hands out listener ids, keeps registrations so
/// tests can deliver events, and can be told to reject or answer a command.
#[derive(Default)]
pub struct MockHost {
    calls: Mutex<Vec<Call>>,
    callbacks: Mutex<HashMap<CallbackId, Arc<RawCallback>>>,
    registrations: Mutex<HashMap<EventId, Registration>>,
    rejections: Mutex<HashMap<String, String>>,
    unavailable: Mutex<Vec<String>>,
    responses: Mutex<HashMap<String, Value>>,
    next_callback: AtomicU32,
    next_listener: AtomicU32,
    notify: Notify,
}

impl MockHost {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            next_listener: AtomicU32::new(1),
            ..Default::default()
        })
    }

    pub fn bridge(self: &Arc<Self>) -> EventBridge {
        EventBridge::new(self.clone(), self.clone())
    }

    /// Id the next successful `listen` is answered with.
    pub fn set_next_listener_id(&self, id: EventId) {
        self.next_listener.store(id, Ordering::SeqCst);
    }

    pub fn reject(&self, command: &str, message: &str) {
        self.rejections
            .lock()
            .unwrap()
            .insert(command.to_string(), message.to_string());
    }

    pub fn make_unavailable(&self, command: &str) {
        self.unavailable.lock().unwrap().push(command.to_string());
    }

    pub fn respond_with(&self, command: &str, response: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert(command.to_string(), response);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, command: &str) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| call.command == command)
            .collect()
    }

    pub fn callback_count(&self) -> usize {
        self.callbacks.lock().unwrap().len()
    }

    pub fn is_registered(&self, event_id: EventId) -> bool {
        self.registrations.lock().unwrap().contains_key(&event_id)
    }

    /// Deliver an event to listener `event_id` as window `window_label`.
    ///
    /// Returns false when no such listener is registered.
    pub fn deliver(&self, event_id: EventId, window_label: &str, payload: Value) -> bool {
        let record = {
            let registrations = self.registrations.lock().unwrap();
            registrations.get(&event_id).cloned()
        };
        let Some(registration) = record else {
            return false;
        };

        self.deliver_raw(
            registration.handler,
            json!({
                "event": registration.event,
                "windowLabel": window_label,
                "id": event_id,
                "payload": payload,
            }),
        )
    }

    /// Call callback `handler` with an arbitrary record.
    pub fn deliver_raw(&self, handler: CallbackId, record: Value) -> bool {
        let callback = self.callbacks.lock().unwrap().get(&handler).cloned();
        match callback {
            Some(callback) => {
                (*callback)(record);
                true
            }
            None => false,
        }
    }

    /// Wait until at least `count` requests for `command` have arrived.
    pub async fn wait_for_calls(&self, command: &str, count: usize) {
        tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                if self.calls_to(command).len() >= count {
                    return;
                }
                self.notify.notified().await;
            }
        })
        .await
        .expect("timed out waiting for host calls");
    }

    fn answer(&self, command: &str, args: &Value) -> InvocationResult<Value> {
        if self.unavailable.lock().unwrap().iter().any(|c| c == command) {
            return Err(InvocationError::unavailable(command));
        }
        if let Some(message) = self.rejections.lock().unwrap().get(command) {
            return Err(InvocationError::rejected(command, message.clone()));
        }
        if let Some(response) = self.responses.lock().unwrap().get(command) {
            return Ok(response.clone());
        }

        let event = args["event"].as_str().unwrap_or_default().to_string();
        if !is_valid_event_name(&event) {
            return Err(InvocationError::rejected(command, "invalid event name"));
        }

        match command.rsplit('|').next() {
            Some("listen") => {
                let handler = args["handler"].as_u64().unwrap() as CallbackId;
                let id = self.next_listener.fetch_add(1, Ordering::SeqCst);
                self.registrations
                    .lock()
                    .unwrap()
                    .insert(id, Registration { event, handler });
                Ok(json!(id))
            }
            Some("unlisten") => {
                let id = args["eventId"].as_u64().unwrap() as EventId;
                self.registrations.lock().unwrap().remove(&id);
                Ok(Value::Null)
            }
            _ => Ok(Value::Null),
        }
    }
}

#[async_trait]
impl Invoke for MockHost {
    async fn invoke(&self, command: &str, args: Value) -> InvocationResult<Value> {
        let result = self.answer(command, &args);
        self.calls.lock().unwrap().push(Call {
            command: command.to_string(),
            args,
        });
        self.notify.notify_one();
        result
    }
}

impl TransformCallback for MockHost {
    fn transform(&self, callback: RawCallback) -> CallbackId {
        let id = self.next_callback.fetch_add(1, Ordering::SeqCst);
        self.callbacks.lock().unwrap().insert(id, Arc::new(callback));
        id
    }
}
