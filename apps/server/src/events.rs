use serde_json::Value;
use tokio::sync::broadcast;
use tradejournal_core::dashboard::{DashboardRenderer, DashboardSnapshot};

/// Emitted with the full dashboard snapshot after every state change.
pub const DASHBOARD_UPDATE: &str = "dashboard:update";

/// Serializable envelope that carries event names and optional payloads.
#[derive(Clone, Debug)]
pub struct ServerEvent {
    pub name: &'static str,
    pub payload: Option<Value>,
}

impl ServerEvent {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            payload: None,
        }
    }

    pub fn with_payload(name: &'static str, payload: Value) -> Self {
        Self {
            name,
            payload: Some(payload),
        }
    }
}

/// Lightweight broadcast bus that fans out events to any connected clients.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ServerEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: ServerEvent) {
        // No subscribers is not an error.
        let _ = self.sender.send(event);
    }
}

/// Renders dashboards by pushing them to SSE subscribers.
pub struct EventBusRenderer {
    bus: EventBus,
}

impl EventBusRenderer {
    pub fn new(bus: EventBus) -> Self {
        Self { bus }
    }
}

impl DashboardRenderer for EventBusRenderer {
    fn render(&self, snapshot: &DashboardSnapshot) {
        match serde_json::to_value(snapshot) {
            Ok(payload) => self
                .bus
                .publish(ServerEvent::with_payload(DASHBOARD_UPDATE, payload)),
            Err(e) => {
                tracing::warn!("Failed to serialize dashboard snapshot: {}", e);
                self.bus.publish(ServerEvent::new(DASHBOARD_UPDATE));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_reaches_subscribers() {
        let bus = EventBus::new(8);
        let mut rx = bus.subscribe();
        bus.publish(ServerEvent::new(DASHBOARD_UPDATE));
        let event = rx.recv().await.unwrap();
        assert_eq!(event.name, "dashboard:update");
        assert!(event.payload.is_none());
    }

    #[test]
    fn test_publish_without_subscribers_is_silent() {
        let bus = EventBus::new(8);
        bus.publish(ServerEvent::with_payload(DASHBOARD_UPDATE, Value::Null));
    }
}
