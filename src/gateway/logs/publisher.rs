use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher emits every domain event as a structured log record.
#[derive(Debug)]
pub struct LogPublisher {
    topic: String,
}

impl LogPublisher {
    pub fn new(topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
        }
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&mut self, event: &DomainEvent) -> Result<(), LibraryError> {
        let payload = serde_json::to_string(event)?;
        info!(topic = %self.topic, event_id = %event.event_id, kind = ?event.kind,
            key = %event.key, payload = %payload, "published domain event");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::factory::create_publisher;
    use crate::gateway::GatewayPublisherVia;
    use crate::gateway::logs::publisher::LogPublisher;

    #[test]
    fn test_should_publish_event() {
        let data = HashMap::from([("a", 1), ("b", 2)]);
        let event = DomainEvent::added("test-name", "group", "key", &HashMap::from([("k".to_string(), "v".to_string())]), &data).expect("build event");
        let mut publisher = LogPublisher::new("books");
        publisher.publish(&event).expect("should publish");
    }

    #[test]
    fn test_should_publish_through_factory() {
        let mut publisher = create_publisher(GatewayPublisherVia::Logs);
        let added = DomainEvent::added("books", "books", "1", &HashMap::new(), &1).expect("build event");
        let deleted = DomainEvent::deleted("books", "books", "1", &HashMap::new(), &1).expect("build event");
        publisher.publish(&added).expect("should publish");
        publisher.publish(&deleted).expect("should publish");
    }
}
