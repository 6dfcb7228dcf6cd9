pub mod events;
pub mod factory;
pub mod logs;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum GatewayPublisherVia {
    Logs,
}

#[cfg(test)]
mod tests {
    use crate::core::repository::RepositoryStore;
    use crate::gateway::GatewayPublisherVia;

    #[test]
    fn test_should_pick_logs_for_memory_store() {
        assert_eq!(GatewayPublisherVia::Logs, RepositoryStore::Memory.gateway_publisher());
    }
}
