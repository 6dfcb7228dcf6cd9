use serde::{Deserialize, Serialize};
use crate::core::library::{BookId, LibraryResult};
use crate::gateway::GatewayPublisherVia;

pub trait Repository<Entity> {
    // create an entity
    fn create(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity
    fn update(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    fn get(&self, id: BookId) -> LibraryResult<Entity>;

    // delete an entity
    fn delete(&mut self, id: BookId) -> LibraryResult<usize>;

    // all entities in insertion order
    fn all(&self) -> Vec<Entity>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    Memory,
}

impl RepositoryStore {
    pub fn gateway_publisher(&self) -> GatewayPublisherVia {
        match self {
            RepositoryStore::Memory => GatewayPublisherVia::Logs,
        }
    }
}
