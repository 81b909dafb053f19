//! Document store backends

mod factory;
mod firebase;
mod in_memory;

pub use factory::DocumentStoreFactory;
pub use firebase::FirebaseRealtimeStore;
pub use in_memory::InMemoryDocumentStore;
