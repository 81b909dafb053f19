//! Document store domain - capability interface over the remote database

mod path;
mod store;

pub use path::DocumentPath;
pub use store::DocumentStore;

#[cfg(test)]
pub use store::MockDocumentStore;
