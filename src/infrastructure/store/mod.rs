//! Profile store adapters implementing the `ProfileStore` port.

pub mod memory;
pub mod sqlite;

pub use memory::InMemoryProfileStore;
pub use sqlite::SqliteProfileStore;
