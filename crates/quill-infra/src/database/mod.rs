//! Document store access - connection management and repository implementations.

mod connections;
mod memory;
mod mongo_repo;

pub use connections::{Store, StoreConfig};
pub use memory::InMemoryBlogRepository;
pub use mongo_repo::MongoBlogRepository;
