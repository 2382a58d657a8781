//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate contains the document store bindings.

pub mod database;

pub use database::{InMemoryBlogRepository, MongoBlogRepository, Store, StoreConfig};
