//! Error mapping for the HTTP surface.

pub mod error;
