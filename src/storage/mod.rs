//! Storage implementations for the product store

pub mod in_memory;

pub use in_memory::InMemoryProductService;
