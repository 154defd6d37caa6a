//! # Adapters
//!
//! Concrete implementations of the outbound ports.

pub mod memory_context;
pub mod signers;

pub use memory_context::MemoryContext;
