//! Code store implementations of the repository traits.
//!
//! The store lives in process memory: it starts empty, is only ever added to,
//! and is discarded on shutdown.

mod memory_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
