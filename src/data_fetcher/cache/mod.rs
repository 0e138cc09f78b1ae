pub mod types;
mod core;

// Re-export cache types
pub use types::CacheEntry;
// Re-export the persisted day cache
pub use core::DurableCache;
