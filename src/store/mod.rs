//! Persistence for the expense and category collections.
//!
//! Each collection is one JSON blob under a fixed key. The only contract
//! with a backend is whole-value load and save; everything else (ordering,
//! merging, corruption recovery) lives above it.

pub mod disk;
pub mod expenses;
pub mod memory;

use anyhow::Result;

pub const EXPENSES_KEY: &str = "expenses";
pub const CATEGORIES_KEY: &str = "categories";

pub trait ByteStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>>;
    fn save(&self, key: &str, value: &[u8]) -> Result<()>;
}
