use anyhow::Result;
use std::collections::HashMap;
use std::sync::RwLock;

use super::ByteStore;

/// In-memory store used by tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ByteStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.inner.read().unwrap().get(key).cloned())
    }

    fn save(&self, key: &str, value: &[u8]) -> Result<()> {
        self.inner
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_save_round_trip() {
        let store = MemoryStore::new();
        assert!(store.load("expenses").unwrap().is_none());

        store.save("expenses", b"[1,2,3]").unwrap();
        assert_eq!(store.load("expenses").unwrap(), Some(b"[1,2,3]".to_vec()));

        store.save("expenses", b"[]").unwrap();
        assert_eq!(store.load("expenses").unwrap(), Some(b"[]".to_vec()));
    }
}
