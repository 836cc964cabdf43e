use anyhow::Result;
use fjall::{Config, Keyspace, PartitionCreateOptions, PartitionHandle};
use std::path::Path;

use super::ByteStore;

/// Durable store backed by a fjall keyspace on disk.
pub struct FjallStore {
    // Held so the keyspace outlives the partition handle
    _keyspace: Keyspace,
    partition: PartitionHandle,
}

impl FjallStore {
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path)?;
        let keyspace = Config::new(path).open()?;
        let partition = keyspace.open_partition("spendlog", PartitionCreateOptions::default())?;
        Ok(FjallStore {
            _keyspace: keyspace,
            partition,
        })
    }
}

impl ByteStore for FjallStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.partition.get(key)?.map(|slice| slice.to_vec()))
    }

    fn save(&self, key: &str, value: &[u8]) -> Result<()> {
        self.partition.insert(key, value)?;
        Ok(())
    }
}
