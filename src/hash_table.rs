use std::collections::HashMap;

use crate::error::{DiffError, Result};
use crate::rolling_hash::{HashParams, RollingHash};

/// Rolling hashes of every window in one buffer.
///
/// `hashes[pos]` is the hash of `data[pos..pos + window]`. The index maps
/// each observed hash to the end position (last byte) of the most recent
/// window that produced it; earlier occurrences are overwritten.
#[derive(Debug)]
pub struct HashTable<'a> {
    data: &'a [u8],
    window: usize,
    hashes: Vec<u64>,
    last_end: HashMap<u64, usize>,
}

impl<'a> HashTable<'a> {
    /// Hash every window of `data`: one full init, then one roll per byte.
    pub fn build(data: &'a [u8], window: usize, params: HashParams) -> Result<Self> {
        if window == 0 {
            return Err(DiffError::ZeroWindow);
        }
        if data.len() < window {
            return Err(DiffError::InputTooShort {
                len: data.len(),
                window,
            });
        }

        let count = data.len() - window + 1;
        let mut hashes = Vec::with_capacity(count);
        let mut last_end = HashMap::with_capacity(count);

        let mut rolling = RollingHash::init(&data[..window], params);
        hashes.push(rolling.digest());
        last_end.insert(rolling.digest(), window - 1);

        for end in window..data.len() {
            rolling.roll(data[end - window], data[end]);
            hashes.push(rolling.digest());
            last_end.insert(rolling.digest(), end);
        }

        tracing::debug!(
            bytes = data.len(),
            window,
            windows = hashes.len(),
            distinct = last_end.len(),
            "built hash table"
        );

        Ok(Self {
            data,
            window,
            hashes,
            last_end,
        })
    }

    /// End position of the last window seen with `hash`, if any.
    pub fn lookup(&self, hash: u64) -> Option<usize> {
        self.last_end.get(&hash).copied()
    }

    pub fn contains(&self, hash: u64) -> bool {
        self.last_end.contains_key(&hash)
    }

    pub fn hash_at(&self, pos: usize) -> u64 {
        self.hashes[pos]
    }

    /// Number of window positions.
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }
}
