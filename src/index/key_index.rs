// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! An insertion-ordered multimap from normalized key to agent ids.
//!
//! Keys iterate in first-seen order and ids within a bucket keep first-seen
//! order too. Nothing correctness-critical depends on that, but suggestion
//! caps take the first N keys, so a stable order keeps fixtures reproducible.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **NON_EMPTY**: every key has at least one id (keys only appear on insert)
//! 2. **NO_DUPLICATES**: an id appears at most once per bucket
//! 3. **ALIGNED**: `keys.len() == buckets.len() == positions.len()`

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyIndex {
    keys: Vec<String>,
    buckets: Vec<Vec<usize>>,
    positions: HashMap<String, usize>,
}

impl KeyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `id` under `key`, creating the key if absent.
    ///
    /// Records are inserted in id order, so a repeat of the same id under one
    /// key can only ever be the bucket's last element.
    pub fn insert(&mut self, key: String, id: usize) {
        match self.positions.get(&key) {
            Some(&slot) => {
                let bucket = &mut self.buckets[slot];
                if bucket.last() != Some(&id) {
                    bucket.push(id);
                }
            }
            None => {
                self.positions.insert(key.clone(), self.keys.len());
                self.keys.push(key);
                self.buckets.push(vec![id]);
            }
        }
    }

    /// Ids stored under `key`, exact match only.
    pub fn get(&self, key: &str) -> Option<&[usize]> {
        self.positions
            .get(key)
            .map(|&slot| self.buckets[slot].as_slice())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    /// Number of ids under `key` (0 when absent).
    pub fn count(&self, key: &str) -> usize {
        self.get(key).map_or(0, <[usize]>::len)
    }

    /// `(key, ids)` pairs in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> + '_ {
        self.keys
            .iter()
            .zip(self.buckets.iter())
            .map(|(key, ids)| (key.as_str(), ids.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.keys.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
