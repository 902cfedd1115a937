use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// User headcounts per alert level for one provider, in one region or
/// nationally. `total` is carried as its own field rather than derived,
/// matching the upstream feeds that report it separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub green: u64,
    pub yellow: u64,
    pub orange: u64,
    pub red: u64,
    pub total: u64,
}

impl UserStats {
    /// Build a bucket set with `total` recomputed from the four levels.
    pub fn from_buckets(green: u64, yellow: u64, orange: u64, red: u64) -> Self {
        Self {
            green,
            yellow,
            orange,
            red,
            total: green + yellow + orange + red,
        }
    }

    /// Field-wise add of `other` into `self`. Every field, `total`
    /// included, is summed independently; nothing is rederived.
    pub fn accumulate(&mut self, other: &UserStats) {
        self.green += other.green;
        self.yellow += other.yellow;
        self.orange += other.orange;
        self.red += other.red;
        self.total += other.total;
    }

    /// Whether `total` equals the sum of the four level buckets.
    pub fn is_consistent(&self) -> bool {
        self.total == self.green + self.yellow + self.orange + self.red
    }
}

/// Per-provider statistics table keyed by provider id.
pub type Stats = HashMap<String, UserStats>;
