// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt;
use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;

use crate::hash::Hash32;
use crate::hash::Murmur3;
use crate::sizing::suggest_width_depth;

/// Counter cell type.
///
/// Cells saturate at [`Count::MAX`] instead of wrapping; wrapping would let
/// an estimate drop below the true count.
pub type Count = u64;

/// The mutable state of a sketch: the counter grid plus the accumulated
/// stream weight, updated together under one lock.
#[derive(Debug)]
struct Table {
    /// Row-major `depth x width` cells, indexed `row * width + col`.
    cells: Box<[Count]>,
    total_weight: u64,
}

/// A Count-Min sketch: approximate per-key frequency counts over a stream,
/// in memory fixed at construction.
///
/// The sketch keeps a `depth x width` grid of counters. Each key maps to one
/// cell per row; an update raises those cells and a query returns their
/// minimum, so an estimate can overstate the true count (when cells are
/// shared with other keys) but never understate it.
///
/// Updates are conservative: each cell is raised only to the new minimum
/// estimate rather than incremented unconditionally, which reduces the
/// overcounting introduced by hash collisions.
///
/// All operations take `&self`; the grid is guarded by an internal
/// read/write lock, so a sketch can be shared across threads behind an
/// `Arc` without external synchronization.
///
/// # Examples
///
/// ```
/// use countmin::CountMinSketch;
///
/// let sketch = CountMinSketch::new(2000, 10);
///
/// sketch.update("apple");
/// sketch.update_with_weight("banana", 3);
///
/// assert!(sketch.estimate("banana") >= 3);
/// assert_eq!(sketch.estimate("grape"), 0);
/// ```
#[derive(Debug)]
pub struct CountMinSketch<H = Murmur3> {
    width: u32,
    depth: u32,
    hasher: H,
    table: RwLock<Table>,
}

impl CountMinSketch<Murmur3> {
    /// Creates a sketch with the given dimensions and all counters zero,
    /// hashing with [`Murmur3`].
    ///
    /// # Panics
    ///
    /// Panics if `width` or `depth` is zero.
    pub fn new(width: u32, depth: u32) -> Self {
        Self::with_hasher(width, depth, Murmur3)
    }

    /// Creates a sketch sized for the given accuracy target.
    ///
    /// Convenience for [`suggest_width_depth`] followed by
    /// [`CountMinSketch::new`]; out-of-range inputs fall back to the
    /// documented defaults, so construction never fails.
    pub fn with_error_bounds(error_ratio: f64, uncertainty: f64) -> Self {
        let (width, depth) = suggest_width_depth(error_ratio, uncertainty);
        Self::new(width, depth)
    }
}

impl<H> CountMinSketch<H> {
    /// Returns the number of counters per row.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the number of rows.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Returns the size of the counter grid in bytes.
    pub fn memory_bytes(&self) -> u64 {
        u64::from(self.width) * u64::from(self.depth) * size_of::<Count>() as u64
    }

    /// Returns the error ratio this sketch is sized for (`2 / width`): the
    /// fraction of the total stream weight by which an estimate may
    /// overstate the truth.
    pub fn relative_error(&self) -> f64 {
        2.0 / self.width as f64
    }

    /// Returns the total weight added since creation or the last
    /// [`reset`](Self::reset).
    pub fn total_weight(&self) -> u64 {
        read(&self.table).total_weight
    }

    /// Returns true if nothing has been added since creation or the last
    /// [`reset`](Self::reset).
    pub fn is_empty(&self) -> bool {
        self.total_weight() == 0
    }

    /// Resets every counter to zero.
    pub fn reset(&self) {
        let mut table = write(&self.table);
        table.cells.fill(0);
        table.total_weight = 0;
    }
}

impl<H: Hash32> CountMinSketch<H> {
    /// Creates a sketch that derives cell positions with the provided
    /// hasher.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `depth` is zero.
    pub fn with_hasher(width: u32, depth: u32, hasher: H) -> Self {
        assert!(width > 0, "width must be at least 1");
        assert!(depth > 0, "depth must be at least 1");
        let cells = vec![0; width as usize * depth as usize].into_boxed_slice();
        Self {
            width,
            depth,
            hasher,
            table: RwLock::new(Table {
                cells,
                total_weight: 0,
            }),
        }
    }

    /// Adds `weight` to `key` and returns the new estimate for it.
    ///
    /// A zero weight leaves the sketch unchanged and returns the current
    /// estimate. The estimate saturates at [`Count::MAX`] instead of
    /// wrapping.
    pub fn update_with_weight(&self, key: impl AsRef<[u8]>, weight: Count) -> Count {
        let positions = self.positions(key.as_ref());
        // The min and the raise must share one exclusive section: an update
        // interleaved between them on an overlapping cell would be lost.
        let mut table = write(&self.table);
        let floor = self.min_at(&table.cells, &positions);
        if weight == 0 {
            return floor;
        }
        let candidate = floor.saturating_add(weight);
        for (row, &col) in positions.iter().enumerate() {
            let cell = &mut table.cells[row * self.width as usize + col as usize];
            if *cell < candidate {
                *cell = candidate;
            }
        }
        table.total_weight = table.total_weight.saturating_add(weight);
        candidate
    }

    /// Adds one occurrence of `key` and returns the new estimate for it.
    pub fn update(&self, key: impl AsRef<[u8]>) -> Count {
        self.update_with_weight(key, 1)
    }

    /// Returns the estimated count for `key`.
    ///
    /// The estimate is never below the true total added for the key; a key
    /// that was never added estimates to zero unless it collides with added
    /// keys in every row.
    pub fn estimate(&self, key: impl AsRef<[u8]>) -> Count {
        let positions = self.positions(key.as_ref());
        let table = read(&self.table);
        self.min_at(&table.cells, &positions)
    }

    /// Derives one cell position per row for `key` by double hashing:
    /// `(h1 + row * h2) mod width`, with the first hash chained as the
    /// second seed. Two hash evaluations cover every row.
    fn positions(&self, key: &[u8]) -> Vec<u32> {
        let h1 = self.hasher.hash32(key, 0);
        let h2 = self.hasher.hash32(key, h1);
        (0..self.depth)
            .map(|row| h1.wrapping_add(row.wrapping_mul(h2)) % self.width)
            .collect()
    }

    fn min_at(&self, cells: &[Count], positions: &[u32]) -> Count {
        let mut min = Count::MAX;
        for (row, &col) in positions.iter().enumerate() {
            let cell = cells[row * self.width as usize + col as usize];
            if cell < min {
                min = cell;
            }
        }
        min
    }
}

impl<H> fmt::Display for CountMinSketch<H> {
    /// Formats the sketch shape and its estimated memory footprint.
    ///
    /// Reads only immutable fields, so no lock is taken.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CountMinSketch: width={}, depth={}, mem={:.3}MB",
            self.width,
            self.depth,
            self.memory_bytes() as f64 / 1e6,
        )
    }
}

// No operation panics while holding the lock, so a poisoned guard still
// holds a consistent grid and can be recovered.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
