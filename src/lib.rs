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

//! A Count-Min sketch for approximate frequency counting over key streams.
//!
//! The sketch answers "approximately how many times has this key appeared?"
//! in memory that is fixed at construction and independent of the number of
//! distinct keys. Estimates carry a one-sided error: they may overstate a
//! key's true count, never understate it.
//!
//! # Usage
//!
//! ```rust
//! use countmin::CountMinSketch;
//!
//! let sketch = CountMinSketch::with_error_bounds(0.001, 0.001);
//!
//! sketch.update("apple");
//! sketch.update_with_weight("banana", 3);
//!
//! assert!(sketch.estimate("banana") >= 3);
//! assert_eq!(sketch.estimate("grape"), 0);
//! ```
//!
//! # Sizing
//!
//! [`suggest_width_depth`] maps an error ratio and an uncertainty (one minus
//! the confidence) to the sketch dimensions:
//!
//! ```rust
//! use countmin::CountMinSketch;
//! use countmin::suggest_width_depth;
//!
//! let (width, depth) = suggest_width_depth(0.01, 0.01);
//! let _sketch = CountMinSketch::new(width, depth);
//! ```
//!
//! # Concurrency
//!
//! Every operation takes `&self`; the counter grid is guarded by an internal
//! read/write lock, so a sketch can be shared across threads behind an `Arc`
//! without external synchronization. Queries run in parallel with each
//! other; updates are serialized.

pub mod hash;

mod sizing;
mod sketch;

pub use self::sizing::DEFAULT_ERROR_RATIO;
pub use self::sizing::DEFAULT_UNCERTAINTY;
pub use self::sizing::suggest_width_depth;
pub use self::sketch::Count;
pub use self::sketch::CountMinSketch;
