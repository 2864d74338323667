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

//! Hashing support for sketch position derivation.

mod murmur;
pub use self::murmur::Murmur3;

/// A seeded 32-bit hash over raw bytes.
///
/// Implementations must be deterministic (the same `data` and `seed` always
/// produce the same value) and seed-sensitive (different seeds decorrelate
/// the output). Any well-distributed non-cryptographic hash qualifies; the
/// sketch relies on determinism so that a key always lands in the same
/// cells, not on any resistance to adversarial collisions.
pub trait Hash32 {
    /// Hashes `data` with the given `seed`.
    fn hash32(&self, data: &[u8], seed: u32) -> u32;
}
