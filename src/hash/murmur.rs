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

use super::Hash32;

/// MurmurHash3, x86 32-bit variant, backed by the `mur3` crate.
///
/// This is the default hasher for sketches in this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Murmur3;

impl Hash32 for Murmur3 {
    #[inline]
    fn hash32(&self, data: &[u8], seed: u32) -> u32 {
        mur3::murmurhash3_x86_32(data, seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_vectors() {
        let hasher = Murmur3;
        assert_eq!(hasher.hash32(b"", 0), 0);
        assert_eq!(hasher.hash32(b"", 1), 0x514e28b7);
        assert_eq!(hasher.hash32(b"hello", 0), 0x248bfa47);
        assert_eq!(hasher.hash32(b"hello, world", 0), 0x149bbb7f);
        assert_eq!(hasher.hash32(b"19 Jan 2038 at 3:14:07 AM", 0), 0xe31e8a70);
        assert_eq!(
            hasher.hash32(b"The quick brown fox jumps over the lazy dog.", 0),
            0xd31ca4ae
        );
    }

    #[test]
    fn test_seed_sensitivity() {
        let hasher = Murmur3;
        let h1 = hasher.hash32(b"hello", 0);
        let h2 = hasher.hash32(b"hello", h1);
        assert_ne!(h1, h2);
    }
}
