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

use std::thread;

use countmin::CountMinSketch;

// A key that shares no cells with other keys counts exactly, so a lost
// update between the min and the raise of a concurrent increment would
// surface as a final estimate below the number of increments.
#[test]
fn test_concurrent_increments_are_not_lost() {
    const WRITERS: usize = 4;
    const ROUNDS: usize = 1000;

    let sketch = CountMinSketch::new(256, 5);
    thread::scope(|scope| {
        for _ in 0..WRITERS {
            scope.spawn(|| {
                for _ in 0..ROUNDS {
                    sketch.update("counter");
                }
            });
        }
    });

    assert_eq!(sketch.estimate("counter"), (WRITERS * ROUNDS) as u64);
    assert_eq!(sketch.total_weight(), (WRITERS * ROUNDS) as u64);
}

#[test]
fn test_parallel_writers_and_readers() {
    const WRITERS: usize = 4;
    const READERS: usize = 2;
    const ROUNDS: usize = 1000;
    const KEYS: usize = 8;

    let sketch = CountMinSketch::new(256, 5);
    let total = (WRITERS * ROUNDS) as u64;

    thread::scope(|scope| {
        for _ in 0..WRITERS {
            scope.spawn(|| {
                for round in 0..ROUNDS {
                    sketch.update(format!("key{}", round % KEYS));
                }
            });
        }
        for _ in 0..READERS {
            scope.spawn(|| {
                // Counters only grow between resets, so every estimate a
                // reader observes must be monotone per key and bounded by
                // the total stream weight.
                let mut last = [0u64; KEYS];
                for round in 0..ROUNDS {
                    let idx = round % KEYS;
                    let estimate = sketch.estimate(format!("key{idx}"));
                    assert!(estimate >= last[idx]);
                    assert!(estimate <= total);
                    last[idx] = estimate;
                }
            });
        }
    });

    let per_key = (WRITERS * ROUNDS / KEYS) as u64;
    for idx in 0..KEYS {
        assert!(sketch.estimate(format!("key{idx}")) >= per_key);
    }
    assert_eq!(sketch.total_weight(), total);
}
