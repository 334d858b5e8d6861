// Copyright 2025 Fondazione LINKS
 
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
 
//     http://www.apache.org/licenses/LICENSE-2.0
 
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::time::Duration;

/// One timed hash call over `block_count` 64-byte blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashSample{
    block_count: usize,
    elapsed: Duration
}

impl HashSample {
    pub fn new(block_count: usize, elapsed: Duration) -> Self {
        HashSample { block_count, elapsed }
    }

    pub fn block_count(&self) -> usize {
        self.block_count
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn elapsed_nanos(&self) -> f64 {
        self.elapsed.as_nanos() as f64
    }
}
