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

//! Measurement of the hashing throughput of a device.

pub mod hash_timer;
pub mod progress;
pub mod regression;
pub mod throughput;

pub use hash_timer::{time_hash, BLOCK_SIZE, MAX_BLOCKS};
pub use progress::{NoProgress, ProgressSink};
pub use throughput::{measure_throughput, DEFAULT_SAMPLES_PER_SIZE};
