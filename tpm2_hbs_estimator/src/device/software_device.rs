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

use std::{hint::black_box, time::{Duration, Instant}};

use sha2::{Digest, Sha256};

use super::{error::TpmDeviceError, HashDevice};

/// Host CPU SHA-256, used as a baseline to compare a TPM against.
#[derive(Debug, Default)]
pub struct SoftwareHashDevice;

impl SoftwareHashDevice {
    pub fn new() -> Self {
        SoftwareHashDevice
    }
}

impl HashDevice for SoftwareHashDevice {
    fn execute_hash(&mut self, data: &[u8]) -> Result<Duration, TpmDeviceError> {
        let start = Instant::now();
        let digest = Sha256::digest(black_box(data));
        let elapsed = start.elapsed();
        black_box(digest);
        Ok(elapsed)
    }
}
