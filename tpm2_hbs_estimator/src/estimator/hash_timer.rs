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

use crate::{device::{error::TpmDeviceError, HashDevice}, types::HashSample};

/// Input block size of SHA-256, the unit of every work factor
pub const BLOCK_SIZE: usize = 64;
/// Largest number of blocks hashed in one call (1024 bytes, the size of a TPM2B_MAX_BUFFER)
pub const MAX_BLOCKS: usize = 16;

/// Time a single hash of `blocks` zeroed 64-byte blocks
pub fn time_hash<D: HashDevice + ?Sized>(device: &mut D, blocks: usize) -> Result<HashSample, TpmDeviceError> {
    if blocks > MAX_BLOCKS {
        return Err(TpmDeviceError::InputError { name: "blocks".to_owned(),
            value: blocks.to_string(),
            reason: format!("Block count must be between 0 and {MAX_BLOCKS}") })
    }
    let data = vec![0u8; BLOCK_SIZE * blocks];
    let elapsed = device.execute_hash(&data)?;
    Ok(HashSample::new(blocks, elapsed))
}
