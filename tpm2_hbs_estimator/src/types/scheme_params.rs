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

/// Published parameters and work factors of a hash-based signature parameter set.
///
/// Work factors count SHA-256 compression calls, i.e. 64-byte blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HbsSchemeParams{
    /// Name of the parameter set, shared by entries differing only in `w`
    pub friendly_name: &'static str,
    /// Winternitz parameter, in bits
    pub w: u8,
    /// Tree height: the key can produce `2^h` signatures
    pub h: u8,
    /// Signature size in bytes
    pub sig_size: u32,
    /// Blocks hashed to generate a key pair
    pub keygen_work: u64,
    /// Blocks hashed to produce one signature
    pub sig_work: u64
}

impl HbsSchemeParams {
    pub const fn new(friendly_name: &'static str, w: u8, h: u8, sig_size: u32, keygen_work: u64, sig_work: u64) -> Self {
        HbsSchemeParams { friendly_name, w, h, sig_size, keygen_work, sig_work }
    }

    /// Number of one-time signatures available, or `None` if `2^h` does not fit a `u64`
    pub fn num_signatures(&self) -> Option<u64> {
        1u64.checked_shl(self.h.into())
    }
}
