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

//! Performance estimation of hash-based signature (HBS) schemes on a TPM 2.0.
//!
//! A TPM does not implement XMSS or LMS, but it exposes `TPM2_Hash`. The crate measures
//! how fast a device hashes 64-byte blocks ([estimator]) and combines that rate with the
//! per-scheme hash counts of the [catalog] to project keygen and signing times ([projector]).

pub mod catalog;
pub mod device;
pub mod error;
pub mod estimator;
pub mod projector;
pub mod types;
