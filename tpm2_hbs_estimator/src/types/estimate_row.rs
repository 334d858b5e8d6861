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

use super::scheme_params::HbsSchemeParams;

/// Projected cost of one parameter set on a measured device.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateRow{
    scheme: HbsSchemeParams,
    num_signatures: u64,
    estimated_keygen: Duration,
    estimated_signing: Duration
}

impl EstimateRow {
    pub fn new(scheme: HbsSchemeParams, num_signatures: u64, estimated_keygen: Duration, estimated_signing: Duration) -> Self {
        EstimateRow { scheme, num_signatures, estimated_keygen, estimated_signing }
    }

    pub fn scheme(&self) -> &HbsSchemeParams {
        &self.scheme
    }

    pub fn friendly_name(&self) -> &'static str {
        self.scheme.friendly_name
    }

    pub fn w(&self) -> u8 {
        self.scheme.w
    }

    pub fn num_signatures(&self) -> u64 {
        self.num_signatures
    }

    pub fn sig_size(&self) -> u32 {
        self.scheme.sig_size
    }

    pub fn estimated_keygen(&self) -> Duration {
        self.estimated_keygen
    }

    pub fn estimated_signing(&self) -> Duration {
        self.estimated_signing
    }
}
