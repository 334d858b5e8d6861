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

use crate::device::error::TpmDeviceError;

/// Errors raised while measuring a device or projecting estimates from the measurement.
///
/// Every variant is terminal for the current run: nothing in the crate retries.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum EstimateError{
    #[error(transparent)]
    Device(#[from] TpmDeviceError),
    #[error("Throughput estimation failed: {0}")]
    Estimation(String),
    #[error("The provided configuration is not correct: {0}")]
    Configuration(String)
}
