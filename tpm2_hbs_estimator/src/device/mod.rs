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

use std::{fmt::Display, time::Duration};

use self::error::TpmDeviceError;

pub mod error;
pub mod software_device;
#[cfg(feature = "tpm")]
pub mod tpm_device;
#[cfg(feature = "tpm")]
pub mod tpm_device_config;

/// TCTI of a kernel resource manager, used when nothing else is requested
pub const DEFAULT_TCTI: &str = "device:/dev/tpmrm0";
/// TCTI of the Microsoft TPM 2.0 simulator on its default port
pub const SIMULATOR_TCTI: &str = "mssim:host=localhost,port=2321";

/// A device exposing a SHA-256 hash primitive.
///
/// Implementations time the single call themselves, so the returned [Duration]
/// covers the device operation only and not the preparation of its input.
pub trait HashDevice {
    /// Hash `data` once and return the wall-clock time spent by the call.
    fn execute_hash(&mut self, data: &[u8]) -> Result<Duration, TpmDeviceError>;
}

/// Fixed-size identity properties reported through `TPM2_GetCapability`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyId{
    Manufacturer,
    VendorString1,
    VendorString2,
    VendorString3,
    VendorString4,
    FirmwareVersion1,
    FirmwareVersion2,
    Revision
}

impl Display for PropertyId{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A device able to report its identity properties.
pub trait IdentitySource {
    /// Read a property as the 4 big-endian bytes of its 32-bit value.
    fn read_property(&mut self, property: PropertyId) -> Result<[u8; 4], TpmDeviceError>;
}
