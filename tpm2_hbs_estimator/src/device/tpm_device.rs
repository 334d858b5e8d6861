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

use std::time::{Duration, Instant};

use tss_esapi::{constants::PropertyTag, interface_types::{algorithm::HashingAlgorithm, reserved_handles::Hierarchy}, structures::MaxBuffer, Context};

use crate::types::tpm_info::TpmInfo;

use super::{error::TpmDeviceError, tpm_device_config::TpmDeviceConfig, HashDevice, IdentitySource, PropertyId};

/// Hashing device backed by a TPM 2.0, using TSS 2.0 ESAPI wrapper.
///
/// The connection is opened once by [TpmDevice::connect] and kept for the whole
/// measurement. It is closed when the device is dropped, on every exit path.
pub struct TpmDevice{
    ctx: Context
}

impl TpmDevice{
    /// Connect to the TPM 2.0 pointed by the provided configuration
    /// ### Examples
    /// ```rust,no_run
    /// use tpm2_hbs_estimator::device::{tpm_device::TpmDevice, tpm_device_config::TpmDeviceConfig};
    /// use std::str::FromStr;
    ///
    /// let config = TpmDeviceConfig::from_str("device:/dev/tpmrm0").unwrap();
    /// let device = TpmDevice::connect(config);
    /// ```
    pub fn connect(config: TpmDeviceConfig) -> Result<Self, TpmDeviceError> {
        let ctx = Context::new(config)
            .map_err(TpmDeviceError::ConnectionError)?;
        Ok(TpmDevice { ctx })
    }

    /// Read manufacturer, model, firmware and specification revision of the TPM.
    /// ### Examples
    /// ```rust,no_run
    /// use tpm2_hbs_estimator::device::{tpm_device::TpmDevice, tpm_device_config::TpmDeviceConfig};
    /// use std::str::FromStr;
    ///
    /// let config = TpmDeviceConfig::from_str("tabrmd").unwrap();
    /// let mut device = TpmDevice::connect(config).unwrap();
    /// println!("{}", device.info().unwrap());
    /// ```
    pub fn info(&mut self) -> Result<TpmInfo, TpmDeviceError> {
        TpmInfo::read_from(self)
    }
}

impl HashDevice for TpmDevice{
    /// Run `TPM2_Hash` with SHA-256 over `data` in the NULL hierarchy.
    ///
    /// `data` cannot exceed [MaxBuffer::MAX_SIZE] bytes: larger inputs need a hash sequence.
    fn execute_hash(&mut self, data: &[u8]) -> Result<Duration, TpmDeviceError> {
        // check that requested size is in the correct range
        if data.len() > MaxBuffer::MAX_SIZE {
            return Err(TpmDeviceError::InputError { name: "data".to_owned(),
                value: data.len().to_string(),
                reason: format!("Hash input cannot exceed {0} bytes", MaxBuffer::MAX_SIZE) })
        }
        let buffer = MaxBuffer::try_from(data.to_vec())?;

        let start = Instant::now();
        self.ctx.hash(buffer, HashingAlgorithm::Sha256, Hierarchy::Null)?;
        Ok(start.elapsed())
    }
}

impl IdentitySource for TpmDevice{
    fn read_property(&mut self, property: PropertyId) -> Result<[u8; 4], TpmDeviceError> {
        let tag = match property {
            PropertyId::Manufacturer => PropertyTag::Manufacturer,
            PropertyId::VendorString1 => PropertyTag::VendorString1,
            PropertyId::VendorString2 => PropertyTag::VendorString2,
            PropertyId::VendorString3 => PropertyTag::VendorString3,
            PropertyId::VendorString4 => PropertyTag::VendorString4,
            PropertyId::FirmwareVersion1 => PropertyTag::FirmwareVersion1,
            PropertyId::FirmwareVersion2 => PropertyTag::FirmwareVersion2,
            PropertyId::Revision => PropertyTag::Revision,
        };

        self.ctx.get_tpm_property(tag)?
            .map(u32::to_be_bytes)
            .ok_or(TpmDeviceError::PropertyNotFound(property.to_string()))
    }
}

#[cfg(test)]
mod tests{
    use tss_esapi::structures::MaxBuffer;

    use crate::device::{error::TpmDeviceError, tpm_device_config::TpmDeviceConfig, HashDevice, IdentitySource, PropertyId};
    use std::str::FromStr;

    use super::TpmDevice;

    fn connect() -> TpmDevice {
        let config = TpmDeviceConfig::from_str("tabrmd").unwrap();
        TpmDevice::connect(config).unwrap()
    }

    #[test]
    #[ignore = "requires a TPM 2.0 reachable through tabrmd"]
    fn test_hash(){
        let mut device = connect();
        let elapsed = device.execute_hash(&[0u8; 64]);
        assert!(elapsed.is_ok());
    }

    #[test]
    #[ignore = "requires a TPM 2.0 reachable through tabrmd"]
    fn test_too_big_hash(){
        let mut device = connect();
        let elapsed = device.execute_hash(&[0u8; 2048]);

        assert_eq!(elapsed.err(), Some(TpmDeviceError::InputError { name: "data".to_owned(),
            value: 2048.to_string(),
            reason: format!("Hash input cannot exceed {0} bytes", MaxBuffer::MAX_SIZE) }))
    }

    #[test]
    #[ignore = "requires a TPM 2.0 reachable through tabrmd"]
    fn test_100_hash(){
        let mut device = connect();
        for i in 0..100 {
            let elapsed = device.execute_hash(&[0u8; 1024]);
            assert!(elapsed.is_ok());
            println!("Iter {i} OK!")
        }
    }

    #[test]
    #[ignore = "requires a TPM 2.0 reachable through tabrmd"]
    fn test_revision(){
        let mut device = connect();
        let revision = device.read_property(PropertyId::Revision).unwrap();
        assert!(u32::from_be_bytes(revision) >= 100);
    }

    #[test]
    #[ignore = "requires a TPM 2.0 reachable through tabrmd"]
    fn test_info(){
        let mut device = connect();
        let info = device.info();
        assert!(info.is_ok());
        println!("{}", info.unwrap());
    }
}
