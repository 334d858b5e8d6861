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

use std::fmt::Display;

use crate::device::{error::TpmDeviceError, IdentitySource, PropertyId};

/// Identity of the measured device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TpmInfo{
    manufacturer: String,
    model: String,
    firmware_version: String,
    spec_version: String
}

impl TpmInfo {
    pub fn new(manufacturer: &str, model: &str, firmware_version: &str, spec_version: &str) -> Self {
        TpmInfo {
            manufacturer: manufacturer.to_owned(),
            model: model.to_owned(),
            firmware_version: firmware_version.to_owned(),
            spec_version: spec_version.to_owned()
        }
    }

    /// Collect the identity properties of a device.
    ///
    /// Strings are packed in big-endian 32-bit words, padded with NUL bytes.
    pub fn read_from<S: IdentitySource + ?Sized>(source: &mut S) -> Result<Self, TpmDeviceError> {
        let manufacturer = source.read_property(PropertyId::Manufacturer)?;

        let mut model = Vec::with_capacity(16);
        for property in [PropertyId::VendorString1, PropertyId::VendorString2, PropertyId::VendorString3, PropertyId::VendorString4] {
            model.extend_from_slice(&source.read_property(property)?);
        }

        let fw1 = source.read_property(PropertyId::FirmwareVersion1)?;
        let fw2 = source.read_property(PropertyId::FirmwareVersion2)?;
        let firmware_version = fw1.iter()
            .chain(fw2.iter())
            .map(|byte| format!("{byte:02x}"))
            .collect::<String>();

        let revision = u32::from_be_bytes(source.read_property(PropertyId::Revision)?);

        Ok(TpmInfo {
            manufacturer: ascii(&manufacturer),
            model: ascii(&model),
            firmware_version,
            spec_version: format!("{}.{}", revision / 100, revision % 100)
        })
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn firmware_version(&self) -> &str {
        &self.firmware_version
    }

    pub fn spec_version(&self) -> &str {
        &self.spec_version
    }
}

impl Display for TpmInfo{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: TPM 2.0 rev {} (firmware {})", self.manufacturer, self.model, self.spec_version, self.firmware_version)
    }
}

fn ascii(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .filter(|c| *c != '\0')
        .collect::<String>()
        .trim()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::device::{error::TpmDeviceError, IdentitySource, PropertyId};

    use super::TpmInfo;

    struct FakeIdentity(HashMap<PropertyId, [u8; 4]>);

    impl IdentitySource for FakeIdentity {
        fn read_property(&mut self, property: PropertyId) -> Result<[u8; 4], TpmDeviceError> {
            self.0.get(&property)
                .copied()
                .ok_or(TpmDeviceError::PropertyNotFound(property.to_string()))
        }
    }

    fn fake_tpm() -> FakeIdentity {
        FakeIdentity(HashMap::from([
            (PropertyId::Manufacturer, *b"IFX\0"),
            (PropertyId::VendorString1, *b"SLB9"),
            (PropertyId::VendorString2, *b"670\0"),
            (PropertyId::VendorString3, [0; 4]),
            (PropertyId::VendorString4, [0; 4]),
            (PropertyId::FirmwareVersion1, 0x0007_0055u32.to_be_bytes()),
            (PropertyId::FirmwareVersion2, 0x000a_e100u32.to_be_bytes()),
            (PropertyId::Revision, 138u32.to_be_bytes()),
        ]))
    }

    #[test]
    fn decode_identity(){
        let info = TpmInfo::read_from(&mut fake_tpm()).unwrap();
        assert_eq!(info, TpmInfo::new("IFX", "SLB9670", "00070055000ae100", "1.38"));
        assert_eq!(info.to_string(), "IFX SLB9670: TPM 2.0 rev 1.38 (firmware 00070055000ae100)");
    }

    #[test]
    fn missing_property(){
        let mut source = fake_tpm();
        source.0.remove(&PropertyId::Revision);
        let info = TpmInfo::read_from(&mut source);
        assert_eq!(info.err(), Some(TpmDeviceError::PropertyNotFound("Revision".to_owned())));
    }
}
