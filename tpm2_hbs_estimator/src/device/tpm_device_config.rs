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

use std::str::FromStr;

use tss_esapi::Tcti;

use super::error::TpmDeviceError;

/// Configuration Wrapper for the `TpmDevice`
pub type TpmDeviceConfig = Tcti;

/// Parse a TCTI name-conf string into a [TpmDeviceConfig]
pub fn parse_config(conf: &str) -> Result<TpmDeviceConfig, TpmDeviceError> {
    TpmDeviceConfig::from_str(conf)
        .map_err(|e| TpmDeviceError::TpmConfigError(format!("{conf}: {e}")))
}
