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

#[cfg(feature = "tpm")]
use tpm2_hbs_estimator::device::error::TpmDeviceError;
use tpm2_hbs_estimator::error::EstimateError;

#[derive(Debug, thiserror::Error)]
pub enum CliError{
    #[error(transparent)]
    Configuration(EstimateError),
    #[cfg(feature = "tpm")]
    #[error("could not open TPM: {0}")]
    OpenTpm(TpmDeviceError),
    #[cfg(feature = "tpm")]
    #[error("could not get TPM info: {0}")]
    TpmInfo(TpmDeviceError),
    #[error("could not get SHA256 performance: {0}")]
    Performance(EstimateError),
    #[error("could not project estimates: {0}")]
    Projection(EstimateError),
    #[cfg(not(feature = "tpm"))]
    #[error("this build has no TPM support, use --software or enable the `tpm` feature")]
    TpmUnsupported,
    #[error("could not write CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error)
}
