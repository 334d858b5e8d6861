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

pub mod estimate_row;
pub mod hash_sample;
pub mod scheme_params;
pub mod sort_key;
pub mod throughput_estimate;
pub mod tpm_info;

pub use estimate_row::EstimateRow;
pub use hash_sample::HashSample;
pub use scheme_params::HbsSchemeParams;
pub use sort_key::SortKey;
pub use throughput_estimate::ThroughputEstimate;
pub use tpm_info::TpmInfo;
