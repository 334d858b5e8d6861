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

use proptest::prelude::*;
use tpm2_hbs_estimator::{device::{error::TpmDeviceError, HashDevice}, error::EstimateError, estimator::{measure_throughput, NoProgress, BLOCK_SIZE}, projector::project_estimates, types::{SortKey, ThroughputEstimate}};

/// Synthetic device answering `overhead + per_block * n` nanoseconds
struct SyntheticDevice{
    overhead: u64,
    per_block: i64
}

impl HashDevice for SyntheticDevice {
    fn execute_hash(&mut self, data: &[u8]) -> Result<Duration, TpmDeviceError> {
        let blocks = (data.len() / BLOCK_SIZE) as i64;
        let nanos = (self.overhead as i64 + self.per_block * blocks).max(0);
        Ok(Duration::from_nanos(nanos as u64))
    }
}

proptest! {
    #[test]
    fn linear_device_rate_is_recovered(overhead in 1_000u64..1_000_000, per_block in 1i64..100_000) {
        let mut device = SyntheticDevice { overhead, per_block };
        let estimate = measure_throughput(&mut device, 3, &mut NoProgress).unwrap();

        let expected = 1e9 / per_block as f64;
        prop_assert!((estimate.hashes_per_second() - expected).abs() / expected < 1e-9);
    }

    #[test]
    fn non_increasing_device_is_rejected(overhead in 2_000_000u64..4_000_000, per_block in -100_000i64..=0) {
        let mut device = SyntheticDevice { overhead, per_block };
        let estimate = measure_throughput(&mut device, 2, &mut NoProgress);
        prop_assert!(matches!(estimate, Err(EstimateError::Estimation(_))));
    }

    #[test]
    fn durations_scale_inversely_with_rate(hashes_per_second in 100.0f64..1e7) {
        let slow = project_estimates(&ThroughputEstimate::new(hashes_per_second).unwrap(), SortKey::Keygen).unwrap();
        let fast = project_estimates(&ThroughputEstimate::new(2.0 * hashes_per_second).unwrap(), SortKey::Keygen).unwrap();

        prop_assert_eq!(slow.len(), fast.len());
        for (slow, fast) in slow.iter().zip(fast.iter()) {
            prop_assert!(fast.estimated_keygen() > Duration::ZERO);
            prop_assert!(fast.estimated_signing() > Duration::ZERO);
            // Durations carry nanosecond precision
            let keygen = slow.estimated_keygen().as_nanos() as i128 - 2 * fast.estimated_keygen().as_nanos() as i128;
            let signing = slow.estimated_signing().as_nanos() as i128 - 2 * fast.estimated_signing().as_nanos() as i128;
            prop_assert!(keygen.abs() <= 2);
            prop_assert!(signing.abs() <= 2);
        }
    }
}

#[test]
fn unknown_sort_key_is_a_configuration_error(){
    let key = "fastest".parse::<SortKey>();
    assert!(matches!(key, Err(EstimateError::Configuration(_))));
}
