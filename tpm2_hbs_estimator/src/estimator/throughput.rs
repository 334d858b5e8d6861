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

use tracing::{debug, info, warn};

use crate::{device::HashDevice, error::EstimateError, types::ThroughputEstimate};

use super::{hash_timer::{time_hash, MAX_BLOCKS}, progress::ProgressSink, regression::LinearFit};

/// Timed calls averaged for every input size
pub const DEFAULT_SAMPLES_PER_SIZE: usize = 10;

/// Measure the steady-state hashing rate of a device.
///
/// Every input size from 0 to [MAX_BLOCKS] blocks is hashed `samples_per_size` times and
/// the mean time of each size is fitted against the block count. The slope of the fit is the
/// marginal cost of one block, the intercept the fixed cost of a call, which is left out of
/// the rate. Calls are issued one at a time and any device failure aborts the measurement.
///
/// `progress` receives one update per timed call.
/// ### Examples
/// ```rust
/// use tpm2_hbs_estimator::{device::software_device::SoftwareHashDevice, estimator::{measure_throughput, NoProgress}};
///
/// let mut device = SoftwareHashDevice::new();
/// // A noisy host may still yield a non-positive slope, which is reported as an error
/// if let Ok(estimate) = measure_throughput(&mut device, 10, &mut NoProgress) {
///     assert!(estimate.hashes_per_second() > 0.0);
/// }
/// ```
pub fn measure_throughput<D: HashDevice + ?Sized>(device: &mut D, samples_per_size: usize, progress: &mut dyn ProgressSink) -> Result<ThroughputEstimate, EstimateError> {
    if samples_per_size == 0 {
        return Err(EstimateError::Configuration("samples per size must be at least 1".to_owned()));
    }

    let total = (MAX_BLOCKS + 1) * samples_per_size;
    let mut completed = 0;
    let mut means = Vec::with_capacity(MAX_BLOCKS + 1);

    for blocks in 0..=MAX_BLOCKS {
        let mut elapsed_nanos = 0.0;
        for _ in 0..samples_per_size {
            let sample = time_hash(device, blocks)?;
            elapsed_nanos += sample.elapsed_nanos();
            completed += 1;
            progress.on_progress(completed, total);
        }
        let mean = elapsed_nanos / samples_per_size as f64;
        debug!(blocks, mean_nanos = mean, "Averaged hash timings");
        means.push((blocks as f64, mean));
    }

    let fit = LinearFit::least_squares(&means)
        .ok_or(EstimateError::Estimation("not enough distinct input sizes to fit".to_owned()))?;
    debug!(per_block_nanos = fit.slope, per_call_nanos = fit.intercept, "Fitted hash timings");
    if fit.intercept < 0.0 {
        warn!(per_call_nanos = fit.intercept, "Negative per-call overhead, timings are noisy");
    }

    let estimate = ThroughputEstimate::from_fit(&fit)?;
    info!(hashes_per_second = estimate.hashes_per_second(), "Estimated hash throughput");
    Ok(estimate)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::{device::{error::TpmDeviceError, HashDevice}, error::EstimateError, estimator::{hash_timer::BLOCK_SIZE, progress::{NoProgress, ProgressSink}}};

    use super::{measure_throughput, DEFAULT_SAMPLES_PER_SIZE};

    /// Answers `overhead + per_block * n` nanoseconds for `n` blocks
    struct LinearDevice{
        overhead: i64,
        per_block: i64,
        calls: usize
    }

    impl LinearDevice {
        fn new(overhead: i64, per_block: i64) -> Self {
            LinearDevice { overhead, per_block, calls: 0 }
        }
    }

    impl HashDevice for LinearDevice {
        fn execute_hash(&mut self, data: &[u8]) -> Result<Duration, TpmDeviceError> {
            self.calls += 1;
            let blocks = (data.len() / BLOCK_SIZE) as i64;
            let nanos = (self.overhead + self.per_block * blocks).max(0);
            Ok(Duration::from_nanos(nanos as u64))
        }
    }

    /// Fails on the `fail_at`-th call
    struct FlakyDevice{
        calls: usize,
        fail_at: usize
    }

    impl HashDevice for FlakyDevice {
        fn execute_hash(&mut self, _data: &[u8]) -> Result<Duration, TpmDeviceError> {
            self.calls += 1;
            if self.calls == self.fail_at {
                return Err(TpmDeviceError::TpmConfigError("device reset".to_owned()));
            }
            Ok(Duration::from_micros(100))
        }
    }

    #[derive(Default)]
    struct RecordingProgress{
        updates: Vec<(usize, usize)>
    }

    impl ProgressSink for RecordingProgress {
        fn on_progress(&mut self, completed: usize, total: usize) {
            self.updates.push((completed, total));
        }
    }

    #[test]
    fn recovers_linear_rate(){
        let mut device = LinearDevice::new(80_000, 2_500);
        let estimate = measure_throughput(&mut device, DEFAULT_SAMPLES_PER_SIZE, &mut NoProgress).unwrap();

        assert!((estimate.hashes_per_second() - 400_000.0).abs() < 1e-3);
        let overhead = estimate.per_call_overhead_nanos().unwrap();
        assert!((overhead - 80_000.0).abs() < 1e-3);
        assert_eq!(device.calls, 17 * DEFAULT_SAMPLES_PER_SIZE);
    }

    #[test]
    fn flat_timings_are_an_error(){
        let mut device = LinearDevice::new(80_000, 0);
        let estimate = measure_throughput(&mut device, 3, &mut NoProgress);
        assert!(matches!(estimate, Err(EstimateError::Estimation(_))));
    }

    #[test]
    fn decreasing_timings_are_an_error(){
        let mut device = LinearDevice::new(80_000, -1_000);
        let estimate = measure_throughput(&mut device, 3, &mut NoProgress);
        assert!(matches!(estimate, Err(EstimateError::Estimation(_))));
    }

    #[test]
    fn device_failure_aborts(){
        let mut device = FlakyDevice { calls: 0, fail_at: 42 };
        let estimate = measure_throughput(&mut device, DEFAULT_SAMPLES_PER_SIZE, &mut NoProgress);
        assert_eq!(estimate.err(), Some(EstimateError::Device(TpmDeviceError::TpmConfigError("device reset".to_owned()))));
        assert_eq!(device.calls, 42);
    }

    #[test]
    fn zero_samples_is_a_configuration_error(){
        let mut device = LinearDevice::new(1, 1);
        let estimate = measure_throughput(&mut device, 0, &mut NoProgress);
        assert!(matches!(estimate, Err(EstimateError::Configuration(_))));
        assert_eq!(device.calls, 0);
    }

    #[test]
    fn progress_counts_every_call(){
        let mut device = LinearDevice::new(1_000, 100);
        let mut progress = RecordingProgress::default();
        measure_throughput(&mut device, 2, &mut progress).unwrap();

        assert_eq!(progress.updates.len(), 34);
        assert_eq!(progress.updates.first(), Some(&(1, 34)));
        assert_eq!(progress.updates.last(), Some(&(34, 34)));
    }
}
