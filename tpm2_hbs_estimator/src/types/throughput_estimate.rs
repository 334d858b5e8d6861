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

use crate::{error::EstimateError, estimator::regression::LinearFit};

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// Steady-state hashing rate of a device, in 64-byte blocks per second.
///
/// The rate is always strictly positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThroughputEstimate{
    hashes_per_second: f64,
    /// Fixed cost of one call (dispatch, framing), when derived from a fit
    per_call_overhead_nanos: Option<f64>
}

impl ThroughputEstimate {
    /// Build an estimate from a known rate
    /// ### Examples
    /// ```rust
    /// use tpm2_hbs_estimator::types::ThroughputEstimate;
    ///
    /// assert!(ThroughputEstimate::new(1000.0).is_ok());
    /// assert!(ThroughputEstimate::new(0.0).is_err());
    /// ```
    pub fn new(hashes_per_second: f64) -> Result<Self, EstimateError> {
        if !hashes_per_second.is_finite() || hashes_per_second <= 0.0 {
            return Err(EstimateError::Estimation(
                format!("{hashes_per_second} hashes per second is not a usable rate")));
        }
        Ok(ThroughputEstimate { hashes_per_second, per_call_overhead_nanos: None })
    }

    /// Build an estimate from a fit of nanoseconds against block count.
    ///
    /// The slope is the marginal cost of one block and the intercept the per-call overhead.
    /// A non-positive slope means the timings were dominated by noise.
    pub fn from_fit(fit: &LinearFit) -> Result<Self, EstimateError> {
        if !fit.slope.is_finite() || fit.slope <= 0.0 {
            return Err(EstimateError::Estimation(
                format!("fitted cost per block is {} ns, expected a positive value", fit.slope)));
        }
        let mut estimate = Self::new(NANOS_PER_SECOND / fit.slope)?;
        estimate.per_call_overhead_nanos = Some(fit.intercept);
        Ok(estimate)
    }

    pub fn hashes_per_second(&self) -> f64 {
        self.hashes_per_second
    }

    /// Marginal time spent on one block, in nanoseconds
    pub fn per_block_nanos(&self) -> f64 {
        NANOS_PER_SECOND / self.hashes_per_second
    }

    pub fn per_call_overhead_nanos(&self) -> Option<f64> {
        self.per_call_overhead_nanos
    }

    /// Seconds needed to hash `work` blocks at this rate
    pub fn seconds_for(&self, work: u64) -> f64 {
        work as f64 / self.hashes_per_second
    }
}

impl Display for ThroughputEstimate{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.hashes_per_second)
    }
}
