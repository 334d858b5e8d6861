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

use std::{cmp::Ordering, time::Duration};

use crate::{catalog::nist_approved_parameters, error::EstimateError, types::{EstimateRow, HbsSchemeParams, SortKey, ThroughputEstimate}};

/// Project keygen and signing times of the built-in catalog, ordered by `sort_key`
/// ### Examples
/// ```rust
/// use tpm2_hbs_estimator::{projector::project_estimates, types::{SortKey, ThroughputEstimate}};
///
/// let estimate = ThroughputEstimate::new(20_000.0).unwrap();
/// let rows = project_estimates(&estimate, SortKey::Keygen).unwrap();
/// assert!(rows.windows(2).all(|pair| pair[0].scheme().keygen_work <= pair[1].scheme().keygen_work));
/// ```
pub fn project_estimates(estimate: &ThroughputEstimate, sort_key: SortKey) -> Result<Vec<EstimateRow>, EstimateError> {
    project_catalog(estimate, nist_approved_parameters(), sort_key)
}

/// Project keygen and signing times of every entry of `catalog`, ordered by `sort_key`.
///
/// The sort is stable: entries equal under `sort_key` keep their catalog order.
pub fn project_catalog(estimate: &ThroughputEstimate, catalog: &[HbsSchemeParams], sort_key: SortKey) -> Result<Vec<EstimateRow>, EstimateError> {
    let mut rows = catalog.iter()
        .map(|scheme| project_scheme(estimate, scheme))
        .collect::<Result<Vec<_>, _>>()?;
    rows.sort_by(|a, b| compare(sort_key, a.scheme(), b.scheme()));
    Ok(rows)
}

fn project_scheme(estimate: &ThroughputEstimate, scheme: &HbsSchemeParams) -> Result<EstimateRow, EstimateError> {
    let num_signatures = scheme.num_signatures()
        .ok_or(EstimateError::Configuration(format!("tree height {} of {} is too large", scheme.h, scheme.friendly_name)))?;
    let keygen = work_duration(estimate, scheme.keygen_work)?;
    let signing = work_duration(estimate, scheme.sig_work)?;
    Ok(EstimateRow::new(*scheme, num_signatures, keygen, signing))
}

fn work_duration(estimate: &ThroughputEstimate, work: u64) -> Result<Duration, EstimateError> {
    let seconds = estimate.seconds_for(work);
    Duration::try_from_secs_f64(seconds)
        .map_err(|_| EstimateError::Estimation(format!("{work} hashes at {estimate} hashes per second cannot be represented as a duration")))
}

fn compare(sort_key: SortKey, a: &HbsSchemeParams, b: &HbsSchemeParams) -> Ordering {
    match sort_key {
        SortKey::Name => a.friendly_name.cmp(b.friendly_name)
            .then(a.w.cmp(&b.w)),
        SortKey::Size => a.sig_size.cmp(&b.sig_size),
        SortKey::Signing => a.sig_work.cmp(&b.sig_work),
        SortKey::Keygen => a.keygen_work.cmp(&b.keygen_work)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::{catalog::nist_approved_parameters, error::EstimateError, types::{HbsSchemeParams, SortKey, ThroughputEstimate}};

    use super::{project_catalog, project_estimates};

    const SCHEME_A: HbsSchemeParams = HbsSchemeParams::new("Scheme A", 4, 10, 1000, 100, 50);
    const SCHEME_B: HbsSchemeParams = HbsSchemeParams::new("Scheme B", 4, 10, 2000, 10, 5);

    #[test]
    fn two_scheme_report(){
        let estimate = ThroughputEstimate::new(10.0).unwrap();
        let rows = project_catalog(&estimate, &[SCHEME_A, SCHEME_B], SortKey::Keygen).unwrap();

        let names = rows.iter().map(|row| row.friendly_name()).collect::<Vec<_>>();
        assert_eq!(names, ["Scheme B", "Scheme A"]);
        assert_eq!(rows[0].estimated_keygen(), Duration::from_secs(1));
        assert_eq!(rows[0].estimated_signing(), Duration::from_millis(500));
        assert_eq!(rows[1].estimated_keygen(), Duration::from_secs(10));
        assert_eq!(rows[1].estimated_signing(), Duration::from_secs(5));
        assert_eq!(rows[1].num_signatures(), 1024);
    }

    #[test]
    fn size_order(){
        let estimate = ThroughputEstimate::new(10.0).unwrap();
        let rows = project_catalog(&estimate, &[SCHEME_B, SCHEME_A], SortKey::Size).unwrap();
        assert_eq!(rows[0].friendly_name(), "Scheme A");
    }

    #[test]
    fn one_row_per_scheme(){
        let estimate = ThroughputEstimate::new(35_000.0).unwrap();
        let rows = project_estimates(&estimate, SortKey::Name).unwrap();
        assert_eq!(rows.len(), nist_approved_parameters().len());
        for row in &rows {
            assert!(row.estimated_keygen() > Duration::ZERO);
            assert!(row.estimated_signing() > Duration::ZERO);
        }
    }

    #[test]
    fn doubling_throughput_halves_durations(){
        let slow = project_estimates(&ThroughputEstimate::new(1_000.0).unwrap(), SortKey::Keygen).unwrap();
        let fast = project_estimates(&ThroughputEstimate::new(2_000.0).unwrap(), SortKey::Keygen).unwrap();
        for (slow, fast) in slow.iter().zip(fast.iter()) {
            assert_eq!(slow.scheme(), fast.scheme());
            let keygen = slow.estimated_keygen().as_secs_f64() / fast.estimated_keygen().as_secs_f64();
            let signing = slow.estimated_signing().as_secs_f64() / fast.estimated_signing().as_secs_f64();
            assert!((keygen - 2.0).abs() < 1e-6);
            assert!((signing - 2.0).abs() < 1e-6);
        }
    }

    #[test]
    fn every_order_is_sorted(){
        let estimate = ThroughputEstimate::new(35_000.0).unwrap();

        let rows = project_estimates(&estimate, SortKey::Keygen).unwrap();
        assert!(rows.windows(2).all(|pair| pair[0].scheme().keygen_work <= pair[1].scheme().keygen_work));

        let rows = project_estimates(&estimate, SortKey::Signing).unwrap();
        assert!(rows.windows(2).all(|pair| pair[0].scheme().sig_work <= pair[1].scheme().sig_work));

        let rows = project_estimates(&estimate, SortKey::Size).unwrap();
        assert!(rows.windows(2).all(|pair| pair[0].sig_size() <= pair[1].sig_size()));

        let rows = project_estimates(&estimate, SortKey::Name).unwrap();
        assert!(rows.windows(2).all(|pair| pair[0].friendly_name() <= pair[1].friendly_name()));
    }

    #[test]
    fn name_ties_are_ordered_by_w(){
        let estimate = ThroughputEstimate::new(35_000.0).unwrap();
        let rows = project_estimates(&estimate, SortKey::Name).unwrap();
        let widths = rows.iter()
            .filter(|row| row.friendly_name() == "LMS_SHA256_M24_H15")
            .map(|row| row.w())
            .collect::<Vec<_>>();
        assert_eq!(widths, [1, 2, 4, 8]);
    }

    #[test]
    fn equal_keys_keep_catalog_order(){
        // Signing work does not depend on the tree height
        let estimate = ThroughputEstimate::new(35_000.0).unwrap();
        let rows = project_estimates(&estimate, SortKey::Signing).unwrap();
        let heights = rows.iter()
            .filter(|row| row.scheme().sig_work == 1074)
            .map(|row| row.scheme().h)
            .collect::<Vec<_>>();
        assert_eq!(heights, [5, 10, 15, 20, 25]);
    }

    #[test]
    fn unrepresentable_duration(){
        let estimate = ThroughputEstimate::new(1e-12).unwrap();
        let rows = project_estimates(&estimate, SortKey::Keygen);
        assert!(matches!(rows, Err(EstimateError::Estimation(_))));
    }

    #[test]
    fn oversized_tree(){
        let estimate = ThroughputEstimate::new(10.0).unwrap();
        let huge = HbsSchemeParams::new("Huge", 4, 64, 1, 1, 1);
        let rows = project_catalog(&estimate, &[huge], SortKey::Keygen);
        assert!(matches!(rows, Err(EstimateError::Configuration(_))));
    }
}
