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

use std::{path::PathBuf, process::ExitCode, str::FromStr};

use clap::Parser;
use tpm2_hbs_estimator::{device::software_device::SoftwareHashDevice, error::EstimateError, estimator::measure_throughput, projector::project_estimates, types::{SortKey, ThroughputEstimate}};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::{cli::Cli, error::CliError, progress::StderrProgress, report::{DeviceIdentity, Report}};

mod cli;
mod error;
mod progress;
mod report;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    // Validate the request before opening the device
    let sort_key = SortKey::from_str(&cli.sort_by)
        .map_err(CliError::Configuration)?;
    if cli.samples == 0 {
        return Err(CliError::Configuration(EstimateError::Configuration("--samples must be at least 1".to_owned())));
    }

    let (device, estimate) = if cli.software {
        measure_software(&cli)?
    } else {
        measure_tpm(&cli)?
    };

    let rows = project_estimates(&estimate, sort_key)
        .map_err(CliError::Projection)?;
    let report = Report::new(VERSION, device, estimate, rows);
    print!("{}", report.render());

    if cli.no_csv {
        return Ok(());
    }
    let dir = match cli.output_dir {
        Some(dir) => dir,
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };
    // the table is already out, a failed export does not fail the run
    match report.write_csv(&dir) {
        Ok(path) => println!("Wrote CSV data to {}.", path.display()),
        Err(e) => {
            warn!(error = %e, "CSV export failed");
            eprintln!("Could not write CSV file to {}.", dir.join(report.csv_file_name()).display());
        }
    }
    Ok(())
}

fn measure_software(cli: &Cli) -> Result<(DeviceIdentity, ThroughputEstimate), CliError> {
    let mut device = SoftwareHashDevice::new();
    let estimate = measure_throughput(&mut device, cli.samples, &mut StderrProgress::new())
        .map_err(CliError::Performance)?;
    Ok((DeviceIdentity::Software, estimate))
}

#[cfg(feature = "tpm")]
fn measure_tpm(cli: &Cli) -> Result<(DeviceIdentity, ThroughputEstimate), CliError> {
    use tpm2_hbs_estimator::device::{tpm_device::TpmDevice, tpm_device_config::parse_config, SIMULATOR_TCTI};

    let conf = if cli.simulator { SIMULATOR_TCTI } else { cli.tcti.as_str() };
    let config = parse_config(conf).map_err(CliError::OpenTpm)?;

    // the connection is released when `device` goes out of scope
    let mut device = TpmDevice::connect(config).map_err(CliError::OpenTpm)?;
    let info = device.info().map_err(CliError::TpmInfo)?;
    let estimate = measure_throughput(&mut device, cli.samples, &mut StderrProgress::new())
        .map_err(CliError::Performance)?;
    Ok((DeviceIdentity::Tpm(info), estimate))
}

#[cfg(not(feature = "tpm"))]
fn measure_tpm(_cli: &Cli) -> Result<(DeviceIdentity, ThroughputEstimate), CliError> {
    Err(CliError::TpmUnsupported)
}
