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

use std::path::PathBuf;

use clap::Parser;
use tpm2_hbs_estimator::{device::DEFAULT_TCTI, estimator::DEFAULT_SAMPLES_PER_SIZE};

#[derive(Parser, Debug)]
#[command(name = "tpmhbs")]
#[command(about = "Estimate hash-based signature keygen and signing times on a TPM 2.0", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Use the TPM simulator (mssim on localhost:2321)
    #[arg(long)]
    pub simulator: bool,

    /// TCTI used to reach the TPM
    #[arg(long, env = "TPM2TOOLS_TCTI", default_value = DEFAULT_TCTI)]
    pub tcti: String,

    /// Measure the host SHA-256 implementation instead of a TPM
    #[arg(long)]
    pub software: bool,

    /// One of: [keygen, signing, size, name]
    #[arg(long = "sort_by", visible_alias = "sort-by", default_value = "keygen")]
    pub sort_by: String,

    /// Timed calls averaged for each input size
    #[arg(long, default_value_t = DEFAULT_SAMPLES_PER_SIZE)]
    pub samples: usize,

    /// Directory receiving the CSV snapshot (default: current directory)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Skip the CSV snapshot
    #[arg(long)]
    pub no_csv: bool,
}
