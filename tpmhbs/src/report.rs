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

use std::{fmt::{Display, Write as _}, fs::File, io::Write, path::{Path, PathBuf}, time::Duration};

use tpm2_hbs_estimator::types::{EstimateRow, ThroughputEstimate, TpmInfo};

use crate::error::CliError;

pub const HEADER: [&str; 6] = ["Friendly Name", "W (bits)", "Signatures", "Sig Size", "Est. Keygen", "Est. Signing"];

/// Device a report was measured on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceIdentity{
    Tpm(TpmInfo),
    /// Host CPU running the `sha2` implementation
    Software
}

impl DeviceIdentity {
    fn manufacturer(&self) -> &str {
        match self {
            DeviceIdentity::Tpm(info) => info.manufacturer(),
            DeviceIdentity::Software => "software"
        }
    }

    fn model(&self) -> &str {
        match self {
            DeviceIdentity::Tpm(info) => info.model(),
            DeviceIdentity::Software => "sha2"
        }
    }
}

impl Display for DeviceIdentity{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceIdentity::Tpm(info) => write!(f, "{info}"),
            DeviceIdentity::Software => f.write_str("Host CPU SHA-256 (sha2 software baseline, no TPM)")
        }
    }
}

/// Outcome of one measurement, ready to be printed and exported
pub struct Report{
    version: &'static str,
    device: DeviceIdentity,
    estimate: ThroughputEstimate,
    rows: Vec<EstimateRow>
}

impl Report {
    pub fn new(version: &'static str, device: DeviceIdentity, estimate: ThroughputEstimate, rows: Vec<EstimateRow>) -> Self {
        Report { version, device, estimate, rows }
    }

    /// Version banner, device identity, measured rate and the estimates table
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "tpmhbs version {}", self.version);
        let _ = writeln!(out, "{}", self.device);
        let _ = writeln!(out, "Estimated (SHA256) hashes per second: {}", self.estimate);
        out.push_str(&self.render_table());
        out
    }

    pub fn render_table(&self) -> String {
        let cells = self.rows.iter().map(as_row).collect::<Vec<_>>();
        let mut widths = HEADER.map(|title| title.chars().count());
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let separator = widths.iter()
            .map(|width| "-".repeat(width + 2))
            .collect::<Vec<_>>()
            .join("+");
        let separator = format!("+{separator}+\n");

        let mut table = separator.clone();
        table.push_str(&format_line(&HEADER.map(str::to_owned), &widths));
        table.push_str(&separator);
        for row in &cells {
            table.push_str(&format_line(row, &widths));
        }
        table.push_str(&separator);
        table
    }

    /// Name of the CSV snapshot for the measured device
    pub fn csv_file_name(&self) -> String {
        format!("tpmhbs.{}.{}.{}.csv", self.version, file_safe(self.device.manufacturer()), file_safe(self.device.model()))
    }

    /// Write the snapshot in `dir`, replacing the one of a previous run
    pub fn write_csv(&self, dir: &Path) -> Result<PathBuf, CliError> {
        let path = dir.join(self.csv_file_name());
        let file = File::create(&path)?;
        self.write_csv_to(file)?;
        Ok(path)
    }

    pub fn write_csv_to<W: Write>(&self, writer: W) -> Result<(), CliError> {
        let mut csv = csv::WriterBuilder::new().from_writer(writer);
        csv.write_record(HEADER)?;
        for row in &self.rows {
            csv.write_record(&as_row(row))?;
        }
        csv.flush()?;
        Ok(())
    }
}

fn as_row(row: &EstimateRow) -> [String; 6] {
    [row.friendly_name().to_owned(),
    row.w().to_string(),
    row.num_signatures().to_string(),
    row.sig_size().to_string(),
    format_duration(row.estimated_keygen()),
    format_duration(row.estimated_signing())]
}

fn format_line(cells: &[String; 6], widths: &[usize; 6]) -> String {
    let line = cells.iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!(" {cell:<width$} "))
        .collect::<Vec<_>>()
        .join("|");
    format!("|{line}|\n")
}

fn file_safe(value: &str) -> String {
    let safe = value.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect::<String>();
    if safe.is_empty() { "unknown".to_owned() } else { safe }
}

/// Compact human form of a duration
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    let whole = duration.as_secs();
    match secs {
        s if s < 1e-6 => format!("{}ns", duration.as_nanos()),
        s if s < 1e-3 => format!("{:.1}µs", s * 1e6),
        s if s < 1.0 => format!("{:.1}ms", s * 1e3),
        s if s < 60.0 => format!("{:.2}s", s),
        s if s < 3600.0 => format!("{}m{:02}s", whole / 60, whole % 60),
        s if s < 86400.0 => format!("{}h{:02}m", whole / 3600, whole % 3600 / 60),
        s => format!("{:.1}d", s / 86400.0)
    }
}
