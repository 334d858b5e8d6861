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

use std::io::{IsTerminal, Stderr, Write};

use tpm2_hbs_estimator::estimator::ProgressSink;

const WIDTH: usize = 40;

/// Single-line progress bar drawn on `out`.
///
/// A bar left unfinished, when the measurement aborts, is terminated with a
/// newline on drop so that later output starts on its own line.
pub struct BarProgress<W: Write>{
    out: W,
    enabled: bool,
    last_filled: Option<usize>,
    finished: bool
}

/// Progress bar on stderr, silent when stderr is not a terminal
pub type StderrProgress = BarProgress<Stderr>;

impl StderrProgress {
    pub fn new() -> Self {
        let out = std::io::stderr();
        let enabled = out.is_terminal();
        BarProgress::with_writer(out, enabled)
    }
}

impl Default for StderrProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> BarProgress<W> {
    pub fn with_writer(out: W, enabled: bool) -> Self {
        BarProgress { out, enabled, last_filled: None, finished: false }
    }
}

impl<W: Write> ProgressSink for BarProgress<W> {
    fn on_progress(&mut self, completed: usize, total: usize) {
        if !self.enabled || total == 0 {
            return;
        }
        let filled = completed.min(total) * WIDTH / total;
        if self.last_filled == Some(filled) {
            return;
        }
        self.last_filled = Some(filled);

        // write errors are ignored
        let _ = write!(self.out, "\r[{}{}] {completed}/{total}", "#".repeat(filled), " ".repeat(WIDTH - filled));
        if completed >= total {
            let _ = writeln!(self.out);
            self.finished = true;
        }
        let _ = self.out.flush();
    }
}

impl<W: Write> Drop for BarProgress<W> {
    fn drop(&mut self) {
        if self.last_filled.is_some() && !self.finished {
            let _ = writeln!(self.out);
            let _ = self.out.flush();
        }
    }
}
