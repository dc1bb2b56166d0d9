// Input processing module
// Reads newline-delimited scan targets from stdin or a file

use crate::Result;
use anyhow::Context;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::error;

/// Read targets from a file, one per line.
pub fn read_targets_from_file(path: &Path) -> Result<Vec<String>> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;

    Ok(collect_lines(BufReader::new(file)))
}

/// Read targets from standard input until end-of-stream.
pub fn read_targets_from_stdin() -> Vec<String> {
    collect_lines(io::stdin().lock())
}

/// Collect non-empty trimmed lines. A read error ends the stream; lines
/// collected before the error are kept and still scanned.
fn collect_lines<R: BufRead>(reader: R) -> Vec<String> {
    let mut targets = Vec::new();

    for line in reader.lines() {
        match line {
            Ok(line) => {
                let line = line.trim();
                if !line.is_empty() {
                    targets.push(line.to_string());
                }
            }
            Err(err) => {
                error!("failed to read input: {}", err);
                break;
            }
        }
    }

    targets
}
