use std::fs::File;
use std::io::{self, Write};

use camino::{Utf8Path, Utf8PathBuf};

use crate::util;

pub const RESULTS_DIR: &str = "results";
pub const OUTPUT_FILE: &str = "output.txt";

/// Lines written to the output file, each followed by `\n`.
pub const PAYLOAD_LINES: [&str; 2] = [
    "Hello from NEAR!",
    "This is your super awesome long running job run off-chain. B-)",
];

/// Where the job puts its result. Paths stay relative when no root is given.
#[derive(Clone, Debug)]
pub struct JobLayout {
    results_dir: Utf8PathBuf,
}

impl JobLayout {
    /// Layout relative to the process working directory.
    pub fn relative() -> Self {
        Self {
            results_dir: Utf8PathBuf::from(RESULTS_DIR),
        }
    }

    #[cfg(test)]
    pub fn rooted(root: &Utf8Path) -> Self {
        Self {
            results_dir: root.join(RESULTS_DIR),
        }
    }

    pub fn results_dir(&self) -> &Utf8Path {
        &self.results_dir
    }

    pub fn output_path(&self) -> Utf8PathBuf {
        self.results_dir.join(OUTPUT_FILE)
    }
}

pub fn payload() -> String {
    let mut out = String::new();
    for line in PAYLOAD_LINES {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Truncate `path` and write the payload into it. Returns the number of bytes written.
///
/// A failure partway leaves whatever was already written; nothing is rolled back.
pub fn write_payload(path: &Utf8Path) -> io::Result<usize> {
    let body = payload();
    let mut file = File::create(path)?;
    file.write_all(body.as_bytes())?;
    file.flush()?;
    Ok(body.len())
}

/// Ensure the results directory, then write the output file.
pub fn run(layout: &JobLayout) -> io::Result<()> {
    tracing::debug!(dir = %layout.results_dir(), "resolved job layout");

    let created = util::fs::ensure_dir(layout.results_dir())?;
    tracing::info!(dir = %layout.results_dir(), created, "results directory ready");

    let path = layout.output_path();
    let bytes = write_payload(&path)?;
    tracing::info!(path = %path, bytes, "wrote job output");
    Ok(())
}
