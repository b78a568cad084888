//! Text lines and result files for the `estimate` subcommand.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use acd::api::{Estimates, Variant};
use anyhow::{Context, Result};
use serde::Serialize;

/// Elapsed wall time with the largest fitting unit, two decimals.
pub fn format_elapsed(elapsed: Duration) -> String {
    let mut t = elapsed.as_secs_f64();
    let mut unit = "sec.";
    if t > 60.0 {
        t /= 60.0;
        unit = "min.";
        if t > 60.0 {
            t /= 60.0;
            unit = "hours.";
            if t > 24.0 {
                t /= 24.0;
                unit = "days.";
            }
        }
    }
    format!("{t:.2} {unit}")
}

/// One result line, e.g.
/// `Number of ACD of length 2 is 3. It takes 0.00 sec. Worst values are 3.25000000 and 3.00000000`.
pub fn format_line(est: &Estimates, elapsed: Duration) -> String {
    format!(
        "Number of {} of length {} is {}. It takes {} Worst values are {:.8} and {:.8}",
        est.variant.name(),
        est.size,
        est.diagrams,
        format_elapsed(elapsed),
        est.finite_ratio(),
        est.limit_ratio().unwrap_or(f64::NAN),
    )
}

/// `<out_dir>/estimates_<start>-<max>_<slug>.txt`
pub fn result_path(out_dir: &Path, start: usize, max: usize, variant: Variant) -> PathBuf {
    out_dir.join(format!("estimates_{start}-{max}_{}.txt", variant.slug()))
}

/// Machine-readable form of one result, collected into the provenance sidecar.
#[derive(Debug, Serialize)]
pub struct Row {
    pub size: usize,
    pub diagrams: u64,
    pub finite: f64,
    pub limit: Option<f64>,
    pub elapsed_secs: f64,
}

impl Row {
    pub fn new(est: &Estimates, elapsed: Duration) -> Self {
        Self {
            size: est.size,
            diagrams: est.diagrams,
            finite: est.finite_ratio(),
            limit: est.limit_ratio(),
            elapsed_secs: elapsed.as_secs_f64(),
        }
    }
}

/// Append-only result file, truncated on open.
pub struct ResultFile {
    path: PathBuf,
    file: File,
}

impl ResultFile {
    pub fn create(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating output dir {}", parent.display()))?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("opening {}", path.display()))?;
        Ok(Self { path, file })
    }

    pub fn append(&mut self, line: &str) -> Result<()> {
        writeln!(self.file, "{line}")
            .and_then(|_| self.file.flush())
            .with_context(|| format!("writing {}", self.path.display()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn elapsed_units() {
        assert_eq!(format_elapsed(Duration::from_millis(1500)), "1.50 sec.");
        assert_eq!(format_elapsed(Duration::from_secs(60)), "60.00 sec.");
        assert_eq!(format_elapsed(Duration::from_secs(90)), "1.50 min.");
        assert_eq!(format_elapsed(Duration::from_secs(2 * 3600)), "2.00 hours.");
        assert_eq!(format_elapsed(Duration::from_secs(36 * 3600)), "1.50 days.");
    }

    #[test]
    fn line_matches_published_layout() {
        let est = Estimates {
            variant: Variant::Acd,
            size: 2,
            diagrams: 3,
            finite: 18.0,
            limit: Some(2.0),
        };
        assert_eq!(
            format_line(&est, Duration::from_millis(10)),
            "Number of ACD of length 2 is 3. It takes 0.01 sec. Worst values are 3.25000000 and 3.00000000"
        );
    }

    #[test]
    fn result_file_names() {
        let p = result_path(Path::new("out"), 1, 4, Variant::PreAcd);
        assert_eq!(p, Path::new("out/estimates_1-4_pre_acd.txt"));
    }

    #[test]
    fn result_file_appends_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("r.txt");
        let mut f = ResultFile::create(path.clone()).unwrap();
        f.append("a").unwrap();
        f.append("b").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\n");
        assert_eq!(f.path(), path.as_path());
    }
}
