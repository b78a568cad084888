use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What a run was asked to do and what it produced.
pub struct Payload {
    pub params: Value,
    pub results: Value,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            results: Value::Null,
        }
    }

    pub fn with_results(mut self, results: Value) -> Self {
        self.results = results;
        self
    }
}

/// Code revision and library version, shared by sidecars and `report`.
pub fn stamp() -> Value {
    json!({
        "code_rev": current_git_rev(),
        "acd_version": acd::VERSION,
    })
}

/// Write `<artifact>.provenance.json` with the stamp, callsite, params and results.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = json!({
        "stamp": stamp(),
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "params": payload.params,
        "results": payload.results,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("estimates"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/out/estimates_1-4_acd.txt");
        assert_eq!(
            provenance_path(base),
            Path::new("/tmp/out/estimates_1-4_acd.provenance.json")
        );
    }

    #[test]
    fn write_sidecar_records_params_and_results() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("estimates_1-2_acd.txt");
        fs::write(&artifact, "").unwrap();
        let payload = Payload::new(json!({"variant": "acd", "max_size": 2}))
            .with_results(json!([{"size": 1, "diagrams": 1}]));
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["params"]["max_size"], 2);
        assert_eq!(parsed["results"][0]["diagrams"], 1);
        assert_eq!(parsed["stamp"]["acd_version"], acd::VERSION);
    }
}
