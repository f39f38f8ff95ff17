use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Where a sidecar was requested from.
#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

/// Provenance document written next to an answer file.
#[derive(Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub version: &'static str,
    pub tag: Option<String>,
    pub params: Value,
    pub outputs: Vec<String>,
}

impl Provenance {
    pub fn new(tag: Option<String>, params: Value, outputs: Vec<String>) -> Self {
        Self {
            code_rev: current_git_rev(),
            version: puzzles::VERSION,
            tag,
            params,
            outputs,
        }
    }
}

/// Write `<artifact>.provenance.json` containing the code revision, callsite, params, and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(
    artifact: P,
    tag: Option<String>,
    params: Value,
) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let caller = Location::caller();
    let doc = Provenance::new(tag, params, vec![artifact.to_string_lossy().into_owned()]);
    let mut value = serde_json::to_value(&doc)?;
    value["callsite"] = serde_json::to_value(Callsite {
        file: caller.file(),
        line: caller.line(),
    })?;
    fs::write(&provenance_path, serde_json::to_vec_pretty(&value)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("answer"));
    let mut name = stem;
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Code revision: `GIT_COMMIT` at build time, then at run time, then `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .filter(|rev| !rev.is_empty())
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|rev| !rev.is_empty()))
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
