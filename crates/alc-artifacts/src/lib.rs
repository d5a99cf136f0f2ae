use alc_reconcile::{ReconcileOutcome, ReconcileSummary};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const MANIFEST_FILE: &str = "manifest.json";
pub const SCHEMA_VERSION: i32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub schema_version: i32,
    pub run_id: Uuid,
    pub config_hash: String,
    pub created_at_utc: DateTime<Utc>,
    pub artifacts: ArtifactList,
    pub summary: ReconcileSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactList {
    pub loot_output: String,
    pub chest_output: String,
    pub manifest_json: String,
}

pub struct WriteRunArtifactsArgs<'a> {
    pub out_dir: &'a Path,
    pub loot_file: &'a str,
    pub chest_file: &'a str,
    pub config_hash: &'a str,
    pub run_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct WriteRunArtifactsResult {
    pub loot_path: PathBuf,
    pub chest_path: PathBuf,
    pub manifest_path: PathBuf,
}

/// Write both output texts and `manifest.json` into `out_dir`.
///
/// Output files are overwritten; a rerun over the same inputs produces the
/// same outputs.
pub fn write_run_artifacts(
    args: WriteRunArtifactsArgs<'_>,
    outcome: &ReconcileOutcome,
) -> Result<WriteRunArtifactsResult> {
    fs::create_dir_all(args.out_dir)
        .with_context(|| format!("create output dir failed: {}", args.out_dir.display()))?;

    let loot_path = args.out_dir.join(args.loot_file);
    fs::write(&loot_path, &outcome.loot_output)
        .with_context(|| format!("write loot output failed: {}", loot_path.display()))?;

    let chest_path = args.out_dir.join(args.chest_file);
    fs::write(&chest_path, &outcome.chest_output)
        .with_context(|| format!("write chest output failed: {}", chest_path.display()))?;

    let manifest = RunManifest {
        schema_version: SCHEMA_VERSION,
        run_id: args.run_id,
        config_hash: args.config_hash.to_string(),
        created_at_utc: Utc::now(),
        artifacts: ArtifactList {
            loot_output: args.loot_file.to_string(),
            chest_output: args.chest_file.to_string(),
            manifest_json: MANIFEST_FILE.to_string(),
        },
        summary: outcome.summary.clone(),
    };

    let manifest_path = args.out_dir.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(&manifest).context("serialize manifest failed")?;
    fs::write(&manifest_path, format!("{json}\n"))
        .with_context(|| format!("write manifest failed: {}", manifest_path.display()))?;

    Ok(WriteRunArtifactsResult {
        loot_path,
        chest_path,
        manifest_path,
    })
}

pub fn read_manifest(path: &Path) -> Result<RunManifest> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read manifest failed: {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse manifest failed: {}", path.display()))
}
