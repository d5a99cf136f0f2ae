//! `alc check`: read the exports, reconcile, write leftovers + manifest.

use alc_artifacts::{write_run_artifacts, WriteRunArtifactsArgs};
use alc_reconcile::{reconcile, ReconcileInputs};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::warn;
use uuid::Uuid;

use super::read_log;

pub struct CheckArgs {
    pub confirmed: String,
    pub unconfirmed: Vec<String>,
    pub chest: String,
    pub out_dir: Option<String>,
    pub config_paths: Vec<String>,
}

pub fn run_check(args: CheckArgs) -> Result<()> {
    let refs: Vec<&str> = args.config_paths.iter().map(|s| s.as_str()).collect();
    let cfg = alc_config::resolve(&refs).context("load config failed")?;
    if !cfg.unused.is_clean() {
        warn!(
            keys = ?cfg.unused.unused_leaf_pointers,
            "config contains keys that are not read"
        );
    }
    let checker = &cfg.checker;
    let allowed = checker.allowed_extensions();

    let mut loot_logs = Vec::with_capacity(1 + args.unconfirmed.len());
    loot_logs.push(read_log(&args.confirmed, &allowed)?);
    for path in &args.unconfirmed {
        loot_logs.push(read_log(path, &allowed)?);
    }
    let chest_log = read_log(&args.chest, &allowed)?;

    let inputs = ReconcileInputs {
        loot_logs,
        chest_log,
    };

    let mut progress = |percent: u8, message: &str| eprintln!("[{percent:>3}%] {message}");
    let outcome = reconcile(&inputs, &mut progress).context("Error processing files")?;

    let out_dir = PathBuf::from(args.out_dir.as_deref().unwrap_or(&checker.output.dir));
    let run_id = Uuid::new_v4();
    let written = write_run_artifacts(
        WriteRunArtifactsArgs {
            out_dir: &out_dir,
            loot_file: &checker.output.loot_file,
            chest_file: &checker.output.chest_file,
            config_hash: &cfg.loaded.config_hash,
            run_id,
        },
        &outcome,
    )?;

    let s = &outcome.summary;
    println!("check_ok=true run_id={run_id}");
    println!(
        "summary loot_in={} chest_in={} chest_pruned={} units_matched={} loot_left={} chest_left={}",
        s.merged_loot_records,
        s.chest_input.records,
        s.prune.removed(),
        s.matching.units_matched,
        s.loot_records_out,
        s.check_records_out
    );
    println!("loot_output={}", written.loot_path.display());
    println!("chest_output={}", written.chest_path.display());
    println!("manifest_path={}", written.manifest_path.display());
    println!("viewer_url={}", checker.viewer.url);

    Ok(())
}
