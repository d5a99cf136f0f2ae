//! alc-config
//!
//! Layered YAML configuration for the loot checker.
//!
//! - Layers are merged in order: earlier docs are base, later docs override.
//! - The merged document is hashed (sha256 of canonical JSON) so a run
//!   manifest can record exactly which configuration produced it.
//! - [`CheckerConfig`] is the typed view; every key has a default, so an
//!   empty config is valid.
//! - Leaf keys nothing reads are reported by the unused-key guard.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use std::fs;

pub const DEFAULT_LOOT_OUTPUT: &str = "missing_loot_items.txt";
pub const DEFAULT_CHEST_OUTPUT: &str = "remaining_chest_items.txt";
pub const DEFAULT_VIEWER_URL: &str = "https://matheus.sampaio.us/ao-loot-logger-viewer/";

// ---------------------------------------------------------------------------
// Typed view
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    pub output: OutputConfig,
    pub input: InputConfig,
    pub viewer: ViewerConfig,
    pub policy: PolicyConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the output files and manifest are written to.
    pub dir: String,
    /// File name of the unmatched loot events.
    pub loot_file: String,
    /// File name of the leftover chest rows.
    pub chest_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: ".".to_string(),
            loot_file: DEFAULT_LOOT_OUTPUT.to_string(),
            chest_file: DEFAULT_CHEST_OUTPUT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Accepted input file extensions, without the dot, compared
    /// case-insensitively.
    pub allowed_extensions: Vec<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: vec!["txt".to_string(), "csv".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Loot Logger Viewer the loot output can be uploaded to by hand.
    pub url: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_VIEWER_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub unused_keys: UnusedKeyPolicy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnusedKeyPolicy {
    #[default]
    Warn,
    Fail,
}

impl CheckerConfig {
    pub fn from_json(v: &Value) -> Result<Self> {
        serde_json::from_value(v.clone()).context("config does not match the expected shape")
    }

    /// Lower-cased allow-list, leading dots stripped.
    pub fn allowed_extensions(&self) -> Vec<String> {
        self.input
            .allowed_extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Unused-key guard
// ---------------------------------------------------------------------------

/// JSON pointers read by [`CheckerConfig`]. A leaf is consumed when it equals
/// one of these or lives underneath one.
pub const CONSUMED_POINTERS: &[&str] = &[
    "/output/dir",
    "/output/loot_file",
    "/output/chest_file",
    "/input/allowed_extensions",
    "/viewer/url",
    "/policy/unused_keys",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnusedKeyReport {
    /// Consumed JSON-pointer prefixes used for this analysis (sorted, unique)
    pub consumed_prefixes: Vec<String>,
    /// Unused leaf pointers (sorted)
    pub unused_leaf_pointers: Vec<String>,
}

impl UnusedKeyReport {
    pub fn is_clean(&self) -> bool {
        self.unused_leaf_pointers.is_empty()
    }
}

/// Report config leaves that nothing reads.
/// `Fail` turns a non-empty report into an error; `Warn` always returns it.
pub fn report_unused_keys(config_json: &Value, policy: UnusedKeyPolicy) -> Result<UnusedKeyReport> {
    let consumed: BTreeSet<String> = CONSUMED_POINTERS
        .iter()
        .map(|p| normalize_pointer(p))
        .collect();
    let consumed_prefixes: Vec<String> = consumed.into_iter().collect();

    let mut leaves: Vec<String> = Vec::new();
    collect_leaf_pointers(config_json, "", &mut leaves);

    let mut unused: Vec<String> = leaves
        .into_iter()
        .filter(|lp| !consumed_prefixes.iter().any(|cp| is_prefix_pointer(cp, lp)))
        .collect();
    unused.sort();
    unused.dedup();

    let report = UnusedKeyReport {
        consumed_prefixes,
        unused_leaf_pointers: unused,
    };

    if policy == UnusedKeyPolicy::Fail && !report.is_clean() {
        let shown: Vec<&str> = report
            .unused_leaf_pointers
            .iter()
            .take(12)
            .map(String::as_str)
            .collect();
        bail!(
            "config has {} key(s) the loot checker never reads: {}",
            report.unused_leaf_pointers.len(),
            shown.join(", ")
        );
    }

    Ok(report)
}

/// Leading "/" added, trailing "/" dropped; "" and "/" both mean the root.
fn normalize_pointer(p: &str) -> String {
    let trimmed = p.trim().trim_matches('/');
    format!("/{trimmed}")
}

/// "/a/b" consumes "/a/b" and "/a/b/c" but not "/a/bc".
fn is_prefix_pointer(prefix: &str, leaf: &str) -> bool {
    if prefix == "/" {
        return true;
    }
    match leaf.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Push the pointer of every scalar under `v`. Empty containers add nothing.
fn collect_leaf_pointers(v: &Value, at: &str, out: &mut Vec<String>) {
    match v {
        Value::Object(map) => {
            for (k, child) in map {
                let token = k.replace('~', "~0").replace('/', "~1");
                collect_leaf_pointers(child, &format!("{at}/{token}"), out);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                collect_leaf_pointers(child, &format!("{at}/{i}"), out);
            }
        }
        _ if at.is_empty() => out.push("/".to_string()),
        _ => out.push(at.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config_hash: String,
    pub canonical_json: String,
    pub config_json: Value,
}

pub fn load_layered_yaml(paths: &[&str]) -> Result<LoadedConfig> {
    let mut docs: Vec<String> = Vec::new();
    for p in paths {
        let raw =
            fs::read_to_string(p).with_context(|| format!("failed to read yaml path: {p}"))?;
        docs.push(raw);
    }

    let doc_refs: Vec<&str> = docs.iter().map(|s| s.as_str()).collect();
    load_layered_yaml_from_strings(&doc_refs)
}

pub fn load_layered_yaml_from_strings(yaml_docs: &[&str]) -> Result<LoadedConfig> {
    let mut merged = serde_json::json!({});
    for raw in yaml_docs {
        let v_yaml: serde_yaml::Value = serde_yaml::from_str(raw).context("invalid yaml")?;
        // An empty document parses as null; treat it as "no overrides".
        if v_yaml.is_null() {
            continue;
        }
        let v_json = serde_json::to_value(v_yaml).context("yaml->json conversion failed")?;
        merged = deep_merge(merged, v_json);
    }

    let canonical_json = canonicalize_json(&merged)?;
    let config_hash = sha256_hex(canonical_json.as_bytes());
    Ok(LoadedConfig {
        config_hash,
        canonical_json,
        config_json: merged,
    })
}

/// Loaded layers, their typed view and the unused-key report.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub loaded: LoadedConfig,
    pub checker: CheckerConfig,
    pub unused: UnusedKeyReport,
}

/// Load `paths` (possibly none), apply the unused-key policy the config
/// itself selects, and build the typed view.
pub fn resolve(paths: &[&str]) -> Result<ResolvedConfig> {
    let loaded = load_layered_yaml(paths)?;
    resolve_loaded(loaded)
}

pub fn resolve_loaded(loaded: LoadedConfig) -> Result<ResolvedConfig> {
    let checker = CheckerConfig::from_json(&loaded.config_json)?;
    let unused = report_unused_keys(&loaded.config_json, checker.policy.unused_keys)?;
    Ok(ResolvedConfig {
        loaded,
        checker,
        unused,
    })
}

fn deep_merge(a: Value, b: Value) -> Value {
    match (a, b) {
        (Value::Object(mut a_map), Value::Object(b_map)) => {
            for (k, b_val) in b_map {
                let a_val = a_map.remove(&k).unwrap_or(Value::Null);
                a_map.insert(k, deep_merge(a_val, b_val));
            }
            Value::Object(a_map)
        }
        (_, b_other) => b_other,
    }
}

fn canonicalize_json(v: &Value) -> Result<String> {
    // serde_json's default Map is a BTreeMap, so keys serialize sorted.
    let s = serde_json::to_string(v).context("canonical json serialize failed")?;
    Ok(s)
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
