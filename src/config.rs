// src/config.rs
//! Loading a replacement source table from TOML or JSON.
//!
//! TOML shape:
//! ```toml
//! [[sources]]
//! key = "cnn.com"
//! name = "CNN"
//! logo = "CNN"
//! ```
//! JSON: either a bare array of `{key,name,logo}` or `{"sources": [...]}`.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::source_display::{SourceEntry, SourceTable};

pub const ENV_SOURCE_MAP_PATH: &str = "SOURCE_MAP_PATH";
pub const DEFAULT_SOURCE_MAP_TOML: &str = "config/source_map.toml";
pub const DEFAULT_SOURCE_MAP_JSON: &str = "config/source_map.json";

/// Load a table from an explicit path. Supports TOML or JSON formats.
pub fn load_source_table_from(path: &Path) -> Result<SourceTable> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading source map from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let table = parse_source_table(&content, ext.as_str())
        .with_context(|| format!("parsing source map {}", path.display()))?;
    info!(path = %path.display(), entries = table.len(), "source map loaded");
    Ok(table)
}

/// Load using env var + fallbacks:
/// 1) $SOURCE_MAP_PATH
/// 2) config/source_map.toml
/// 3) config/source_map.json
/// 4) built-in table
pub fn load_source_table_default() -> Result<SourceTable> {
    if let Ok(p) = std::env::var(ENV_SOURCE_MAP_PATH) {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return load_source_table_from(&pb);
        } else {
            return Err(anyhow!("SOURCE_MAP_PATH points to non-existent path"));
        }
    }
    let toml_p = PathBuf::from(DEFAULT_SOURCE_MAP_TOML);
    if toml_p.exists() {
        return load_source_table_from(&toml_p);
    }
    let json_p = PathBuf::from(DEFAULT_SOURCE_MAP_JSON);
    if json_p.exists() {
        return load_source_table_from(&json_p);
    }
    Ok(SourceTable::builtin().clone())
}

#[derive(Deserialize)]
struct Wrapped {
    sources: Vec<SourceEntry>,
}

fn parse_source_table(s: &str, hint_ext: &str) -> Result<SourceTable> {
    let entries = if hint_ext == "toml" {
        parse_toml(s)?
    } else {
        match parse_json(s) {
            Ok(v) => v,
            // Extension-less or mislabeled files: last chance as TOML.
            Err(json_err) => match parse_toml(s) {
                Ok(v) => v,
                Err(_) => return Err(json_err.context("unsupported source map format")),
            },
        }
    };

    let entries = clean_entries(entries);
    if entries.is_empty() {
        return Err(anyhow!("source map has no usable entries"));
    }
    Ok(SourceTable::new(entries))
}

fn parse_toml(s: &str) -> Result<Vec<SourceEntry>> {
    let v: Wrapped = toml::from_str(s)?;
    Ok(v.sources)
}

/// Bare array or `{"sources": [...]}`; field errors (e.g. missing `logo`)
/// surface as-is.
fn parse_json(s: &str) -> Result<Vec<SourceEntry>> {
    let v: serde_json::Value = serde_json::from_str(s)?;
    if v.is_array() {
        return Ok(serde_json::from_value(v)?);
    }
    let w: Wrapped = serde_json::from_value(v)?;
    Ok(w.sources)
}

/// Trim, lowercase keys and strip a leading `www.` from them, then drop
/// empty match segments and repeated keys. Declaration order is preserved.
fn clean_entries(items: Vec<SourceEntry>) -> Vec<SourceEntry> {
    let mut out: Vec<SourceEntry> = Vec::with_capacity(items.len());
    for it in items {
        let key = it.key.trim().to_lowercase();
        // match segment would be "www"
        let key = key.strip_prefix("www.").unwrap_or(&key).to_string();
        let e = SourceEntry::new(key, it.name.trim(), it.logo.trim());
        if e.match_segment().is_empty() {
            // would match every source
            warn!(key = %it.key, "dropping source map entry with empty match segment");
            continue;
        }
        if out.iter().any(|o| o.key == e.key) {
            warn!(key = %e.key, "dropping duplicate source map entry");
            continue;
        }
        out.push(e);
    }
    out
}
