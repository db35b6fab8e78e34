//! # Source Display
//!
//! Turns a raw source identifier (usually a domain such as `"www.cnn.com"`)
//! into a short display name plus a 1–3 character logo label.
//!
//! - Strips a leading `www.` and lowercases the rest ("clean source").
//! - Scans an ordered table of known domains; an entry matches when the part
//!   of its key before the first `.` occurs anywhere in the clean source.
//! - First match in declaration order wins, so the table is a `Vec`, never a map.
//! - Unknown sources fall back to their first `.`/`-` segment, capitalized.
//!
//! Total over all inputs: nothing here returns an error or panics.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Name/logo pair shown in the bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDisplayInfo {
    pub name: String,
    pub logo: String,
}

impl SourceDisplayInfo {
    pub fn new(name: impl Into<String>, logo: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logo: logo.into(),
        }
    }

    /// Shown for absent or empty sources.
    pub fn unknown() -> Self {
        Self::new("Unknown", "?")
    }
}

/// One row of the source table, e.g. `cnn.com → CNN / CNN`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntry {
    pub key: String,
    pub name: String,
    pub logo: String,
}

impl SourceEntry {
    pub fn new(key: impl Into<String>, name: impl Into<String>, logo: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            logo: logo.into(),
        }
    }

    /// Key text before its first `.` (`"cnn.com"` → `"cnn"`).
    pub fn match_segment(&self) -> &str {
        self.key.split('.').next().unwrap_or_default()
    }

    fn info(&self) -> SourceDisplayInfo {
        SourceDisplayInfo::new(self.name.clone(), self.logo.clone())
    }
}

/// Ordered domain table. Scan order == declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceTable {
    entries: Vec<SourceEntry>,
}

static BUILTIN: Lazy<SourceTable> = Lazy::new(|| {
    let raw = include_str!("../source_map.json");
    let entries: Vec<SourceEntry> = serde_json::from_str(raw).expect("valid built-in source map");
    SourceTable::new(entries)
});

static SEGMENT_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.-]").expect("segment regex"));

impl SourceTable {
    pub fn new(entries: Vec<SourceEntry>) -> Self {
        Self { entries }
    }

    /// The 18-entry table embedded from `source_map.json`.
    pub fn builtin() -> &'static SourceTable {
        &BUILTIN
    }

    pub fn entries(&self) -> &[SourceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a source identifier against this table.
    ///
    /// Steps:
    /// 1. Absent/empty → `Unknown` / `?`.
    /// 2. Clean source (strip leading `www.`, lowercase).
    /// 3. First entry whose match segment is a substring of the clean source.
    /// 4. Fallback derived from the first `.`/`-` segment.
    pub fn resolve(&self, source: Option<&str>) -> SourceDisplayInfo {
        let raw = match source {
            Some(s) if !s.is_empty() => s,
            _ => return SourceDisplayInfo::unknown(),
        };

        let clean = clean_source(raw);

        if let Some(entry) = self
            .entries
            .iter()
            .find(|e| clean.contains(e.match_segment()))
        {
            return entry.info();
        }

        fallback_info(&clean)
    }
}

/// Resolve against the built-in table.
pub fn resolve(source: Option<&str>) -> SourceDisplayInfo {
    SourceTable::builtin().resolve(source)
}

/// Strip one leading `www.` (case-sensitive), then lowercase.
pub fn clean_source(source: &str) -> String {
    source.strip_prefix("www.").unwrap_or(source).to_lowercase()
}

/// `"example-news.org"` → `Example` / `E`. Degenerate input yields empty strings.
fn fallback_info(clean: &str) -> SourceDisplayInfo {
    let first = SEGMENT_SPLIT.split(clean).next().unwrap_or_default();

    let mut chars = first.chars();
    match chars.next() {
        Some(c) => {
            let head: String = c.to_uppercase().collect();
            let name = format!("{head}{}", chars.as_str());
            SourceDisplayInfo::new(name, head)
        }
        None => SourceDisplayInfo::new("", ""),
    }
}
