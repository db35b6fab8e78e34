//! Positivity bar: source logo + name and the rounded positivity score.
//!
//! Rendering is a pure step from [`BarProps`] to `Option<PositivityBar>`;
//! `None` means "show nothing" (viral stories and the leading feed stories).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::source_display::{SourceDisplayInfo, SourceTable};
use crate::view::ViewNode;

pub const SCORE_LABEL: &str = "Positivity: ";

/// Inputs to the bar. Every field is optional on the wire:
/// `source = None`, `positivity_score = None` (shown as 0),
/// `is_viral = false`, `is_first = false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BarProps {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default, alias = "positivityScore")]
    pub positivity_score: Option<f64>,
    #[serde(default, alias = "isViral")]
    pub is_viral: bool,
    #[serde(default, alias = "isFirst")]
    pub is_first: bool,
}

impl BarProps {
    pub fn new(source: Option<&str>, positivity_score: Option<f64>) -> Self {
        Self {
            source: source.map(str::to_string),
            positivity_score,
            ..Self::default()
        }
    }

    pub fn viral(mut self, v: bool) -> Self {
        self.is_viral = v;
        self
    }

    pub fn first(mut self, v: bool) -> Self {
        self.is_first = v;
        self
    }

    /// Either flag hides the bar.
    pub fn is_suppressed(&self) -> bool {
        self.is_viral || self.is_first
    }
}

/// A rendered bar, ready to turn into a view.
/// `score` is already rounded (always integral, or ±infinity).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositivityBar {
    pub source: SourceDisplayInfo,
    pub score: f64,
}

impl PositivityBar {
    /// ```text
    /// div.source-positivity-bar
    ///   div.source-info
    ///     div.source-logo[title]  logo
    ///     span[title]             name
    ///   div.positivity-score      "Positivity: N"
    /// ```
    pub fn to_view(&self) -> ViewNode {
        let info = ViewNode::element("div", Some("source-info"))
            .child(
                ViewNode::element("div", Some("source-logo"))
                    .with_title(self.source.name.clone())
                    .child(ViewNode::text(self.source.logo.clone())),
            )
            .child(
                ViewNode::element("span", None)
                    .with_title(self.source.name.clone())
                    .child(ViewNode::text(self.source.name.clone())),
            );

        let score = ViewNode::element("div", Some("positivity-score"))
            .child(ViewNode::text(format!("{SCORE_LABEL}{}", format_score(self.score))));

        ViewNode::element("div", Some("source-positivity-bar"))
            .child(info)
            .child(score)
    }

    pub fn to_html(&self) -> String {
        self.to_view().to_html()
    }
}

/// Render with the built-in source table.
pub fn render(props: &BarProps) -> Option<PositivityBar> {
    render_with(SourceTable::builtin(), props)
}

/// Render against a caller-supplied table (e.g. one loaded from config).
pub fn render_with(table: &SourceTable, props: &BarProps) -> Option<PositivityBar> {
    if props.is_suppressed() {
        debug!(
            target: "positivity_bar",
            is_viral = props.is_viral,
            is_first = props.is_first,
            "bar suppressed"
        );
        return None;
    }

    let source = table.resolve(props.source.as_deref());
    let score = display_score(props.positivity_score);
    debug!(target: "positivity_bar", name = %source.name, score, "bar rendered");

    Some(PositivityBar { source, score })
}

/// Absent/NaN → 0; halves round up (`2.5 → 3`, `-2.5 → -2`).
/// No range is applied: `1e20` stays `1e20`, infinities stay infinite.
pub fn display_score(score: Option<f64>) -> f64 {
    let x = match score {
        Some(v) if !v.is_nan() => v,
        _ => return 0.0,
    };
    let floor = x.floor();
    let rounded = if x - floor >= 0.5 { floor + 1.0 } else { floor };
    // -0.0 → 0.0
    rounded + 0.0
}

/// Integral digits only (`1e20` → `100000000000000000000`);
/// infinities print as `Infinity` / `-Infinity`.
pub fn format_score(score: f64) -> String {
    if score.is_infinite() {
        return if score > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // + 0.0 folds -0.0 into 0.0
    format!("{:.0}", score + 0.0)
}
