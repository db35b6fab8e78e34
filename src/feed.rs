//! Bars for a list of feed stories, matching how the headline list uses them:
//! the leading stories never get a bar.

use serde::Deserialize;

use crate::positivity_bar::{render_with, BarProps, PositivityBar};
use crate::source_display::SourceTable;

/// How many leading stories render without a bar.
pub const LEADING_SUPPRESSED: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeedStory {
    /// Preferred over `source` when non-empty.
    #[serde(default, alias = "sourceName")]
    pub source_name: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default, alias = "positivityScore")]
    pub positivity_score: Option<f64>,
    #[serde(default, alias = "isViral")]
    pub is_viral: bool,
}

impl FeedStory {
    fn display_source(&self) -> Option<String> {
        self.source_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.source.as_deref())
            .map(str::to_string)
    }

    fn props(&self, index: usize) -> BarProps {
        BarProps {
            source: self.display_source(),
            positivity_score: self.positivity_score,
            is_viral: self.is_viral,
            is_first: index < LEADING_SUPPRESSED,
        }
    }
}

/// One slot per story, same order; `None` where the bar is hidden.
pub fn render_feed(table: &SourceTable, stories: &[FeedStory]) -> Vec<Option<PositivityBar>> {
    stories
        .iter()
        .enumerate()
        .map(|(i, s)| render_with(table, &s.props(i)))
        .collect()
}
