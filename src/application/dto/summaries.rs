use crate::content_selection::domain::{PageLink, VerticalStatus};
use serde::Serialize;
use std::fmt::Write;
use std::path::PathBuf;

/// One vertical as listed by `verticals`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerticalSummary {
    pub id: String,
    pub name: String,
    pub status: VerticalStatus,
    /// Number of integration pages the vertical publishes
    pub page_count: usize,
    pub hub_links: Vec<PageLink>,
}

impl VerticalSummary {
    /// Plain-text listing, one block per vertical
    pub fn render_all(summaries: &[VerticalSummary]) -> String {
        let mut output = String::new();
        for summary in summaries {
            let _ = writeln!(
                output,
                "{} ({}) [{}] {} page(s)",
                summary.name, summary.id, summary.status, summary.page_count
            );
            for link in &summary.hub_links {
                let _ = writeln!(output, "  {}  {}", link.label, link.href);
            }
        }
        output
    }
}

/// Result of a batch export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Id of the exported vertical
    pub vertical: String,
    /// Files written, in enumeration order
    pub files: Vec<PathBuf>,
}

impl ExportSummary {
    pub fn page_count(&self) -> usize {
        self.files.len()
    }
}
