use crate::content_selection::domain::{ContentModel, PageLink};
use crate::ports::outbound::PageFormatter;
use crate::shared::Result;

/// Markdown table separator for the ROI table
const ROI_TABLE_SEPARATOR: &str = "|--------|-------|\n";

/// Markdown table separator for the field-mapping table
const MAPPING_TABLE_SEPARATOR: &str = "|--------------|-------------------|----------------|\n";

/// MarkdownFormatter adapter rendering a page as a readable Markdown document
///
/// Used for copy review; the JSON output is what the site build consumes.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn link(link: &PageLink) -> String {
        format!("[{}]({})", link.label, link.href)
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, page: &ContentModel) {
        let trail: Vec<&str> = page.breadcrumbs.iter().map(|b| b.name.as_str()).collect();
        output.push_str(&format!("{}\n\n", trail.join(" › ")));
        output.push_str(&format!("# {}\n\n", page.h1));
        output.push_str(&format!("> {}\n\n", page.description));
        output.push_str(&format!("- **Title:** {}\n", page.title));
        output.push_str(&format!("- **Canonical URL:** {}\n", page.canonical_url));
        output.push_str(&format!(
            "- **Vertical:** [{}]({})\n",
            page.vertical_name, page.vertical_hub_url
        ));
        output.push_str(&format!("- **Hurdle:** {}\n\n", page.hurdle_name));
    }

    fn render_copy(&self, output: &mut String, page: &ContentModel) {
        output.push_str("## Expert Analysis\n\n");
        output.push_str(&format!("{}\n\n", page.expert_analysis));
        output.push_str("## Operational Impact\n\n");
        output.push_str(&format!("{}\n\n", page.operational_impact));
    }

    fn render_roi(&self, output: &mut String, page: &ContentModel) {
        output.push_str("## Return on Investment\n\n");
        output.push_str("| Metric | Value |\n");
        output.push_str(ROI_TABLE_SEPARATOR);
        output.push_str(&format!(
            "| Manual hours | {} |\n",
            Self::escape_table_cell(&page.roi.manual_hours)
        ));
        output.push_str(&format!(
            "| Accuracy | {} |\n",
            Self::escape_table_cell(&page.roi.accuracy)
        ));
        output.push_str(&format!(
            "| Savings | {} |\n\n",
            Self::escape_table_cell(&page.roi.savings)
        ));
    }

    fn render_steps(&self, output: &mut String, page: &ContentModel) {
        output.push_str("## Technical Steps\n\n");
        for (index, step) in page.technical_steps.iter().enumerate() {
            output.push_str(&format!("{}. **{}**: {}\n", index + 1, step.name, step.details));
        }
        output.push('\n');
    }

    fn render_field_mapping(&self, output: &mut String, page: &ContentModel) {
        output.push_str("## Field Mapping\n\n");
        output.push_str(&format!(
            "| {} Field | {} Field | Transformation |\n",
            Self::escape_table_cell(&page.source_system),
            Self::escape_table_cell(&page.destination_system)
        ));
        output.push_str(MAPPING_TABLE_SEPARATOR);
        for row in &page.field_mapping_rows {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_table_cell(&row.source),
                Self::escape_table_cell(&row.destination),
                Self::escape_table_cell(&row.transformation)
            ));
        }
        output.push('\n');
    }

    fn render_faqs(&self, output: &mut String, page: &ContentModel) {
        output.push_str("## Frequently Asked Questions\n\n");
        for faq in &page.faqs {
            output.push_str(&format!("### {}\n\n{}\n\n", faq.question, faq.answer));
        }
    }

    fn render_links(&self, output: &mut String, page: &ContentModel) {
        if !page.related_links.is_empty() {
            output.push_str("## Related Integrations\n\n");
            for link in &page.related_links {
                match &link.description {
                    Some(description) => {
                        output.push_str(&format!("- {}: {}\n", Self::link(link), description))
                    }
                    None => output.push_str(&format!("- {}\n", Self::link(link))),
                }
            }
            output.push('\n');
        }

        output.push_str("---\n\n");
        let footer: Vec<String> = page.footer_links.iter().map(Self::link).collect();
        output.push_str(&format!("{}\n", footer.join(" · ")));
    }
}

impl PageFormatter for MarkdownFormatter {
    fn format(&self, page: &ContentModel) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, page);
        self.render_copy(&mut output, page);
        self.render_roi(&mut output, page);
        self.render_steps(&mut output, page);
        self.render_field_mapping(&mut output, page);
        self.render_faqs(&mut output, page);
        self.render_links(&mut output, page);
        Ok(output)
    }

    fn file_extension(&self) -> &'static str {
        "md"
    }
}
