use crate::content_selection::domain::ContentModel;
use crate::ports::outbound::PageFormatter;
use crate::shared::Result;

/// JsonFormatter adapter emitting the content model as pretty-printed JSON
///
/// Keys are camelCase, matching what the page-rendering layer consumes.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl PageFormatter for JsonFormatter {
    fn format(&self, page: &ContentModel) -> Result<String> {
        let mut json = serde_json::to_string_pretty(page)
            .map_err(|e| anyhow::anyhow!("Failed to serialize page to JSON: {}", e))?;
        json.push('\n');
        Ok(json)
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }
}
