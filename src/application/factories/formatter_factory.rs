use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::PageFormatter;

/// Factory for creating page formatters
///
/// Selects the formatter adapter for an output format so that use cases and
/// the CLI only ever see the `PageFormatter` port.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use pseo_content::application::dto::OutputFormat;
    /// use pseo_content::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Markdown);
    /// assert_eq!(formatter.file_extension(), "md");
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn PageFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Rendering JSON content model...",
            OutputFormat::Markdown => "📝 Rendering Markdown page...",
        }
    }
}
