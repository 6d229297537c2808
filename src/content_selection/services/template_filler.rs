use crate::content_selection::domain::{DEST_PLACEHOLDER, SOURCE_PLACEHOLDER};

/// Substitutes `[SOURCE]` and `[DEST]` with display names
///
/// A single left-to-right scan: names are inserted as literal text and never
/// rescanned. Catalog and site validation reject names containing `[SOURCE]`
/// or `[DEST]`, so filled copy is placeholder-free. Any other bracketed token
/// is left as is.
#[derive(Debug, Clone, Copy)]
pub struct TemplateFiller<'a> {
    source: &'a str,
    destination: &'a str,
}

impl<'a> TemplateFiller<'a> {
    pub fn new(source: &'a str, destination: &'a str) -> Self {
        Self {
            source,
            destination,
        }
    }

    pub fn fill(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len() + 32);
        let mut rest = template;
        while let Some(open) = rest.find('[') {
            out.push_str(&rest[..open]);
            let tail = &rest[open..];
            if let Some(after) = tail.strip_prefix(SOURCE_PLACEHOLDER) {
                out.push_str(self.source);
                rest = after;
            } else if let Some(after) = tail.strip_prefix(DEST_PLACEHOLDER) {
                out.push_str(self.destination);
                rest = after;
            } else {
                out.push('[');
                rest = &tail[1..];
            }
        }
        out.push_str(rest);
        out
    }
}
