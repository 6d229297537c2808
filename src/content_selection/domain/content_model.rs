use super::copy_pool::RoiFigures;
use serde::Serialize;

/// Resolved question/answer pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Resolved walkthrough step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechnicalStep {
    pub name: String,
    pub details: String,
}

/// Resolved field-mapping table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMappingRow {
    pub source: String,
    pub destination: String,
    pub transformation: String,
}

/// Internal link rendered by the page layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub label: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PageLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub name: String,
    pub url: String,
}

/// Fully resolved, placeholder-free content of one integration page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentModel {
    // Identifiers
    pub vertical: String,
    pub vertical_name: String,
    pub slug: String,
    pub canonical_url: String,

    // Content
    pub title: String,
    pub h1: String,
    pub description: String,
    pub source_system: String,
    pub destination_system: String,
    pub hurdle_name: String,
    pub expert_analysis: String,
    pub operational_impact: String,
    pub roi: RoiFigures,
    pub faqs: Vec<Faq>,
    pub technical_steps: Vec<TechnicalStep>,
    pub field_mapping_rows: Vec<FieldMappingRow>,

    // Links
    pub related_links: Vec<PageLink>,
    pub footer_links: Vec<PageLink>,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub vertical_hub_url: String,
}

impl ContentModel {
    /// Every free-text string the page renders, in field order.
    ///
    /// Used by checks that must hold for all copy (e.g. no unresolved placeholder).
    pub fn text_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.h1.as_str(),
            self.description.as_str(),
            self.source_system.as_str(),
            self.destination_system.as_str(),
            self.expert_analysis.as_str(),
            self.operational_impact.as_str(),
            self.roi.manual_hours.as_str(),
            self.roi.accuracy.as_str(),
            self.roi.savings.as_str(),
        ];
        for faq in &self.faqs {
            fields.push(&faq.question);
            fields.push(&faq.answer);
        }
        for step in &self.technical_steps {
            fields.push(&step.name);
            fields.push(&step.details);
        }
        for row in &self.field_mapping_rows {
            fields.push(&row.source);
            fields.push(&row.destination);
            fields.push(&row.transformation);
        }
        for link in self.related_links.iter().chain(&self.footer_links) {
            fields.push(&link.label);
            if let Some(description) = &link.description {
                fields.push(description);
            }
        }
        fields
    }
}
