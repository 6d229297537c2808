use serde::{Deserialize, Serialize};

/// Publication status of a vertical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalStatus {
    #[default]
    Active,
    Planned,
}

impl std::fmt::Display for VerticalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerticalStatus::Active => write!(f, "active"),
            VerticalStatus::Planned => write!(f, "planned"),
        }
    }
}

/// A market segment the page factory targets (accountants, real estate, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vertical {
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub status: VerticalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hub_description: Option<String>,
}

impl Vertical {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            slug: id.to_string(),
            name: name.to_string(),
            status: VerticalStatus::Active,
            hub_description: None,
        }
    }

    /// True when `token` names this vertical by id or by slug.
    pub fn matches(&self, token: &str) -> bool {
        self.id == token || self.slug == token
    }

    /// Hub page path, e.g. `/accountants`
    pub fn hub_path(&self) -> String {
        format!("/{}", self.id)
    }

    /// Integration index path, e.g. `/accountants/integration`
    pub fn integration_base_path(&self) -> String {
        format!("/{}/integration", self.id)
    }
}
