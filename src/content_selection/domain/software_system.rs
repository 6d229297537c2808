use crate::shared::error::PseoError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// Maximum length for a system slug in a URL segment
const MAX_SLUG_LENGTH: usize = 100;

/// NewType wrapper for a URL-safe system slug with validation
///
/// A slug is a lowercase, hyphenated token: ASCII lowercase letters, digits
/// and single hyphens, never starting or ending with a hyphen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SystemSlug(String);

impl SystemSlug {
    pub fn new(slug: String) -> Result<Self> {
        if slug.is_empty() {
            return Err(validation("System slug cannot be empty".to_string()));
        }

        if slug.len() > MAX_SLUG_LENGTH {
            return Err(validation(format!(
                "System slug '{}' is too long ({} bytes). Maximum allowed: {} bytes",
                slug,
                slug.len(),
                MAX_SLUG_LENGTH
            )));
        }

        if !slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(validation(format!(
                "System slug '{}' contains invalid characters. Only lowercase letters, digits and hyphens are allowed.",
                slug
            )));
        }

        if slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
            return Err(validation(format!(
                "System slug '{}' must not start or end with a hyphen or contain consecutive hyphens",
                slug
            )));
        }

        Ok(Self(slug))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validation(message: String) -> anyhow::Error {
    PseoError::Validation { message }.into()
}

impl TryFrom<String> for SystemSlug {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<SystemSlug> for String {
    fn from(slug: SystemSlug) -> Self {
        slug.0
    }
}

impl std::fmt::Display for SystemSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named software product that can sit on either side of an integration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftwareSystem {
    pub id: String,
    pub slug: SystemSlug,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl SoftwareSystem {
    pub fn new(id: &str, slug: &str, name: &str) -> Result<Self> {
        Ok(Self {
            id: id.to_string(),
            slug: SystemSlug::new(slug.to_string())?,
            name: name.to_string(),
            category: None,
        })
    }
}
