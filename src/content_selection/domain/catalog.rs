use super::copy_pool::has_placeholder;
use super::software_system::SoftwareSystem;
use super::vertical::Vertical;
use crate::content_selection::services::slug_parser::PAIR_SEPARATOR;
use crate::shared::error::PseoError;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};

/// Source and destination registries of one vertical
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VerticalSystems {
    #[serde(default)]
    pub source: Vec<SoftwareSystem>,
    #[serde(default)]
    pub destination: Vec<SoftwareSystem>,
}

/// Read-only registry of verticals and their software systems
///
/// Built once at startup and shared by reference; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    verticals: Vec<Vertical>,
    systems: BTreeMap<String, VerticalSystems>,
}

impl Catalog {
    /// Builds a catalog after checking its structural invariants
    ///
    /// # Errors
    /// - duplicate vertical ids
    /// - a system table keyed by an unknown vertical id
    /// - duplicate slugs or ids on one side of a vertical
    /// - `[SOURCE]` or `[DEST]` in a system name, vertical name or hub description
    pub fn new(
        verticals: Vec<Vertical>,
        systems: BTreeMap<String, VerticalSystems>,
    ) -> Result<Self> {
        let mut seen_ids = HashSet::new();
        for vertical in &verticals {
            if !seen_ids.insert(vertical.id.as_str()) {
                return Err(invalid(format!("duplicate vertical id '{}'", vertical.id)));
            }
            let hub_description = vertical.hub_description.as_deref().unwrap_or_default();
            if has_placeholder(&vertical.name) || has_placeholder(hub_description) {
                return Err(invalid(format!(
                    "vertical '{}' has a placeholder in its name or hub description",
                    vertical.id
                )));
            }
        }

        for (vertical_id, tables) in &systems {
            if !seen_ids.contains(vertical_id.as_str()) {
                return Err(invalid(format!(
                    "software systems listed for unknown vertical '{}'",
                    vertical_id
                )));
            }
            check_side(vertical_id, "source", &tables.source)?;
            check_side(vertical_id, "destination", &tables.destination)?;
        }

        Ok(Self { verticals, systems })
    }

    /// All verticals in catalog order
    pub fn verticals(&self) -> &[Vertical] {
        &self.verticals
    }

    /// Finds a vertical by id or slug
    pub fn vertical(&self, token: &str) -> Option<&Vertical> {
        self.verticals.iter().find(|v| v.matches(token))
    }

    /// Registered source systems of a vertical (empty when it has none)
    pub fn sources(&self, vertical_id: &str) -> &[SoftwareSystem] {
        self.systems
            .get(vertical_id)
            .map(|s| s.source.as_slice())
            .unwrap_or(&[])
    }

    /// Registered destination systems of a vertical (empty when it has none)
    pub fn destinations(&self, vertical_id: &str) -> &[SoftwareSystem] {
        self.systems
            .get(vertical_id)
            .map(|s| s.destination.as_slice())
            .unwrap_or(&[])
    }

    pub fn find_source(&self, vertical_id: &str, slug: &str) -> Option<&SoftwareSystem> {
        self.sources(vertical_id)
            .iter()
            .find(|s| s.slug.as_str() == slug)
    }

    pub fn find_destination(&self, vertical_id: &str, slug: &str) -> Option<&SoftwareSystem> {
        self.destinations(vertical_id)
            .iter()
            .find(|s| s.slug.as_str() == slug)
    }
}

fn check_side(vertical_id: &str, side: &str, systems: &[SoftwareSystem]) -> Result<()> {
    let mut slugs = HashSet::new();
    let mut ids = HashSet::new();
    for system in systems {
        if !slugs.insert(system.slug.as_str()) {
            return Err(invalid(format!(
                "duplicate {} slug '{}' in vertical '{}'",
                side, system.slug, vertical_id
            )));
        }
        if !ids.insert(system.id.as_str()) {
            return Err(invalid(format!(
                "duplicate {} id '{}' in vertical '{}'",
                side, system.id, vertical_id
            )));
        }
        if has_placeholder(&system.name) {
            return Err(invalid(format!(
                "{} '{}' in vertical '{}' has a placeholder in its name",
                side, system.id, vertical_id
            )));
        }
        if system.slug.as_str().contains(PAIR_SEPARATOR) {
            tracing::warn!(
                vertical = vertical_id,
                slug = system.slug.as_str(),
                "{} slug contains '{}'; pair slugs using it resolve by longest source match",
                side,
                PAIR_SEPARATOR
            );
        }
    }
    Ok(())
}

fn invalid(reason: String) -> anyhow::Error {
    PseoError::InvalidCatalog { reason }.into()
}
