use super::software_system::SoftwareSystem;
use super::vertical::Vertical;
use crate::content_selection::services::slug_parser::compose_pair_slug;

/// An ordered (source, destination) pair inside one vertical
///
/// Borrowed from the catalog; only ever constructed for valid pairs
/// (both systems registered on their side, distinct ids).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegrationPair<'c> {
    pub vertical: &'c Vertical,
    pub source: &'c SoftwareSystem,
    pub destination: &'c SoftwareSystem,
}

impl<'c> IntegrationPair<'c> {
    /// `"<source-slug>-to-<destination-slug>"`
    pub fn slug(&self) -> String {
        compose_pair_slug(self.source.slug.as_str(), self.destination.slug.as_str())
    }

    /// True when both pairs connect the same two systems in the same direction
    pub fn same_systems(&self, other: &IntegrationPair<'_>) -> bool {
        self.vertical.id == other.vertical.id
            && self.source.id == other.source.id
            && self.destination.id == other.destination.id
    }
}
