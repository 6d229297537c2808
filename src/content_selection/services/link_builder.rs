//! Hub-and-spoke internal linking.
//!
//! Hub pages live at `/{vertical}`, integration spokes at
//! `/{vertical}/integration/{slug}`. Every spoke links back to its hub and to
//! its sibling spokes; every hub links to its first spokes.

use super::slug_parser::{compose_pair_slug, match_systems};
use crate::content_selection::domain::{
    Breadcrumb, Catalog, IntegrationPair, PageLink, SiteProfile, SoftwareSystem, Vertical,
};

/// Sibling links drawn from each side of the pair
const SIBLINGS_PER_SIDE: usize = 3;

/// Upper bound on related links per page
const MAX_RELATED_LINKS: usize = 6;

/// Integration links surfaced on a hub page unless a count is given
pub const DEFAULT_HUB_LINK_COUNT: usize = 6;

const COMPARISON_PATH: &str = "/comparison";

/// The page a set of links is built for
#[derive(Debug, Clone, Copy)]
pub struct LinkContext<'c> {
    pub pair: IntegrationPair<'c>,
    /// Candidate destinations in catalog order; the pair's own systems are skipped
    pub sibling_destinations: &'c [SoftwareSystem],
    /// Candidate sources in catalog order; the pair's own systems are skipped
    pub sibling_sources: &'c [SoftwareSystem],
}

impl<'c> LinkContext<'c> {
    /// Context for `pair`, with siblings taken from the catalog
    pub fn for_pair(catalog: &'c Catalog, pair: IntegrationPair<'c>) -> Self {
        Self {
            pair,
            sibling_destinations: catalog.destinations(&pair.vertical.id),
            sibling_sources: catalog.sources(&pair.vertical.id),
        }
    }

    /// True when the slug of `source` to `destination` resolves back to
    /// exactly those two systems
    fn owns_slug(&self, source: &SoftwareSystem, destination: &SoftwareSystem) -> bool {
        let slug = compose_pair_slug(source.slug.as_str(), destination.slug.as_str());
        match_systems(&slug, self.sibling_sources, self.sibling_destinations)
            .is_some_and(|(s, d)| s.id == source.id && d.id == destination.id)
    }

    fn integration_href(&self, source: &SoftwareSystem, destination: &SoftwareSystem) -> String {
        integration_href(self.pair.vertical, source, destination)
    }
}

/// Builds internal links for integration pages and vertical hubs
#[derive(Debug, Clone, Copy)]
pub struct LinkBuilder<'a> {
    site: &'a SiteProfile,
}

impl<'a> LinkBuilder<'a> {
    pub fn new(site: &'a SiteProfile) -> Self {
        Self { site }
    }

    /// Sibling spokes: same source to other destinations first, then other
    /// sources to the same destination. Pairs that would join a system to
    /// itself are skipped, as are pairs whose slug resolves to other systems.
    /// Hrefs are unique; at most six links.
    pub fn related_links(&self, ctx: &LinkContext<'_>) -> Vec<PageLink> {
        let pair = &ctx.pair;
        let vertical_name = &pair.vertical.name;

        let same_source = ctx
            .sibling_destinations
            .iter()
            .filter(|d| d.id != pair.destination.id && d.id != pair.source.id)
            .filter(|d| ctx.owns_slug(pair.source, d))
            .take(SIBLINGS_PER_SIDE)
            .map(|d| (pair.source, d));

        let same_destination = ctx
            .sibling_sources
            .iter()
            .filter(|s| s.id != pair.source.id && s.id != pair.destination.id)
            .filter(|s| ctx.owns_slug(s, pair.destination))
            .take(SIBLINGS_PER_SIDE)
            .map(|s| (s, pair.destination));

        let mut related: Vec<PageLink> = Vec::new();
        for (source, destination) in same_source.chain(same_destination) {
            let href = ctx.integration_href(source, destination);
            if related.iter().any(|link| link.href == href) {
                continue;
            }
            related.push(
                PageLink::new(format!("{} to {}", source.name, destination.name), href)
                    .with_description(format!(
                        "{} document normalization from {} into {}.",
                        vertical_name, source.name, destination.name
                    )),
            );
            if related.len() >= MAX_RELATED_LINKS {
                break;
            }
        }
        related
    }

    /// Integration index, own hub, comparison page, then the first other
    /// vertical's hub in catalog order.
    pub fn footer_links(&self, vertical: &Vertical, verticals: &[Vertical]) -> Vec<PageLink> {
        let mut footer = vec![
            PageLink::new(
                format!("← All {} Integrations", vertical.name),
                vertical.integration_base_path(),
            ),
            PageLink::new(format!("{} Hub", vertical.name), vertical.hub_path()),
            PageLink::new("Compare Platforms", COMPARISON_PATH),
        ];

        if let Some(other) = verticals.iter().find(|v| v.id != vertical.id) {
            let link = PageLink::new(other.name.clone(), other.hub_path());
            footer.push(match &other.hub_description {
                Some(description) => link.with_description(description.clone()),
                None => link,
            });
        }
        footer
    }

    /// Home, vertical hub, page
    pub fn breadcrumbs(
        &self,
        vertical: &Vertical,
        page_label: &str,
        canonical_url: &str,
    ) -> Vec<Breadcrumb> {
        vec![
            Breadcrumb {
                name: "Home".to_string(),
                url: self.site.home_url(),
            },
            Breadcrumb {
                name: vertical.name.clone(),
                url: self.site.absolute_url(&vertical.hub_path()),
            },
            Breadcrumb {
                name: page_label.to_string(),
                url: canonical_url.to_string(),
            },
        ]
    }

    /// First `count` valid pairs of a vertical in source-major order
    pub fn hub_links(&self, pairs: &[IntegrationPair<'_>], count: usize) -> Vec<PageLink> {
        pairs
            .iter()
            .take(count)
            .map(|pair| {
                PageLink::new(
                    format!("{} → {}", pair.source.name, pair.destination.name),
                    integration_href(pair.vertical, pair.source, pair.destination),
                )
                .with_description(format!(
                    "Normalize {} documents for {} import.",
                    pair.source.name, pair.destination.name
                ))
            })
            .collect()
    }
}

fn integration_href(
    vertical: &Vertical,
    source: &SoftwareSystem,
    destination: &SoftwareSystem,
) -> String {
    format!(
        "{}/{}",
        vertical.integration_base_path(),
        compose_pair_slug(source.slug.as_str(), destination.slug.as_str())
    )
}
