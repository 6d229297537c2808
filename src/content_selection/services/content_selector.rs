use super::link_builder::{LinkBuilder, LinkContext};
use super::seed_hasher::{hash, pick, SelectionSeed};
use super::slug_parser::match_systems;
use super::template_filler::TemplateFiller;
use crate::content_selection::domain::{
    Catalog, ContentModel, CopyPools, Faq, FieldMappingRow, IntegrationPair, PageLink, PoolAxis,
    SiteProfile, TechnicalStep, Vertical,
};
use thiserror::Error;

/// Maximum number of FAQs on a page
pub const FAQ_COUNT: usize = 5;

const HURDLE_NAME: &str = "Data Normalization";

/// The only failure the selector reports: unknown vertical, malformed slug,
/// unregistered system or a pair joining a system to itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no integration page for this vertical and slug")]
pub struct NotFound;

/// Deterministic page-content selector
///
/// Holds shared references to immutable data only, so one selector can serve
/// any number of threads. Every call builds a fresh model; nothing is cached.
#[derive(Debug, Clone, Copy)]
pub struct ContentSelector<'a> {
    catalog: &'a Catalog,
    pools: &'a CopyPools,
    site: &'a SiteProfile,
}

impl<'a> ContentSelector<'a> {
    pub fn new(catalog: &'a Catalog, pools: &'a CopyPools, site: &'a SiteProfile) -> Self {
        Self {
            catalog,
            pools,
            site,
        }
    }

    /// Resolves `slug` inside `vertical` to a fully populated content model.
    ///
    /// Pure: the same inputs always produce an identical model.
    pub fn resolve(&self, vertical: &str, slug: &str) -> Result<ContentModel, NotFound> {
        let pair = self.resolve_pair(vertical, slug)?;
        Ok(self.build(pair, slug))
    }

    /// Resolves `slug` to a valid pair without building any content.
    ///
    /// Every `-to-` split is tried; among the splits where both halves are
    /// registered, the longest source slug wins.
    pub fn resolve_pair(
        &self,
        vertical: &str,
        slug: &str,
    ) -> Result<IntegrationPair<'a>, NotFound> {
        let vertical = self.catalog.vertical(vertical).ok_or(NotFound)?;
        let (source, destination) = match_systems(
            slug,
            self.catalog.sources(&vertical.id),
            self.catalog.destinations(&vertical.id),
        )
        .ok_or(NotFound)?;

        if source.id == destination.id {
            return Err(NotFound);
        }

        Ok(IntegrationPair {
            vertical,
            source,
            destination,
        })
    }

    /// Every valid pair of a vertical, source-major in catalog order.
    ///
    /// A combination is kept only when its slug resolves back to the same
    /// systems, so each returned pair owns its slug and no slug repeats.
    pub fn pairs(&self, vertical: &str) -> Result<Vec<IntegrationPair<'a>>, NotFound> {
        let vertical = self.catalog.vertical(vertical).ok_or(NotFound)?;
        let destinations = self.catalog.destinations(&vertical.id);

        let mut pairs = Vec::new();
        for source in self.catalog.sources(&vertical.id) {
            for destination in destinations {
                if source.id == destination.id {
                    continue;
                }
                let pair = IntegrationPair {
                    vertical,
                    source,
                    destination,
                };
                let slug = pair.slug();
                match self.resolve_pair(&vertical.id, &slug) {
                    Ok(resolved) if resolved.same_systems(&pair) => pairs.push(pair),
                    _ => tracing::debug!(
                        vertical = %vertical.id,
                        slug = %slug,
                        "skipping ambiguous pair slug"
                    ),
                }
            }
        }
        Ok(pairs)
    }

    /// Slugs `resolve` accepts for `vertical`, for static pre-rendering
    pub fn list_slugs(&self, vertical: &str) -> Result<Vec<String>, NotFound> {
        Ok(self.pairs(vertical)?.iter().map(IntegrationPair::slug).collect())
    }

    /// Integration links for a vertical's hub page
    pub fn hub_links(&self, vertical: &str, count: usize) -> Result<Vec<PageLink>, NotFound> {
        let pairs = self.pairs(vertical)?;
        Ok(LinkBuilder::new(self.site).hub_links(&pairs, count))
    }

    fn build(&self, pair: IntegrationPair<'a>, slug: &str) -> ContentModel {
        let vertical: &Vertical = pair.vertical;
        let vertical_id = vertical.id.as_str();
        let src = pair.source.name.as_str();
        let dst = pair.destination.name.as_str();
        let seed = SelectionSeed::new(vertical_id, slug);
        let filler = TemplateFiller::new(src, dst);

        let expert_analysis = filler.fill(
            pick(
                self.pools.expert_analysis(vertical_id),
                &seed.for_axis(PoolAxis::ExpertAnalysis),
            )
            .as_str(),
        );
        let operational_impact = filler.fill(
            pick(
                self.pools.operational_impact(vertical_id),
                &seed.for_axis(PoolAxis::OperationalImpact),
            )
            .as_str(),
        );
        let technical_steps = pick(
            self.pools.technical_steps(vertical_id),
            &seed.for_axis(PoolAxis::TechnicalSteps),
        )
        .iter()
        .map(|step| TechnicalStep {
            name: filler.fill(&step.name),
            details: filler.fill(&step.details),
        })
        .collect();
        let roi = pick(self.pools.roi(vertical_id), &seed.for_axis(PoolAxis::Roi)).clone();
        let field_mapping_rows = pick(
            self.pools.field_mappings(vertical_id),
            &seed.for_axis(PoolAxis::FieldMappings),
        )
        .iter()
        .map(|row| FieldMappingRow {
            source: filler.fill(&row.source),
            destination: filler.fill(&row.destination),
            transformation: row.transformation.clone(),
        })
        .collect();

        let faq_pool = self.pools.faqs(vertical_id);
        let faq_start = hash(&seed.for_axis(PoolAxis::Faqs)) as usize % faq_pool.len();
        let faqs = (0..FAQ_COUNT.min(faq_pool.len()))
            .map(|i| &faq_pool[(faq_start + i) % faq_pool.len()])
            .map(|faq| Faq {
                question: filler.fill(&faq.question),
                answer: filler.fill(&faq.answer),
            })
            .collect();

        let canonical_url = self
            .site
            .absolute_url(&format!("{}/{}", vertical.integration_base_path(), slug));
        let links = LinkBuilder::new(self.site);
        let related_links = links.related_links(&LinkContext::for_pair(self.catalog, pair));
        let footer_links = links.footer_links(vertical, self.catalog.verticals());
        let breadcrumbs =
            links.breadcrumbs(vertical, &format!("{} to {}", src, dst), &canonical_url);

        ContentModel {
            vertical: vertical.id.clone(),
            vertical_name: vertical.name.clone(),
            slug: slug.to_string(),
            canonical_url,
            title: format!(
                "{} to {} Data Normalization | {} | {}",
                src,
                dst,
                vertical.name,
                self.site.brand()
            ),
            h1: format!("{} to {} Document Normalization", src, dst),
            description: format!(
                "Clean, structured data from {} into {} — fast. {} normalizes {} documents for error-free {} import. Audit-ready output, 24–72h turnaround.",
                src,
                dst,
                self.site.brand(),
                vertical.name.to_lowercase(),
                dst
            ),
            source_system: src.to_string(),
            destination_system: dst.to_string(),
            hurdle_name: HURDLE_NAME.to_string(),
            expert_analysis,
            operational_impact,
            roi,
            faqs,
            technical_steps,
            field_mapping_rows,
            related_links,
            footer_links,
            breadcrumbs,
            vertical_hub_url: vertical.hub_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content_selection::domain::{
        FaqTemplate, FieldMappingTemplate, PoolSet, RoiFigures, SoftwareSystem, StepTemplate,
        VerticalSystems, DEST_PLACEHOLDER, SOURCE_PLACEHOLDER,
    };
    use crate::content_selection::services::slug_parser::compose_pair_slug;
    use std::collections::{BTreeMap, HashSet};

    fn system(id: &str, slug: &str, name: &str) -> SoftwareSystem {
        SoftwareSystem::new(id, slug, name).unwrap()
    }

    fn catalog() -> Catalog {
        let mut systems = BTreeMap::new();
        systems.insert(
            "accountants".to_string(),
            VerticalSystems {
                source: vec![
                    system("quickbooks", "quickbooks", "QuickBooks"),
                    system("xero", "xero", "Xero"),
                    system("karbon", "karbon", "Karbon"),
                ],
                destination: vec![
                    system("netsuite", "netsuite", "NetSuite"),
                    system("sage-intacct", "sage-intacct", "Sage Intacct"),
                    system("quickbooks", "quickbooks", "QuickBooks"),
                ],
            },
        );
        systems.insert(
            "warehousing".to_string(),
            VerticalSystems {
                source: vec![system("fishbowl", "fishbowl", "Fishbowl")],
                destination: vec![system("netsuite", "netsuite", "NetSuite")],
            },
        );
        let mut real_estate = Vertical::new("real-estate", "Real Estate");
        real_estate.slug = "property".to_string();
        Catalog::new(
            vec![
                Vertical::new("accountants", "Accountants"),
                Vertical::new("warehousing", "Warehousing"),
                real_estate,
            ],
            systems,
        )
        .unwrap()
    }

    fn pools(faq_count: usize) -> CopyPools {
        let set = PoolSet {
            expert_analysis: (0..4)
                .map(|i| format!("Analysis {}: [SOURCE] exports reach [DEST] intact.", i))
                .collect(),
            operational_impact: (0..3)
                .map(|i| format!("Impact {}: [DEST] closes faster.", i))
                .collect(),
            faqs: (0..faq_count)
                .map(|i| FaqTemplate {
                    question: format!("Q{}: does [SOURCE] work?", i),
                    answer: format!("A{}: yes, into [DEST].", i),
                })
                .collect(),
            technical_steps: vec![vec![
                StepTemplate {
                    name: "Extract from [SOURCE]".to_string(),
                    details: "Pull [SOURCE] records.".to_string(),
                },
                StepTemplate {
                    name: "Load".to_string(),
                    details: "Post into [DEST].".to_string(),
                },
            ]],
            roi: vec![RoiFigures {
                manual_hours: "12 hrs/week".to_string(),
                accuracy: "99.8%".to_string(),
                savings: "$40k/yr".to_string(),
            }],
            field_mappings: vec![vec![FieldMappingTemplate {
                source: "[SOURCE].Account".to_string(),
                destination: "[DEST].GL Account".to_string(),
                transformation: "Chart-of-accounts crosswalk".to_string(),
            }]],
        };
        let mut map = BTreeMap::new();
        map.insert("accountants".to_string(), set);
        CopyPools::new("accountants", map).unwrap()
    }

    fn assert_closed(model: &ContentModel) {
        for field in model.text_fields() {
            assert!(
                !field.contains(SOURCE_PLACEHOLDER) && !field.contains(DEST_PLACEHOLDER),
                "unresolved placeholder in {:?}",
                field
            );
        }
    }

    #[test]
    fn test_quickbooks_to_netsuite() {
        let (catalog, pools, site) = (catalog(), pools(8), SiteProfile::default());
        let selector = ContentSelector::new(&catalog, &pools, &site);
        let model = selector
            .resolve("accountants", "quickbooks-to-netsuite")
            .unwrap();

        assert_eq!(model.source_system, "QuickBooks");
        assert_eq!(model.destination_system, "NetSuite");
        assert_eq!(
            model.canonical_url,
            "https://docstandard.co/accountants/integration/quickbooks-to-netsuite"
        );
        assert_eq!(
            model.title,
            "QuickBooks to NetSuite Data Normalization | Accountants | DocStandard"
        );
        assert_eq!(model.h1, "QuickBooks to NetSuite Document Normalization");
        assert!(model.description.contains("normalizes accountants documents"));
        assert_eq!(model.hurdle_name, "Data Normalization");
        assert_eq!(model.vertical_hub_url, "/accountants");
        assert!(model.expert_analysis.contains("QuickBooks"));
        assert!(model.expert_analysis.contains("NetSuite"));
        assert_eq!(model.faqs.len(), FAQ_COUNT);
        assert_eq!(model.technical_steps[0].name, "Extract from QuickBooks");
        assert_eq!(model.field_mapping_rows[0].destination, "NetSuite.GL Account");
        assert_eq!(model.breadcrumbs[2].name, "QuickBooks to NetSuite");
        assert_closed(&model);
    }

    #[test]
    fn test_selection_follows_seed_hash() {
        let (catalog, pools, site) = (catalog(), pools(8), SiteProfile::default());
        let selector = ContentSelector::new(&catalog, &pools, &site);
        let model = selector.resolve("accountants", "xero-to-netsuite").unwrap();

        let seed = "accountants:xero-to-netsuite";
        let analysis_index = hash(&format!("{}-analysis", seed)) as usize % 4;
        assert!(model
            .expert_analysis
            .starts_with(&format!("Analysis {}:", analysis_index)));

        let faq_start = hash(&format!("{}-faqs", seed)) as usize % 8;
        for (i, faq) in model.faqs.iter().enumerate() {
            assert!(faq.question.starts_with(&format!("Q{}:", (faq_start + i) % 8)));
        }
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let (catalog, pools, site) = (catalog(), pools(8), SiteProfile::default());
        let selector = ContentSelector::new(&catalog, &pools, &site);
        for slug in selector.list_slugs("accountants").unwrap() {
            let first = selector.resolve("accountants", &slug).unwrap();
            let second = selector.resolve("accountants", &slug).unwrap();
            assert_eq!(first, second);
            assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap()
            );
        }
    }

    #[test]
    fn test_faq_window_bounds() {
        let catalog = catalog();
        let site = SiteProfile::default();
        for pool_size in 1..=9 {
            let pools = pools(pool_size);
            let selector = ContentSelector::new(&catalog, &pools, &site);
            let model = selector.resolve("accountants", "karbon-to-netsuite").unwrap();
            assert_eq!(model.faqs.len(), pool_size.min(FAQ_COUNT));
            let questions: HashSet<_> = model.faqs.iter().map(|f| &f.question).collect();
            assert_eq!(questions.len(), model.faqs.len(), "FAQ repeated");
        }
    }

    #[test]
    fn test_rejections() {
        let (catalog, pools, site) = (catalog(), pools(8), SiteProfile::default());
        let selector = ContentSelector::new(&catalog, &pools, &site);

        // unknown vertical
        assert_eq!(selector.resolve("dentists", "quickbooks-to-netsuite"), Err(NotFound));
        // no separator
        assert_eq!(selector.resolve("accountants", "quickbooks"), Err(NotFound));
        assert_eq!(selector.resolve("accountants", ""), Err(NotFound));
        // empty halves
        assert_eq!(selector.resolve("accountants", "-to-netsuite"), Err(NotFound));
        assert_eq!(selector.resolve("accountants", "quickbooks-to-"), Err(NotFound));
        // unregistered source / destination
        assert_eq!(selector.resolve("accountants", "sap-to-netsuite"), Err(NotFound));
        assert_eq!(selector.resolve("accountants", "quickbooks-to-sap"), Err(NotFound));
        // wrong side: netsuite is not a source
        assert_eq!(selector.resolve("accountants", "netsuite-to-quickbooks"), Err(NotFound));
        // same system on both sides
        assert_eq!(selector.resolve("accountants", "quickbooks-to-quickbooks"), Err(NotFound));
        // systems of another vertical
        assert_eq!(selector.resolve("warehousing", "quickbooks-to-netsuite"), Err(NotFound));
        // case matters
        assert_eq!(selector.resolve("accountants", "QuickBooks-to-NetSuite"), Err(NotFound));
    }

    #[test]
    fn test_vertical_without_systems_has_no_pages() {
        let (catalog, pools, site) = (catalog(), pools(8), SiteProfile::default());
        let selector = ContentSelector::new(&catalog, &pools, &site);
        assert_eq!(selector.list_slugs("real-estate").unwrap(), Vec::<String>::new());
        assert_eq!(selector.list_slugs("nowhere"), Err(NotFound));
    }

    #[test]
    fn test_vertical_found_by_slug_uses_id() {
        let mut systems = BTreeMap::new();
        systems.insert(
            "real-estate".to_string(),
            VerticalSystems {
                source: vec![system("appfolio", "appfolio", "AppFolio")],
                destination: vec![system("mri", "mri-software", "MRI Software")],
            },
        );
        let mut vertical = Vertical::new("real-estate", "Real Estate");
        vertical.slug = "property".to_string();
        let catalog = Catalog::new(vec![vertical], systems).unwrap();
        let (pools, site) = (pools(8), SiteProfile::default());
        let selector = ContentSelector::new(&catalog, &pools, &site);

        let by_slug = selector.resolve("property", "appfolio-to-mri-software").unwrap();
        let by_id = selector.resolve("real-estate", "appfolio-to-mri-software").unwrap();
        assert_eq!(by_slug, by_id);
        assert_eq!(by_slug.vertical, "real-estate");
        assert!(by_slug
            .canonical_url
            .ends_with("/real-estate/integration/appfolio-to-mri-software"));
    }

    #[test]
    fn test_fallback_pools_for_vertical_without_copy() {
        let (catalog, pools, site) = (catalog(), pools(8), SiteProfile::default());
        let selector = ContentSelector::new(&catalog, &pools, &site);
        let model = selector.resolve("warehousing", "fishbowl-to-netsuite").unwrap();
        assert!(model.expert_analysis.contains("Fishbowl"));
        assert!(model.title.contains("| Warehousing |"));
        assert!(model.related_links.is_empty());
        assert_closed(&model);
    }

    #[test]
    fn test_enumeration_matches_resolution() {
        let (catalog, pools, site) = (catalog(), pools(8), SiteProfile::default());
        let selector = ContentSelector::new(&catalog, &pools, &site);
        let slugs = selector.list_slugs("accountants").unwrap();

        // 3 sources x 3 destinations minus quickbooks -> quickbooks
        assert_eq!(slugs.len(), 8);
        assert_eq!(slugs[0], "quickbooks-to-netsuite");
        assert!(!slugs.contains(&"quickbooks-to-quickbooks".to_string()));

        for slug in &slugs {
            let model = selector.resolve("accountants", slug).unwrap();
            assert_eq!(&model.slug, slug);
            assert_closed(&model);
        }

        // every other combination is rejected
        for source in catalog.sources("accountants") {
            for destination in catalog.destinations("accountants") {
                let slug = compose_pair_slug(source.slug.as_str(), destination.slug.as_str());
                assert_eq!(
                    slugs.contains(&slug),
                    selector.resolve("accountants", &slug).is_ok()
                );
            }
        }
    }

    #[test]
    fn test_ambiguous_slug_prefers_longest_source() {
        let mut systems = BTreeMap::new();
        systems.insert(
            "accountants".to_string(),
            VerticalSystems {
                source: vec![
                    system("back", "back", "Back"),
                    system("back-to-basics", "back-to-basics", "Back to Basics"),
                ],
                destination: vec![
                    system("basics-to-netsuite", "basics-to-netsuite", "Basics NetSuite"),
                    system("netsuite", "netsuite", "NetSuite"),
                ],
            },
        );
        let catalog =
            Catalog::new(vec![Vertical::new("accountants", "Accountants")], systems).unwrap();
        let (pools, site) = (pools(8), SiteProfile::default());
        let selector = ContentSelector::new(&catalog, &pools, &site);

        let pair = selector
            .resolve_pair("accountants", "back-to-basics-to-netsuite")
            .unwrap();
        assert_eq!(pair.source.id, "back-to-basics");
        assert_eq!(pair.destination.id, "netsuite");

        // back -> basics-to-netsuite shares its slug with the pair above and is dropped
        let slugs = selector.list_slugs("accountants").unwrap();
        assert_eq!(
            slugs,
            vec![
                "back-to-netsuite".to_string(),
                "back-to-basics-to-basics-to-netsuite".to_string(),
                "back-to-basics-to-netsuite".to_string(),
            ]
        );
        for slug in &slugs {
            assert!(selector.resolve("accountants", slug).is_ok());
        }
    }

    #[test]
    fn test_hub_links_use_valid_pairs() {
        let (catalog, pools, site) = (catalog(), pools(8), SiteProfile::default());
        let selector = ContentSelector::new(&catalog, &pools, &site);
        let links = selector.hub_links("accountants", 4).unwrap();
        assert_eq!(links.len(), 4);
        assert_eq!(links[0].href, "/accountants/integration/quickbooks-to-netsuite");
        assert_eq!(links[2].label, "Xero → NetSuite");
        assert_eq!(selector.hub_links("nowhere", 4), Err(NotFound));
    }

    #[test]
    fn test_selector_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ContentSelector<'static>>();
    }
}
