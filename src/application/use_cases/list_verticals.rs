use crate::application::dto::VerticalSummary;
use crate::application::ContentLibrary;
use crate::content_selection::services::DEFAULT_HUB_LINK_COUNT;
use crate::shared::Result;

/// ListVerticalsUseCase - verticals with their page counts and hub links
pub struct ListVerticalsUseCase<'l> {
    library: &'l ContentLibrary,
    hub_link_count: usize,
}

impl<'l> ListVerticalsUseCase<'l> {
    pub fn new(library: &'l ContentLibrary) -> Self {
        Self {
            library,
            hub_link_count: DEFAULT_HUB_LINK_COUNT,
        }
    }

    pub fn with_hub_link_count(mut self, count: usize) -> Self {
        self.hub_link_count = count;
        self
    }

    pub fn execute(&self) -> Result<Vec<VerticalSummary>> {
        let selector = self.library.selector();
        let summaries = self
            .library
            .catalog()
            .verticals()
            .iter()
            .map(|vertical| {
                let page_count = selector
                    .list_slugs(&vertical.id)
                    .map(|slugs| slugs.len())
                    .unwrap_or(0);
                let hub_links = selector
                    .hub_links(&vertical.id, self.hub_link_count)
                    .unwrap_or_default();
                VerticalSummary {
                    id: vertical.id.clone(),
                    name: vertical.name.clone(),
                    status: vertical.status,
                    page_count,
                    hub_links,
                }
            })
            .collect();
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::dataset::EmbeddedDataSource;
    use crate::content_selection::domain::{SiteProfile, VerticalStatus};

    fn library() -> ContentLibrary {
        let source = EmbeddedDataSource::new();
        ContentLibrary::load(&source, &source, "accountants", SiteProfile::default()).unwrap()
    }

    #[test]
    fn test_summaries() {
        let library = library();
        let summaries = ListVerticalsUseCase::new(&library).execute().unwrap();
        assert_eq!(summaries.len(), 4);

        let accountants = &summaries[0];
        assert_eq!(accountants.page_count, 28);
        assert_eq!(accountants.hub_links.len(), DEFAULT_HUB_LINK_COUNT);
        assert_eq!(accountants.hub_links[0].label, "QuickBooks → NetSuite");

        // real-estate: 5 x 4, no shared ids
        assert_eq!(summaries[1].page_count, 20);
        // warehousing: 5 x 4, no shared ids
        assert_eq!(summaries[2].page_count, 20);

        let logistics = &summaries[3];
        assert_eq!(logistics.status, VerticalStatus::Planned);
        assert_eq!(logistics.page_count, 0);
        assert!(logistics.hub_links.is_empty());
    }

    #[test]
    fn test_custom_hub_link_count() {
        let library = library();
        let summaries = ListVerticalsUseCase::new(&library)
            .with_hub_link_count(2)
            .execute()
            .unwrap();
        assert!(summaries.iter().all(|s| s.hub_links.len() <= 2));
    }
}
