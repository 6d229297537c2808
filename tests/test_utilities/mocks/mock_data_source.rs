use pseo_content::content_selection::domain::{
    FaqTemplate, FieldMappingTemplate, RoiFigures, StepTemplate,
};
use pseo_content::prelude::*;
use std::collections::BTreeMap;

/// Mock CatalogReader serving a small in-memory catalog
pub struct MockCatalogReader {
    verticals: Vec<Vertical>,
    systems: BTreeMap<String, VerticalSystems>,
    should_fail: bool,
}

impl MockCatalogReader {
    /// Accountants (3 sources, 2 destinations) plus an empty logistics vertical
    pub fn new() -> Self {
        let mut systems = BTreeMap::new();
        systems.insert(
            "accountants".to_string(),
            VerticalSystems {
                source: vec![
                    system("quickbooks", "QuickBooks"),
                    system("xero", "Xero"),
                    system("netsuite", "NetSuite"),
                ],
                destination: vec![
                    system("netsuite", "NetSuite"),
                    system("sage-intacct", "Sage Intacct"),
                ],
            },
        );
        let mut logistics = Vertical::new("logistics", "Logistics");
        logistics.status = VerticalStatus::Planned;
        Self {
            verticals: vec![Vertical::new("accountants", "Accountants"), logistics],
            systems,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }
}

impl CatalogReader for MockCatalogReader {
    fn read_catalog(&self) -> Result<Catalog> {
        if self.should_fail {
            anyhow::bail!("Mock catalog read failure");
        }
        Catalog::new(self.verticals.clone(), self.systems.clone())
    }
}

/// Mock CopyPoolReader with one pool set for the fallback vertical
pub struct MockCopyPoolReader {
    faq_count: usize,
}

impl MockCopyPoolReader {
    pub fn new() -> Self {
        Self { faq_count: 3 }
    }

    pub fn with_faq_count(faq_count: usize) -> Self {
        Self { faq_count }
    }
}

impl CopyPoolReader for MockCopyPoolReader {
    fn read_copy_pools(&self, fallback_vertical: &str) -> Result<CopyPools> {
        let set = PoolSet {
            expert_analysis: vec![
                "[SOURCE] exports reach [DEST] with balanced journals.".to_string(),
                "Month-end in [DEST] stops waiting on [SOURCE] reports.".to_string(),
            ],
            operational_impact: vec!["Close cycles shrink once [SOURCE] feeds [DEST].".to_string()],
            faqs: (0..self.faq_count)
                .map(|i| FaqTemplate {
                    question: format!("Question {} about [SOURCE]?", i),
                    answer: format!("Answer {} mentioning [DEST].", i),
                })
                .collect(),
            technical_steps: vec![vec![
                StepTemplate {
                    name: "Export from [SOURCE]".to_string(),
                    details: "Pull the trial balance out of [SOURCE].".to_string(),
                },
                StepTemplate {
                    name: "Import into [DEST]".to_string(),
                    details: "Post journals in [DEST].".to_string(),
                },
            ]],
            roi: vec![RoiFigures {
                manual_hours: "10 hrs/week".to_string(),
                accuracy: "99.5%".to_string(),
                savings: "$25k/yr".to_string(),
            }],
            field_mappings: vec![vec![FieldMappingTemplate {
                source: "[SOURCE] Account".to_string(),
                destination: "[DEST] GL Account".to_string(),
                transformation: "Chart-of-accounts crosswalk".to_string(),
            }]],
        };
        let mut pools = BTreeMap::new();
        pools.insert(fallback_vertical.to_string(), set);
        CopyPools::new(fallback_vertical, pools)
    }
}

fn system(id: &str, name: &str) -> SoftwareSystem {
    SoftwareSystem::new(id, id, name).unwrap()
}
