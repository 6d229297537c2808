use crate::shared::error::PseoError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder replaced by the source system's display name
pub const SOURCE_PLACEHOLDER: &str = "[SOURCE]";

/// Placeholder replaced by the destination system's display name
pub const DEST_PLACEHOLDER: &str = "[DEST]";

/// Question/answer template
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FaqTemplate {
    pub question: String,
    pub answer: String,
}

/// One step of a technical walkthrough
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StepTemplate {
    pub name: String,
    pub details: String,
}

/// One field-mapping row; `transformation` is copied verbatim and must not
/// contain placeholders
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldMappingTemplate {
    pub source: String,
    pub destination: String,
    pub transformation: String,
}

/// Manual-hours, accuracy and savings display strings, copied verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiFigures {
    pub manual_hours: String,
    pub accuracy: String,
    pub savings: String,
}

/// All copy pools of one vertical. An empty axis falls back to the
/// fallback vertical's pool for that axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolSet {
    #[serde(default)]
    pub expert_analysis: Vec<String>,
    #[serde(default)]
    pub operational_impact: Vec<String>,
    #[serde(default)]
    pub faqs: Vec<FaqTemplate>,
    #[serde(default)]
    pub technical_steps: Vec<Vec<StepTemplate>>,
    #[serde(default)]
    pub roi: Vec<RoiFigures>,
    #[serde(default)]
    pub field_mappings: Vec<Vec<FieldMappingTemplate>>,
}

/// A content axis the selector draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolAxis {
    ExpertAnalysis,
    OperationalImpact,
    Faqs,
    TechnicalSteps,
    Roi,
    FieldMappings,
}

impl PoolAxis {
    pub const ALL: [PoolAxis; 6] = [
        PoolAxis::ExpertAnalysis,
        PoolAxis::OperationalImpact,
        PoolAxis::Faqs,
        PoolAxis::TechnicalSteps,
        PoolAxis::Roi,
        PoolAxis::FieldMappings,
    ];

    /// Suffix appended to the page seed to derive this axis' sub-seed
    pub fn seed_tag(self) -> &'static str {
        match self {
            PoolAxis::ExpertAnalysis => "-analysis",
            PoolAxis::OperationalImpact => "-impact",
            PoolAxis::Faqs => "-faqs",
            PoolAxis::TechnicalSteps => "-steps",
            PoolAxis::Roi => "-roi",
            PoolAxis::FieldMappings => "-mapping",
        }
    }

    fn is_empty_in(self, set: &PoolSet) -> bool {
        match self {
            PoolAxis::ExpertAnalysis => set.expert_analysis.is_empty(),
            PoolAxis::OperationalImpact => set.operational_impact.is_empty(),
            PoolAxis::Faqs => set.faqs.is_empty(),
            PoolAxis::TechnicalSteps => set.technical_steps.is_empty(),
            PoolAxis::Roi => set.roi.is_empty(),
            PoolAxis::FieldMappings => set.field_mappings.is_empty(),
        }
    }
}

impl std::fmt::Display for PoolAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PoolAxis::ExpertAnalysis => "expertAnalysis",
            PoolAxis::OperationalImpact => "operationalImpact",
            PoolAxis::Faqs => "faqs",
            PoolAxis::TechnicalSteps => "technicalSteps",
            PoolAxis::Roi => "roi",
            PoolAxis::FieldMappings => "fieldMappings",
        };
        write!(f, "{}", name)
    }
}

/// Read-only copy library keyed by vertical id
///
/// Invariant: every accessor returns a non-empty slice, because the fallback
/// vertical is required to fill every axis.
#[derive(Debug, Clone)]
pub struct CopyPools {
    fallback_vertical: String,
    pools: BTreeMap<String, PoolSet>,
}

impl CopyPools {
    /// # Errors
    /// - the fallback vertical has no pool set, or leaves an axis empty
    /// - any step sequence or field-mapping row set is empty
    /// - a verbatim field (ROI figures, mapping transformations) holds a placeholder
    pub fn new(fallback_vertical: &str, pools: BTreeMap<String, PoolSet>) -> Result<Self> {
        let fallback = pools.get(fallback_vertical).ok_or_else(|| {
            invalid(format!(
                "fallback vertical '{}' has no copy pools",
                fallback_vertical
            ))
        })?;

        for axis in PoolAxis::ALL {
            if axis.is_empty_in(fallback) {
                return Err(invalid(format!(
                    "fallback vertical '{}' has an empty '{}' pool",
                    fallback_vertical, axis
                )));
            }
        }

        for (vertical_id, set) in &pools {
            if set.technical_steps.iter().any(|steps| steps.is_empty()) {
                return Err(invalid(format!(
                    "vertical '{}' has an empty technical step sequence",
                    vertical_id
                )));
            }
            if set.field_mappings.iter().any(|rows| rows.is_empty()) {
                return Err(invalid(format!(
                    "vertical '{}' has an empty field-mapping row set",
                    vertical_id
                )));
            }
            if set
                .field_mappings
                .iter()
                .flatten()
                .any(|row| has_placeholder(&row.transformation))
            {
                return Err(invalid(format!(
                    "vertical '{}' has a placeholder in a field-mapping transformation",
                    vertical_id
                )));
            }
            if set.roi.iter().any(|roi| {
                [&roi.manual_hours, &roi.accuracy, &roi.savings]
                    .iter()
                    .any(|field| has_placeholder(field))
            }) {
                return Err(invalid(format!(
                    "vertical '{}' has a placeholder in its ROI figures",
                    vertical_id
                )));
            }
        }

        Ok(Self {
            fallback_vertical: fallback_vertical.to_string(),
            pools,
        })
    }

    pub fn fallback_vertical(&self) -> &str {
        &self.fallback_vertical
    }

    /// True when the vertical has its own (possibly partial) pool set
    pub fn has_dedicated_pools(&self, vertical_id: &str) -> bool {
        self.pools.contains_key(vertical_id)
    }

    pub fn expert_analysis(&self, vertical_id: &str) -> &[String] {
        self.axis(vertical_id, |set| &set.expert_analysis)
    }

    pub fn operational_impact(&self, vertical_id: &str) -> &[String] {
        self.axis(vertical_id, |set| &set.operational_impact)
    }

    pub fn faqs(&self, vertical_id: &str) -> &[FaqTemplate] {
        self.axis(vertical_id, |set| &set.faqs)
    }

    pub fn technical_steps(&self, vertical_id: &str) -> &[Vec<StepTemplate>] {
        self.axis(vertical_id, |set| &set.technical_steps)
    }

    pub fn roi(&self, vertical_id: &str) -> &[RoiFigures] {
        self.axis(vertical_id, |set| &set.roi)
    }

    pub fn field_mappings(&self, vertical_id: &str) -> &[Vec<FieldMappingTemplate>] {
        self.axis(vertical_id, |set| &set.field_mappings)
    }

    fn axis<'a, T>(
        &'a self,
        vertical_id: &str,
        get: impl Fn(&'a PoolSet) -> &'a Vec<T>,
    ) -> &'a [T] {
        if let Some(pool) = self.pools.get(vertical_id).map(&get) {
            if !pool.is_empty() {
                return pool;
            }
        }
        self.pools
            .get(&self.fallback_vertical)
            .map(get)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// True when `text` contains `[SOURCE]` or `[DEST]`
pub fn has_placeholder(text: &str) -> bool {
    text.contains(SOURCE_PLACEHOLDER) || text.contains(DEST_PLACEHOLDER)
}

fn invalid(reason: String) -> anyhow::Error {
    PseoError::InvalidCatalog { reason }.into()
}
