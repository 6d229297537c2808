pub mod catalog;
pub mod content_model;
pub mod copy_pool;
pub mod integration_pair;
pub mod site_profile;
pub mod software_system;
pub mod vertical;

pub use catalog::{Catalog, VerticalSystems};
pub use content_model::{Breadcrumb, ContentModel, Faq, FieldMappingRow, PageLink, TechnicalStep};
pub use copy_pool::{
    has_placeholder, CopyPools, FaqTemplate, FieldMappingTemplate, PoolAxis, PoolSet, RoiFigures,
    StepTemplate, DEST_PLACEHOLDER, SOURCE_PLACEHOLDER,
};
pub use integration_pair::IntegrationPair;
pub use site_profile::SiteProfile;
pub use software_system::{SoftwareSystem, SystemSlug};
pub use vertical::{Vertical, VerticalStatus};
