pub mod content_selector;
pub mod link_builder;
pub mod seed_hasher;
pub mod slug_parser;
pub mod template_filler;

pub use content_selector::{ContentSelector, NotFound, FAQ_COUNT};
pub use link_builder::{LinkBuilder, LinkContext, DEFAULT_HUB_LINK_COUNT};
pub use seed_hasher::{hash, pick, SelectionSeed};
pub use slug_parser::{compose_pair_slug, match_systems, split_candidates, PAIR_SEPARATOR};
pub use template_filler::TemplateFiller;
