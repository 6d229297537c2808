/// Data set adapters: JSON document parsing and the data compiled into the binary
mod documents;
mod embedded;

pub use documents::{
    parse_copy_pools, parse_software_systems, parse_verticals, COPY_POOLS_FILE,
    SOFTWARE_SYSTEMS_FILE, VERTICALS_FILE,
};
pub use embedded::EmbeddedDataSource;
