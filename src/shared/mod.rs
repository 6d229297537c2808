/// Shared kernel - error types, result alias, file safety checks and logging
pub mod error;
pub mod logger;
pub mod result;
pub mod security;

pub use result::Result;
