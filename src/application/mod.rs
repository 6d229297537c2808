/// Application layer - Use cases and DTOs
///
/// This layer contains the application logic that orchestrates
/// domain services and coordinates with infrastructure through ports.
pub mod content_library;
pub mod dto;
pub mod factories;
pub mod use_cases;

pub use content_library::ContentLibrary;
