// src/services/mod.rs
//
// Services Module - Resolution Engines

pub mod archive_template_service;
pub mod name_sanitizer;
pub mod version_service;

#[cfg(test)]
mod archive_template_service_tests;

// Re-export all services and their types
pub use archive_template_service::ArchiveTemplateResolver;

pub use name_sanitizer::NameSanitizer;

pub use version_service::{
    ResolveVersionRequest,
    VersionResolver,
    VersionRules,
};
