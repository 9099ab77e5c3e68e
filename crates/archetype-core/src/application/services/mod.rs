//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "build the base project structure".

pub mod archetype_service;
pub mod builder;
pub mod merge_service;

pub use archetype_service::{ArchetypeRequest, ArchetypeService, BASE_PATH_PROPERTY, BuildReport};
pub use builder::{Builder, DEFAULT_SOURCE_DIR};
pub use merge_service::MergeService;
