//! Archetype Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Archetype
//! project scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          archetype-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ArchetypeService, Builder, Merge)     │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Filesystem, ResourceStore)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    archetype-adapters (Infrastructure)  │
//! │ (LocalFilesystem, EmbeddedResources...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Catalog, normalize, Requirements)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use archetype_core::{
//!     application::{ArchetypeRequest, ArchetypeService},
//!     domain::Catalog,
//! };
//!
//! // 1. Describe what to build
//! let request = ArchetypeRequest::new("MyProject").base_path("./my_project");
//! let catalog = Catalog::python_base(&request.package_name());
//!
//! // 2. Use application service (with injected adapters)
//! let service = ArchetypeService::new(filesystem, resources);
//! let report = service.build(&request, &catalog).unwrap();
//! println!("{} created", report.created());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ArchetypeRequest, ArchetypeService, BuildReport, Builder, MergeService,
        ports::{Filesystem, ResourceStore},
    };
    pub use crate::domain::{
        Catalog, CatalogEntry, DirectoryKind, Outcome, RelativePath, Requirements, normalize,
    };
    pub use crate::error::{ArchetypeError, ArchetypeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
