//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `archetype-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File and directory operations
//!   - `ResourceStore`: Read-only access to bundled templates

pub mod output;

pub use output::{Filesystem, ResourceStore};

#[cfg(test)]
pub use output::{MockFilesystem, MockResourceStore};
