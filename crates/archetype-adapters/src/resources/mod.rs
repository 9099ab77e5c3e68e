//! Template resource stores.
//!
//! Both stores answer paths relative to a `resources/` root, e.g.
//! `config/constants.py` or `__init__.py`.

mod directory;
mod embedded;

pub use directory::{DirectoryResources, RESOURCES_DIR};
pub use embedded::EmbeddedResources;
