//! Templates compiled into the binary.

use std::path::Path;

use include_dir::{Dir, include_dir};
use tracing::trace;

use archetype_core::{
    application::{ApplicationError, ports::ResourceStore},
    error::ArchetypeResult,
};

static RESOURCES: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/resources");

/// The template tree shipped with the tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedResources;

impl EmbeddedResources {
    pub fn new() -> Self {
        Self
    }
}

impl ResourceStore for EmbeddedResources {
    fn read(&self, relative: &Path) -> ArchetypeResult<Vec<u8>> {
        let file = RESOURCES
            .get_file(relative)
            .ok_or_else(|| ApplicationError::ResourceNotFound {
                path: relative.to_path_buf(),
            })?;
        trace!(path = %relative.display(), bytes = file.contents().len(), "embedded template read");
        Ok(file.contents().to_vec())
    }

    fn describe(&self) -> String {
        "embedded".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use archetype_core::domain::{Catalog, PACKAGE_MARKER};

    #[test]
    fn every_catalog_template_is_bundled() {
        let store = EmbeddedResources::new();
        let catalog = Catalog::python_base("demo");

        for entry in catalog
            .root_templates()
            .iter()
            .chain(catalog.package_templates())
        {
            assert!(
                store.read(entry.path.as_path()).is_ok(),
                "missing bundled template {}",
                entry.path
            );
        }
        assert!(store.read(Path::new(PACKAGE_MARKER)).is_ok());
    }

    #[test]
    fn package_marker_is_empty() {
        let content = EmbeddedResources::new()
            .read(Path::new(PACKAGE_MARKER))
            .unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn unknown_template_is_not_found() {
        let err = EmbeddedResources::new()
            .read(Path::new("nope.txt"))
            .unwrap_err();
        assert!(err.to_string().contains("nope.txt"));
    }
}
