//! Merge Service - combine text files into a generated project.
//!
//! Separated from ArchetypeService; nothing in the build sequence calls it.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{MergeSummary, Requirements},
    error::ArchetypeResult,
};

/// Service for appending and merging files.
pub struct MergeService {
    filesystem: Box<dyn Filesystem>,
}

impl MergeService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Append the bytes of `source` to `dest` unchanged.
    #[instrument(skip_all, fields(source = %source.display(), dest = %dest.display()))]
    pub fn append_file(&self, source: &Path, dest: &Path) -> ArchetypeResult<()> {
        let content = self.filesystem.read(source)?;
        self.filesystem.append_file(dest, &content)?;
        debug!(bytes = content.len(), "file appended");
        Ok(())
    }

    /// Merge the requirements in `source` into `dest`, keeping the higher
    /// version of every package.
    ///
    /// A missing `dest` counts as empty. `dest` is only rewritten when the
    /// merge changes something.
    #[instrument(skip_all, fields(source = %source.display(), dest = %dest.display()))]
    pub fn merge_requirements(&self, source: &Path, dest: &Path) -> ArchetypeResult<MergeSummary> {
        let incoming: Requirements = self.filesystem.read_to_string(source)?.parse()?;
        let mut current: Requirements = if self.filesystem.exists(dest) {
            self.filesystem.read_to_string(dest)?.parse()?
        } else {
            Requirements::default()
        };

        let summary = current.merge(&incoming);
        if summary.is_noop() {
            debug!("requirements already up to date");
            return Ok(summary);
        }

        self.filesystem
            .write_file(dest, current.render().as_bytes())?;
        info!(
            added = summary.added,
            upgraded = summary.upgraded,
            "requirements merged"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;

    #[test]
    fn merge_writes_higher_versions() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string().returning(|p| {
            Ok(if p.ends_with("incoming.txt") {
                "PyYAML==5.3.1\nrequests==2.0\n".to_string()
            } else {
                "PyYAML==5.1\n".to_string()
            })
        });
        fs.expect_write_file()
            .withf(|p, content| {
                p.ends_with("requirements.txt") && content == b"PyYAML==5.3.1\nrequests==2.0\n"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let service = MergeService::new(Box::new(fs));
        let summary = service
            .merge_requirements(Path::new("incoming.txt"), Path::new("requirements.txt"))
            .unwrap();
        assert_eq!(summary, MergeSummary { added: 1, upgraded: 1 });
    }

    #[test]
    fn noop_merge_leaves_file_alone() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .returning(|_| Ok("a==1\n".to_string()));
        fs.expect_write_file().never();

        let service = MergeService::new(Box::new(fs));
        let summary = service
            .merge_requirements(Path::new("x"), Path::new("y"))
            .unwrap();
        assert!(summary.is_noop());
    }

    #[test]
    fn missing_destination_is_created() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_read_to_string()
            .times(1)
            .returning(|_| Ok("a==1\n".to_string()));
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));

        let service = MergeService::new(Box::new(fs));
        let summary = service
            .merge_requirements(Path::new("x"), Path::new("y"))
            .unwrap();
        assert_eq!(summary.added, 1);
    }

    #[test]
    fn append_copies_source_bytes() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string().never();
        fs.expect_read()
            .returning(|_| Ok(vec![b'c', b'a', b'f', 0xe9, b'\n']));
        fs.expect_append_file()
            .withf(|p, content| p.ends_with("dest") && content == [b'c', b'a', b'f', 0xe9, b'\n'])
            .times(1)
            .returning(|_, _| Ok(()));

        let service = MergeService::new(Box::new(fs));
        service
            .append_file(Path::new("src"), Path::new("dest"))
            .unwrap();
    }

    #[test]
    fn merge_keeps_destination_comments() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string().returning(|p| {
            Ok(if p.ends_with("incoming.txt") {
                "requests==2.31.0\n".to_string()
            } else {
                "# pinned for CVE-2020-1747\nPyYAML==5.3.1\n".to_string()
            })
        });
        fs.expect_write_file()
            .withf(|_, content| {
                content == b"# pinned for CVE-2020-1747\nPyYAML==5.3.1\nrequests==2.31.0\n"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let service = MergeService::new(Box::new(fs));
        service
            .merge_requirements(Path::new("incoming.txt"), Path::new("requirements.txt"))
            .unwrap();
    }
}
