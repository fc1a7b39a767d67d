//! Renames processed challan PDFs after their section, amount and serial.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::RenameError;
use crate::models::challan::ChallanRecord;

/// A planned rename inside the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub from: PathBuf,
    pub to: PathBuf,
}

impl RenamePlan {
    /// Plan the rename of `record`'s source file in `dir`.
    pub fn for_record(dir: &Path, record: &ChallanRecord) -> Self {
        Self {
            from: dir.join(&record.file_name),
            to: dir.join(record.target_file_name()),
        }
    }

    /// Rename the file. An existing target is never overwritten; a file that
    /// already has its target name is left alone.
    pub fn execute(&self) -> Result<(), RenameError> {
        if self.from == self.to {
            debug!("{} already has its target name", self.from.display());
            return Ok(());
        }

        if self.to.exists() {
            return Err(RenameError::TargetExists {
                path: self.to.clone(),
            });
        }

        fs::rename(&self.from, &self.to).map_err(|source| RenameError::Io {
            from: self.from.clone(),
            to: self.to.clone(),
            source,
        })?;

        debug!("Renamed {} -> {}", self.from.display(), self.to.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::challan::sample_record;

    #[test]
    fn test_plan_uses_indian_grouping() {
        let record = sample_record("scan 1.pdf", "12345");
        let plan = RenamePlan::for_record(Path::new("/in"), &record);

        assert_eq!(plan.from, PathBuf::from("/in/scan 1.pdf"));
        assert_eq!(plan.to, PathBuf::from("/in/94C 1,000 12345.pdf"));
    }

    #[test]
    fn test_execute_renames() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("scan.pdf"), b"%PDF").unwrap();

        let plan = RenamePlan::for_record(dir.path(), &sample_record("scan.pdf", "7"));
        plan.execute().unwrap();

        assert!(!dir.path().join("scan.pdf").exists());
        assert!(dir.path().join("94C 1,000 7.pdf").exists());
    }

    #[test]
    fn test_execute_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("scan.pdf"), b"new").unwrap();
        fs::write(dir.path().join("94C 1,000 7.pdf"), b"old").unwrap();

        let plan = RenamePlan::for_record(dir.path(), &sample_record("scan.pdf", "7"));
        assert!(matches!(
            plan.execute(),
            Err(RenameError::TargetExists { .. })
        ));
        assert_eq!(fs::read(dir.path().join("94C 1,000 7.pdf")).unwrap(), b"old");
    }

    #[test]
    fn test_execute_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let plan = RenamePlan::for_record(dir.path(), &sample_record("gone.pdf", "7"));
        assert!(matches!(plan.execute(), Err(RenameError::Io { .. })));
    }

    #[test]
    fn test_execute_same_name_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("94C 1,000 7.pdf"), b"x").unwrap();

        let plan = RenamePlan::for_record(dir.path(), &sample_record("94C 1,000 7.pdf", "7"));
        plan.execute().unwrap();
        assert!(dir.path().join("94C 1,000 7.pdf").exists());
    }
}
