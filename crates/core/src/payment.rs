//! Payment slip handling
//!
//! Payment is evidenced by an uploaded transfer slip; a real gateway is
//! out of scope. Validation mirrors the form rules: image or PDF, at
//! most 5 MiB. Violations are user-dismissible notices, never fatal.

use std::path::Path;

use crate::error::{Error, Result};

/// Upload size limit
pub const MAX_SLIP_BYTES: u64 = 5 * 1024 * 1024;

const ALLOWED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "pdf"];

/// An attached transfer slip that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlipFile {
    pub file_name: String,
    pub size_bytes: u64,
}

impl SlipFile {
    /// Stat and validate a slip file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| Error::Slip("Not a file path".to_string()))?;

        let metadata = std::fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(Error::Slip(format!("{file_name} is not a file")));
        }

        let slip = Self {
            file_name,
            size_bytes: metadata.len(),
        };
        slip.validate()?;
        Ok(slip)
    }

    /// Extension and size rules, independent of the filesystem
    pub fn validate(&self) -> Result<()> {
        let extension = self
            .file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(Error::Slip(
                "Only JPG, PNG or PDF files are accepted".to_string(),
            ));
        }

        if self.size_bytes > MAX_SLIP_BYTES {
            return Err(Error::Slip(
                "File exceeds the 5 MB limit".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn slip(name: &str, size: u64) -> SlipFile {
        SlipFile {
            file_name: name.to_string(),
            size_bytes: size,
        }
    }

    #[test]
    fn accepted_extensions() {
        for name in ["slip.jpg", "slip.JPEG", "slip.png", "slip.Pdf"] {
            assert!(slip(name, 1024).validate().is_ok(), "{name}");
        }
    }

    #[test]
    fn disallowed_type_rejected() {
        let err = slip("slip.gif", 1024).validate().unwrap_err();
        assert!(matches!(err, Error::Slip(_)));

        assert!(slip("slip", 1024).validate().is_err());
        assert!(slip("slip.docx", 1024).validate().is_err());
    }

    #[test]
    fn oversized_file_rejected() {
        assert!(slip("slip.png", MAX_SLIP_BYTES).validate().is_ok());
        let err = slip("slip.png", MAX_SLIP_BYTES + 1).validate().unwrap_err();
        assert!(err.to_string().contains("5 MB"));
    }

    #[test]
    fn load_stats_a_real_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transfer.png");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&[0u8; 128]).unwrap();

        let slip = SlipFile::load(&path).unwrap();
        assert_eq!(slip.file_name, "transfer.png");
        assert_eq!(slip.size_bytes, 128);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SlipFile::load(&dir.path().join("absent.png")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn load_rejects_wrong_extension_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"hello").unwrap();
        assert!(matches!(SlipFile::load(&path), Err(Error::Slip(_))));
    }
}
