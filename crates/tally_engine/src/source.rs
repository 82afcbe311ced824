use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use crate::CountError;

/// Validated handle to a readable text source.
///
/// Existence and access failures are classified here, before any scanning
/// begins; anything that fails after this point is a mid-scan I/O failure.
pub struct TextSource {
    reader: BufReader<File>,
}

impl TextSource {
    pub fn open(path: &Path) -> Result<Self, CountError> {
        let file = File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => CountError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => CountError::AccessDenied(path.to_path_buf()),
            _ => CountError::Io(err),
        })?;
        Ok(Self {
            reader: BufReader::new(file),
        })
    }

    pub fn into_reader(self) -> BufReader<File> {
        self.reader
    }
}
