use std::time::SystemTime;

/// One entry seen during a scan: its slash-separated path relative to the
/// scan root and its modification time. Directories are entries too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    path: String,
    modified_at: SystemTime,
}

impl FileRecord {
    pub fn new(path: impl Into<String>, modified_at: SystemTime) -> Self {
        Self {
            path: path.into(),
            modified_at,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn modified_at(&self) -> SystemTime {
        self.modified_at
    }
}
