use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// The commit message file git hands to the hook (usually `.git/COMMIT_EDITMSG`)
#[derive(Debug, Clone)]
pub struct CommitMessageFile {
    path: PathBuf,
}

impl CommitMessageFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CommitMessageFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full current contents of the file
    pub fn read(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.path)?)
    }

    /// Replace the whole file with `content`, byte for byte
    pub fn write(&self, content: &str) -> Result<()> {
        fs::write(&self.path, content)?;
        Ok(())
    }
}
