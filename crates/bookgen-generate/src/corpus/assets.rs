use std::fs;
use std::path::PathBuf;

use crate::errors::GenerationError;

/// Reads optional word-list overrides from a directory tree.
#[derive(Debug, Clone)]
pub struct AssetsLoader {
    root: PathBuf,
}

impl AssetsLoader {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Non-empty trimmed lines of `relative`, or `None` when the file is
    /// missing or holds no words.
    pub fn load_lines(&self, relative: &str) -> Result<Option<Vec<String>>, GenerationError> {
        let path = self.root.join(relative);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(GenerationError::Asset(format!(
                    "failed to read asset {}: {}",
                    path.display(),
                    err
                )));
            }
        };

        let values: Vec<String> = contents
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| line.to_string())
            .collect();

        Ok((!values.is_empty()).then_some(values))
    }
}
