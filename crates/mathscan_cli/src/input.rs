//! Text sources backed by the filesystem and stdin.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use mathscan_engine::{SourceError, StaticText, TextSource};

pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl TextSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn check_available(&self) -> bool {
        self.path.is_file()
    }

    fn extract_text(&self) -> Result<String, SourceError> {
        fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            name: self.name.clone(),
            source,
        })
    }
}

pub struct StdinSource;

impl TextSource for StdinSource {
    fn name(&self) -> &str {
        "stdin"
    }

    fn check_available(&self) -> bool {
        true
    }

    fn extract_text(&self) -> Result<String, SourceError> {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| SourceError::Io {
                name: "stdin".to_string(),
                source,
            })?;
        Ok(text)
    }
}

/// Inline text wins, then `--file` (`-` meaning stdin), then stdin.
pub fn open(text: Option<&str>, file: Option<&Path>) -> Box<dyn TextSource> {
    match (text, file) {
        (Some(text), _) => Box::new(StaticText::named("argument", text)),
        (None, Some(path)) if path != Path::new("-") => Box::new(FileSource::new(path)),
        _ => Box::new(StdinSource),
    }
}
