use super::traits::ContactStorage;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory text kept in a single file on disk.
///
/// Writes go to a sibling temporary file that is then renamed over the
/// backing file, so a reader never sees a half-written directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "contacts".to_string());
        self.path.with_file_name(format!(".{}.tmp", name))
    }

    fn ensure_parent_dir(&self) -> io::Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                fs::create_dir_all(parent)
            }
            _ => Ok(()),
        }
    }
}

impl ContactStorage for FileStorage {
    fn read(&self) -> io::Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, contents: &str) -> io::Result<()> {
        self.ensure_parent_dir()?;

        let tmp_path = self.temp_path();
        let result =
            fs::write(&tmp_path, contents).and_then(|()| fs::rename(&tmp_path, &self.path));
        if result.is_err() {
            let _ = fs::remove_file(&tmp_path);
        }
        result
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
