use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes exports under a base directory, creating parent directories as needed.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn full_path(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.full_path(path);

        if let Some(parent) = full_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        tracing::debug!("Writing {} bytes to {}", data.len(), full_path.display());
        fs::write(&full_path, data)?;
        Ok(())
    }
}

/// Splits an output path into a storage root and a file name.
pub fn split_output_path(output: &str) -> (LocalStorage, String) {
    let path = Path::new(output);
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| output.to_string());
    let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
    (LocalStorage::new(root), file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_file_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        tokio_test::block_on(storage.write_file("exports/skips.csv", b"id,name\n"))
            .unwrap();

        let written = fs::read_to_string(temp_dir.path().join("exports/skips.csv")).unwrap();
        assert_eq!(written, "id,name\n");
    }

    #[test]
    fn test_split_output_path() {
        let (storage, file) = split_output_path("out/dir/skips.json");
        assert_eq!(file, "skips.json");
        assert_eq!(storage.full_path(&file), PathBuf::from("out/dir/skips.json"));

        let (storage, file) = split_output_path("skips.json");
        assert_eq!(file, "skips.json");
        assert_eq!(storage.full_path(&file), PathBuf::from("skips.json"));
    }
}
