use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Output directory holding, per resource, the raw `<name>.csv` cache (CSV
/// sources only) and the derived `<name>.json` artifact.
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create data directory: {:?}", root))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the raw CSV cache for a resource.
    pub fn csv_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.csv", name))
    }

    /// Path of the derived JSON artifact for a resource.
    pub fn json_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.json", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_derive_from_resource_name() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = DataDir::new(tmp.path().join("data")).unwrap();

        assert!(dir.root().exists());
        assert_eq!(
            dir.csv_path("pokemon"),
            tmp.path().join("data").join("pokemon.csv")
        );
        assert_eq!(
            dir.json_path("pokemon"),
            tmp.path().join("data").join("pokemon.json")
        );
    }
}
