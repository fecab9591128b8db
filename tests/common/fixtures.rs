// Test fixtures for integration testing

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Catalogue document written to a temporary file
#[allow(dead_code)] // Used in integration tests
pub struct CatalogueFile {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl CatalogueFile {
    /// Two pages: three heroes then one
    #[allow(dead_code)] // Used in integration tests
    pub fn small() -> Self {
        Self::with_json(
            r#"{
                "pages": [
                    {"page": 1, "heroes": [
                        {"id": 1, "name": "Shikamaru", "abilities": ["Shadow Possession"]},
                        {"id": 2, "name": "Ino"},
                        {"id": 3, "name": "Choji"}
                    ]},
                    {"page": 2, "heroes": [
                        {"id": 4, "name": "Shikadai", "natureTypes": ["Wind"]}
                    ]}
                ]
            }"#,
        )
    }

    /// Write arbitrary catalogue JSON
    #[allow(dead_code)] // Used in integration tests
    pub fn with_json(json: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("heroes.json");
        std::fs::write(&path, json).unwrap();
        Self { dir, path }
    }

    #[allow(dead_code)] // Used in integration tests
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Directory of fake hero images
#[allow(dead_code)] // Used in integration tests
pub struct ImagesDir {
    pub dir: TempDir,
}

impl ImagesDir {
    #[allow(dead_code)] // Used in integration tests
    pub fn with_files(files: &[(&str, &[u8])]) -> Self {
        let dir = TempDir::new().unwrap();
        for (name, bytes) in files {
            std::fs::write(dir.path().join(name), bytes).unwrap();
        }
        Self { dir }
    }

    #[allow(dead_code)] // Used in integration tests
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
