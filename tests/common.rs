use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

pub struct Fixture {
    pub dir: TempDir,
}

impl Default for Fixture {
    fn default() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }
}

impl Fixture {
    pub fn file(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn missing(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
