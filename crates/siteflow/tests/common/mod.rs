use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestSite {
    pub root: TempDir,
}

impl TestSite {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        Self { root }
    }

    /// Write a file under the content directory, creating parents
    pub fn write_content(&self, relative: &str, bytes: &[u8]) {
        let path = self.root.path().join("www").join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, bytes).unwrap();
    }

    #[allow(dead_code)]
    pub fn write_manifest(&self, content: &str) {
        let path = self.root.path().join("site.kdl");
        fs::write(path, content).unwrap();
    }

    pub fn path(&self) -> PathBuf {
        self.root.path().to_path_buf()
    }
}
