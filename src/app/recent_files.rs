use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::error::Result;

pub const MAX_RECENT_FILES: usize = 5;

/// Most-recently-used file list, newest first.
///
/// Persisted as a flat text file, one path per line, and rewritten in full
/// after every change.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentFiles {
    entries: Vec<String>,
    store_path: PathBuf,
}

impl RecentFiles {
    /// Get recent-files path (cross-platform)
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("falcon");
        path.push("recent.txt");
        path
    }

    /// Read the list from `store_path`. A missing or unreadable file yields an
    /// empty list; blank lines and duplicates are dropped.
    pub fn load(store_path: impl Into<PathBuf>) -> Self {
        let store_path = store_path.into();
        let mut recent = Self {
            entries: Vec::new(),
            store_path,
        };

        match fs::read_to_string(&recent.store_path) {
            Ok(contents) => {
                for line in contents.lines().map(str::trim).filter(|l| !l.is_empty()) {
                    if recent.entries.len() == MAX_RECENT_FILES {
                        break;
                    }
                    if !recent.entries.iter().any(|e| e == line) {
                        recent.entries.push(line.to_string());
                    }
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => log::warn!("Failed to read recent files {:?}: {}", recent.store_path, e),
        }

        recent
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Move `path` to the front, dropping the oldest entry past the limit.
    pub fn push(&mut self, path: &str) -> Result<()> {
        self.entries.retain(|e| e != path);
        self.entries.insert(0, path.to_string());
        self.entries.truncate(MAX_RECENT_FILES);
        self.save()
    }

    pub fn remove(&mut self, path: &str) -> Result<()> {
        let before = self.entries.len();
        self.entries.retain(|e| e != path);
        if self.entries.len() == before {
            return Ok(());
        }
        self.save()
    }

    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.save()
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.store_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut contents = self.entries.join("\n");
        if !contents.is_empty() {
            contents.push('\n');
        }
        fs::write(&self.store_path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> PathBuf {
        dir.path().join("falcon").join("recent.txt")
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let recent = RecentFiles::load(store(&dir));
        assert!(recent.is_empty());
    }

    #[test]
    fn test_push_puts_newest_first_and_persists() {
        let dir = TempDir::new().unwrap();
        let mut recent = RecentFiles::load(store(&dir));
        recent.push("/a.txt").unwrap();
        recent.push("/b.txt").unwrap();

        assert_eq!(recent.entries(), ["/b.txt", "/a.txt"]);
        assert_eq!(fs::read_to_string(store(&dir)).unwrap(), "/b.txt\n/a.txt\n");
        assert_eq!(RecentFiles::load(store(&dir)), recent);
    }

    #[test]
    fn test_push_existing_moves_to_front_without_duplicate() {
        let dir = TempDir::new().unwrap();
        let mut recent = RecentFiles::load(store(&dir));
        for p in ["/a", "/b", "/c"] {
            recent.push(p).unwrap();
        }
        recent.push("/a").unwrap();
        assert_eq!(recent.entries(), ["/a", "/c", "/b"]);
    }

    #[test]
    fn test_never_exceeds_limit() {
        let dir = TempDir::new().unwrap();
        let mut recent = RecentFiles::load(store(&dir));
        for i in 0..12 {
            recent.push(&format!("/file{}.txt", i % 7)).unwrap();
            assert!(recent.entries().len() <= MAX_RECENT_FILES);
            let mut sorted = recent.entries().to_vec();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), recent.entries().len());
        }
        assert_eq!(recent.get(0), Some("/file4.txt"));
        assert_eq!(recent.get(4), Some("/file0.txt"));
        assert_eq!(recent.get(5), None);
    }

    #[test]
    fn test_load_sanitizes_hand_edited_file() {
        let dir = TempDir::new().unwrap();
        let path = store(&dir);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "/a\n\n/b\n/a\n  \n/c\n/d\n/e\n/f\n/g\n").unwrap();

        let recent = RecentFiles::load(&path);
        assert_eq!(recent.entries(), ["/a", "/b", "/c", "/d", "/e"]);
    }

    #[test]
    fn test_remove_and_clear() {
        let dir = TempDir::new().unwrap();
        let mut recent = RecentFiles::load(store(&dir));
        recent.push("/a").unwrap();
        recent.push("/b").unwrap();

        recent.remove("/a").unwrap();
        assert_eq!(recent.entries(), ["/b"]);
        recent.remove("/not-there").unwrap();
        assert_eq!(recent.entries(), ["/b"]);

        recent.clear().unwrap();
        assert!(recent.is_empty());
        assert_eq!(fs::read_to_string(store(&dir)).unwrap(), "");
    }
}
