use crate::error::Result;
use crate::frontmatter::{self, FrontMatter};
use crate::io;
use crate::paths;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// PostEntry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostEntry {
    pub file_name: String,
    pub path: PathBuf,
    pub modified: DateTime<Utc>,
}

impl PostEntry {
    pub fn front_matter(&self) -> Result<FrontMatter> {
        let content = std::fs::read_to_string(&self.path)?;
        frontmatter::parse(&content)
    }
}

// ---------------------------------------------------------------------------
// PostStore
// ---------------------------------------------------------------------------

/// The `_posts` directory of a site.
///
/// Paths handed to [`PostStore::exists`] and [`PostStore::write`] are resolved
/// against the site root, so the relative paths produced by
/// [`crate::compose::compose`] can be passed straight through.
#[derive(Debug, Clone)]
pub struct PostStore {
    root: PathBuf,
}

impl PostStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn dir(&self) -> PathBuf {
        paths::posts_dir(&self.root)
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    pub fn ensure_exists(&self) -> Result<()> {
        io::ensure_dir(&self.dir())
    }

    pub fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    /// Create the post at `path`. Never overwrites: an existing file yields
    /// [`crate::PostError::AlreadyExists`] and is left untouched.
    pub fn write(&self, path: &Path, content: &str) -> Result<PathBuf> {
        let full = self.resolve(path);
        io::write_new(&full, content.as_bytes())?;
        tracing::debug!(path = %full.display(), bytes = content.len(), "wrote post");
        Ok(full)
    }

    /// The `limit` most recently modified post files, newest first.
    ///
    /// Returns `None` when the store directory does not exist yet, so callers
    /// can tell "no store" apart from "empty store".
    pub fn list_recent(&self, limit: usize) -> Result<Option<Vec<PostEntry>>> {
        let dir = self.dir();
        if !dir.is_dir() {
            tracing::debug!(dir = %dir.display(), "no posts directory");
            return Ok(None);
        }

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type()?.is_file() || !paths::is_post_file(&path) {
                continue;
            }
            let modified: DateTime<Utc> = entry.metadata()?.modified()?.into();
            entries.push(PostEntry {
                file_name: entry.file_name().to_string_lossy().into_owned(),
                path,
                modified,
            });
        }

        entries.sort_by(|a, b| {
            b.modified
                .cmp(&a.modified)
                .then_with(|| b.file_name.cmp(&a.file_name))
        });
        entries.truncate(limit);
        Ok(Some(entries))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PostError;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    fn touch(path: &Path, secs_ago: u64) {
        std::fs::write(path, "---\ntitle: \"t\"\n---\n").unwrap();
        let when = SystemTime::now() - Duration::from_secs(secs_ago);
        std::fs::File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(when)
            .unwrap();
    }

    #[test]
    fn ensure_exists_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = PostStore::new(dir.path());
        store.ensure_exists().unwrap();
        store.ensure_exists().unwrap();
        assert!(dir.path().join("_posts").is_dir());
    }

    #[test]
    fn ensure_exists_creates_missing_parents() {
        let dir = TempDir::new().unwrap();
        let store = PostStore::new(dir.path().join("site/nested"));
        store.ensure_exists().unwrap();
        assert!(dir.path().join("site/nested/_posts").is_dir());
    }

    #[test]
    fn second_write_is_already_exists_and_keeps_first_content() {
        let dir = TempDir::new().unwrap();
        let store = PostStore::new(dir.path());
        store.ensure_exists().unwrap();
        let path = Path::new("_posts/2024-06-01-hello.md");

        assert!(!store.exists(path));
        let full = store.write(path, "first").unwrap();
        assert_eq!(full, dir.path().join(path));
        assert!(store.exists(path));

        let err = store.write(path, "second").unwrap_err();
        assert!(matches!(err, PostError::AlreadyExists(_)));
        assert_eq!(std::fs::read_to_string(full).unwrap(), "first");
    }

    #[test]
    fn write_without_store_is_io_error() {
        let dir = TempDir::new().unwrap();
        let store = PostStore::new(dir.path());
        let err = store.write(Path::new("_posts/a.md"), "x").unwrap_err();
        assert!(matches!(err, PostError::Io(_)));
    }

    #[test]
    fn list_recent_missing_dir_is_none() {
        let dir = TempDir::new().unwrap();
        let store = PostStore::new(dir.path());
        assert_eq!(store.list_recent(10).unwrap(), None);
    }

    #[test]
    fn list_recent_empty_dir_is_some_empty() {
        let dir = TempDir::new().unwrap();
        let store = PostStore::new(dir.path());
        store.ensure_exists().unwrap();
        assert_eq!(store.list_recent(10).unwrap(), Some(Vec::new()));
    }

    #[test]
    fn list_recent_orders_newest_first_and_truncates() {
        let dir = TempDir::new().unwrap();
        let store = PostStore::new(dir.path());
        store.ensure_exists().unwrap();
        let posts = store.dir();
        touch(&posts.join("a.md"), 500);
        touch(&posts.join("b.md"), 100);
        touch(&posts.join("c.markdown"), 300);
        touch(&posts.join("d.md"), 50);
        touch(&posts.join("e.md"), 400);

        let names: Vec<String> = store
            .list_recent(3)
            .unwrap()
            .unwrap()
            .into_iter()
            .map(|e| e.file_name)
            .collect();
        assert_eq!(names, vec!["d.md", "b.md", "c.markdown"]);
    }

    #[test]
    fn list_recent_skips_other_files_and_dirs() {
        let dir = TempDir::new().unwrap();
        let store = PostStore::new(dir.path());
        store.ensure_exists().unwrap();
        let posts = store.dir();
        touch(&posts.join("post.md"), 10);
        std::fs::write(posts.join("notes.txt"), "x").unwrap();
        std::fs::create_dir(posts.join("drafts.md")).unwrap();

        let entries = store.list_recent(10).unwrap().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].file_name, "post.md");
        assert_eq!(entries[0].front_matter().unwrap().title, "t");
    }
}
