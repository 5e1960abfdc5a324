use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const POSTS_DIR: &str = "_posts";

/// Extensions the listing recognizes as post files.
pub const POST_EXTENSIONS: &[&str] = &["md", "markdown"];

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn posts_dir(root: &Path) -> PathBuf {
    root.join(POSTS_DIR)
}

/// `YYYY-MM-DD-<slug>.<ext>`
pub fn post_file_name(date: &DateTime<Utc>, slug: &str, extension: &str) -> String {
    format!("{}-{slug}.{extension}", date.format("%Y-%m-%d"))
}

/// Path of a post relative to the site root: `_posts/YYYY-MM-DD-<slug>.<ext>`.
pub fn post_path(date: &DateTime<Utc>, slug: &str, extension: &str) -> PathBuf {
    Path::new(POSTS_DIR).join(post_file_name(date, slug, extension))
}

pub fn is_post_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| POST_EXTENSIONS.contains(&e))
        .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
