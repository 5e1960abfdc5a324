use crate::output::print_json;
use anyhow::Context;
use chrono::Local;
use postgen_core::store::PostStore;
use std::path::Path;

pub fn run(root: &Path, limit: usize, json: bool) -> anyhow::Result<()> {
    let store = PostStore::new(root);
    let listing = store
        .list_recent(limit)
        .with_context(|| format!("failed to list {}", store.dir().display()))?;

    let Some(posts) = listing else {
        if json {
            return print_json(&serde_json::json!([]));
        }
        println!("No _posts directory found. Create a post first.");
        return Ok(());
    };

    if json {
        let summaries: Vec<_> = posts
            .iter()
            .map(|p| {
                serde_json::json!({
                    "file_name": p.file_name,
                    "modified": p.modified,
                    "title": p.front_matter().ok().map(|fm| fm.title),
                })
            })
            .collect();
        return print_json(&summaries);
    }

    println!("Recent posts (last {}):", posts.len());
    println!("{}", "-".repeat(50));
    for (i, post) in posts.iter().enumerate() {
        let modified = post.modified.with_timezone(&Local).format("%Y-%m-%d %H:%M");
        println!("{:2}. {} (modified: {modified})", i + 1, post.file_name);
    }
    Ok(())
}
