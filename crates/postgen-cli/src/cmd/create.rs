use crate::output::{join_or_none, print_json};
use chrono::Utc;
use postgen_core::{
    compose::{compose, format_date, PostFile, PostRequest},
    config::PostConfig,
    store::PostStore,
    PostError,
};
use std::path::Path;

/// Argument mode: compose the post for `request` and write it under `root`.
pub fn run(
    root: &Path,
    request: &PostRequest,
    config: &PostConfig,
    json: bool,
) -> anyhow::Result<()> {
    let post = match compose(request, config, Utc::now()) {
        Ok(post) => post,
        Err(e) => return report_failure(e),
    };
    persist(&PostStore::new(root), request, &post, json)
}

/// Write an already composed post and report the outcome.
///
/// Collisions, empty titles and filesystem errors are reported to the user
/// and are not fatal; any other error propagates.
pub fn persist(
    store: &PostStore,
    request: &PostRequest,
    post: &PostFile,
    json: bool,
) -> anyhow::Result<()> {
    let written = store
        .ensure_exists()
        .and_then(|()| store.write(&post.path, &post.content));

    match written {
        Ok(_) => report_created(request, post, json),
        Err(e) => report_failure(e),
    }
}

fn report_created(request: &PostRequest, post: &PostFile, json: bool) -> anyhow::Result<()> {
    tracing::info!(path = %post.path.display(), "created post");

    if json {
        return print_json(&serde_json::json!({
            "path": post.path,
            "slug": post.slug,
            "title": request.title,
            "date": format_date(&post.date),
            "categories": request.categories,
            "tags": request.tags,
            "excerpt": request.excerpt,
        }));
    }

    println!("Created post: {}", post.path.display());
    println!("Title:      {}", request.title);
    println!("Date:       {}", format_date(&post.date));
    if !request.categories.is_empty() {
        println!("Categories: {}", join_or_none(&request.categories));
    }
    if !request.tags.is_empty() {
        println!("Tags:       {}", join_or_none(&request.tags));
    }
    Ok(())
}

pub fn report_failure(e: PostError) -> anyhow::Result<()> {
    match e {
        PostError::AlreadyExists(_) | PostError::EmptyTitle => {
            eprintln!("error: {e}");
            Ok(())
        }
        PostError::Io(ref io) => {
            eprintln!("error: could not create post: {io}");
            Ok(())
        }
        other => Err(anyhow::Error::new(other).context("failed to create post")),
    }
}
