use super::create;
use crate::output::join_or_none;
use anyhow::Context;
use chrono::{DateTime, Utc};
use postgen_core::{
    compose::{compose, PostFile, PostRequest},
    config::PostConfig,
    store::PostStore,
    PostError,
};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// How a prompt session ended.
#[derive(Debug)]
pub enum Session {
    Confirmed {
        request: PostRequest,
        post: PostFile,
    },
    Declined,
    Rejected(PostError),
    Exists(PathBuf),
    /// Stdin closed before the session finished.
    Eof,
    Interrupted,
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> anyhow::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line).context("failed to read from stdin")? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask for the post fields, show a summary and ask for confirmation.
pub fn session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    store: &PostStore,
    config: &PostConfig,
    now: DateTime<Utc>,
) -> anyhow::Result<Session> {
    writeln!(output, "Post generator - interactive mode")?;
    writeln!(output, "{}", "=".repeat(33))?;

    let Some(title) = prompt(input, output, "Post title: ")? else {
        return Ok(Session::Eof);
    };
    if title.is_empty() {
        return Ok(Session::Rejected(PostError::EmptyTitle));
    }
    let Some(categories) = prompt(input, output, "Categories (comma-separated, optional): ")? else {
        return Ok(Session::Eof);
    };
    let Some(tags) = prompt(input, output, "Tags (comma-separated, optional): ")? else {
        return Ok(Session::Eof);
    };
    let Some(excerpt) = prompt(input, output, "Excerpt (optional): ")? else {
        return Ok(Session::Eof);
    };

    let request = PostRequest::from_raw(&title, Some(&categories), Some(&tags), Some(&excerpt));
    let post = match compose(&request, config, now) {
        Ok(post) => post,
        Err(e) => return Ok(Session::Rejected(e)),
    };

    writeln!(output)?;
    writeln!(output, "Post summary:")?;
    writeln!(output, "  Title:      {}", request.title)?;
    writeln!(output, "  Categories: {}", join_or_none(&request.categories))?;
    writeln!(output, "  Tags:       {}", join_or_none(&request.tags))?;
    let excerpt = if request.excerpt.is_empty() { "None" } else { request.excerpt.as_str() };
    writeln!(output, "  Excerpt:    {excerpt}")?;
    writeln!(output, "  File:       {}", post.path.display())?;

    if store.exists(&post.path) {
        return Ok(Session::Exists(post.path));
    }

    writeln!(output)?;
    let Some(answer) = prompt(input, output, "Create this post? (y/N): ")? else {
        return Ok(Session::Eof);
    };
    match answer.to_lowercase().as_str() {
        "y" | "yes" => Ok(Session::Confirmed { request, post }),
        _ => Ok(Session::Declined),
    }
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

pub fn run(root: &Path, config: &PostConfig, json: bool) -> anyhow::Result<()> {
    let store = PostStore::new(root);
    let rt = tokio::runtime::Runtime::new()?;

    let task_store = store.clone();
    let task_config = config.clone();
    let outcome: anyhow::Result<Session> = rt.block_on(async move {
        let prompts = tokio::task::spawn_blocking(move || {
            let mut stdin = std::io::stdin().lock();
            let mut stdout = std::io::stdout();
            session(&mut stdin, &mut stdout, &task_store, &task_config, Utc::now())
        });
        tokio::select! {
            res = prompts => res.context("prompt task failed")?,
            _ = tokio::signal::ctrl_c() => Ok(Session::Interrupted),
        }
    });
    // A read blocked on stdin cannot be cancelled; don't wait for it.
    rt.shutdown_background();

    match outcome? {
        Session::Confirmed { request, post } => create::persist(&store, &request, &post, json),
        Session::Declined => {
            println!("Post creation cancelled.");
            Ok(())
        }
        Session::Rejected(e) => create::report_failure(e),
        Session::Exists(path) => create::report_failure(PostError::AlreadyExists(path)),
        Session::Eof | Session::Interrupted => {
            println!();
            println!("Goodbye!");
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
