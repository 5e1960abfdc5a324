mod cmd;
mod output;
mod root;

use clap::Parser;
use postgen_core::{compose::PostRequest, config::PostConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "new-post",
    about = "Generate Jekyll blog post templates and list recent posts",
    version
)]
struct Cli {
    /// Post title (omit to be prompted)
    title: Option<String>,

    /// Comma-separated categories
    #[arg(short, long)]
    categories: Option<String>,

    /// Comma-separated tags
    #[arg(short, long)]
    tags: Option<String>,

    /// Post excerpt
    #[arg(short, long)]
    excerpt: Option<String>,

    /// Prompt for every field
    #[arg(short, long)]
    interactive: bool,

    /// List the N most recently modified posts instead of creating one
    #[arg(
        short,
        long,
        value_name = "N",
        num_args = 0..=1,
        default_missing_value = "10"
    )]
    list: Option<usize>,

    /// Author written into the front matter
    #[arg(long)]
    author: Option<String>,

    /// Layout written into the front matter
    #[arg(long)]
    layout: Option<String>,

    /// Site root containing _posts/ (default: current directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, short = 'j')]
    json: bool,
}

impl Cli {
    fn config(&self) -> PostConfig {
        let mut config = PostConfig::default();
        if let Some(author) = &self.author {
            config = config.with_author(author);
        }
        if let Some(layout) = &self.layout {
            config = config.with_layout(layout);
        }
        config
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());
    let config = cli.config();

    let result = if let Some(limit) = cli.list {
        cmd::list::run(&root, limit, cli.json)
    } else if let (false, Some(title)) = (cli.interactive, cli.title.as_deref()) {
        let request = PostRequest::from_raw(
            title,
            cli.categories.as_deref(),
            cli.tags.as_deref(),
            cli.excerpt.as_deref(),
        );
        cmd::create::run(&root, &request, &config, cli.json)
    } else {
        cmd::interactive::run(&root, &config, cli.json)
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
