use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PostError {
    #[error("title cannot be empty: it must contain at least one letter, digit or underscore")]
    EmptyTitle,

    #[error("post '{}' already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("document does not start with a '---' front matter block")]
    MissingFrontMatter,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, PostError>;
