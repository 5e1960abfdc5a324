pub mod compose;
pub mod config;
pub mod error;
pub mod frontmatter;
pub mod io;
pub mod paths;
pub mod slug;
pub mod store;

pub use error::{PostError, Result};
