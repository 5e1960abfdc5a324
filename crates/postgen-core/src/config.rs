use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PostConfig
// ---------------------------------------------------------------------------

/// Per-site values that end up in every generated post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostConfig {
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default = "default_layout")]
    pub layout: String,
    /// Offset marker appended to the front matter date.
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_author() -> String {
    "CristianBanan".to_string()
}

fn default_layout() -> String {
    "post".to_string()
}

fn default_utc_offset() -> String {
    "+0000".to_string()
}

fn default_extension() -> String {
    "md".to_string()
}

impl Default for PostConfig {
    fn default() -> Self {
        Self {
            author: default_author(),
            layout: default_layout(),
            utc_offset: default_utc_offset(),
            extension: default_extension(),
        }
    }
}

impl PostConfig {
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = layout.into();
        self
    }
}
