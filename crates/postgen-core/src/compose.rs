use crate::config::PostConfig;
use crate::error::Result;
use crate::paths;
use crate::slug::{slugify, validate_slug};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// PostRequest
// ---------------------------------------------------------------------------

/// Everything a front end collects before a post can be composed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostRequest {
    pub title: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub excerpt: String,
}

impl PostRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Build a request from raw front-end input. Categories and tags are
    /// comma-separated; see [`split_list`].
    pub fn from_raw(
        title: &str,
        categories: Option<&str>,
        tags: Option<&str>,
        excerpt: Option<&str>,
    ) -> Self {
        Self {
            title: title.trim().to_string(),
            categories: categories.map(split_list).unwrap_or_default(),
            tags: tags.map(split_list).unwrap_or_default(),
            excerpt: excerpt.map(|e| e.trim().to_string()).unwrap_or_default(),
        }
    }
}

/// Split a comma-separated string into trimmed, non-empty items.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

// ---------------------------------------------------------------------------
// PostFile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostFile {
    /// Relative to the site root, e.g. `_posts/2024-06-01-hello.md`.
    pub path: PathBuf,
    pub slug: String,
    pub date: DateTime<Utc>,
    pub content: String,
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Derive the target path and render the full document for `request`.
///
/// Pure: the only input from the environment is `now`, which the caller
/// supplies. Fails only when the title slugifies to nothing.
pub fn compose(
    request: &PostRequest,
    config: &PostConfig,
    now: DateTime<Utc>,
) -> Result<PostFile> {
    let slug = slugify(&request.title);
    validate_slug(&slug)?;

    let path = paths::post_path(&now, &slug, &config.extension);
    let content = render(request, config, &now);
    tracing::debug!(path = %path.display(), "composed post");

    Ok(PostFile {
        path,
        slug,
        date: now,
        content,
    })
}

/// Render a YAML flow sequence: `[]`, `[a]`, `[a, b]`.
///
/// Items that YAML would not read back as the same plain string are
/// double-quoted, e.g. `["#rust", "a: b"]`.
pub fn format_list(items: &[String]) -> String {
    let rendered: Vec<String> = items
        .iter()
        .map(|item| {
            if needs_quoting(item) {
                quote(item)
            } else {
                item.clone()
            }
        })
        .collect();
    format!("[{}]", rendered.join(", "))
}

const FLOW_CHARS: &[char] = &['#', '[', ']', '{', '}', ',', '"', '\\'];
const INDICATOR_CHARS: &[char] = &['&', '*', '!', '|', '>', '\'', '"', '%', '@', '`', '-', '?', ':'];

fn needs_quoting(item: &str) -> bool {
    let Some(first) = item.chars().next() else {
        return true;
    };
    if INDICATOR_CHARS.contains(&first) || item.trim() != item {
        return true;
    }
    if item.contains(FLOW_CHARS) || item.contains(": ") || item.ends_with(':') {
        return true;
    }
    if item.chars().any(char::is_control) {
        return true;
    }
    is_non_string_scalar(item)
}

/// Plain scalars YAML resolves to booleans, nulls or numbers.
fn is_non_string_scalar(item: &str) -> bool {
    let lower = item.to_ascii_lowercase();
    matches!(
        lower.as_str(),
        "true" | "false" | "yes" | "no" | "on" | "off" | "y" | "n" | "null" | "~"
            | ".inf" | "+.inf" | "-.inf" | ".nan"
    ) || lower.starts_with("0x")
        || lower.starts_with("0o")
        || lower.parse::<f64>().is_ok()
}

/// Date as written into the front matter, without the offset marker.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() && (c as u32) <= 0xff => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

fn render(request: &PostRequest, config: &PostConfig, now: &DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push_str("---\n");
    out.push_str(&format!("layout: {}\n", config.layout));
    out.push_str(&format!("title: {}\n", quote(&request.title)));
    out.push_str(&format!("date: {} {}\n", format_date(now), config.utc_offset));
    out.push_str(&format!("categories: {}\n", format_list(&request.categories)));
    out.push_str(&format!("tags: {}\n", format_list(&request.tags)));
    out.push_str(&format!("author: {}\n", quote(&config.author)));
    out.push_str(&format!("excerpt: {}\n", quote(&request.excerpt)));
    out.push_str("---\n\n");
    out.push_str(&format!("# {}\n", request.title));
    out.push_str(BODY);
    out
}

const BODY: &str = r#"
## Introduction

[Write your introduction here. Explain what this post is about and why it matters to your readers.]

## Main Content

### Key Points

1. **First Point**: [Develop your first main idea]
2. **Second Point**: [Develop your second main idea]
3. **Third Point**: [Develop your third main idea]

### Code Example (if applicable)

```python
# Add relevant code examples
def example_function():
    print("Hello, World!")
    return "success"
```

### Visual Elements

- Add images with: `![Alt text](path/to/image.jpg)`
- Create lists for better readability
- Use blockquotes for important information

> **Tip**: Remember to optimize your content for both readers and search engines.

## Implementation Details

[If this is a technical post, provide step-by-step implementation details]

1. Step one
2. Step two
3. Step three

## Best Practices

- Practice one
- Practice two
- Practice three

## Conclusion

[Wrap up your post by summarizing key takeaways and providing next steps for readers]

### What's Next?

- Link to related posts
- Suggest further reading
- Encourage reader engagement

---

*What are your thoughts on this topic? Feel free to share your experiences in the comments below!*
"#;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
