use crate::error::{PostError, Result};
use serde::{Deserialize, Serialize};

/// The metadata block at the top of a post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    #[serde(default)]
    pub layout: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub excerpt: String,
}

/// Extract the raw YAML between the opening `---` line and the next `---` line.
fn split_block(content: &str) -> Option<&str> {
    let rest = content.strip_prefix("---")?;
    let rest = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))?;
    if rest.starts_with("---") {
        return Some("");
    }
    let end = rest.find("\n---")?;
    Some(&rest[..end])
}

pub fn parse(content: &str) -> Result<FrontMatter> {
    let block = split_block(content).ok_or(PostError::MissingFrontMatter)?;
    if block.trim().is_empty() {
        return Ok(FrontMatter::default());
    }
    Ok(serde_yaml::from_str(block)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_block() {
        let doc = "---\nlayout: post\ntitle: \"Hi\"\ncategories: [a, b c]\ntags: []\n---\n\n# Hi\n";
        let fm = parse(doc).unwrap();
        assert_eq!(fm.title, "Hi");
        assert_eq!(fm.categories, vec!["a".to_string(), "b c".to_string()]);
        assert!(fm.tags.is_empty());
        assert_eq!(fm.author, "");
    }

    #[test]
    fn crlf_documents() {
        let doc = "---\r\ntitle: \"Hi\"\r\n---\r\nbody";
        assert_eq!(parse(doc).unwrap().title, "Hi");
    }

    #[test]
    fn empty_block() {
        assert_eq!(parse("---\n---\nbody").unwrap(), FrontMatter::default());
    }

    #[test]
    fn missing_block() {
        assert!(matches!(parse("# Just markdown\n"), Err(PostError::MissingFrontMatter)));
        assert!(matches!(parse("---\ntitle: never closed\n"), Err(PostError::MissingFrontMatter)));
    }

    #[test]
    fn invalid_yaml() {
        assert!(matches!(parse("---\ntitle: [unclosed\n---\n"), Err(PostError::Yaml(_))));
    }
}
