//! Article frontmatter and per-article summaries.
//!
//! Articles are markdown files with optional YAML-like (`---`) or TOML
//! (`+++`) frontmatter:
//!
//! ```text
//! ---
//! title: Understanding Hooks
//! date: 2025-01-15T14:30:00Z
//! topic: react
//! tags: hooks, state
//! ---
//!
//! # Understanding Hooks
//! ...
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::status::{ProjectStatus, map_status};
use crate::display::{build_like_api_url, format_comment_date};
use crate::text::ReadingTime;

/// Topic used when an article sits directly in the content root.
pub const DEFAULT_TOPIC: &str = "general";

/// Frontmatter fields of an article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleMeta {
    pub title: Option<String>,
    /// Quoted or bare; TOML datetimes are kept in their RFC 3339 form.
    #[serde(deserialize_with = "string_or_datetime")]
    pub date: Option<String>,
    pub topic: Option<String>,
    pub slug: Option<String>,
    /// Human status label, e.g. "In Progress".
    pub status: Option<String>,
    pub draft: bool,
    pub tags: Vec<String>,
    /// Unrecognized keys, preserved for callers.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ArticleMeta {
    /// Split `content` into frontmatter metadata and body.
    ///
    /// Returns `None` for metadata when the file has no frontmatter block.
    /// Only TOML frontmatter can fail to parse.
    pub fn extract(content: &str) -> Result<(Option<Self>, &str)> {
        match detect_frontmatter(content) {
            Some((fm, body, true)) => {
                let meta = toml::from_str(fm).context("invalid TOML frontmatter")?;
                Ok((Some(meta), body))
            }
            Some((fm, body, false)) => Ok((Some(Self::parse_yaml_like(fm)), body)),
            None => Ok((None, content)),
        }
    }

    /// Parse simple YAML-like frontmatter (key: value).
    fn parse_yaml_like(content: &str) -> Self {
        let mut meta = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = unquote(value.trim());

            match key.trim().to_lowercase().as_str() {
                "title" => meta.title = Some(value.to_string()),
                "date" => meta.date = Some(value.to_string()),
                "topic" => meta.topic = Some(value.to_string()),
                "slug" => meta.slug = Some(value.to_string()),
                "status" => meta.status = Some(value.to_string()),
                "draft" => meta.draft = value.eq_ignore_ascii_case("true"),
                "tags" => {
                    meta.tags = value
                        .trim_start_matches('[')
                        .trim_end_matches(']')
                        .split(',')
                        .map(|s| unquote(s.trim()).to_string())
                        .filter(|s| !s.is_empty())
                        .collect();
                }
                _ => {
                    // Preserve original key case
                    meta.extra
                        .insert(key.trim().to_string(), parse_yaml_value(value));
                }
            }
        }

        meta
    }
}

/// Derived, display-ready facts about one article.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleSummary {
    /// Path relative to the content directory.
    pub path: String,
    pub slug: String,
    pub topic: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// `date` rendered for display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    pub draft: bool,
    pub tags: Vec<String>,
    pub words: usize,
    pub minutes: u32,
    pub like_url: String,
}

/// Summarize one article.
///
/// `path` should be relative to the content directory; its parent directory
/// becomes the default topic and its stem the default slug. Reading time
/// covers the body only.
pub fn summarize(path: &Path, source: &str, words_per_minute: u32) -> Result<ArticleSummary> {
    let (meta, body) = ArticleMeta::extract(source)
        .with_context(|| format!("failed to read frontmatter of {}", path.display()))?;
    let meta = meta.unwrap_or_default();

    let slug = non_empty(meta.slug).unwrap_or_else(|| file_stem(path));
    let topic = non_empty(meta.topic)
        .or_else(|| parent_name(path))
        .unwrap_or_else(|| DEFAULT_TOPIC.to_string());
    let title = non_empty(meta.title)
        .or_else(|| first_heading(body))
        .unwrap_or_else(|| slug.clone());
    let reading = ReadingTime::measure(Some(body), words_per_minute);

    Ok(ArticleSummary {
        path: path.to_string_lossy().replace('\\', "/"),
        like_url: build_like_api_url(&topic, &slug),
        date_display: meta.date.as_deref().map(format_comment_date),
        date: meta.date,
        status: map_status(meta.status.as_deref()),
        draft: meta.draft,
        tags: meta.tags,
        words: reading.words,
        minutes: reading.minutes,
        slug,
        topic,
        title,
    })
}

/// Text of the first level-1 heading.
fn first_heading(body: &str) -> Option<String> {
    use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

    let mut current: Option<String> = None;
    for event in Parser::new(body) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => current = Some(String::new()),
            Event::Text(text) | Event::Code(text) => {
                if let Some(ref mut heading) = current {
                    heading.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                if let Some(heading) = current.take() {
                    let heading = heading.trim();
                    if !heading.is_empty() {
                        return Some(heading.to_string());
                    }
                }
            }
            _ => {}
        }
    }
    None
}

/// Accept `date` as a string or as a native TOML datetime.
fn string_or_datetime<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DateField {
        Text(String),
        Datetime(toml::value::Datetime),
    }

    Ok(Option::<DateField>::deserialize(deserializer)?.map(|field| match field {
        DateField::Text(text) => text,
        DateField::Datetime(datetime) => datetime.to_string(),
    }))
}

/// Detect and extract frontmatter.
/// Returns `(frontmatter, body, is_toml)` if found.
fn detect_frontmatter(content: &str) -> Option<(&str, &str, bool)> {
    let trimmed = content.trim_start();

    for (fence, is_toml) in [("---", false), ("+++", true)] {
        if let Some(rest) = trimmed.strip_prefix(fence)
            && let Some(end) = rest.find(&format!("\n{fence}"))
        {
            let fm = rest[..end].trim();
            let body = rest[end + 1 + fence.len()..].trim_start_matches(['\r', '\n']);
            return Some((fm, body, is_toml));
        }
    }

    None
}

/// Parse a YAML-like scalar to JSON.
fn parse_yaml_value(s: &str) -> Value {
    if s.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if s.eq_ignore_ascii_case("null") || s == "~" {
        return Value::Null;
    }
    if let Ok(n) = s.parse::<i64>() {
        return Value::Number(n.into());
    }
    if let Ok(n) = s.parse::<f64>()
        && let Some(num) = serde_json::Number::from_f64(n)
    {
        return Value::Number(num);
    }
    Value::String(s.to_string())
}

fn unquote(s: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(quote).and_then(|s| s.strip_suffix(quote)) {
            return inner;
        }
    }
    s
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn parent_name(path: &Path) -> Option<String> {
    path.parent()?
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_frontmatter() {
        let content = "---\ntitle: \"Hello\"\ndate: 2024-01-01\ntags: a, b\nstatus: In Progress\nreading_level: 3\n---\n\n# Body";
        let (meta, body) = ArticleMeta::extract(content).unwrap();
        let meta = meta.unwrap();

        assert_eq!(meta.title.as_deref(), Some("Hello"));
        assert_eq!(meta.date.as_deref(), Some("2024-01-01"));
        assert_eq!(meta.tags, vec!["a", "b"]);
        assert_eq!(meta.status.as_deref(), Some("In Progress"));
        assert_eq!(meta.extra.get("reading_level"), Some(&Value::from(3)));
        assert_eq!(body, "# Body");
    }

    #[test]
    fn test_yaml_time_value_keeps_colons() {
        let content = "---\ndate: 2025-01-15T14:30:00Z\n---\nbody";
        let (meta, _) = ArticleMeta::extract(content).unwrap();
        assert_eq!(meta.unwrap().date.as_deref(), Some("2025-01-15T14:30:00Z"));
    }

    #[test]
    fn test_yaml_bracket_tags() {
        let content = "---\ntags: [\"rust\", 'web']\n---\n";
        let (meta, _) = ArticleMeta::extract(content).unwrap();
        assert_eq!(meta.unwrap().tags, vec!["rust", "web"]);
    }

    #[test]
    fn test_toml_frontmatter() {
        let content = "+++\ntitle = \"Hello\"\ntags = [\"a\", \"b\"]\ndraft = true\nseries = \"intro\"\n+++\n\n# Body";
        let (meta, body) = ArticleMeta::extract(content).unwrap();
        let meta = meta.unwrap();

        assert_eq!(meta.title.as_deref(), Some("Hello"));
        assert_eq!(meta.tags, vec!["a", "b"]);
        assert!(meta.draft);
        assert_eq!(meta.extra.get("series"), Some(&Value::from("intro")));
        assert_eq!(body, "# Body");
    }

    #[test]
    fn test_toml_bare_datetime() {
        let content = "+++\ntitle = \"Hi\"\ndate = 2025-01-15T14:30:00Z\n+++\nbody";
        let (meta, _) = ArticleMeta::extract(content).unwrap();
        assert_eq!(meta.unwrap().date.as_deref(), Some("2025-01-15T14:30:00Z"));

        let summary = summarize(Path::new("rust/a.md"), content, 200).unwrap();
        assert_eq!(
            summary.date_display.as_deref(),
            Some("January 15, 2025, 02:30 PM")
        );
    }

    #[test]
    fn test_toml_bare_date_and_quoted_date() {
        let content = "+++\ndate = 2025-01-15\n+++\n";
        let (meta, _) = ArticleMeta::extract(content).unwrap();
        assert_eq!(meta.unwrap().date.as_deref(), Some("2025-01-15"));

        let content = "+++\ndate = \"2024-06-01\"\n+++\n";
        let (meta, _) = ArticleMeta::extract(content).unwrap();
        assert_eq!(meta.unwrap().date.as_deref(), Some("2024-06-01"));
    }

    #[test]
    fn test_invalid_toml_frontmatter() {
        let content = "+++\ntitle = \n+++\nbody";
        assert!(ArticleMeta::extract(content).is_err());
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Just content";
        let (meta, body) = ArticleMeta::extract(content).unwrap();
        assert!(meta.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn test_summarize_defaults_from_path_and_heading() {
        let source = "# Understanding `useEffect`\n\nSome words here.";
        let summary = summarize(Path::new("react/use-effect.md"), source, 200).unwrap();

        assert_eq!(summary.slug, "use-effect");
        assert_eq!(summary.topic, "react");
        assert_eq!(summary.title, "Understanding useEffect");
        assert_eq!(summary.like_url, "/api/posts/react/use-effect/like");
        assert_eq!(summary.path, "react/use-effect.md");
        assert_eq!(summary.minutes, 1);
        assert!(summary.date.is_none());
        assert!(summary.status.is_none());
    }

    #[test]
    fn test_summarize_frontmatter_overrides() {
        let source = "---\ntitle: Custom\nslug: custom-slug\ntopic: rust\ndate: 2025-01-15T14:30:00.000Z\nstatus: On Hold\n---\n# Heading\n";
        let summary = summarize(Path::new("misc/file.md"), source, 200).unwrap();

        assert_eq!(summary.title, "Custom");
        assert_eq!(summary.slug, "custom-slug");
        assert_eq!(summary.topic, "rust");
        assert_eq!(summary.like_url, "/api/posts/rust/custom-slug/like");
        assert_eq!(summary.status, Some(ProjectStatus::OnHold));
        assert_eq!(
            summary.date_display.as_deref(),
            Some("January 15, 2025, 02:30 PM")
        );
    }

    #[test]
    fn test_summarize_root_article_uses_default_topic() {
        let summary = summarize(Path::new("hello.md"), "hello world", 200).unwrap();
        assert_eq!(summary.topic, DEFAULT_TOPIC);
        assert_eq!(summary.title, "hello");
        assert_eq!(summary.words, 2);
    }

    #[test]
    fn test_summarize_counts_body_only() {
        let tags = vec!["tag"; 500].join(", ");
        let body = vec!["word"; 200].join(" ");
        let source = format!("---\ntags: {tags}\n---\n{body}\n```\n{}\n```\n", "code ".repeat(900));
        let summary = summarize(Path::new("a/b.md"), &source, 200).unwrap();
        assert_eq!(summary.words, 200);
        assert_eq!(summary.minutes, 1);
    }

    #[test]
    fn test_summarize_unknown_status_is_none() {
        let source = "---\nstatus: in progress\n---\n";
        let summary = summarize(Path::new("a/b.md"), source, 200).unwrap();
        assert_eq!(summary.status, None);
    }

    #[test]
    fn test_summary_json_skips_absent_fields() {
        let summary = summarize(Path::new("a/b.md"), "text", 200).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("date").is_none());
        assert!(json.get("status").is_none());
        assert_eq!(json["like_url"], "/api/posts/a/b/like");
    }
}
