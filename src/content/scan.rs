//! Article discovery and batch summarization.
//!
//! Files are collected with `jwalk` and summarized in parallel with `rayon`.
//! A file that fails to read or parse is logged and skipped; it never aborts
//! the rest of the scan.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use jwalk::WalkDir;
use rayon::prelude::*;

use super::article::{ArticleSummary, summarize};
use crate::config::FolioConfig;
use crate::log;
use crate::utils::path::resolve_path;

/// Extensions treated as articles.
const ARTICLE_EXTENSIONS: [&str; 2] = ["md", "markdown"];

/// Result of a batch scan.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Summaries sorted by path.
    pub articles: Vec<ArticleSummary>,
    /// Drafts left out because of `content.skip_drafts`.
    pub drafts: usize,
    /// Files that could not be summarized.
    pub failures: usize,
}

/// Whether `path` has an article extension.
pub fn is_article(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ARTICLE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Collect article files for the given CLI paths.
///
/// - no paths: every article under the content directory
/// - `-`: paths read from stdin, one per line
/// - otherwise each path is a file or directory, tried relative to cwd
///   first and then to the content directory
pub fn collect_articles(paths: &[PathBuf], content_dir: &Path) -> Result<Vec<PathBuf>> {
    let paths: Vec<PathBuf> = if paths.len() == 1 && paths[0].as_os_str() == "-" {
        read_paths_from_stdin()?
    } else {
        paths.to_vec()
    };

    if paths.is_empty() {
        return Ok(walk_articles(content_dir));
    }

    let mut files = Vec::new();
    for path in &paths {
        let resolved = resolve_path(path, content_dir);

        if resolved.is_file() {
            if !is_article(&resolved) {
                bail!("Not a markdown article: {}", path.display());
            }
            files.push(resolved);
        } else if resolved.is_dir() {
            files.extend(walk_articles(&resolved));
        } else {
            bail!(
                "Path not found: {}\n  Tried:\n    - {}\n    - {}",
                path.display(),
                path.display(),
                content_dir.join(path).display()
            );
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// Every article file below `dir`, sorted.
fn walk_articles(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .skip_hidden(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| is_article(p))
        .collect();
    files.sort();
    files
}

/// Read file paths from stdin, one per line
fn read_paths_from_stdin() -> Result<Vec<PathBuf>> {
    let stdin = io::stdin();
    let mut paths = Vec::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(PathBuf::from(trimmed));
        }
    }

    Ok(paths)
}

/// Summarize `files` in parallel.
pub fn scan_articles(files: &[PathBuf], config: &FolioConfig) -> ScanReport {
    let wpm = config.reading.words_per_minute;
    let content_dir = &config.content.dir;

    let results: Vec<Result<ArticleSummary>> = files
        .par_iter()
        .map(|file| {
            let source = std::fs::read_to_string(file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let rel = match file.strip_prefix(content_dir) {
                Ok(rel) => rel.to_path_buf(),
                Err(_) => config.root_relative(file),
            };
            summarize(&rel, &source, wpm)
        })
        .collect();

    let mut report = ScanReport::default();
    for result in results {
        match result {
            Ok(article) if article.draft && config.content.skip_drafts => report.drafts += 1,
            Ok(article) => report.articles.push(article),
            Err(e) => {
                log!("error"; "{:#}", e);
                report.failures += 1;
            }
        }
    }

    report.articles.sort_by(|a, b| a.path.cmp(&b.path));
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site() -> (tempfile::TempDir, FolioConfig) {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        fs::create_dir_all(content.join("react")).unwrap();
        fs::create_dir_all(content.join("rust")).unwrap();
        fs::write(content.join("react/hooks.md"), "# Hooks\n\nuse state wisely").unwrap();
        fs::write(
            content.join("rust/draft.md"),
            "---\ndraft: true\n---\n# Draft",
        )
        .unwrap();
        fs::write(content.join("about.markdown"), "about me").unwrap();
        fs::write(content.join("notes.txt"), "not an article").unwrap();

        let config = FolioConfig::discover(Path::new("folio.toml"), dir.path()).unwrap();
        (dir, config)
    }

    #[test]
    fn test_is_article() {
        assert!(is_article(Path::new("a/b.md")));
        assert!(is_article(Path::new("a/b.MD")));
        assert!(is_article(Path::new("a/b.markdown")));
        assert!(!is_article(Path::new("a/b.txt")));
        assert!(!is_article(Path::new("a/md")));
    }

    #[test]
    fn test_collect_all_articles() {
        let (_dir, config) = site();
        let files = collect_articles(&[], &config.content.dir).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["about.markdown", "hooks.md", "draft.md"]);
    }

    #[test]
    fn test_collect_relative_to_content_dir() {
        let (_dir, config) = site();
        let files = collect_articles(&[PathBuf::from("react")], &config.content.dir).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("react/hooks.md"));
    }

    #[test]
    fn test_collect_rejects_non_article_and_missing() {
        let (_dir, config) = site();
        assert!(collect_articles(&[PathBuf::from("notes.txt")], &config.content.dir).is_err());
        assert!(collect_articles(&[PathBuf::from("missing.md")], &config.content.dir).is_err());
    }

    #[test]
    fn test_scan_skips_drafts() {
        let (_dir, config) = site();
        let files = collect_articles(&[], &config.content.dir).unwrap();
        let report = scan_articles(&files, &config);

        assert_eq!(report.drafts, 1);
        assert_eq!(report.failures, 0);
        let paths: Vec<_> = report.articles.iter().map(|a| a.path.as_str()).collect();
        assert_eq!(paths, ["about.markdown", "react/hooks.md"]);
        assert_eq!(report.articles[1].like_url, "/api/posts/react/hooks/like");
        assert_eq!(report.articles[0].topic, "general");
    }

    #[test]
    fn test_scan_includes_drafts_when_allowed() {
        let (_dir, mut config) = site();
        config.content.skip_drafts = false;
        let files = collect_articles(&[], &config.content.dir).unwrap();
        let report = scan_articles(&files, &config);

        assert_eq!(report.drafts, 0);
        assert_eq!(report.articles.len(), 3);
    }

    #[test]
    fn test_scan_counts_failures() {
        let (dir, config) = site();
        let broken = dir.path().join("content/broken.md");
        fs::write(&broken, "+++\ntitle = \n+++\n").unwrap();
        let missing = dir.path().join("content/gone.md");

        let report = scan_articles(&[broken, missing], &config);
        assert_eq!(report.failures, 2);
        assert!(report.articles.is_empty());
    }
}
