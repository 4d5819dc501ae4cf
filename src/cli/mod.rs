//! Command-line interface module.

mod args;
mod output;

pub use args::{Cli, Commands, ReadingTimeArgs, ScanArgs};

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::config::FolioConfig;
use crate::content::{ProjectStatus, collect_articles, extract_social_links, map_status, scan_articles};
use crate::display::{build_like_api_url, create_safe_href, format_comment_date};
use crate::text::ReadingTime;
use crate::utils::plural_count;
use crate::{debug, log};

/// Execute the parsed command.
pub fn run(cli: &Cli, config: &FolioConfig) -> Result<()> {
    match &cli.command {
        Commands::ReadingTime { args } => reading_time(args, config),
        Commands::Status { label } => status(label),
        Commands::Date { iso } => {
            println!("{}", format_comment_date(iso));
            Ok(())
        }
        Commands::LikeUrl { topic, slug } => {
            println!("{}", build_like_api_url(topic, slug));
            Ok(())
        }
        Commands::Href { mounted, url } => {
            println!("{}", create_safe_href(*mounted, url.as_deref()));
            Ok(())
        }
        Commands::Social { urls, pretty, text } => {
            let links = extract_social_links(urls.iter().map(String::as_str));
            debug!("social"; "recognized {} of {}", links.len(), plural_count(urls.len(), "url"));
            if *text {
                for link in &links {
                    println!("{link}");
                }
                Ok(())
            } else {
                output::write_json(&links, *pretty, None)
            }
        }
        Commands::Scan { args } => scan(args, config),
    }
}

fn reading_time(args: &ReadingTimeArgs, config: &FolioConfig) -> Result<()> {
    let text = match args.path.as_deref() {
        None => read_stdin()?,
        Some(path) if path == Path::new("-") => read_stdin()?,
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
    };

    let reading = ReadingTime::measure(Some(&text), config.reading.words_per_minute);
    debug!("reading"; "{} at {} wpm", plural_count(reading.words, "word"), config.reading.words_per_minute);

    if args.json {
        output::write_json(&reading, false, None)
    } else {
        println!("{}", reading.minutes);
        Ok(())
    }
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    Ok(text)
}

fn status(label: &str) -> Result<()> {
    match map_status(Some(label)) {
        Some(status) => {
            println!("{}", status.token());
            Ok(())
        }
        None => {
            let known: Vec<_> = ProjectStatus::ALL.iter().map(|s| s.label()).collect();
            bail!(
                "unknown status label {label:?} (expected one of: {})",
                known.join(", ")
            )
        }
    }
}

fn scan(args: &ScanArgs, config: &FolioConfig) -> Result<()> {
    let files = collect_articles(&args.paths, &config.content.dir)?;
    log!("scan"; "scanning {}", plural_count(files.len(), "file"));

    let report = scan_articles(&files, config);

    let mut summary = format!("found {}", plural_count(report.articles.len(), "article"));
    if report.drafts > 0 {
        summary.push_str(&format!(", skipped {}", plural_count(report.drafts, "draft")));
    }
    if report.failures > 0 {
        summary.push_str(&format!(", {} failed", report.failures));
    }
    log!("scan"; "{summary}");

    output::write_json(&report.articles, args.pretty, args.output.as_deref())
}
