//! Social profile link extraction.
//!
//! Turns the free-form link list from the contact/about settings into typed
//! links the footer can render with the right icon.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::Serialize;
use url::Url;

/// Platform a profile link points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    GitHub,
    LinkedIn,
    Twitter,
    Instagram,
    YouTube,
    Mastodon,
    Email,
    Website,
}

impl SocialPlatform {
    /// Display name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::LinkedIn => "LinkedIn",
            Self::Twitter => "Twitter",
            Self::Instagram => "Instagram",
            Self::YouTube => "YouTube",
            Self::Mastodon => "Mastodon",
            Self::Email => "Email",
            Self::Website => "Website",
        }
    }

    /// Classify by scheme, host and path.
    fn detect(url: &Url) -> Option<Self> {
        match url.scheme() {
            "mailto" => return Some(Self::Email),
            "http" | "https" => {}
            _ => return None,
        }

        let host = url.host_str()?.to_ascii_lowercase();
        let host = host.strip_prefix("www.").unwrap_or(&host);
        let platform = match host {
            "github.com" => Self::GitHub,
            "linkedin.com" => Self::LinkedIn,
            "twitter.com" | "x.com" => Self::Twitter,
            "instagram.com" => Self::Instagram,
            "youtube.com" | "youtu.be" => Self::YouTube,
            _ if url.path().starts_with("/@") => Self::Mastodon,
            _ => Self::Website,
        };
        Some(platform)
    }
}

/// A classified profile link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    /// The original URL, trimmed.
    pub url: String,
    /// Account name, when the URL carries one.
    pub handle: Option<String>,
}

impl SocialLink {
    /// Parse and classify a single link. Returns `None` for blank,
    /// unparseable or non-web entries.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        let url = Url::parse(raw).ok()?;
        let platform = SocialPlatform::detect(&url)?;
        let handle = extract_handle(platform, &url);
        Some(Self {
            platform,
            url: raw.to_string(),
            handle,
        })
    }

    fn dedup_key(&self) -> (SocialPlatform, String) {
        let id = match &self.handle {
            Some(handle) => handle.to_ascii_lowercase(),
            None => self.url.clone(),
        };
        (self.platform, id)
    }
}

impl fmt::Display for SocialLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let target = self.handle.as_deref().unwrap_or(&self.url);
        write!(f, "{}: {}", self.platform.name(), target)
    }
}

/// Extract typed social links, preserving input order.
///
/// Entries that are blank, unparseable or not web/mail links are skipped.
/// Repeated profiles (same platform and handle) keep the first occurrence.
pub fn extract_social_links<'a>(urls: impl IntoIterator<Item = &'a str>) -> Vec<SocialLink> {
    let mut seen = FxHashSet::default();
    urls.into_iter()
        .filter_map(SocialLink::parse)
        .filter(|link| seen.insert(link.dedup_key()))
        .collect()
}

fn extract_handle(platform: SocialPlatform, url: &Url) -> Option<String> {
    if platform == SocialPlatform::Email {
        let address = url.path();
        return (!address.is_empty()).then(|| address.to_string());
    }

    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    let segment = match platform {
        SocialPlatform::GitHub | SocialPlatform::Twitter | SocialPlatform::Instagram => {
            segments.first().copied()
        }
        SocialPlatform::LinkedIn => match segments.as_slice() {
            ["in" | "company" | "school", name, ..] => Some(*name),
            _ => None,
        },
        SocialPlatform::YouTube => match segments.as_slice() {
            [first, ..] if first.starts_with('@') => Some(*first),
            ["c" | "channel" | "user", name, ..] => Some(*name),
            _ => None,
        },
        SocialPlatform::Mastodon => segments.first().copied(),
        SocialPlatform::Email | SocialPlatform::Website => None,
    }?;

    let handle = segment.trim_start_matches('@');
    (!handle.is_empty()).then(|| handle.to_string())
}
