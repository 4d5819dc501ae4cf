//! Content metrics and display helpers for a portfolio blog.
//!
//! The functions re-exported at the crate root are pure and total: they
//! accept any input, never panic, and fall back to a fixed value for
//! degenerate input.
//!
//! ```
//! use folio::{ProjectStatus, build_like_api_url, create_safe_href, estimate_reading_time, map_status};
//!
//! assert_eq!(estimate_reading_time(Some("# Hello\n\n```\nlet x = 1;\n```")), 1);
//! assert_eq!(map_status(Some("In Progress")), Some(ProjectStatus::InProgress));
//! assert_eq!(map_status(Some("in progress")), None);
//! assert_eq!(build_like_api_url("react", "my-article"), "/api/posts/react/my-article/like");
//! assert_eq!(create_safe_href(false, Some("https://x.com")), "#");
//! ```

pub mod cli;
pub mod config;
pub mod content;
pub mod display;
pub mod logger;
pub mod text;
pub mod utils;

pub use content::{
    ProjectStatus, SocialLink, SocialPlatform, extract_social_links, map_status,
};
pub use display::{
    build_like_api_url, create_safe_href, format_comment_date, should_prevent_default,
};
pub use text::{ReadingTime, estimate_reading_time, estimate_reading_time_value};
